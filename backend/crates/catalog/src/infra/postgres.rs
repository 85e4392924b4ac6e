//! PostgreSQL Repository Implementations
//!
//! Recipes are read in two queries: the recipe rows joined with their
//! owner, then every ingredient of those recipes joined with its product.

use std::collections::HashMap;

use kernel::id::{IngredientId, ProductId, RecipeId, UserId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entity::{
    Ingredient, NewProduct, NewRecipe, Owner, Product, ProductChanges, Recipe, RecipeChanges,
};
use crate::domain::repository::{OwnerDirectory, ProductRepository, RecipeRepository};
use crate::domain::value_object::{ingredient_list::IngredientList, search_pattern::SearchPattern};
use crate::error::{CatalogError, CatalogResult};

const PRODUCT_COLUMNS: &str = "id, name, calories, user_id";

const RECIPE_SELECT: &str = r#"
    SELECT r.id, r.title, r.description, r.user_id, u.username
    FROM recipes r
    JOIN users u ON u.id = r.user_id
"#;

/// PostgreSQL-backed product, recipe and owner store
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach ingredients to already loaded recipe rows, keeping row order.
    async fn with_ingredients(&self, rows: Vec<RecipeRow>) -> CatalogResult<Vec<Recipe>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let ingredient_rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT ri.id, ri.recipe_id, ri.amount,
                   p.id AS product_id, p.name AS product_name,
                   p.calories AS product_calories, p.user_id AS product_user_id
            FROM recipe_ingredients ri
            JOIN products p ON p.id = ri.product_id
            WHERE ri.recipe_id = ANY($1)
            ORDER BY ri.id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_recipe: HashMap<i32, Vec<Ingredient>> = HashMap::new();
        for row in ingredient_rows {
            by_recipe
                .entry(row.recipe_id)
                .or_default()
                .push(row.into_ingredient());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let ingredients = by_recipe.remove(&row.id).unwrap_or_default();
                row.into_recipe(ingredients)
            })
            .collect())
    }

    async fn insert_ingredients(
        tx: &mut Transaction<'_, Postgres>,
        recipe_id: i32,
        ingredients: &IngredientList,
    ) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recipe_ingredients (recipe_id, product_id, amount)
            SELECT $1, product_id, amount
            FROM UNNEST($2::INT[], $3::INT[]) AS i(product_id, amount)
            "#,
        )
        .bind(recipe_id)
        .bind(ingredients.product_ids())
        .bind(ingredients.amounts())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn reload(&self, id: i32) -> CatalogResult<Recipe> {
        let id = RecipeId::from_i32(id);
        self.find_recipe(id)
            .await?
            .ok_or_else(|| CatalogError::Internal(format!("recipe {id} vanished after write")))
    }
}

impl ProductRepository for PgCatalogRepository {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn search_products(&self, pattern: &SearchPattern) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r"SELECT {PRODUCT_COLUMNS} FROM products WHERE name ILIKE $1 ESCAPE '\' ORDER BY id"
        ))
        .bind(pattern.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn create_product(&self, product: &NewProduct) -> CatalogResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (name, calories, user_id)
            VALUES ($1, $2, $3)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.name.as_str())
        .bind(product.calories.get())
        .bind(product.owner_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_product())
    }

    async fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                calories = COALESCE($3, calories)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(changes.name.as_ref().map(|n| n.as_str()))
        .bind(changes.calories.map(|c| c.get()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

impl RecipeRepository for PgCatalogRepository {
    async fn list_recipes(&self) -> CatalogResult<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(&format!("{RECIPE_SELECT} ORDER BY r.id"))
            .fetch_all(&self.pool)
            .await?;

        self.with_ingredients(rows).await
    }

    async fn find_recipe(&self, id: RecipeId) -> CatalogResult<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(&format!("{RECIPE_SELECT} WHERE r.id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.with_ingredients(vec![row]).await?.pop())
    }

    async fn search_recipes(&self, pattern: &SearchPattern) -> CatalogResult<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(&format!(
            r"{RECIPE_SELECT} WHERE r.title ILIKE $1 ESCAPE '\' ORDER BY r.id"
        ))
        .bind(pattern.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        self.with_ingredients(rows).await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> CatalogResult<Recipe> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(recipe.title.as_str())
        .bind(recipe.description.as_str())
        .bind(recipe.owner_id.get())
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_ingredients(&mut tx, id, &recipe.ingredients).await?;

        tx.commit().await?;

        self.reload(id).await
    }

    async fn update_recipe(
        &self,
        id: RecipeId,
        changes: &RecipeChanges,
    ) -> CatalogResult<Option<Recipe>> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE recipes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id.get())
        .bind(changes.title.as_ref().map(|t| t.as_str()))
        .bind(changes.description.as_ref().map(|d| d.as_str()))
        .fetch_optional(&mut *tx)
        .await?;

        let Some(recipe_id) = updated else {
            // Dropping the transaction rolls it back.
            return Ok(None);
        };

        if let Some(ingredients) = &changes.ingredients {
            sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;

            Self::insert_ingredients(&mut tx, recipe_id, ingredients).await?;
        }

        tx.commit().await?;

        self.reload(recipe_id).await.map(Some)
    }

    async fn delete_recipe(&self, id: RecipeId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

impl OwnerDirectory for PgCatalogRepository {
    async fn find_owner(&self, id: UserId) -> CatalogResult<Option<Owner>> {
        let row: Option<(i32, String)> =
            sqlx::query_as("SELECT id, username FROM users WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, username)| Owner {
            id: UserId::from_i32(id),
            username,
        }))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    calories: f64,
    user_id: i32,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: ProductId::from_i32(self.id),
            name: self.name,
            calories: self.calories,
            owner_id: UserId::from_i32(self.user_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i32,
    title: String,
    description: String,
    user_id: i32,
    username: String,
}

impl RecipeRow {
    fn into_recipe(self, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: RecipeId::from_i32(self.id),
            title: self.title,
            description: self.description,
            owner: Owner {
                id: UserId::from_i32(self.user_id),
                username: self.username,
            },
            ingredients,
        }
    }
}

#[derive(sqlx::FromRow)]
struct IngredientRow {
    id: i32,
    recipe_id: i32,
    amount: i32,
    product_id: i32,
    product_name: String,
    product_calories: f64,
    product_user_id: i32,
}

impl IngredientRow {
    fn into_ingredient(self) -> Ingredient {
        Ingredient {
            id: IngredientId::from_i32(self.id),
            amount: self.amount,
            product: Product {
                id: ProductId::from_i32(self.product_id),
                name: self.product_name,
                calories: self.product_calories,
                owner_id: UserId::from_i32(self.product_user_id),
            },
        }
    }
}
