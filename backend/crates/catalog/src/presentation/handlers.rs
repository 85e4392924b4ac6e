//! HTTP Handlers

use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{Json, Path, Query};
use kernel::id::{ProductId, RecipeId};
use std::sync::Arc;

use crate::application::{
    CreateProductInput, CreateProductUseCase, CreateRecipeInput, CreateRecipeUseCase,
    DeleteProductUseCase, DeleteRecipeUseCase, GetProductUseCase, GetRecipeUseCase,
    ListProductsUseCase, ListRecipesUseCase, SearchProductsUseCase, SearchRecipesUseCase,
    UpdateProductInput, UpdateProductUseCase, UpdateRecipeInput, UpdateRecipeUseCase,
};
use crate::domain::repository::{OwnerDirectory, ProductRepository, RecipeRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    MessageResponse, ProductRequest, ProductResponse, ProductSearchQuery, RecipeRequest,
    RecipeResponse, RecipeSearchQuery,
};

/// Everything the catalog handlers need from one store.
pub trait CatalogStore:
    ProductRepository + RecipeRepository + OwnerDirectory + Clone + Send + Sync + 'static
{
}

impl<T> CatalogStore for T where
    T: ProductRepository + RecipeRepository + OwnerDirectory + Clone + Send + Sync + 'static
{
}

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogStore,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Products
// ============================================================================

/// GET /products
pub async fn list_products<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<ProductResponse>>> {
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// GET /products/search?name=
pub async fn search_products<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ProductSearchQuery>,
) -> CatalogResult<Json<Vec<ProductResponse>>> {
    let products = SearchProductsUseCase::new(state.repo.clone())
        .execute(query.name)
        .await?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// GET /products/{id}
pub async fn get_product<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<Json<ProductResponse>> {
    let product = GetProductUseCase::new(state.repo.clone())
        .execute(ProductId::from_i32(id))
        .await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// POST /products
pub async fn create_product<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    caller: Identity,
    Json(req): Json<ProductRequest>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)> {
    let product = CreateProductUseCase::new(state.repo.clone())
        .execute(
            &caller,
            CreateProductInput {
                name: req.name,
                calories: req.calories,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// PUT /products/{id}
pub async fn update_product<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    caller: Identity,
    Path(id): Path<i32>,
    Json(req): Json<ProductRequest>,
) -> CatalogResult<Json<ProductResponse>> {
    let product = UpdateProductUseCase::new(state.repo.clone())
        .execute(
            &caller,
            ProductId::from_i32(id),
            UpdateProductInput {
                name: req.name,
                calories: req.calories,
            },
        )
        .await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// DELETE /products/{id}
pub async fn delete_product<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    caller: Identity,
    Path(id): Path<i32>,
) -> CatalogResult<Json<MessageResponse>> {
    DeleteProductUseCase::new(state.repo.clone())
        .execute(&caller, ProductId::from_i32(id))
        .await?;
    Ok(Json(MessageResponse::new("Product successfully deleted")))
}

// ============================================================================
// Recipes
// ============================================================================

/// GET /recipes
pub async fn list_recipes<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<RecipeResponse>>> {
    let recipes = ListRecipesUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(recipes.iter().map(RecipeResponse::from).collect()))
}

/// GET /recipes/search?title=
pub async fn search_recipes<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<RecipeSearchQuery>,
) -> CatalogResult<Json<Vec<RecipeResponse>>> {
    let recipes = SearchRecipesUseCase::new(state.repo.clone())
        .execute(query.title)
        .await?;
    Ok(Json(recipes.iter().map(RecipeResponse::from).collect()))
}

/// GET /recipes/{id}
pub async fn get_recipe<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i32>,
) -> CatalogResult<Json<RecipeResponse>> {
    let recipe = GetRecipeUseCase::new(state.repo.clone())
        .execute(RecipeId::from_i32(id))
        .await?;
    Ok(Json(RecipeResponse::from(&recipe)))
}

/// POST /recipes
pub async fn create_recipe<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    caller: Identity,
    Json(mut req): Json<RecipeRequest>,
) -> CatalogResult<(StatusCode, Json<RecipeResponse>)> {
    let ingredients = req.ingredient_inputs();
    let recipe = CreateRecipeUseCase::new(state.repo.clone())
        .execute(
            &caller,
            CreateRecipeInput {
                title: req.title,
                description: req.description,
                ingredients,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(RecipeResponse::from(&recipe))))
}

/// PUT /recipes/{id}
pub async fn update_recipe<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    caller: Identity,
    Path(id): Path<i32>,
    Json(mut req): Json<RecipeRequest>,
) -> CatalogResult<Json<RecipeResponse>> {
    let ingredients = req.ingredient_inputs();
    let recipe = UpdateRecipeUseCase::new(state.repo.clone())
        .execute(
            &caller,
            RecipeId::from_i32(id),
            UpdateRecipeInput {
                title: req.title,
                description: req.description,
                ingredients,
            },
        )
        .await?;
    Ok(Json(RecipeResponse::from(&recipe)))
}

/// DELETE /recipes/{id}
pub async fn delete_recipe<R: CatalogStore>(
    State(state): State<CatalogAppState<R>>,
    caller: Identity,
    Path(id): Path<i32>,
) -> CatalogResult<Json<MessageResponse>> {
    DeleteRecipeUseCase::new(state.repo.clone())
        .execute(&caller, RecipeId::from_i32(id))
        .await?;
    Ok(Json(MessageResponse::new("Recipe successfully deleted")))
}
