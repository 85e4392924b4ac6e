//! Server configuration
//!
//! Read once at startup from the process environment (after `.env`).

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Where the store lives. A full URL wins over individual parts.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        username: String,
        password: String,
        database: String,
    },
}

impl DatabaseTarget {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match self {
            DatabaseTarget::Url(url) => {
                PgConnectOptions::from_str(url).context("DATABASE_URL is not a valid Postgres URL")
            }
            DatabaseTarget::Parts {
                host,
                port,
                username,
                password,
                database,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(username)
                .password(password)
                .database(database)),
        }
    }
}

impl fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseTarget::Url(_) => f.write_str("Url([REDACTED])"),
            DatabaseTarget::Parts {
                host,
                port,
                username,
                database,
                ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("username", username)
                .field("password", &"[REDACTED]")
                .field("database", database)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub database: DatabaseTarget,
    pub max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_lookup(|key| vars.get(key).cloned(), cfg!(debug_assertions))
    }

    /// `development` allows a missing `JWT_SECRET`; a random one is used and
    /// tokens stop working on restart.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_or = |key: &str, default: u32| -> anyhow::Result<u32> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{key} must be a positive integer, got {raw:?}")),
                None => Ok(default),
            }
        };

        let port = u16::try_from(parse_or("PORT", u32::from(DEFAULT_PORT))?)
            .context("PORT is out of range")?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts {
                host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: u16::try_from(parse_or("DB_PORT", 5432)?).context("DB_PORT is out of range")?,
                username: lookup("DB_USERNAME").context("DB_USERNAME or DATABASE_URL must be set")?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                database: lookup("DB_DATABASE").context("DB_DATABASE or DATABASE_URL must be set")?,
            },
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let auth = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => AuthConfig::with_secret(secret.into_bytes()),
            None if development => {
                tracing::warn!("JWT_SECRET not set, using a random per-process secret");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        Ok(Self {
            port,
            database,
            max_connections,
            frontend_origins,
            auth,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
