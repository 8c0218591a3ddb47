// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;

/// Process-wide settings, built once at startup and injected through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,

    /// Shared token handed out at login and required on the survey routes.
    pub school_token: String,

    /// Argon2 PHC hash of the administrative key.
    /// When unset, the admin routes reject every request.
    pub admin_key_hash: Option<String>,

    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Missing keys fall back to the defaults of a local development setup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db_port = get("DB_PORT", "5432")
            .parse()
            .expect("DB_PORT must be a valid port number");

        Self {
            db_host: get("DB_HOST", "localhost"),
            db_port,
            db_name: get("DB_NAME", "cuestionario"),
            db_user: get("DB_USER", "root"),
            db_password: get("DB_PASSWORD", ""),
            school_token: get("SCHOOL_TOKEN", "colegio2025"),
            admin_key_hash: lookup("ADMIN_KEY_HASH").filter(|h| !h.trim().is_empty()),
            bind_addr: get("BIND_ADDR", "0.0.0.0:5000"),
            static_dir: PathBuf::from(get("STATIC_DIR", "static")),
            rust_log: get("RUST_LOG", "info"),
        }
    }

    /// Connection parameters for a single database session.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }
}
