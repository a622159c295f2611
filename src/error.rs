use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NU API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse NU API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Term not found: {0}")]
    TermNotFound(String),
}
