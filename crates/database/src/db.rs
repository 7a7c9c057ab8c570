use sea_orm::{Database, DbErr};
pub use sea_orm::DatabaseConnection;

/// Used when `DATABASE_URL` is unset: a local SQLite file, created on
/// first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://hotel.db?mode=rwc";

/// Creates a database connection from `DATABASE_URL`, falling back to a
/// local SQLite file.
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    let url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    Database::connect(url).await
}
