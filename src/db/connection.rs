//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::entities::prelude::*;

/// Create a new database connection with configured pool settings.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.connection_string());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Create the `employees` table and its unique email index if missing.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(Employees);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    tracing::debug!("Schema ready on {:?}", backend);
    Ok(())
}

/// Number of stored employees.
pub async fn count_employees(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Employees::find().count(db).await
}
