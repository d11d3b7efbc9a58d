use employee_records::SeaOrmEmployeeRepository;
use employee_records::config::DatabaseConfig;
use employee_records::db;
use employee_records::entities::employees;
use employee_records::repository::EmployeeRepository;
use sea_orm::ActiveValue::{NotSet, Set};

/// Fresh in-memory SQLite store with the schema applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_repository() -> SeaOrmEmployeeRepository {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let conn = db::connect(&config).await.unwrap();
    db::ensure_schema(&conn).await.unwrap();
    SeaOrmEmployeeRepository::new(conn)
}

pub fn new_employee(name: &str, email: &str, salary: i64) -> employees::ActiveModel {
    employees::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        salary: Set(salary),
    }
}

pub async fn seed_ashish(repo: &SeaOrmEmployeeRepository) -> employees::Model {
    repo.save(new_employee("Ashish Patel", "ashish.patel@gmail.com", 145))
        .await
        .unwrap()
}
