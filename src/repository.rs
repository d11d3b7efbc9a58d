//! Persistence port for employee records.
//!
//! [`EmployeeRepository`] is the only way the service touches the store.
//! [`SeaOrmEmployeeRepository`] backs it with a SeaORM connection; tests swap
//! in the generated `MockEmployeeRepository`.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::db::employee;
use crate::entities::employees;

/// Store operations the employee service relies on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Look up one employee by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<employees::Model>, DbErr>;

    /// All employees with this email. Empty when none match.
    async fn find_by_email(&self, email: &str) -> Result<Vec<employees::Model>, DbErr>;

    /// Insert when `id` is unset, otherwise update the row with that id.
    async fn save(&self, employee: employees::ActiveModel) -> Result<employees::Model, DbErr>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr>;

    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr>;
}

/// [`EmployeeRepository`] over a SeaORM connection pool.
#[derive(Debug, Clone)]
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<employees::Model>, DbErr> {
        employee::get_by_id(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<employees::Model>, DbErr> {
        employee::find_by_email(&self.db, email).await
    }

    async fn save(&self, model: employees::ActiveModel) -> Result<employees::Model, DbErr> {
        employee::save(&self.db, model).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        employee::exists_by_id(&self.db, id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        if !employee::delete_by_id(&self.db, id).await? {
            tracing::debug!("Delete of employee {id} removed no rows");
        }
        Ok(())
    }
}
