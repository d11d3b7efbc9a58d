//! Employee queries.

use crate::entities::{employees, prelude::*};
use sea_orm::*;

/// Get employee by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<employees::Model>, DbErr> {
    Employees::find_by_id(id).one(db).await
}

/// All employees sharing an email, oldest first.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Vec<employees::Model>, DbErr> {
    Employees::find()
        .filter(employees::Column::Email.eq(email))
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await
}

/// Insert when the id is unset, update otherwise.
pub async fn save(db: &DatabaseConnection, model: employees::ActiveModel) -> Result<employees::Model, DbErr> {
    if model.id.is_not_set() {
        model.insert(db).await
    } else {
        model.update(db).await
    }
}

/// Check if an employee with this ID exists.
pub async fn exists_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
    let count = Employees::find_by_id(id).count(db).await?;
    Ok(count > 0)
}

/// Delete an employee by ID. Returns whether a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
    let result = Employees::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
