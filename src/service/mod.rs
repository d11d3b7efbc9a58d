//! Employee service.
//!
//! Mediates between callers and the [`EmployeeRepository`], enforcing that an
//! email is used by at most one employee and that updates never change it.
//! Every rejection happens before anything is written.

use std::sync::Arc;

use sea_orm::{ActiveValue::Set, DbErr, SqlErr};
use tracing::{info, warn};

use crate::entities::employees;
use crate::error::{AppError, Result};
use crate::models::EmployeeDto;
use crate::repository::EmployeeRepository;

#[cfg(test)]
mod tests;

/// Service for reading and changing employee records.
#[derive(Clone)]
pub struct EmployeeService<R> {
    repo: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a new employee service.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Fetch one employee.
    pub async fn get_by_id(&self, id: i64) -> Result<EmployeeDto> {
        info!("Fetching employee with id: {id}");

        let employee = self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(employee.into())
    }

    /// Store a new employee. Any id on `dto` is ignored.
    pub async fn create(&self, dto: &EmployeeDto) -> Result<EmployeeDto> {
        info!("Creating new employee with email: {}", dto.email);

        let existing = self.repo.find_by_email(&dto.email).await?;
        if !existing.is_empty() {
            warn!("Rejected create: {} employee(s) already use {}", existing.len(), dto.email);
            return Err(duplicate_email(&dto.email));
        }

        let saved = self
            .repo
            .save(dto.to_new_active_model())
            .await
            .map_err(|err| save_error(err, &dto.email))?;
        Ok(saved.into())
    }

    /// Overwrite name and salary of an existing employee.
    ///
    /// The stored id always wins over `dto.id`.
    pub async fn update(&self, id: i64, dto: &EmployeeDto) -> Result<EmployeeDto> {
        info!("Updating employee with id: {id}");

        let employee = self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        if employee.email != dto.email {
            warn!("Rejected update of employee {id}: email change requested");
            return Err(AppError::conflict("The email of the employee cannot be updated"));
        }

        let mut active: employees::ActiveModel = employee.into();
        dto.apply_to(&mut active);
        active.id = Set(id);

        let saved = self.repo.save(active).await?;
        Ok(saved.into())
    }

    /// Remove an employee permanently.
    pub async fn delete(&self, id: i64) -> Result<()> {
        info!("Deleting employee with id: {id}");

        if !self.repo.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        self.repo.delete_by_id(id).await?;
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Employee with id {id} not found"))
}

fn duplicate_email(email: &str) -> AppError {
    AppError::conflict(format!("Employee already exists with email: {email}"))
}

/// A concurrent create can pass the email check and still lose to the unique index.
fn save_error(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            warn!("Unique index rejected duplicate email {email}");
            duplicate_email(email)
        }
        _ => err.into(),
    }
}
