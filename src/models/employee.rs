//! Employee DTO and its conversions to and from the `employees` entity.

use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::entities::employees;

/// Employee as seen by callers of the service.
///
/// `id` is ignored on create (the store assigns it) and overridden by the
/// path id on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub salary: i64,
}

impl EmployeeDto {
    /// DTO for a record that has not been stored yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, salary: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            salary,
        }
    }

    /// Build an insertable row. The id is left unset for the store to assign.
    pub fn to_new_active_model(&self) -> employees::ActiveModel {
        employees::ActiveModel {
            id: NotSet,
            name: Set(self.name.clone()),
            email: Set(self.email.clone()),
            salary: Set(self.salary),
        }
    }

    /// Copy the mutable fields onto a stored row. Email is never copied.
    pub fn apply_to(&self, active: &mut employees::ActiveModel) {
        active.name = Set(self.name.clone());
        active.salary = Set(self.salary);
    }

}

impl From<employees::Model> for EmployeeDto {
    fn from(model: employees::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            salary: model.salary,
        }
    }
}
