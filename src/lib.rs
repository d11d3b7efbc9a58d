pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{AppError, Result};
pub use models::EmployeeDto;
pub use repository::{EmployeeRepository, SeaOrmEmployeeRepository};
pub use service::EmployeeService;
