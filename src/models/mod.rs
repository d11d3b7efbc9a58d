//! Transfer shapes exchanged at the service boundary.

pub mod employee;

pub use employee::EmployeeDto;
