//! Database connection pool and operations.

pub mod connection;
pub mod employee;

pub use connection::{connect, count_employees, ensure_schema, test_connection};
