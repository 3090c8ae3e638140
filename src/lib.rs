pub mod config;
pub mod db;
pub mod error;
pub mod manager;

pub use db::{Department, Employee};
pub use error::PersistenceError;
pub use manager::{DepartmentManager, EmployeeManager, PersistenceManager};
