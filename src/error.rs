use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Department must be saved before assigning to an employee (department id: {id})")]
    UnsavedDepartment { id: i64 },

    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for PersistenceError {
    fn from(e: figment::Error) -> Self {
        PersistenceError::Config(Box::new(e))
    }
}

impl PersistenceError {
    /// True when the error was raised by the department guard in `EmployeeManager::save`.
    pub fn is_unsaved_department(&self) -> bool {
        matches!(self, PersistenceError::UnsavedDepartment { .. })
    }
}
