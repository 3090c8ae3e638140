//! Per-entity persistence managers over a shared SQLite pool.

pub mod department;
pub mod employee;

pub use department::DepartmentManager;
pub use employee::EmployeeManager;

use crate::error::PersistenceError;
use std::future::Future;

/// Load/store contract shared by every entity manager.
pub trait PersistenceManager<T> {
    /// Fetch the object with the given id, or `None` when no such row exists.
    fn get(&self, id: i64) -> impl Future<Output = Result<Option<T>, PersistenceError>> + Send;

    /// Fetch every stored object, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, PersistenceError>> + Send;

    /// Persist object state.
    ///
    /// An object with `id == 0` is inserted and receives the generated id;
    /// any other id updates the existing row.
    fn save(&self, object: &mut T) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}
