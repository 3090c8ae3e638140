use crate::db::models::Department;
use crate::db::sqlite::SqlitePool;
use crate::error::PersistenceError;
use crate::manager::PersistenceManager;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct DepartmentManager {
    pool: SqlitePool,
}

impl DepartmentManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// True when a row with this id is present.
    pub async fn exists(&self, id: i64) -> Result<bool, PersistenceError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(id) FROM Department WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

impl PersistenceManager<Department> for DepartmentManager {
    async fn get(&self, id: i64) -> Result<Option<Department>, PersistenceError> {
        let department =
            sqlx::query_as::<_, Department>("SELECT id, name, code FROM Department WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(department)
    }

    async fn get_all(&self) -> Result<Vec<Department>, PersistenceError> {
        let departments =
            sqlx::query_as::<_, Department>("SELECT id, name, code FROM Department ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(departments)
    }

    async fn save(&self, object: &mut Department) -> Result<(), PersistenceError> {
        if !object.is_saved() {
            let result = sqlx::query("INSERT INTO Department (name, code) VALUES (?, ?)")
                .bind(object.name.as_str())
                .bind(object.code.as_str())
                .execute(&self.pool)
                .await?;
            object.id = result.last_insert_rowid();
            debug!("ID: {}, Department: {}, inserted", object.id, object.code);
        } else {
            let result = sqlx::query("UPDATE Department SET name = ?, code = ? WHERE id = ?")
                .bind(object.name.as_str())
                .bind(object.code.as_str())
                .bind(object.id)
                .execute(&self.pool)
                .await?;
            if result.rows_affected() == 0 {
                warn!("ID: {}, Department update matched no row", object.id);
            } else {
                debug!("ID: {}, Department: {}, updated", object.id, object.code);
            }
        }
        Ok(())
    }
}
