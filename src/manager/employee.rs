use crate::db::models::{Employee, EmployeeRow};
use crate::db::sqlite::SqlitePool;
use crate::error::PersistenceError;
use crate::manager::{DepartmentManager, PersistenceManager};
use futures::TryStreamExt;
use tracing::{debug, warn};

const SELECT_JOINED: &str = r#"
    SELECT e.id, e.name, e.surname, e.salary,
           d.id AS department_id, d.name AS department_name, d.code AS department_code
    FROM Employee e LEFT JOIN Department d ON e.department = d.id"#;

#[derive(Clone)]
pub struct EmployeeManager {
    pool: SqlitePool,
    departments: DepartmentManager,
}

impl EmployeeManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            departments: DepartmentManager::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Resolve the `department` column value, rejecting departments that
    /// have not been stored yet.
    async fn department_column(
        &self,
        employee: &Employee,
    ) -> Result<Option<i64>, PersistenceError> {
        let Some(department) = employee.department.as_ref() else {
            return Ok(None);
        };
        if !self.departments.exists(department.id).await? {
            return Err(PersistenceError::UnsavedDepartment { id: department.id });
        }
        Ok(Some(department.id))
    }
}

impl PersistenceManager<Employee> for EmployeeManager {
    async fn get(&self, id: i64) -> Result<Option<Employee>, PersistenceError> {
        let sql = format!("{SELECT_JOINED} WHERE e.id = ?");
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn get_all(&self) -> Result<Vec<Employee>, PersistenceError> {
        let sql = format!("{SELECT_JOINED} ORDER BY e.id");
        let employees: Vec<Employee> = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch(&self.pool)
            .map_ok(Employee::from)
            .try_collect()
            .await?;
        Ok(employees)
    }

    async fn save(&self, object: &mut Employee) -> Result<(), PersistenceError> {
        let department = self.department_column(object).await?;

        if !object.is_saved() {
            let result = sqlx::query(
                "INSERT INTO Employee (name, surname, salary, department) VALUES (?, ?, ?, ?)",
            )
            .bind(object.name.as_str())
            .bind(object.surname.as_str())
            .bind(object.salary)
            .bind(department)
            .execute(&self.pool)
            .await?;
            object.id = result.last_insert_rowid();
            debug!(
                "ID: {}, Employee: {} {}, inserted",
                object.id, object.name, object.surname
            );
        } else {
            let result = sqlx::query(
                "UPDATE Employee SET name = ?, surname = ?, salary = ?, department = ? WHERE id = ?",
            )
            .bind(object.name.as_str())
            .bind(object.surname.as_str())
            .bind(object.salary)
            .bind(department)
            .bind(object.id)
            .execute(&self.pool)
            .await?;
            if result.rows_affected() == 0 {
                warn!("ID: {}, Employee update matched no row", object.id);
            } else {
                debug!(
                    "ID: {}, Employee: {} {}, updated",
                    object.id, object.name, object.surname
                );
            }
        }
        Ok(())
    }
}
