use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `Department` table. `id == 0` marks an unsaved department.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
}

impl Department {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            code: code.into(),
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

/// A row of the `Employee` table with its department resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub salary: i32,
    pub department: Option<Department>,
}

impl Employee {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, salary: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            surname: surname.into(),
            salary,
            department: None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

/// Flat result of `Employee LEFT JOIN Department`.
#[derive(Debug, FromRow)]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub salary: i32,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub department_code: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(r: EmployeeRow) -> Self {
        let department = r.department_id.map(|id| Department {
            id,
            name: r.department_name.unwrap_or_default(),
            code: r.department_code.unwrap_or_default(),
        });
        Self {
            id: r.id,
            name: r.name,
            surname: r.surname,
            salary: r.salary,
            department,
        }
    }
}
