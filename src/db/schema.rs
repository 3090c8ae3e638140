//! SQL DDL for the motivation tables.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on both tables
/// - `Employee.department` nullable reference to `Department.id`;
///   deleting a department detaches its employees instead of failing
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Department (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    code TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    salary INTEGER NOT NULL,
    department INTEGER NULL REFERENCES Department(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_employee_department ON Employee(department);
"#;
