//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the `logs` table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    section_number INTEGER NOT NULL,
    contractor_type TEXT NOT NULL,
    objective TEXT NOT NULL
);
"#;

pub const INSERT_LOG: &str = r#"
INSERT INTO logs (section_number, contractor_type, objective)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_LOG_BY_ID: &str = r#"
SELECT id, section_number, contractor_type, objective
FROM logs
WHERE id = ?1
"#;

pub const SELECT_LOGS_PAGE: &str = r#"
SELECT id, section_number, contractor_type, objective
FROM logs
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_LOG: &str = r#"
UPDATE logs
SET section_number = ?2, contractor_type = ?3, objective = ?4
WHERE id = ?1
"#;

pub const DELETE_LOG: &str = r#"
DELETE FROM logs
WHERE id = ?1
"#;

pub const COUNT_LOGS: &str = r#"
SELECT COUNT(*) FROM logs
"#;
