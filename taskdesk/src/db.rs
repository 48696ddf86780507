use crate::error::{Result, TaskError};
use crate::models::{Category, Priority, Status, Task, TaskStats};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

/// Categories inserted once at init; later inits are no-ops.
const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Work", "#4ECDC4"),
    ("Personal", "#45B7D1"),
    ("Health", "#96CEB4"),
    ("Learning", "#FFEAA7"),
];

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the given path and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let db = Database { conn };
        db.init()?;
        Ok(db)
    }

    /// Open the database named by `TASKDESK_DB`, falling back to
    /// `taskdesk.db` in the working directory.
    pub fn open_default() -> Result<Self> {
        let path = std::env::var("TASKDESK_DB").unwrap_or_else(|_| "taskdesk.db".to_string());
        debug!(path, "opening task database");
        Self::open(path)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let db = Database { conn };
        db.init()?;
        Ok(db)
    }

    /// Ensure tables, indexes and seed rows exist. Safe to call repeatedly.
    pub fn init(&self) -> Result<()> {
        self.create_tables()?;
        self.seed_categories()?;
        Ok(())
    }

    fn create_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                priority TEXT NOT NULL DEFAULT 'Medium' CHECK (priority IN ('Low', 'Medium', 'High', 'Urgent')),
                status TEXT NOT NULL DEFAULT 'Pending' CHECK (status IN ('Pending', 'In Progress', 'Completed')),
                due_date TEXT,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%S', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%S', 'now'))
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                color TEXT NOT NULL DEFAULT '#FF6B6B',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%S', 'now'))
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status)",
            [],
        )?;

        Ok(())
    }

    fn seed_categories(&self) -> Result<()> {
        for (name, color) in DEFAULT_CATEGORIES {
            self.conn.execute(
                "INSERT INTO categories (name, color) VALUES (?1, ?2)
                 ON CONFLICT(name) DO NOTHING",
                (name, color),
            )?;
        }
        Ok(())
    }

    // ==================== Task Operations ====================

    pub fn add_task(
        &self,
        title: &str,
        description: Option<&str>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task> {
        let now = Utc::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO tasks (title, description, priority, due_date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            (title, description, priority.as_str(), due_date, &now),
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "task inserted");
        self.get_task(id)?.ok_or(TaskError::TaskNotFound(id))
    }

    pub fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(
                "SELECT id, title, description, priority, status, due_date, created_at, updated_at
                 FROM tasks WHERE id = ?1",
                [id],
                task_from_row,
            )
            .optional()
            .map_err(|e| e.into())
    }

    /// All tasks, newest first.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, priority, status, due_date, created_at, updated_at
             FROM tasks
             ORDER BY created_at DESC, id DESC",
        )?;

        let tasks = stmt.query_map([], task_from_row)?;
        tasks
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }

    pub fn set_task_status(&self, id: i64, status: Status) -> Result<Task> {
        let now = Utc::now().to_rfc3339();

        let rows = self.conn.execute(
            "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3",
            (status.as_str(), &now, id),
        )?;
        if rows == 0 {
            return Err(TaskError::TaskNotFound(id));
        }

        self.get_task(id)?.ok_or(TaskError::TaskNotFound(id))
    }

    pub fn delete_task(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        if rows == 0 {
            return Err(TaskError::TaskNotFound(id));
        }
        debug!(id, "task deleted");
        Ok(())
    }

    /// Status counts over the whole table in one aggregate statement.
    pub fn task_stats(&self) -> Result<TaskStats> {
        self.conn
            .query_row(
                "SELECT
                    COUNT(*) AS total,
                    COUNT(CASE WHEN status = 'Completed' THEN 1 END) AS completed,
                    COUNT(CASE WHEN status = 'Pending' THEN 1 END) AS pending,
                    COUNT(CASE WHEN status = 'In Progress' THEN 1 END) AS in_progress
                 FROM tasks",
                [],
                |row| {
                    Ok(TaskStats {
                        total: row.get(0)?,
                        completed: row.get(1)?,
                        pending: row.get(2)?,
                        in_progress: row.get(3)?,
                    })
                },
            )
            .map_err(|e| e.into())
    }

    // ==================== Category Operations ====================

    pub fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, color, created_at FROM categories ORDER BY name",
        )?;

        let categories = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
                created_at: parse_datetime(row.get(3)?)?,
            })
        })?;

        categories
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }
}

// ==================== Row Parsers ====================

fn task_from_row(row: &Row) -> std::result::Result<Task, rusqlite::Error> {
    let priority_str: String = row.get(3)?;
    let priority = Priority::try_from(priority_str.as_str()).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })?;

    let status_str: String = row.get(4)?;
    let status = Status::try_from(status_str.as_str()).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority,
        status,
        due_date: row.get(5)?,
        created_at: parse_datetime(row.get(6)?)?,
        updated_at: parse_datetime(row.get(7)?)?,
    })
}

/// Parse timestamps written either by this crate (RFC 3339) or by the
/// schema-level strftime default (naive, assumed UTC).
fn parse_datetime(s: String) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(DateTime::from_naive_utc_and_offset(ndt, Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S") {
        return Ok(DateTime::from_naive_utc_and_offset(ndt, Utc));
    }
    Err(rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Cannot parse datetime: {s}"),
        )),
    ))
}
