//! Time-boxed memoization of read query results.
//!
//! Values are stored as `serde_json::Value` snapshots so one store can hold
//! every entity's listing. Writes invalidate their table's key inside the
//! database layer; a stale entry is otherwise served until its TTL lapses.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// TTL for entity listings.
pub const LIST_TTL: Duration = Duration::from_secs(300);

/// TTL for the financial summary.
pub const SUMMARY_TTL: Duration = Duration::from_secs(60);

/// Cache keys, one per cached query.
pub mod keys {
    pub const EMPLOYEES: &str = "employees";
    pub const INVOICES: &str = "invoices";
    pub const SALARIES: &str = "salaries";
    pub const EXPENSES: &str = "expenses";
    pub const WITHDRAWALS: &str = "withdrawals";
    pub const RECEIVABLES: &str = "receivables";
    pub const CLOSINGS: &str = "closings";
    pub const DEPOSITS: &str = "deposits";
    pub const STATEMENT: &str = "statement";
    pub const SUMMARY: &str = "summary";
}

struct Entry {
    stored_at: Instant,
    value: Value,
}

/// In-process query result cache.
pub struct QueryCache {
    entries: Mutex<HashMap<&'static str, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the stored value for `key` if it is younger than `ttl`.
    pub fn get(&self, key: &str, ttl: Duration) -> Option<Value> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: &'static str, value: Value) {
        self.lock().insert(
            key,
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    /// Drop the entry for `key`, if any.
    pub fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, Entry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
