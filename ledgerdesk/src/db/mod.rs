//! Database façade: one held connection, one statement per operation,
//! reads memoized through the TTL cache.

pub mod schema;

use crate::cache::{keys, QueryCache, LIST_TTL, SUMMARY_TTL};
use crate::error::{LedgerError, Result};
use crate::models::{
    DailyClosing, Deposit, Employee, Expense, FinancialSummary, Invoice, Receivable, Salary,
    StatementEntry, Withdrawal,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use schema::Schema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Database handle
pub struct Database {
    conn: Connection,
    cache: QueryCache,
}

impl Database {
    /// Open the database at the given path and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Schema::init(&conn)?;
        Ok(Database {
            conn,
            cache: QueryCache::new(),
        })
    }

    /// Open the database named by `LEDGERDESK_DB`, falling back to
    /// `ledgerdesk.db` in the working directory.
    pub fn open_default() -> Result<Self> {
        let path = std::env::var("LEDGERDESK_DB").unwrap_or_else(|_| "ledgerdesk.db".to_string());
        debug!(path, "opening ledger database");
        Self::open(path)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Schema::init(&conn)?;
        Ok(Database {
            conn,
            cache: QueryCache::new(),
        })
    }

    /// Serve `key` from the cache, falling through to `fetch` and storing
    /// the result. The stored snapshot is a JSON value, so any Serialize +
    /// Deserialize result type fits one store.
    fn cached<T, F>(&self, key: &'static str, ttl: Duration, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&Connection) -> Result<T>,
    {
        if let Some(value) = self.cache.get(key, ttl) {
            debug!(key, "cache hit");
            return serde_json::from_value(value).map_err(LedgerError::from);
        }

        let fresh = fetch(&self.conn)?;
        self.cache.put(key, serde_json::to_value(&fresh)?);
        Ok(fresh)
    }

    // ==================== Employees ====================

    pub fn add_employee(
        &self,
        name: &str,
        position: &str,
        phone: Option<&str>,
        monthly_salary: f64,
        hired_on: NaiveDate,
        active: bool,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO employees (name, position, phone, monthly_salary, hired_on, active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (name, position, phone, monthly_salary, hired_on, active, &now),
        )?;

        self.cache.invalidate(keys::EMPLOYEES);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn employees(&self) -> Result<Vec<Employee>> {
        self.cached(keys::EMPLOYEES, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, position, phone, monthly_salary, hired_on, active, created_at
                 FROM employees
                 ORDER BY name, id",
            )?;
            let rows = stmt.query_map([], employee_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    fn employee_exists(&self, id: i64) -> Result<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM employees WHERE id = ?1", [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    // ==================== Invoices ====================

    pub fn add_invoice(
        &self,
        number: &str,
        customer: &str,
        amount: f64,
        issued_on: NaiveDate,
        paid: bool,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO invoices (number, customer, amount, issued_on, paid, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (number, customer, amount, issued_on, paid, &now),
        )?;

        self.cache.invalidate(keys::INVOICES);
        self.cache.invalidate(keys::SUMMARY);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn invoices(&self) -> Result<Vec<Invoice>> {
        self.cached(keys::INVOICES, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, number, customer, amount, issued_on, paid, created_at
                 FROM invoices
                 ORDER BY issued_on DESC, id DESC",
            )?;
            let rows = stmt.query_map([], invoice_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Salaries ====================

    /// Record a salary payment. The referenced employee must exist; the
    /// net amount is fixed here rather than recomputed on read.
    pub fn add_salary(
        &self,
        employee_id: i64,
        month: &str,
        base: f64,
        bonus: f64,
        deductions: f64,
        paid: bool,
    ) -> Result<i64> {
        if !self.employee_exists(employee_id)? {
            return Err(LedgerError::EmployeeNotFound(employee_id));
        }

        let net = base + bonus - deductions;
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO salaries (employee_id, month, base, bonus, deductions, net, paid, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (employee_id, month, base, bonus, deductions, net, paid, &now),
        )?;

        self.cache.invalidate(keys::SALARIES);
        self.cache.invalidate(keys::SUMMARY);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn salaries(&self) -> Result<Vec<Salary>> {
        self.cached(keys::SALARIES, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, employee_id, month, base, bonus, deductions, net, paid, created_at
                 FROM salaries
                 ORDER BY month DESC, id DESC",
            )?;
            let rows = stmt.query_map([], salary_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Expenses ====================

    pub fn add_expense(
        &self,
        label: &str,
        category: Option<&str>,
        amount: f64,
        spent_on: NaiveDate,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO expenses (label, category, amount, spent_on, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (label, category, amount, spent_on, &now),
        )?;

        self.cache.invalidate(keys::EXPENSES);
        self.cache.invalidate(keys::SUMMARY);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn expenses(&self) -> Result<Vec<Expense>> {
        self.cached(keys::EXPENSES, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, label, category, amount, spent_on, created_at
                 FROM expenses
                 ORDER BY spent_on DESC, id DESC",
            )?;
            let rows = stmt.query_map([], expense_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Withdrawals ====================

    pub fn add_withdrawal(
        &self,
        amount: f64,
        reason: Option<&str>,
        withdrawn_on: NaiveDate,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO withdrawals (amount, reason, withdrawn_on, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            (amount, reason, withdrawn_on, &now),
        )?;

        self.cache.invalidate(keys::WITHDRAWALS);
        self.cache.invalidate(keys::SUMMARY);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn withdrawals(&self) -> Result<Vec<Withdrawal>> {
        self.cached(keys::WITHDRAWALS, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, amount, reason, withdrawn_on, created_at
                 FROM withdrawals
                 ORDER BY withdrawn_on DESC, id DESC",
            )?;
            let rows = stmt.query_map([], withdrawal_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Receivables ====================

    pub fn add_receivable(
        &self,
        debtor: &str,
        amount: f64,
        due_on: Option<NaiveDate>,
        note: Option<&str>,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO receivables (debtor, amount, due_on, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (debtor, amount, due_on, note, &now),
        )?;

        self.cache.invalidate(keys::RECEIVABLES);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn receivables(&self) -> Result<Vec<Receivable>> {
        self.cached(keys::RECEIVABLES, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, debtor, amount, due_on, note, created_at
                 FROM receivables
                 ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt.query_map([], receivable_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Daily Closings ====================

    pub fn add_closing(
        &self,
        closing_date: NaiveDate,
        cash_total: f64,
        notes: Option<&str>,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO daily_closings (closing_date, cash_total, notes, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            (closing_date, cash_total, notes, &now),
        )?;

        self.cache.invalidate(keys::CLOSINGS);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn closings(&self) -> Result<Vec<DailyClosing>> {
        self.cached(keys::CLOSINGS, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, closing_date, cash_total, notes, created_at
                 FROM daily_closings
                 ORDER BY closing_date DESC, id DESC",
            )?;
            let rows = stmt.query_map([], closing_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Deposits ====================

    pub fn add_deposit(&self, amount: f64, source: &str, deposited_on: NaiveDate) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO deposits (amount, source, deposited_on, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            (amount, source, deposited_on, &now),
        )?;

        self.cache.invalidate(keys::DEPOSITS);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn deposits(&self) -> Result<Vec<Deposit>> {
        self.cached(keys::DEPOSITS, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, amount, source, deposited_on, created_at
                 FROM deposits
                 ORDER BY deposited_on DESC, id DESC",
            )?;
            let rows = stmt.query_map([], deposit_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Statement Entries ====================

    pub fn add_statement_entry(
        &self,
        entry_date: NaiveDate,
        label: &str,
        debit: f64,
        credit: f64,
    ) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO statement_entries (entry_date, label, debit, credit, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (entry_date, label, debit, credit, &now),
        )?;

        self.cache.invalidate(keys::STATEMENT);
        Ok(self.conn.last_insert_rowid())
    }

    pub fn statement_entries(&self) -> Result<Vec<StatementEntry>> {
        self.cached(keys::STATEMENT, LIST_TTL, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, entry_date, label, debit, credit, created_at
                 FROM statement_entries
                 ORDER BY entry_date DESC, id DESC",
            )?;
            let rows = stmt.query_map([], statement_entry_from_row)?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| e.into())
        })
    }

    // ==================== Summary ====================

    /// Paid income minus money that left the business, in one read-only
    /// aggregate statement. Unpaid invoices and pending salaries do not
    /// count.
    pub fn financial_summary(&self) -> Result<FinancialSummary> {
        self.cached(keys::SUMMARY, SUMMARY_TTL, |conn| {
            conn.query_row(
                "SELECT
                    COALESCE((SELECT SUM(amount) FROM invoices WHERE paid = 1), 0.0),
                    COALESCE((SELECT SUM(amount) FROM expenses), 0.0),
                    COALESCE((SELECT SUM(amount) FROM withdrawals), 0.0),
                    COALESCE((SELECT SUM(net) FROM salaries WHERE paid = 1), 0.0)",
                [],
                |row| {
                    let invoice_income: f64 = row.get(0)?;
                    let expense_total: f64 = row.get(1)?;
                    let withdrawal_total: f64 = row.get(2)?;
                    let salary_total: f64 = row.get(3)?;
                    Ok(FinancialSummary {
                        invoice_income,
                        expense_total,
                        withdrawal_total,
                        salary_total,
                        net: invoice_income - (expense_total + withdrawal_total + salary_total),
                    })
                },
            )
            .map_err(|e| e.into())
        })
    }
}

// ==================== Row Parsers ====================

fn employee_from_row(row: &Row) -> std::result::Result<Employee, rusqlite::Error> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        phone: row.get(3)?,
        monthly_salary: row.get(4)?,
        hired_on: row.get(5)?,
        active: row.get(6)?,
        created_at: parse_datetime(row.get(7)?)?,
    })
}

fn invoice_from_row(row: &Row) -> std::result::Result<Invoice, rusqlite::Error> {
    Ok(Invoice {
        id: row.get(0)?,
        number: row.get(1)?,
        customer: row.get(2)?,
        amount: row.get(3)?,
        issued_on: row.get(4)?,
        paid: row.get(5)?,
        created_at: parse_datetime(row.get(6)?)?,
    })
}

fn salary_from_row(row: &Row) -> std::result::Result<Salary, rusqlite::Error> {
    Ok(Salary {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        month: row.get(2)?,
        base: row.get(3)?,
        bonus: row.get(4)?,
        deductions: row.get(5)?,
        net: row.get(6)?,
        paid: row.get(7)?,
        created_at: parse_datetime(row.get(8)?)?,
    })
}

fn expense_from_row(row: &Row) -> std::result::Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        label: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        spent_on: row.get(4)?,
        created_at: parse_datetime(row.get(5)?)?,
    })
}

fn withdrawal_from_row(row: &Row) -> std::result::Result<Withdrawal, rusqlite::Error> {
    Ok(Withdrawal {
        id: row.get(0)?,
        amount: row.get(1)?,
        reason: row.get(2)?,
        withdrawn_on: row.get(3)?,
        created_at: parse_datetime(row.get(4)?)?,
    })
}

fn receivable_from_row(row: &Row) -> std::result::Result<Receivable, rusqlite::Error> {
    Ok(Receivable {
        id: row.get(0)?,
        debtor: row.get(1)?,
        amount: row.get(2)?,
        due_on: row.get(3)?,
        note: row.get(4)?,
        created_at: parse_datetime(row.get(5)?)?,
    })
}

fn closing_from_row(row: &Row) -> std::result::Result<DailyClosing, rusqlite::Error> {
    Ok(DailyClosing {
        id: row.get(0)?,
        closing_date: row.get(1)?,
        cash_total: row.get(2)?,
        notes: row.get(3)?,
        created_at: parse_datetime(row.get(4)?)?,
    })
}

fn deposit_from_row(row: &Row) -> std::result::Result<Deposit, rusqlite::Error> {
    Ok(Deposit {
        id: row.get(0)?,
        amount: row.get(1)?,
        source: row.get(2)?,
        deposited_on: row.get(3)?,
        created_at: parse_datetime(row.get(4)?)?,
    })
}

fn statement_entry_from_row(row: &Row) -> std::result::Result<StatementEntry, rusqlite::Error> {
    Ok(StatementEntry {
        id: row.get(0)?,
        entry_date: row.get(1)?,
        label: row.get(2)?,
        debit: row.get(3)?,
        credit: row.get(4)?,
        created_at: parse_datetime(row.get(5)?)?,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn employee_round_trip() {
        let db = Database::open_in_memory().unwrap();

        db.add_employee("Amina", "Clerk", Some("555-0101"), 2400.0, date(2025, 3, 1), true)
            .unwrap();
        db.add_employee("Zubair", "Manager", None, 3800.0, date(2024, 11, 15), true)
            .unwrap();

        let employees = db.employees().unwrap();
        assert_eq!(employees.len(), 2);
        // ordered by name
        assert_eq!(employees[0].name, "Amina");
        assert_eq!(employees[0].phone.as_deref(), Some("555-0101"));
        assert_eq!(employees[1].name, "Zubair");
        assert!(employees[1].phone.is_none());
    }

    #[test]
    fn salary_requires_existing_employee() {
        let db = Database::open_in_memory().unwrap();

        let err = db.add_salary(7, "2026-07", 2400.0, 0.0, 0.0, true).unwrap_err();
        assert!(matches!(err, LedgerError::EmployeeNotFound(7)));
        assert!(db.salaries().unwrap().is_empty());
    }

    #[test]
    fn salary_net_is_fixed_at_insert() {
        let db = Database::open_in_memory().unwrap();
        let emp = db
            .add_employee("Amina", "Clerk", None, 2400.0, date(2025, 3, 1), true)
            .unwrap();

        db.add_salary(emp, "2026-07", 2400.0, 300.0, 150.0, true).unwrap();

        let salaries = db.salaries().unwrap();
        assert_eq!(salaries.len(), 1);
        assert_eq!(salaries[0].net, 2550.0);
        assert_eq!(salaries[0].employee_id, emp);
    }

    #[test]
    fn summary_matches_hand_computation() {
        let db = Database::open_in_memory().unwrap();
        let emp = db
            .add_employee("Amina", "Clerk", None, 2400.0, date(2025, 3, 1), true)
            .unwrap();

        db.add_invoice("INV-001", "Acme", 1000.0, date(2026, 7, 1), true).unwrap();
        db.add_invoice("INV-002", "Acme", 500.0, date(2026, 7, 2), false).unwrap();
        db.add_expense("Rent", Some("office"), 200.0, date(2026, 7, 3)).unwrap();
        db.add_withdrawal(100.0, Some("owner draw"), date(2026, 7, 4)).unwrap();
        db.add_salary(emp, "2026-07", 400.0, 0.0, 100.0, true).unwrap();
        db.add_salary(emp, "2026-08", 400.0, 0.0, 0.0, false).unwrap();

        let summary = db.financial_summary().unwrap();
        assert_eq!(summary.invoice_income, 1000.0);
        assert_eq!(summary.expense_total, 200.0);
        assert_eq!(summary.withdrawal_total, 100.0);
        assert_eq!(summary.salary_total, 300.0);
        assert_eq!(summary.net, 400.0);
    }

    #[test]
    fn summary_on_empty_ledger_is_zero() {
        let db = Database::open_in_memory().unwrap();
        let summary = db.financial_summary().unwrap();
        assert_eq!(summary.invoice_income, 0.0);
        assert_eq!(summary.net, 0.0);
    }

    #[test]
    fn appended_rows_list_newest_first() {
        let db = Database::open_in_memory().unwrap();

        db.add_expense("Older", None, 10.0, date(2026, 7, 1)).unwrap();
        db.add_expense("Newer", None, 20.0, date(2026, 7, 5)).unwrap();

        let expenses = db.expenses().unwrap();
        assert_eq!(expenses[0].label, "Newer");
        assert_eq!(expenses[1].label, "Older");
    }

    #[test]
    fn closing_deposit_statement_round_trip() {
        let db = Database::open_in_memory().unwrap();

        db.add_closing(date(2026, 7, 31), 1234.56, Some("till short 0.44")).unwrap();
        db.add_deposit(500.0, "cash desk", date(2026, 7, 31)).unwrap();
        db.add_statement_entry(date(2026, 7, 31), "bank fee", 12.5, 0.0).unwrap();
        db.add_receivable("Bashir & Co", 750.0, None, None).unwrap();

        assert_eq!(db.closings().unwrap().len(), 1);
        assert_eq!(db.deposits().unwrap().len(), 1);
        assert_eq!(db.statement_entries().unwrap()[0].debit, 12.5);
        assert!(db.receivables().unwrap()[0].due_on.is_none());
    }

    #[test]
    fn cached_list_serves_snapshot_until_invalidated() {
        let db = Database::open_in_memory().unwrap();
        db.add_employee("Amina", "Clerk", None, 2400.0, date(2025, 3, 1), true)
            .unwrap();

        // prime the cache
        assert_eq!(db.employees().unwrap().len(), 1);

        // a write that bypasses the façade does not invalidate the key
        db.conn
            .execute(
                "INSERT INTO employees (name, position, hired_on, created_at)
                 VALUES ('Ghost', 'Clerk', '2026-01-01', '2026-01-01T00:00:00+00:00')",
                [],
            )
            .unwrap();
        assert_eq!(db.employees().unwrap().len(), 1);

        db.cache.invalidate(keys::EMPLOYEES);
        assert_eq!(db.employees().unwrap().len(), 2);
    }

    #[test]
    fn writes_invalidate_their_own_key() {
        let db = Database::open_in_memory().unwrap();

        assert!(db.invoices().unwrap().is_empty());
        db.add_invoice("INV-001", "Acme", 100.0, date(2026, 7, 1), true).unwrap();
        assert_eq!(db.invoices().unwrap().len(), 1);
    }

    #[test]
    fn writes_leave_other_keys_untouched() {
        let db = Database::open_in_memory().unwrap();
        db.add_invoice("INV-001", "Acme", 100.0, date(2026, 7, 1), true).unwrap();

        // prime the invoice cache, then slip a row in underneath it
        assert_eq!(db.invoices().unwrap().len(), 1);
        db.conn
            .execute(
                "INSERT INTO invoices (number, customer, amount, issued_on, paid, created_at)
                 VALUES ('INV-999', 'Ghost', 1.0, '2026-07-02', 0, '2026-07-02T00:00:00+00:00')",
                [],
            )
            .unwrap();

        // an employee write invalidates only the employee key
        db.add_employee("Amina", "Clerk", None, 2400.0, date(2025, 3, 1), true)
            .unwrap();
        assert_eq!(db.invoices().unwrap().len(), 1);
    }

    #[test]
    fn summary_invalidated_by_feeding_writes() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.financial_summary().unwrap().net, 0.0);

        db.add_invoice("INV-001", "Acme", 100.0, date(2026, 7, 1), true).unwrap();
        assert_eq!(db.financial_summary().unwrap().net, 100.0);

        db.add_expense("Rent", None, 40.0, date(2026, 7, 2)).unwrap();
        assert_eq!(db.financial_summary().unwrap().net, 60.0);
    }

    #[test]
    fn init_is_idempotent_across_reopens() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.db");

        {
            let db = Database::open(&path).unwrap();
            db.add_deposit(500.0, "cash desk", date(2026, 7, 31)).unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.deposits().unwrap().len(), 1);
    }

    #[test]
    fn unavailable_database_is_an_error_not_a_panic() {
        let err = Database::open("/nonexistent-dir/ledger.db");
        assert!(matches!(err, Err(LedgerError::Db(_))));
    }
}
