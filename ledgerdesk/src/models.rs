use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A staff member. The only entity other rows reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub phone: Option<String>,
    pub monthly_salary: f64,
    pub hired_on: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub number: String,
    pub customer: String,
    pub amount: f64,
    pub issued_on: NaiveDate,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

/// A salary payment record. `net` is fixed at insert time as
/// base + bonus - deductions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    pub id: i64,
    pub employee_id: i64,
    pub month: String,
    pub base: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub net: f64,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub label: String,
    pub category: Option<String>,
    pub amount: f64,
    pub spent_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: i64,
    pub amount: f64,
    pub reason: Option<String>,
    pub withdrawn_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receivable {
    pub id: i64,
    pub debtor: String,
    pub amount: f64,
    pub due_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// End-of-day cash count. Never reconciled against the transactional
/// tables; the closing workflow is manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyClosing {
    pub id: i64,
    pub closing_date: NaiveDate,
    pub cash_total: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    pub id: i64,
    pub amount: f64,
    pub source: String,
    pub deposited_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementEntry {
    pub id: i64,
    pub entry_date: NaiveDate,
    pub label: String,
    pub debit: f64,
    pub credit: f64,
    pub created_at: DateTime<Utc>,
}

/// The one derived view: paid income against money that left the business.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub invoice_income: f64,
    pub expense_total: f64,
    pub withdrawal_total: f64,
    pub salary_total: f64,
    pub net: f64,
}
