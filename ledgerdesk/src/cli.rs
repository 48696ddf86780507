use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ledgerdesk")]
#[command(about = "Small-business accounting ledger")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage employees
    Employee {
        #[command(subcommand)]
        cmd: EmployeeCmd,
    },

    /// Manage invoices
    Invoice {
        #[command(subcommand)]
        cmd: InvoiceCmd,
    },

    /// Manage salary payments
    Salary {
        #[command(subcommand)]
        cmd: SalaryCmd,
    },

    /// Manage expenses
    Expense {
        #[command(subcommand)]
        cmd: ExpenseCmd,
    },

    /// Manage owner withdrawals
    Withdrawal {
        #[command(subcommand)]
        cmd: WithdrawalCmd,
    },

    /// Manage accounts receivable
    Receivable {
        #[command(subcommand)]
        cmd: ReceivableCmd,
    },

    /// Manage daily closings
    Closing {
        #[command(subcommand)]
        cmd: ClosingCmd,
    },

    /// Manage bank deposits
    Deposit {
        #[command(subcommand)]
        cmd: DepositCmd,
    },

    /// Manage account statement entries
    Statement {
        #[command(subcommand)]
        cmd: StatementCmd,
    },

    /// Show the financial summary
    Summary,
}

#[derive(Subcommand)]
pub enum EmployeeCmd {
    /// Add an employee
    Add {
        /// Full name
        name: String,
        /// Job title
        #[arg(long)]
        position: String,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Monthly salary
        #[arg(long, default_value_t = 0.0)]
        salary: f64,
        /// Hire date (YYYY-MM-DD)
        #[arg(long)]
        hired: NaiveDate,
        /// Record the employee as no longer active
        #[arg(long)]
        inactive: bool,
    },
    /// List employees
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum InvoiceCmd {
    /// Record an invoice
    Add {
        /// Invoice number
        number: String,
        /// Customer name
        #[arg(long)]
        customer: String,
        /// Invoice total
        #[arg(long)]
        amount: f64,
        /// Issue date (YYYY-MM-DD)
        #[arg(long)]
        issued: NaiveDate,
        /// Mark the invoice as already paid
        #[arg(long)]
        paid: bool,
    },
    /// List invoices
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SalaryCmd {
    /// Record a salary payment
    Add {
        /// Employee ID
        employee: i64,
        /// Salary month (YYYY-MM)
        #[arg(long)]
        month: String,
        /// Base amount
        #[arg(long)]
        base: f64,
        /// Bonus amount
        #[arg(long, default_value_t = 0.0)]
        bonus: f64,
        /// Deductions
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,
        /// Mark the salary as paid out
        #[arg(long)]
        paid: bool,
    },
    /// List salary payments
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ExpenseCmd {
    /// Record an expense
    Add {
        /// What the money was spent on
        label: String,
        /// Expense category
        #[arg(long)]
        category: Option<String>,
        /// Amount spent
        #[arg(long)]
        amount: f64,
        /// Spend date (YYYY-MM-DD)
        #[arg(long)]
        spent: NaiveDate,
    },
    /// List expenses
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum WithdrawalCmd {
    /// Record an owner withdrawal
    Add {
        /// Amount withdrawn
        amount: f64,
        /// Reason for the withdrawal
        #[arg(long)]
        reason: Option<String>,
        /// Withdrawal date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// List withdrawals
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ReceivableCmd {
    /// Record an account receivable
    Add {
        /// Who owes the money
        debtor: String,
        /// Amount owed
        #[arg(long)]
        amount: f64,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// List receivables
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ClosingCmd {
    /// Record a daily closing
    Add {
        /// Closing date (YYYY-MM-DD)
        date: NaiveDate,
        /// Counted cash total
        #[arg(long)]
        cash: f64,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List daily closings
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum DepositCmd {
    /// Record a bank deposit
    Add {
        /// Amount deposited
        amount: f64,
        /// Where the money came from
        #[arg(long)]
        source: String,
        /// Deposit date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
    /// List deposits
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum StatementCmd {
    /// Record an account statement entry
    Add {
        /// Entry label
        label: String,
        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Debit amount
        #[arg(long, default_value_t = 0.0)]
        debit: f64,
        /// Credit amount
        #[arg(long, default_value_t = 0.0)]
        credit: f64,
    },
    /// List statement entries
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
