use crate::cli::{
    ClosingCmd, DepositCmd, EmployeeCmd, ExpenseCmd, InvoiceCmd, ReceivableCmd, SalaryCmd,
    StatementCmd, WithdrawalCmd,
};
use crate::db::Database;
use crate::error::Result;
use serde::Serialize;

fn print_json<T: Serialize>(rows: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

pub fn handle_employee(cmd: EmployeeCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        EmployeeCmd::Add {
            name,
            position,
            phone,
            salary,
            hired,
            inactive,
        } => {
            let id = db.add_employee(&name, &position, phone.as_deref(), salary, hired, !inactive)?;
            println!("Recorded employee #{id}: {name}");
        }
        EmployeeCmd::List { json } => {
            let employees = db.employees()?;
            if json {
                return print_json(&employees);
            }
            if employees.is_empty() {
                println!("No employees on file.");
                return Ok(());
            }
            for e in &employees {
                let status = if e.active { "" } else { "  (inactive)" };
                println!(
                    "  [#{:>3}] {}  {}  {:.2}/mo  since {}{}",
                    e.id, e.name, e.position, e.monthly_salary, e.hired_on, status
                );
            }
        }
    }
    Ok(())
}

pub fn handle_invoice(cmd: InvoiceCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        InvoiceCmd::Add {
            number,
            customer,
            amount,
            issued,
            paid,
        } => {
            let id = db.add_invoice(&number, &customer, amount, issued, paid)?;
            println!("Recorded invoice #{id}: {number} ({amount:.2})");
        }
        InvoiceCmd::List { json } => {
            let invoices = db.invoices()?;
            if json {
                return print_json(&invoices);
            }
            if invoices.is_empty() {
                println!("No invoices on file.");
                return Ok(());
            }
            for i in &invoices {
                let mark = if i.paid { "paid" } else { "open" };
                println!(
                    "  [#{:>3}] {}  {}  {:>10.2}  {}  {}",
                    i.id, i.issued_on, i.number, i.amount, mark, i.customer
                );
            }
        }
    }
    Ok(())
}

pub fn handle_salary(cmd: SalaryCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        SalaryCmd::Add {
            employee,
            month,
            base,
            bonus,
            deductions,
            paid,
        } => {
            let id = db.add_salary(employee, &month, base, bonus, deductions, paid)?;
            println!("Recorded salary #{id} for employee #{employee} ({month})");
        }
        SalaryCmd::List { json } => {
            let salaries = db.salaries()?;
            if json {
                return print_json(&salaries);
            }
            if salaries.is_empty() {
                println!("No salary payments on file.");
                return Ok(());
            }
            for s in &salaries {
                let mark = if s.paid { "paid" } else { "pending" };
                println!(
                    "  [#{:>3}] {}  employee #{}  net {:>10.2}  {}",
                    s.id, s.month, s.employee_id, s.net, mark
                );
            }
        }
    }
    Ok(())
}

pub fn handle_expense(cmd: ExpenseCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        ExpenseCmd::Add {
            label,
            category,
            amount,
            spent,
        } => {
            let id = db.add_expense(&label, category.as_deref(), amount, spent)?;
            println!("Recorded expense #{id}: {label} ({amount:.2})");
        }
        ExpenseCmd::List { json } => {
            let expenses = db.expenses()?;
            if json {
                return print_json(&expenses);
            }
            if expenses.is_empty() {
                println!("No expenses on file.");
                return Ok(());
            }
            for e in &expenses {
                let category = e.category.as_deref().unwrap_or("-");
                println!(
                    "  [#{:>3}] {}  {:>10.2}  {}  ({category})",
                    e.id, e.spent_on, e.amount, e.label
                );
            }
        }
    }
    Ok(())
}

pub fn handle_withdrawal(cmd: WithdrawalCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        WithdrawalCmd::Add {
            amount,
            reason,
            date,
        } => {
            let id = db.add_withdrawal(amount, reason.as_deref(), date)?;
            println!("Recorded withdrawal #{id} ({amount:.2})");
        }
        WithdrawalCmd::List { json } => {
            let withdrawals = db.withdrawals()?;
            if json {
                return print_json(&withdrawals);
            }
            if withdrawals.is_empty() {
                println!("No withdrawals on file.");
                return Ok(());
            }
            for w in &withdrawals {
                let reason = w.reason.as_deref().unwrap_or("-");
                println!("  [#{:>3}] {}  {:>10.2}  {}", w.id, w.withdrawn_on, w.amount, reason);
            }
        }
    }
    Ok(())
}

pub fn handle_receivable(cmd: ReceivableCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        ReceivableCmd::Add {
            debtor,
            amount,
            due,
            note,
        } => {
            let id = db.add_receivable(&debtor, amount, due, note.as_deref())?;
            println!("Recorded receivable #{id}: {debtor} owes {amount:.2}");
        }
        ReceivableCmd::List { json } => {
            let receivables = db.receivables()?;
            if json {
                return print_json(&receivables);
            }
            if receivables.is_empty() {
                println!("No receivables on file.");
                return Ok(());
            }
            for r in &receivables {
                let due = r
                    .due_on
                    .map(|d| format!("  due {d}"))
                    .unwrap_or_default();
                println!("  [#{:>3}] {}  {:>10.2}{}", r.id, r.debtor, r.amount, due);
            }
        }
    }
    Ok(())
}

pub fn handle_closing(cmd: ClosingCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        ClosingCmd::Add { date, cash, notes } => {
            let id = db.add_closing(date, cash, notes.as_deref())?;
            println!("Recorded closing #{id} for {date} (cash {cash:.2})");
        }
        ClosingCmd::List { json } => {
            let closings = db.closings()?;
            if json {
                return print_json(&closings);
            }
            if closings.is_empty() {
                println!("No closings on file.");
                return Ok(());
            }
            for c in &closings {
                let notes = c.notes.as_deref().unwrap_or("-");
                println!(
                    "  [#{:>3}] {}  cash {:>10.2}  {}",
                    c.id, c.closing_date, c.cash_total, notes
                );
            }
        }
    }
    Ok(())
}

pub fn handle_deposit(cmd: DepositCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        DepositCmd::Add {
            amount,
            source,
            date,
        } => {
            let id = db.add_deposit(amount, &source, date)?;
            println!("Recorded deposit #{id} ({amount:.2} from {source})");
        }
        DepositCmd::List { json } => {
            let deposits = db.deposits()?;
            if json {
                return print_json(&deposits);
            }
            if deposits.is_empty() {
                println!("No deposits on file.");
                return Ok(());
            }
            for d in &deposits {
                println!(
                    "  [#{:>3}] {}  {:>10.2}  {}",
                    d.id, d.deposited_on, d.amount, d.source
                );
            }
        }
    }
    Ok(())
}

pub fn handle_statement(cmd: StatementCmd) -> Result<()> {
    let db = Database::open_default()?;
    match cmd {
        StatementCmd::Add {
            label,
            date,
            debit,
            credit,
        } => {
            let id = db.add_statement_entry(date, &label, debit, credit)?;
            println!("Recorded statement entry #{id}: {label}");
        }
        StatementCmd::List { json } => {
            let entries = db.statement_entries()?;
            if json {
                return print_json(&entries);
            }
            if entries.is_empty() {
                println!("No statement entries on file.");
                return Ok(());
            }
            for e in &entries {
                println!(
                    "  [#{:>3}] {}  debit {:>10.2}  credit {:>10.2}  {}",
                    e.id, e.entry_date, e.debit, e.credit, e.label
                );
            }
        }
    }
    Ok(())
}

pub fn handle_summary() -> Result<()> {
    let db = Database::open_default()?;
    let summary = db.financial_summary()?;

    println!("Income (paid invoices):  {:>12.2}", summary.invoice_income);
    println!("Expenses:                {:>12.2}", summary.expense_total);
    println!("Withdrawals:             {:>12.2}", summary.withdrawal_total);
    println!("Salaries (paid, net):    {:>12.2}", summary.salary_total);
    println!("Net:                     {:>12.2}", summary.net);

    Ok(())
}
