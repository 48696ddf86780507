use clap::Parser;
use ledgerdesk::cli::{Cli, Commands};
use ledgerdesk::cli_handlers;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Employee { cmd } => cli_handlers::handle_employee(cmd),
        Commands::Invoice { cmd } => cli_handlers::handle_invoice(cmd),
        Commands::Salary { cmd } => cli_handlers::handle_salary(cmd),
        Commands::Expense { cmd } => cli_handlers::handle_expense(cmd),
        Commands::Withdrawal { cmd } => cli_handlers::handle_withdrawal(cmd),
        Commands::Receivable { cmd } => cli_handlers::handle_receivable(cmd),
        Commands::Closing { cmd } => cli_handlers::handle_closing(cmd),
        Commands::Deposit { cmd } => cli_handlers::handle_deposit(cmd),
        Commands::Statement { cmd } => cli_handlers::handle_statement(cmd),
        Commands::Summary => cli_handlers::handle_summary(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
