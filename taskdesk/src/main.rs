use clap::Parser;
use std::process;
use taskdesk::cli::{Cli, Commands};
use taskdesk::cli_handlers;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            title,
            desc,
            priority,
            due,
        } => cli_handlers::handle_add(&title, desc.as_deref(), priority, due),
        Commands::List { json } => cli_handlers::handle_list(json),
        Commands::Status { id, status } => cli_handlers::handle_status(id, status),
        Commands::Delete { id } => cli_handlers::handle_delete(id),
        Commands::Stats => cli_handlers::handle_stats(),
        Commands::Categories => cli_handlers::handle_categories(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
