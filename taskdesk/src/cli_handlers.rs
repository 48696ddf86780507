use crate::db::Database;
use crate::error::Result;
use crate::models::{Priority, Status};
use chrono::NaiveDate;

/// Handle the add command
pub fn handle_add(
    title: &str,
    desc: Option<&str>,
    priority: Priority,
    due: Option<NaiveDate>,
) -> Result<()> {
    let db = Database::open_default()?;
    let task = db.add_task(title, desc, priority, due)?;

    println!("Created task #{}: {}", task.id, task.title);
    println!("  Priority: {}", task.priority);
    if let Some(due) = task.due_date {
        println!("  Due:      {due}");
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list(json: bool) -> Result<()> {
    let db = Database::open_default()?;
    let tasks = db.tasks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks yet.");
        return Ok(());
    }

    for task in &tasks {
        let due = task
            .due_date
            .map(|d| format!("  due {d}"))
            .unwrap_or_default();
        println!(
            "  [#{:>3}] {} {} ({}){}",
            task.id,
            task.status.icon(),
            task.title,
            task.priority,
            due
        );
        if let Some(ref desc) = task.description {
            println!("         {desc}");
        }
    }

    println!();
    println!(
        "Legend: {} completed  {} in progress  {} pending",
        Status::Completed.icon(),
        Status::InProgress.icon(),
        Status::Pending.icon(),
    );

    Ok(())
}

/// Handle the status command
pub fn handle_status(id: i64, status: Status) -> Result<()> {
    let db = Database::open_default()?;
    let task = db.set_task_status(id, status)?;

    println!("Task #{} is now {}", task.id, task.status);

    Ok(())
}

/// Handle the delete command
pub fn handle_delete(id: i64) -> Result<()> {
    let db = Database::open_default()?;
    db.delete_task(id)?;

    println!("Deleted task #{id}");

    Ok(())
}

/// Handle the stats command
pub fn handle_stats() -> Result<()> {
    let db = Database::open_default()?;
    let stats = db.task_stats()?;

    if stats.total == 0 {
        println!("No tasks to report on yet.");
        return Ok(());
    }

    println!("Total:       {}", stats.total);
    println!("Completed:   {}", stats.completed);
    println!("Pending:     {}", stats.pending);
    println!("In Progress: {}", stats.in_progress);
    println!("Completion:  {:.1}%", stats.completion_rate());

    Ok(())
}

/// Handle the categories command
pub fn handle_categories() -> Result<()> {
    let db = Database::open_default()?;
    let categories = db.categories()?;

    for category in &categories {
        println!("  {}  {}", category.color, category.name);
    }

    Ok(())
}
