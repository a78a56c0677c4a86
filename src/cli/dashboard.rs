use anyhow::Result;
use chrono::{Duration, Utc};

use crate::cli::ui::{format_ts, money, truncate};
use crate::services::Services;

/// Overview screen: headline numbers, today's open tasks, and the five most
/// recent activities.
pub async fn run(services: &Services) -> Result<()> {
    let (contacts, deals, tasks, activities) = tokio::join!(
        services.contacts.get_all(),
        services.deals.get_all(),
        services.tasks.get_all(),
        services.activities.get_all(),
    );

    let pipeline_value: f64 = deals.iter().map(|d| d.value).sum();
    let open_tasks = tasks.iter().filter(|t| !t.is_completed()).count();
    let week_ago = Utc::now() - Duration::days(7);
    let recent_count = activities.iter().filter(|a| a.timestamp > week_ago).count();

    println!("Overview");
    println!("  Contacts:           {}", contacts.len());
    println!("  Pipeline value:     {}", money(pipeline_value));
    println!("  Open tasks:         {}", open_tasks);
    println!("  Activity this week: {}", recent_count);

    let today = Utc::now().date_naive();
    let due_today: Vec<_> = tasks
        .iter()
        .filter(|t| !t.is_completed() && t.due_date.date_naive() == today)
        .collect();
    if !due_today.is_empty() {
        println!("\nDue today");
        for task in due_today {
            println!(
                "  #{:<3} {:<36}  {}  {}",
                task.id,
                truncate(&task.title, 36),
                task.priority.as_str(),
                task.assigned_to
            );
        }
    }

    // Already newest first.
    if !activities.is_empty() {
        println!("\nRecent activity");
        for activity in activities.iter().take(5) {
            println!(
                "  {}  {:<8} {}",
                format_ts(&activity.timestamp),
                activity.kind.as_str(),
                truncate(&activity.description, 44)
            );
        }
    }

    Ok(())
}
