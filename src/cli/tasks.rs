use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::cli::ui::{confirm_delete, format_date, parse_date, truncate};
use crate::cli::{DeleteArgs, ShowArgs, TaskAddArgs, TaskCmd, TaskEditArgs, TaskListArgs};
use crate::models::{TaskDraft, TaskPatch, TaskPriority, TaskStatus};
use crate::services::Services;

pub async fn run(services: &Services, cmd: TaskCmd) -> Result<()> {
    match cmd {
        TaskCmd::List(args) => run_list(services, args).await,
        TaskCmd::Show(args) => run_show(services, args).await,
        TaskCmd::Add(args) => run_add(services, args).await,
        TaskCmd::Edit(args) => run_edit(services, args).await,
        TaskCmd::Complete(args) => run_complete(services, args).await,
        TaskCmd::Delete(args) => run_delete(services, args).await,
    }
}

fn parse_priority(s: &str) -> Result<TaskPriority> {
    TaskPriority::parse(s)
        .ok_or_else(|| anyhow!("Unknown priority '{}'. Expected low, medium, or high.", s))
}

fn parse_status(s: &str) -> Result<TaskStatus> {
    TaskStatus::parse(s).ok_or_else(|| {
        anyhow!("Unknown status '{}'. Expected pending, in_progress, or completed.", s)
    })
}

async fn run_list(services: &Services, args: TaskListArgs) -> Result<()> {
    let mut tasks = services.tasks.get_all().await;

    if let Some(ref status) = args.status {
        let wanted = parse_status(status)?;
        tasks.retain(|t| t.status == wanted);
    }
    if args.today {
        let today = Utc::now().date_naive();
        tasks.retain(|t| t.due_date.date_naive() == today);
    }

    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    println!(
        "{:<4}  {:<36}  {:<10}  {:<8}  {:<12}  ASSIGNED",
        "ID", "TITLE", "DUE", "PRIORITY", "STATUS"
    );
    for task in &tasks {
        println!(
            "{:<4}  {:<36}  {:<10}  {:<8}  {:<12}  {}",
            task.id,
            truncate(&task.title, 36),
            format_date(&task.due_date),
            task.priority.as_str(),
            task.status.as_str(),
            task.assigned_to
        );
    }
    Ok(())
}

async fn run_show(services: &Services, args: ShowArgs) -> Result<()> {
    let task = services.tasks.get_by_id(args.id).await?;

    println!("Task #{}", task.id);
    println!("  Title:       {}", task.title);
    if !task.description.is_empty() {
        println!("  Description: {}", task.description);
    }
    println!("  Due:         {}", format_date(&task.due_date));
    println!("  Priority:    {}", task.priority.as_str());
    println!("  Status:      {}", task.status.as_str());
    println!("  Assigned to: {}", task.assigned_to);
    println!("  Created:     {}", format_date(&task.created_at));
    Ok(())
}

async fn run_add(services: &Services, args: TaskAddArgs) -> Result<()> {
    if args.title.trim().is_empty() {
        return Err(anyhow!("Task title is required."));
    }
    let priority = parse_priority(&args.priority)?;
    let due_date = parse_date(&args.due)?;

    let task = services
        .tasks
        .create(TaskDraft {
            title: args.title,
            description: args.description,
            due_date,
            priority,
            assigned_to: args.assigned,
        })
        .await?;

    println!("Created task #{}: {} (pending)", task.id, task.title);
    Ok(())
}

async fn run_edit(services: &Services, args: TaskEditArgs) -> Result<()> {
    let patch = TaskPatch {
        title: args.title,
        description: args.description,
        due_date: args.due.as_deref().map(parse_date).transpose()?,
        priority: args.priority.as_deref().map(parse_priority).transpose()?,
        assigned_to: args.assigned,
        status: args.status.as_deref().map(parse_status).transpose()?,
    };

    let untouched = patch.title.is_none()
        && patch.description.is_none()
        && patch.due_date.is_none()
        && patch.priority.is_none()
        && patch.assigned_to.is_none()
        && patch.status.is_none();
    if untouched {
        return Err(anyhow!("Nothing to change. Pass at least one field flag."));
    }

    let task = services.tasks.update(args.id, patch).await?;
    println!("Updated task #{}: {} ({})", task.id, task.title, task.status.as_str());
    Ok(())
}

async fn run_complete(services: &Services, args: ShowArgs) -> Result<()> {
    let task = services
        .tasks
        .update(
            args.id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        )
        .await?;

    println!("Completed task #{}: {}", task.id, task.title);
    Ok(())
}

async fn run_delete(services: &Services, args: DeleteArgs) -> Result<()> {
    let task = services.tasks.get_by_id(args.id).await?;

    if !confirm_delete(&format!("task '{}'", task.title), args.yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let deleted = services.tasks.delete(args.id).await?;
    println!("Deleted task #{}: {}", deleted.id, deleted.title);
    Ok(())
}
