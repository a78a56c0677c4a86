use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::cli::ui::{confirm_delete, format_ts, parse_meta, truncate};
use crate::cli::{ActivityCmd, ActivityListArgs, ActivityLogArgs, DeleteArgs, ShowArgs};
use crate::models::{ActivityDraft, ActivityType, ContactPatch};
use crate::services::Services;
use crate::store::StoreError;

pub async fn run(services: &Services, cmd: ActivityCmd) -> Result<()> {
    match cmd {
        ActivityCmd::List(args) => run_list(services, args).await,
        ActivityCmd::Show(args) => run_show(services, args).await,
        ActivityCmd::Log(args) => run_log(services, args).await,
        ActivityCmd::Delete(args) => run_delete(services, args).await,
    }
}

fn parse_kind(s: &str) -> Result<ActivityType> {
    ActivityType::parse(s)
        .ok_or_else(|| anyhow!("Unknown type '{}'. Expected call, email, meeting, or note.", s))
}

async fn run_list(services: &Services, args: ActivityListArgs) -> Result<()> {
    let activities = services.activities.get_all().await;

    if activities.is_empty() {
        println!("No activities.");
        return Ok(());
    }

    println!(
        "{:<4}  {:<8}  {:<16}  {:<40}  CONTACT",
        "ID", "TYPE", "WHEN", "DESCRIPTION"
    );
    for activity in activities.iter().take(args.limit.unwrap_or(usize::MAX)) {
        println!(
            "{:<4}  {:<8}  {:<16}  {:<40}  #{}",
            activity.id,
            activity.kind.as_str(),
            format_ts(&activity.timestamp),
            truncate(&activity.description, 40),
            activity.contact_id
        );
    }
    Ok(())
}

async fn run_show(services: &Services, args: ShowArgs) -> Result<()> {
    let activity = services.activities.get_by_id(args.id).await?;

    println!("Activity #{}", activity.id);
    println!("  Type:        {}", activity.kind.as_str());
    println!("  Contact:     #{}", activity.contact_id);
    println!("  When:        {}", format_ts(&activity.timestamp));
    println!("  Description: {}", activity.description);
    if let Some(ref outcome) = activity.outcome {
        println!("  Outcome:     {}", outcome);
    }
    for (key, value) in &activity.metadata {
        println!("  {}: {}", key, value);
    }
    Ok(())
}

async fn run_log(services: &Services, args: ActivityLogArgs) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let metadata: BTreeMap<String, String> = parse_meta(&args.meta)?.into_iter().collect();

    let activity = services
        .activities
        .create(ActivityDraft {
            kind,
            contact_id: args.contact,
            description: args.description,
            outcome: args.outcome,
            metadata,
        })
        .await?;

    println!(
        "Logged {} #{} against contact #{}",
        activity.kind.as_str(),
        activity.id,
        activity.contact_id
    );

    // Touch the contact's last-activity stamp, as the activity page does.
    // The contact id is not validated at creation, so it may not exist.
    let touch = ContactPatch {
        last_activity: Some(Some(Utc::now())),
        ..ContactPatch::default()
    };
    match services.contacts.update(activity.contact_id, touch).await {
        Ok(_) => {}
        Err(StoreError::NotFound { .. }) => {
            eprintln!("Warning: contact #{} does not exist", activity.contact_id);
        }
    }

    Ok(())
}

async fn run_delete(services: &Services, args: DeleteArgs) -> Result<()> {
    let activity = services.activities.get_by_id(args.id).await?;

    if !confirm_delete(
        &format!("{} '{}'", activity.kind.as_str(), truncate(&activity.description, 40)),
        args.yes,
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    let deleted = services.activities.delete(args.id).await?;
    println!("Deleted activity #{}", deleted.id);
    Ok(())
}
