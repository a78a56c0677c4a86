use anyhow::{anyhow, Result};

use crate::cli::ui::{confirm_delete, format_date, truncate};
use crate::cli::{ContactAddArgs, ContactCmd, ContactEditArgs, ContactListArgs, DeleteArgs, ShowArgs};
use crate::models::{ContactDraft, ContactPatch};
use crate::services::Services;

pub async fn run(services: &Services, cmd: ContactCmd) -> Result<()> {
    match cmd {
        ContactCmd::List(args) => run_list(services, args).await,
        ContactCmd::Show(args) => run_show(services, args).await,
        ContactCmd::Add(args) => run_add(services, args).await,
        ContactCmd::Edit(args) => run_edit(services, args).await,
        ContactCmd::Delete(args) => run_delete(services, args).await,
    }
}

async fn run_list(services: &Services, args: ContactListArgs) -> Result<()> {
    let mut contacts = services.contacts.get_all().await;

    if let Some(ref query) = args.search {
        let q = query.to_lowercase();
        contacts.retain(|c| {
            c.name.to_lowercase().contains(&q)
                || c.email.to_lowercase().contains(&q)
                || c.company.to_lowercase().contains(&q)
        });
    }

    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    println!(
        "{:<4}  {:<24}  {:<28}  {:<20}  {:<8}  LAST ACTIVITY",
        "ID", "NAME", "EMAIL", "COMPANY", "STATUS"
    );
    for contact in &contacts {
        let last = contact
            .last_activity
            .as_ref()
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<4}  {:<24}  {:<28}  {:<20}  {:<8}  {}",
            contact.id,
            truncate(&contact.name, 24),
            truncate(&contact.email, 28),
            truncate(&contact.company, 20),
            contact.status,
            last
        );
    }
    Ok(())
}

async fn run_show(services: &Services, args: ShowArgs) -> Result<()> {
    let contact = services.contacts.get_by_id(args.id).await?;

    println!("Contact #{}", contact.id);
    println!("  Name:          {}", contact.name);
    println!("  Email:         {}", contact.email);
    println!("  Phone:         {}", contact.phone);
    println!("  Company:       {}", contact.company);
    println!("  Status:        {}", contact.status);
    if !contact.tags.is_empty() {
        println!("  Tags:          {}", contact.tags.join(", "));
    }
    if !contact.notes.is_empty() {
        println!("  Notes:         {}", contact.notes);
    }
    println!("  Created:       {}", format_date(&contact.created_at));
    match contact.last_activity {
        Some(ts) => println!("  Last activity: {}", format_date(&ts)),
        None => println!("  Last activity: -"),
    }
    Ok(())
}

async fn run_add(services: &Services, args: ContactAddArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(anyhow!("Contact name is required."));
    }

    let contact = services
        .contacts
        .create(ContactDraft {
            name: args.name,
            email: args.email,
            phone: args.phone,
            company: args.company,
            notes: args.notes,
            status: args.status,
            tags: if args.tag.is_empty() { None } else { Some(args.tag) },
        })
        .await?;

    println!("Created contact #{}: {}", contact.id, contact.name);
    Ok(())
}

async fn run_edit(services: &Services, args: ContactEditArgs) -> Result<()> {
    let patch = ContactPatch {
        name: args.name,
        email: args.email,
        phone: args.phone,
        company: args.company,
        notes: args.notes,
        status: args.status,
        tags: if args.tag.is_empty() { None } else { Some(args.tag) },
        last_activity: None,
    };

    let untouched = patch.name.is_none()
        && patch.email.is_none()
        && patch.phone.is_none()
        && patch.company.is_none()
        && patch.notes.is_none()
        && patch.status.is_none()
        && patch.tags.is_none();
    if untouched {
        return Err(anyhow!("Nothing to change. Pass at least one field flag."));
    }

    let contact = services.contacts.update(args.id, patch).await?;
    println!("Updated contact #{}: {}", contact.id, contact.name);
    Ok(())
}

async fn run_delete(services: &Services, args: DeleteArgs) -> Result<()> {
    let contact = services.contacts.get_by_id(args.id).await?;

    if !confirm_delete(&format!("contact '{}'", contact.name), args.yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let deleted = services.contacts.delete(args.id).await?;
    println!("Deleted contact #{}: {}", deleted.id, deleted.name);
    Ok(())
}
