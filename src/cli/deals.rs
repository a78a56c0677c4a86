use anyhow::{anyhow, Result};

use crate::cli::ui::{confirm_delete, format_date, money, parse_date, truncate};
use crate::cli::{DealAddArgs, DealCmd, DealEditArgs, DeleteArgs, ShowArgs};
use crate::models::{Deal, DealDraft, DealPatch, DealStage};
use crate::services::Services;

pub async fn run(services: &Services, cmd: DealCmd) -> Result<()> {
    match cmd {
        DealCmd::List => run_list(services).await,
        DealCmd::Pipeline => run_pipeline(services).await,
        DealCmd::Show(args) => run_show(services, args).await,
        DealCmd::Add(args) => run_add(services, args).await,
        DealCmd::Edit(args) => run_edit(services, args).await,
        DealCmd::Delete(args) => run_delete(services, args).await,
    }
}

fn parse_stage(s: &str) -> Result<DealStage> {
    DealStage::parse(s).ok_or_else(|| {
        anyhow!("Unknown stage '{}'. Expected lead, qualified, proposal, negotiation, or closed.", s)
    })
}

async fn run_list(services: &Services) -> Result<()> {
    let deals = services.deals.get_all().await;

    if deals.is_empty() {
        println!("No deals.");
        return Ok(());
    }

    println!(
        "{:<4}  {:<32}  {:>10}  {:<12}  {:>7}  {:>4}  CLOSE",
        "ID", "TITLE", "VALUE", "STAGE", "CONTACT", "PROB"
    );
    for deal in &deals {
        println!(
            "{:<4}  {:<32}  {:>10}  {:<12}  {:>7}  {:>3}%  {}",
            deal.id,
            truncate(&deal.title, 32),
            money(deal.value),
            deal.stage.as_str(),
            deal.contact_id,
            deal.probability,
            format_date(&deal.expected_close)
        );
    }
    Ok(())
}

async fn run_pipeline(services: &Services) -> Result<()> {
    let deals = services.deals.get_all().await;

    for stage in DealStage::ALL {
        let in_stage: Vec<&Deal> = deals.iter().filter(|d| d.stage == stage).collect();
        let stage_value: f64 = in_stage.iter().map(|d| d.value).sum();

        println!(
            "{} ({} deals, {})",
            stage.as_str().to_uppercase(),
            in_stage.len(),
            money(stage_value)
        );
        for deal in in_stage {
            println!(
                "  #{:<3} {:<32}  {:>10}  {:>3}%",
                deal.id,
                truncate(&deal.title, 32),
                money(deal.value),
                deal.probability
            );
        }
        println!();
    }
    Ok(())
}

async fn run_show(services: &Services, args: ShowArgs) -> Result<()> {
    let deal = services.deals.get_by_id(args.id).await?;

    println!("Deal #{}", deal.id);
    println!("  Title:          {}", deal.title);
    println!("  Value:          {}", money(deal.value));
    println!("  Stage:          {}", deal.stage.as_str());
    println!("  Contact:        #{}", deal.contact_id);
    println!("  Probability:    {}%", deal.probability);
    println!("  Expected close: {}", format_date(&deal.expected_close));
    println!("  Created:        {}", format_date(&deal.created_at));
    Ok(())
}

async fn run_add(services: &Services, args: DealAddArgs) -> Result<()> {
    if args.value < 0.0 {
        return Err(anyhow!("Deal value must be non-negative."));
    }
    let stage = parse_stage(&args.stage)?;
    let expected_close = parse_date(&args.close)?;

    let deal = services
        .deals
        .create(DealDraft {
            title: args.title,
            value: args.value,
            stage,
            contact_id: args.contact,
            probability: args.probability,
            expected_close,
        })
        .await?;

    println!("Created deal #{}: {}", deal.id, deal.title);
    Ok(())
}

async fn run_edit(services: &Services, args: DealEditArgs) -> Result<()> {
    if let Some(value) = args.value {
        if value < 0.0 {
            return Err(anyhow!("Deal value must be non-negative."));
        }
    }

    let patch = DealPatch {
        title: args.title,
        value: args.value,
        stage: args.stage.as_deref().map(parse_stage).transpose()?,
        contact_id: args.contact,
        probability: args.probability,
        expected_close: args.close.as_deref().map(parse_date).transpose()?,
    };

    let untouched = patch.title.is_none()
        && patch.value.is_none()
        && patch.stage.is_none()
        && patch.contact_id.is_none()
        && patch.probability.is_none()
        && patch.expected_close.is_none();
    if untouched {
        return Err(anyhow!("Nothing to change. Pass at least one field flag."));
    }

    let deal = services.deals.update(args.id, patch).await?;
    println!(
        "Updated deal #{}: {} ({})",
        deal.id,
        deal.title,
        deal.stage.as_str()
    );
    Ok(())
}

async fn run_delete(services: &Services, args: DeleteArgs) -> Result<()> {
    let deal = services.deals.get_by_id(args.id).await?;

    if !confirm_delete(&format!("deal '{}'", deal.title), args.yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let deleted = services.deals.delete(args.id).await?;
    println!("Deleted deal #{}: {}", deleted.id, deleted.title);
    Ok(())
}
