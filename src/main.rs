use clap::Parser;
use crmcmd::cli::{self, Cli, Commands};
use crmcmd::seed::SeedData;
use crmcmd::services::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let seed = SeedData::load()?;
    let services = if cli.no_delay {
        Services::instant(seed)
    } else {
        Services::new(seed)
    };

    match cli.command {
        Commands::Dashboard => cli::dashboard::run(&services).await?,
        Commands::Contacts(cmd) => cli::contacts::run(&services, cmd).await?,
        Commands::Deals(cmd) => cli::deals::run(&services, cmd).await?,
        Commands::Tasks(cmd) => cli::tasks::run(&services, cmd).await?,
        Commands::Activities(cmd) => cli::activities::run(&services, cmd).await?,
    }

    Ok(())
}
