use crate::commands::{Cli, Commands};
use anyhow::{Result, bail};
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod actions;
mod commands;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    let failures = match cli.command {
        Commands::Show(cmd) => actions::show(&pb, cmd, &config).await?,
        Commands::Sign(cmd) => actions::sign(&pb, cmd, &config).await?,
        Commands::Check(cmd) => actions::check(&pb, cmd, &config).await?,
        Commands::Convert(cmd) => {
            actions::convert(cmd, &config).await?;
            0
        }
    };

    if failures > 0 {
        bail!("{failures} CUE sheet(s) failed");
    }

    Ok(())
}
