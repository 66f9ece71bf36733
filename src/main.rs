use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adventus::app::AppContext;
use adventus::cli::{commands, Cli};
use adventus::config::{Config, SESSION_ENV};
use adventus::domain::PuzzleKey;
use adventus::submit::StdinConfirm;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .init();

    let config = Config::load()?;
    if config.session.is_none() {
        anyhow::bail!("{} environment variable not set", SESSION_ENV);
    }

    let now = Utc::now();
    let year = cli.year_or_default(now);
    let key = PuzzleKey::new(year, cli.day_or_default(year, now))?;
    let ctx = AppContext::new(config)?;

    if cli.refresh {
        commands::refresh(&ctx, key)?;
    }
    if cli.template {
        commands::generate_template(&ctx, key).await?;
    }
    if cli.fetch {
        commands::fetch_input(&ctx, key).await?;
    }
    if cli.show {
        commands::show_document(&ctx, key).await?;
    }
    if let Some(answer) = &cli.submit {
        commands::submit_answer(&ctx, key, answer, cli.part, &StdinConfirm).await?;
    }
    if !(cli.template || cli.fetch || cli.show || cli.submit.is_some()) {
        commands::status(&ctx, key).await?;
    }

    Ok(())
}
