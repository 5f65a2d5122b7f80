use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    wikibook::logging::init().context("init logging")?;

    let cli = wikibook::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        wikibook::cli::Command::Fetch(args) => {
            wikibook::fetch::run(args).await.context("fetch")?;
        }
        wikibook::cli::Command::Chapters(args) => {
            wikibook::chapters::run(args).await.context("chapters")?;
        }
    }

    Ok(())
}
