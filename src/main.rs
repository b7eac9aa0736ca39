use anyhow::{Context, Result};
use tracing::warn;
use visual_nuts::{cli, logging};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;

    // Only the working directory's .env is read, and before logging so RUST_LOG applies
    let dotenv = dotenvy::from_path(current_dir.join(".env"));
    logging::init(cli.verbose);

    // A missing .env is normal, a broken one is worth mentioning
    if let Err(error) = dotenv
        && !error.not_found()
    {
        warn!("Failed to load .env file: {error}");
    }

    cli.run(&current_dir)
}
