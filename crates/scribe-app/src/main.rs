use anyhow::Result;
use clap::Parser;

use scribe::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    scribe::app::run(cli).await
}
