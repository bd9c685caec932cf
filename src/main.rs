use clap::Parser;
use iljeong::commands::Cli;
use iljeong::startup;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    startup::run(cli).await
}
