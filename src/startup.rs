use crate::commands::{self, Cli, Commands};
use crate::components::events::{Notifier, TracingNotifier};
use crate::components::EventsHandle;
use crate::config::Config;
use crate::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config and apply its locale
pub fn load_config(path: Option<&Path>) -> miette::Result<Config> {
    match Config::load(path) {
        Ok(config) => {
            crate::utils::i18n::set_locale(&config.locale);
            info!("Using events backend at {}", config.api_base_url);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Spawn the events actor and run one CLI command against it
pub async fn run(cli: Cli) -> miette::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let editing = matches!(cli.command, Commands::Edit { .. } | Commands::Repeat { .. });
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let handle = EventsHandle::from_config(&config, notifier, editing, None)?;

    let result = match cli.command {
        Commands::List { at } => commands::list::list(&handle, at.as_deref()).await,
        Commands::Add(args) => commands::edit::add(&handle, &config, args).await,
        Commands::Edit { id, fields } => commands::edit::edit(&handle, &id, fields).await,
        Commands::Repeat { id, rule } => commands::edit::repeat(&handle, &config, &id, rule).await,
        Commands::Delete { id } => commands::edit::delete(&handle, &id).await,
    };

    if let Err(e) = handle.shutdown().await {
        error!("Error shutting down events actor: {:?}", e);
    }

    result.map_err(Into::into)
}
