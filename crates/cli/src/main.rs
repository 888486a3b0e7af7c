//! # Rerouter
//!
//! Local daemon that redirects blocked sites while the user is away.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use rerouter_application::services::SyncTrigger;
use rerouter_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rerouter")]
#[command(version)]
#[command(about = "Redirects distracting sites to a search engine while you are away")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            bind_address: cli.bind.clone(),
            port: cli.port,
            database_path: cli.database.clone(),
            log_level: cli.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), CliOverrides::from(&cli))?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        bind = %config.server.bind_address,
        port = config.server.port,
        database = %config.database.path,
        remote = config.remote.is_enabled(),
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database.url()).await?;
    let services = di::Services::build(&config, pool)?;

    let settings = services.initialize_settings.execute().await?;
    info!(
        enabled = settings.enabled,
        sites = settings.blocked_sites.len(),
        destinations = settings.destinations.len(),
        "Settings ready"
    );

    if let Err(e) = services.sync.sync_now(SyncTrigger::Startup).await {
        warn!(error = %e, "Startup sync failed, waiting for the next trigger");
    }

    let shutdown = CancellationToken::new();
    services.job_runner(&config, shutdown.clone()).start().await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
        }
        signal_token.cancel();
    });

    server::start_web_server(&config, services.app_state(), shutdown).await?;

    info!("Rerouter stopped");
    Ok(())
}
