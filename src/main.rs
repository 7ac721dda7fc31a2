use clap::Parser;
use jagedo_match::{backend, cli, config, error, output};
use backend::HttpBackend;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use jagedo_match_common::SearchController;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Counties => {
            let backend = HttpBackend::from_config(&config, cli.base_url.as_deref())?;
            let controller = SearchController::new(backend);

            let load = controller.initialize().await;
            if let Some(e) = &load.error {
                warn!(error = %e, "Error fetching counties, using default suggestion");
            }
            print!("{}", output::format_counties(&load.counties));
        }

        Commands::Search { job_type, location } => {
            let backend = HttpBackend::from_config(&config, cli.base_url.as_deref())?;
            let mut controller = SearchController::new(backend);

            match controller.handle(&job_type, &location).await {
                Some(view) => print!("{}", output::format_view(&view)),
                None => {
                    info!("job type or location is blank, no request sent");
                    println!("Nothing to search: both --job-type and --location are required.");
                }
            }
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let changed = set_base_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_base_url {
                jagedo_match_common::Endpoints::with_base(&url)?;
                config.base_url = url;
            }
            if let Some(secs) = set_timeout {
                config.timeout_seconds = (secs > 0).then_some(secs);
            }
            if changed {
                config.save()?;
                println!("✔ Config saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Config:");
                println!("  Base URL: {}", config.resolve_base_url(cli.base_url.as_deref()));
                match config.timeout_seconds {
                    Some(secs) => println!("  Timeout: {}s", secs),
                    None => println!("  Timeout: none"),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
