use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::path::{Path, PathBuf};

mod config;
mod dom;
mod errors;
mod fileupload;
mod logger;
mod preset;
mod routing;

use clap::Parser;
use config::Config;

#[derive(Parser)]
#[command(name = "modpreset")]
#[command(about = "Turns an exported mod preset into a steamcmd download line and a launch mod list.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to the YAML config file
    #[clap(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Runs the upload web server
    Serve,
    /// Extracts a local preset file and prints the result as JSON
    Extract {
        file: PathBuf,
        /// Leave out mods that have no workshop id
        #[clap(long, action)]
        skip_empty_ids: bool,
        #[clap(long, action)]
        pretty: bool,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    logger::init_logger(config.log_level());
    if cli.config.exists() {
        log::debug!("Loaded config from {}", cli.config.display());
    } else {
        log::debug!("No config file at {}, using defaults", cli.config.display());
    }

    match cli.command {
        Some(Commands::Serve) | None => run_server(config).await,
        Some(Commands::Extract { file, skip_empty_ids, pretty }) => {
            run_extract(config, &file, skip_empty_ids, pretty)
        }
    }
}

fn run_extract(mut config: Config, file: &Path, skip_empty_ids: bool, pretty: bool) -> anyhow::Result<()> {
    config.extraction.skip_empty_ids |= skip_empty_ids;
    let result = preset::parse_file(file, &config.extraction)?;
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.storage_dir).with_context(|| {
        format!("could not create storage directory {}", config.storage_dir.display())
    })?;

    let host = config.host.clone();
    let port = config.port;
    let workers = config.workers();
    let data = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Compress::default())
            .app_data(data.clone())
            .configure(routing::configure)
    })
    .workers(workers)
    .keep_alive(std::time::Duration::from_secs(30))
    .bind((host.as_str(), port))
    .with_context(|| format!("could not bind to {}:{}", host, port))?;

    logger::print_banner(&host, port, workers);

    server.run().await?;
    Ok(())
}
