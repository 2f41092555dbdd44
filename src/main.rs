#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::model::ConfigDto;
use crate::processing::processor::playlist::run_cycle;
use crate::processing::scheduler::exec_scheduler;
use crate::utils::{init_logger, read_config, resolve_env_var, sanitize_sensitive_info, set_sanitize_sensitive_info};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "m3ugen")]
#[command(version)]
#[command(about = "Builds an M3U playlist from the live streams of an Xtream provider", long_about = None)]
struct Args {
    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// The playlist file to write, overrides OUTPUT_FILE
    #[arg(short = 'o', long = "output")]
    output_file: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level")]
    log_level: Option<String>,

    /// Generate the playlist once and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let config_file = args.config_file.as_deref().map(resolve_env_var);
    init_logger(args.log_level.as_ref(), config_file.as_deref());

    info!("Version: {VERSION}");
    let mut config = read_config(config_file.as_deref()).unwrap_or_else(|err| exit!("{}", err));
    if let Some(output_file) = args.output_file {
        config.output_file = output_file;
    }
    set_sanitize_sensitive_info(config.is_sanitize_sensitive_info());
    print_info(&config, config_file.as_deref());

    if args.once {
        if let Err(err) = run_cycle(&config).await {
            exit!("Error generating playlist: {err}");
        }
    } else {
        exec_scheduler(&config).await;
    }
}

fn print_info(config: &ConfigDto, config_file: Option<&str>) {
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("Config file: {}", config_file.unwrap_or("not used"));
    info!("Provider: {}", config.url.as_deref().map_or_else(|| "not set".into(), sanitize_sensitive_info));
    info!("Output file: {}", config.output_file);
    info!("Refresh interval: {}s", config.refresh_interval().as_secs());
    info!("Categories: {}", if config.use_categories { "enabled" } else { "disabled" });
    if !config.verify_ssl {
        info!("SSL certificate verification is disabled");
    }
}
