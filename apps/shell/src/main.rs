#![allow(clippy::print_stderr, clippy::print_stdout)]

//! `gym`: back-office shell for the GymHub backend.

pub mod handlers;
pub mod models;
pub mod services;

use crate::models::args::Cli;
use crate::services::errors::user_message;
use crate::services::prompt::TerminalConfirm;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use gymhub::GymHub;
use gymhub::domain::config::{ClientConfig, LoggingConfig};
use gymhub::kernel::confirm::{AlwaysConfirm, Confirm};
use gymhub::kernel::config::load_config;
use gymhub_logger::Logger;
use std::sync::Arc;
use tracing::debug;

const LOG_NAME: &str = "gym";

#[gymhub_runtime::main(interactive)]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: ClientConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let _logger = init_logger(&config.logging, cli.verbose)?;
    debug!(base_url = %config.api.base_url, "Configuration loaded");

    let confirm: Arc<dyn Confirm> =
        if cli.yes { Arc::new(AlwaysConfirm) } else { Arc::new(TerminalConfirm) };
    let hub = GymHub::builder().config(config).confirm(confirm).build()?;

    let today = chrono::Local::now().date_naive();
    handlers::dispatch(&hub, cli.command, today).await.map_err(|err| {
        debug!(error = %format!("{err:#}"), "Command failed");
        anyhow!(user_message(&err))
    })
}

fn init_logger(settings: &LoggingConfig, verbosity: u8) -> Result<Logger> {
    let mut builder = Logger::builder().name(LOG_NAME).verbosity(verbosity);
    if let Some(filter) = settings.filter.as_deref() {
        builder = builder.env_filter(filter);
    }
    let logger = match settings.directory.as_deref() {
        Some(directory) => builder.path(directory).json(settings.json).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}
