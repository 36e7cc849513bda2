// Main entry point - Configuration, dependency wiring and exit codes
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::company_service::CompanyService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::simco_repository::SimcoRepository;
use crate::presentation::cli::Cli;
use crate::presentation::command::execute;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let service = match build_service() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    match execute(&cli, &service, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}

fn build_service() -> anyhow::Result<CompanyService> {
    let app_config = load_app_config()?;
    tracing::debug!(?app_config, "configuration loaded");

    let repository = SimcoRepository::new(&app_config.api)?;

    Ok(CompanyService::new(Arc::new(repository), app_config.history))
}
