pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{ProjectionPolicy, SortKey};
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_show(sort: SortKey, strict: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_policy(policy_for(strict));
        let service = ReportService::new(config, sort);
        service.run().await
    })
}

pub fn handle_serve(port: u16, strict: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_policy(policy_for(strict));
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn policy_for(strict: bool) -> ProjectionPolicy {
    if strict {
        ProjectionPolicy::RejectBatch
    } else {
        ProjectionPolicy::SkipMalformed
    }
}
