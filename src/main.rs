use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod workflow;

use cli::{Command, ExportCommand, RootArgs};
use workflow::Settings;

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(err) => {
            error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let root = RootArgs::parse();
    let settings = Settings::resolve(&root)?;
    match root.command {
        Command::Init(args) => workflow::run_init(args),
        Command::Validate(args) => workflow::run_validate(&settings, args),
        Command::Recommend(args) => workflow::run_recommend(&settings, args),
        Command::Plan(args) => workflow::run_plan(&settings, args),
        Command::Export(ExportCommand::All(args)) => workflow::run_export_all(&settings, args),
    }
}
