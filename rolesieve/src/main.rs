// rolesieve/src/main.rs
//! rolesieve entry point.
//!
//! Loads the build configuration, applies the command-line overrides and runs
//! the per-role build.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use log::info;
use std::io;
use std::process::ExitCode;

use rolesieve::cli::Cli;
use rolesieve::commands::build::{run_build, BuildOptions};
use rolesieve::logger;
use rolesieve::ui::output_format;
use rolesieve_core::{merge_cli_overrides, BuildConfig, MarkupEngine, RoleSieveError};

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_for(args.quiet, args.debug));
    info!("rolesieve started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => {
            info!("rolesieve completed.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // An unknown override role is a usage error, reported the way clap reports one.
            if let Some(RoleSieveError::UnknownRole { .. }) = err.downcast_ref::<RoleSieveError>() {
                Cli::command().error(ErrorKind::InvalidValue, err.to_string()).exit();
            }
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            let _ = output_format::print_error_message(&mut stderr.lock(), &format!("{:#}", err), supports_color);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let config = match &args.config {
        Some(path) => BuildConfig::load_from_file(path)?,
        None => BuildConfig::load_default()?,
    };
    let config = merge_cli_overrides(config, args.roles.clone(), args.include_location);
    config.validate()?;

    let engine = MarkupEngine::with_passes(config.markup.clone(), args.passes.into())?;
    let opts = BuildOptions {
        source_dir: args.source_dir.clone(),
        output_dir: args.output_dir.clone(),
        only_role: args.role.clone(),
    };
    let reports = run_build(&engine, &config, &opts)?;

    if !args.quiet {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        output_format::print_build_summary(&mut stderr.lock(), &reports, supports_color)?;
    }
    Ok(())
}
