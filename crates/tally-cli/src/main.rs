//! Tally CLI - console record keepers for stock, to-dos and gym members
//!
//! This is the command-line interface for Tally. Each command opens an
//! interactive menu over the in-memory collections of `tally-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use tally_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_completions, handle_config, handle_gym, handle_inventory, handle_todo,
};
use crate::errors::{exit_code_for, split_hint};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        // The UI context may be what failed to build, so format errors
        // without the --format flag.
        let ui_ctx = UiContext::from_env(cli.json, None, cli.no_color, cli.ascii, cli.quiet);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);

        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli)?;

    match &cli.command {
        Some(Commands::Inventory) => {
            handle_inventory(&ctx)?;
        }
        Some(Commands::Todo) => {
            handle_todo(&ctx)?;
        }
        Some(Commands::Gym) => {
            handle_gym(&ctx)?;
        }
        Some(Commands::Config(args)) => {
            handle_config(&ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            handle_completions(args)?;
        }
        None => {
            println!("Tally v{}", VERSION);
            println!("\nQuickstart:");
            println!("  tally inventory");
            println!("  tally todo");
            println!("  tally gym --today 2025-05-01");
            println!("  tally config init");
            println!("\nRun `tally --help` for full usage.");
        }
    }

    Ok(())
}
