use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::run::RunOptions;
use commands::watch::WatchOptions;
use commands::{CommandContext, CommandError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug logs,
/// `--quiet` limits output to errors, and the default is warnings.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let mut ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Some(Commands::Check { triggers }) => {
            commands::check::execute(&mut ctx, triggers.as_deref())
        }
        Some(Commands::Run {
            triggers,
            items,
            feed,
        }) => {
            let opts = RunOptions {
                triggers: triggers.clone(),
                items: items.clone(),
                feeds: feed.clone(),
            };
            commands::run::execute(&mut ctx, &opts).await
        }
        Some(Commands::Watch {
            triggers,
            feed,
            interval,
            once,
        }) => {
            let opts = WatchOptions {
                triggers: triggers.clone(),
                feeds: feed.clone(),
                interval: *interval,
                once: *once,
            };
            commands::watch::execute(&mut ctx, &opts).await
        }
        Some(Commands::Config { command }) => match command {
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell).map_err(CommandError::Io)
        }
        None => {
            if !ctx.quiet {
                println!("nf - news filter");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Triggers(_) => "TRIGGER_FILE_ERROR",
        CommandError::InvalidTriggers { .. } => "INVALID_TRIGGERS",
        CommandError::Feed(_) => "FEED_ERROR",
        CommandError::Items(_) => "ITEMS_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::InvalidTriggers { .. } => 1,
        CommandError::Feed(feed) => feed.exit_code(),
        CommandError::Triggers(_) => 3,
        CommandError::Items(_) => 3,
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}
