use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hotseat_chess::core::{load_or_default, save_settings, settings_path};
use hotseat_chess::rendering::TextRenderer;
use hotseat_chess::Session;

#[derive(Parser)]
#[command(name = "hotseat_chess", version, about = "Two-player chess on one terminal")]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Tracing filter, overrides RUST_LOG and the settings file
    #[arg(long)]
    log_level: Option<String>,

    /// Letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game on stdin/stdout (default)
    Play,
    /// Feed square names as clicks and print the final position
    Replay { squares: Vec<String> },
    /// Write the effective settings to the settings file
    InitSettings,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let (settings, origin) = load_or_default(&path);

    init_tracing(cli.log_level.as_deref(), &settings.log_level);
    origin.log(&path);

    let mut renderer = TextRenderer::from_settings(&settings);
    if cli.ascii {
        renderer = renderer.ascii();
    }
    let mut session = Session::new(renderer).context("failed to set up the board")?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout().lock())?;
        }
        Commands::Replay { squares } => {
            let result = session.replay(&squares)?;
            println!("{}", session.frame());
            info!("[SESSION] Replay finished: {}", result);
        }
        Commands::InitSettings => {
            if let Err(e) = save_settings(&settings, &path) {
                error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e);
                return Err(e).context("failed to write settings");
            }
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// `--log-level` wins, then `RUST_LOG`, then the settings file
fn init_tracing(cli_level: Option<&str>, settings_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings_level)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
