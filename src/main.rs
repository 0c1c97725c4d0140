//! ecourse - browse the Advanced Econometric Methods course in a terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use econ_course::headless::{self, OutputFormat};
use ecourse_app::config::{self, Settings};
use ecourse_core::{logging, ContentRouter};
use tracing::{info, warn};

/// Exit status when `--page` names a module that does not exist
const EXIT_UNKNOWN_PAGE: u8 = 2;

/// Browse the Advanced Econometric Methods course in the terminal
#[derive(Parser, Debug)]
#[command(name = "ecourse", version)]
#[command(about = "Browse the Advanced Econometric Methods course", long_about = None)]
struct Args {
    /// Print the module menu and exit
    #[arg(long, conflicts_with = "page")]
    list: bool,

    /// Print one module page and exit
    #[arg(long, value_name = "KEY")]
    page: Option<String>,

    /// Output format for --list and --page
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory of <key>.toml pages that replace the built-in ones
    #[arg(long, value_name = "DIR")]
    content_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    // The browser still works without a log file
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let settings = match args.config.clone().or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory on this platform, using default settings");
            Settings::default()
        }
    };

    let content_dir = args.content_dir.clone().or_else(|| settings.content.dir.clone());
    if let Some(dir) = &content_dir {
        info!("Content overrides from {}", dir.display());
    }
    let router = ContentRouter::with_overrides(content_dir.as_deref())
        .wrap_err("Failed to load course content")?;

    if args.list {
        headless::print_menu(args.format, &mut io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(key) = &args.page {
        let found = headless::print_page(&router, key, args.format, &mut io::stdout().lock())?;
        if !found {
            eprintln!("Unknown module '{}'. Run with --list to see available modules.", key);
            return Ok(ExitCode::from(EXIT_UNKNOWN_PAGE));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let state_path = settings
        .behavior
        .remember_last_page
        .then(config::default_state_path)
        .flatten();

    ecourse_tui::run(Arc::new(router), settings, state_path).await?;
    Ok(ExitCode::SUCCESS)
}
