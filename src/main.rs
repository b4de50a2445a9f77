//! Binary entry point: resolve configuration, load the menu, start the session
//! and either drive the Ratatui event loop or print the menu once.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use menu_board::{print_menu, run_app, source, App, Config, Document, MenuSession};

#[derive(Parser)]
#[command(name = "menu-board")]
#[command(about = "Browse and search a restaurant menu in the terminal")]
struct Cli {
    /// Path to the config file (defaults to ~/.menu-board/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Menu JSON file to load instead of the bundled menu
    #[arg(short, long, env = "MENU_BOARD_DATA")]
    data: Option<PathBuf>,

    /// Do not fall back to the bundled menu
    #[arg(long)]
    no_bundled: bool,

    /// Print the menu to stdout instead of opening the terminal UI
    #[arg(long)]
    print: bool,

    /// Search query applied before printing
    #[arg(short, long, requires = "print")]
    query: Option<String>,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config.with_overrides(self.data.clone(), self.no_bundled))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config().context("failed to load configuration")?;

    let _guard = if cli.print {
        menu_board::logging::init_stderr_logger()?;
        None
    } else {
        let log_dir = config.resolved_log_dir()?;
        Some(menu_board::logging::init_file_logger(&log_dir)?)
    };
    info!("menu-board starting");

    let data = source::resolve(&config).context("failed to load menu data")?;
    let mut document = Document::with_targets(&config.container_id, &config.search_input_id);
    let mut session = MenuSession::init(data, &mut document, &config)?;
    for diagnostic in source::validate(session.data()) {
        warn!(%diagnostic, "menu data problem");
    }

    if cli.print {
        let text = print_menu(&mut session, &mut document, cli.query.as_deref())?;
        print!("{text}");
        return Ok(());
    }

    let mut app = App::new(session, document);
    run_app(&mut app)
}
