use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use winhub::app::{run as run_app, App};
use winhub::cli::{generate, list, Cli, Commands, GenerateArgs};
use winhub::delivery::DEFAULT_SCRIPT_NAME;
use winhub::logging::{self, LogTarget};
use winhub::{load_catalog, Catalog, InstallMethod};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui {
        output: PathBuf::from(DEFAULT_SCRIPT_NAME),
        method: InstallMethod::Auto,
    });

    let is_tui = matches!(command, Commands::Tui { .. });
    let target = match (&cli.log_file, is_tui) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Off,
        (None, false) => LogTarget::Stderr,
    };
    let _log_guard = logging::init(&cli.log_level, target)?;

    let catalog = load_catalog(&cli.catalog)?;

    match command {
        Commands::Tui { output, method } => run_tui(catalog, method, output),
        Commands::List { search } => list(&catalog, search.as_deref()),
        Commands::Generate {
            apps,
            all,
            method,
            output,
            crlf,
            stdout,
        } => generate(
            &catalog,
            GenerateArgs {
                apps,
                all,
                method,
                output,
                crlf,
                stdout,
            },
        ),
    }
}

fn run_tui(catalog: Catalog, method: InstallMethod, output: PathBuf) -> Result<()> {
    let mut app = App::new(catalog, method, output);

    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alt screen")?;

    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to init terminal")?;

    run_app(&mut app, &mut terminal)
}
