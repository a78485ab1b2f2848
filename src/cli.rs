use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::catalog::Catalog;
use crate::delivery::{deliver, LineEnding, DEFAULT_SCRIPT_NAME};
use crate::script::{InstallMethod, ScriptGenerator};
use crate::selection::{filter_sections, Selection};

#[derive(Parser)]
#[command(name = "winhub")]
#[command(version)]
#[command(
    about = "Pick Windows applications from a catalog and generate a batch installer",
    long_about = None
)]
pub struct Cli {
    /// Catalog JSON file
    #[arg(long, global = true, env = "WINHUB_CATALOG", default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Log filter, e.g. `info` or `winhub=debug`
    #[arg(long, global = true, env = "WINHUB_LOG", default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr (the TUI logs nowhere without it)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    Tui {
        /// Where `g` writes the generated script
        #[arg(short, long, default_value = DEFAULT_SCRIPT_NAME)]
        output: PathBuf,
        /// Initial install method
        #[arg(short, long, value_enum, default_value_t = InstallMethod::Auto)]
        method: InstallMethod,
    },
    /// Print the catalog, optionally narrowed by a name search
    #[clap(visible_alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Render an installer script for the given apps
    #[clap(visible_alias = "gen")]
    Generate {
        /// App ids to include (repeatable)
        #[arg(short, long = "app", required_unless_present = "all")]
        apps: Vec<String>,
        /// Include every app in the catalog
        #[arg(long, conflicts_with = "apps")]
        all: bool,
        #[arg(short, long, value_enum, default_value_t = InstallMethod::Auto)]
        method: InstallMethod,
        #[arg(short, long, default_value = DEFAULT_SCRIPT_NAME)]
        output: PathBuf,
        /// Use CRLF line endings in the written file
        #[arg(long)]
        crlf: bool,
        /// Print the script instead of writing a file
        #[arg(long, conflicts_with_all = ["output", "crlf"])]
        stdout: bool,
    },
}

pub fn list(catalog: &Catalog, search: Option<&str>) -> Result<()> {
    let sections = filter_sections(catalog, search.unwrap_or_default());
    let mut out = io::stdout().lock();

    if sections.is_empty() {
        writeln!(out, "No apps found")?;
        return Ok(());
    }

    for section in &sections {
        writeln!(out, "{} {} ({})", section.info.icon, section.info.title, section.category)?;
        for app in &section.apps {
            writeln!(out, "  {:<20} {:<28} {}", app.id, app.name, app.install_badges().join(","))?;
        }
    }
    Ok(())
}

pub struct GenerateArgs {
    pub apps: Vec<String>,
    pub all: bool,
    pub method: InstallMethod,
    pub output: PathBuf,
    pub crlf: bool,
    pub stdout: bool,
}

pub fn generate(catalog: &Catalog, args: GenerateArgs) -> Result<()> {
    let mut selection = Selection::new();
    if args.all {
        selection.select_all(catalog);
    } else {
        for id in &args.apps {
            if !selection.contains(id) {
                selection.toggle(id);
            }
        }
    }
    if selection.is_empty() {
        bail!("select at least one application");
    }

    let apps = catalog.resolve(selection.ids())?;
    let script = ScriptGenerator::new(&apps, args.method)?.generate();

    if args.stdout {
        io::stdout()
            .lock()
            .write_all(script.as_bytes())
            .context("failed to write script to stdout")?;
        return Ok(());
    }

    let line_ending = if args.crlf { LineEnding::Crlf } else { LineEnding::Lf };
    let path = deliver(&script, &args.output, line_ending)?;
    println!(
        "Wrote {} ({} app(s), method {}).",
        path.display(),
        apps.len(),
        args.method
    );
    Ok(())
}
