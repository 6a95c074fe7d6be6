//! Compmap CLI — query the component index without the terminal UI.
//!
//! Commands:
//! - `stats` — counts of components, subcomponents and shared subcomponents
//! - `mains` — component listing with subcomponent counts
//! - `subs` — subcomponents of one component, with doc links
//! - `usage` — components using one subcomponent
//! - `shared` — the shared-subcomponent chart data
//! - `link` — resolve the doc page for a subcomponent

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use compmap_core::{load_dataset, link, Explorer, ExplorerConfig, ExplorerEvent};

#[derive(Parser)]
#[command(
    name = "compmap",
    about = "compmap — explore which components are built from which subcomponents"
)]
struct Cli {
    /// Path to a TOML config file. Defaults to <config dir>/compmap/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Component mapping JSON (path or http(s) URL). Overrides the config.
    #[arg(long, global = true)]
    mapping: Option<String>,

    /// Custom component list JSON (path or URL). Overrides the config.
    #[arg(long, global = true)]
    customs: Option<String>,

    /// Spreadsheet CSV used when the mapping cannot be loaded.
    #[arg(long, global = true)]
    fallback_csv: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count components, subcomponents and shared subcomponents.
    Stats,
    /// List components with their subcomponent counts.
    Mains {
        /// Case-insensitive name filter.
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the subcomponents of a component with their doc links.
    Subs {
        main: String,
    },
    /// List the components that use a subcomponent.
    Usage {
        sub: String,
    },
    /// Subcomponents used by two or more components.
    Shared {
        /// Emit the chart points as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Resolve the doc page for a subcomponent.
    Link {
        sub: String,

        /// Component the subcomponent is being viewed from.
        #[arg(long)]
        context: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = resolve_config(&cli)?;
    debug!(?config, "resolved config");

    let dataset = load_dataset(&config);
    for w in &dataset.warnings {
        warn!("{w}");
    }
    let mut explorer = Explorer::from_dataset(dataset, config.doc_links());

    let out = run(&cli.command, &mut explorer)?;
    print!("{out}");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("COMPMAP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("compmap_core=warn,compmap=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config file, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<ExplorerConfig> {
    let path = cli.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("compmap")
            .join("config.toml")
    });
    let mut config = ExplorerConfig::load_or_default(&path)
        .with_context(|| format!("loading config {}", path.display()))?;

    if let Some(mapping) = &cli.mapping {
        config.mapping = mapping.clone();
    }
    if let Some(customs) = &cli.customs {
        config.customs = customs.clone();
    }
    if let Some(csv) = &cli.fallback_csv {
        config.fallback_csv = Some(csv.clone());
    }
    Ok(config)
}

fn run(command: &Commands, explorer: &mut Explorer) -> Result<String> {
    let mut out = String::new();
    match command {
        Commands::Stats => {
            let index = explorer.index();
            writeln!(out, "components:          {}", index.main_count())?;
            writeln!(out, "subcomponents:       {}", index.sub_count())?;
            writeln!(out, "shared:              {}", explorer.chart_points().len())?;
            writeln!(out, "custom components:   {}", explorer.customs().len())?;
        }
        Commands::Mains { filter } => {
            let cards = explorer.cards(filter.as_deref().unwrap_or(""));
            let width = cards.iter().map(|c| c.name.len()).max().unwrap_or(0);
            for card in cards {
                let tag = if card.custom { "  custom" } else { "" };
                writeln!(out, "{:<width$}  {:>3}{tag}", card.name, card.sub_count)?;
            }
        }
        Commands::Subs { main } => {
            explorer.dispatch(ExplorerEvent::OpenMain(main.clone()));
            let subs = explorer.overlay_subs();
            if subs.is_empty() {
                writeln!(out, "{main} has no subcomponents")?;
            }
            let width = subs.iter().map(String::len).max().unwrap_or(0);
            for sub in subs {
                writeln!(out, "{sub:<width$}  {}", explorer.link_for(sub))?;
            }
        }
        Commands::Usage { sub } => {
            explorer.dispatch(ExplorerEvent::ShowSubDetail(sub.clone()));
            writeln!(out, "{}", explorer.detail_message())?;
            for main in explorer.detail_usage() {
                writeln!(out, "  {main}")?;
            }
        }
        Commands::Shared { json } => {
            let points = explorer.chart_points();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(points)?)?;
            } else {
                let width = points.iter().map(|p| p.name.len()).max().unwrap_or(0);
                for p in points {
                    writeln!(out, "{:<width$}  {:>3}", p.name, p.count)?;
                }
            }
        }
        Commands::Link { sub, context } => {
            let key = link::resolve(explorer.index(), sub, context.as_deref());
            writeln!(out, "{key}\t{}", explorer.links().href(key))?;
        }
    }
    Ok(out)
}
