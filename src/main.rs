//! Fleet Dashboard - CLI entry point
//!
//! Drives the layout engine against the file-backed store: show the
//! arrangement for a viewport width, move or resize a panel, reset to the
//! default layout, and manage the configuration file.

use clap::{Args, Parser, Subcommand};
use fleet_dashboard::config::schema::LogLevel;
use fleet_dashboard::config::{default, xdg, Config, ConfigLoader};
use fleet_dashboard::dashboard::{Dashboard, DashboardOptions};
use fleet_dashboard::grid::GridMetrics;
use fleet_dashboard::layout::{mining_layout, mining_registry, LayoutSet};
use fleet_dashboard::store::{FileBackend, LayoutStore};
use fleet_dashboard::{logging, Error};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type FileDashboard = Dashboard<&'static str, FileBackend>;

/// Fleet dashboard layout tool
#[derive(Parser)]
#[command(name = "fleetdash")]
#[command(version, about = "Inspect and rearrange the fleet dashboard layout")]
struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/fleet-dashboard/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding saved layouts (overrides [layout] storage_dir)
    #[arg(long, global = true, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for fleetdash
#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Layout(LayoutCommand),

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands that work on a stored layout.
#[derive(Subcommand)]
enum LayoutCommand {
    /// Show the layout at a viewport width
    Show {
        #[command(flatten)]
        target: Target,
        /// Print the stored form as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a panel to a grid cell
    Move {
        /// Panel identifier
        panel: String,
        /// Target column (clamped to the grid)
        column: u32,
        /// Target row
        row: u32,
        #[command(flatten)]
        target: Target,
    },

    /// Resize a panel (clamped to its constraints)
    Resize {
        /// Panel identifier
        panel: String,
        /// Width in grid columns
        #[arg(value_name = "COLUMNS")]
        columns: u32,
        /// Height in grid rows
        #[arg(value_name = "ROWS")]
        rows: u32,
        #[command(flatten)]
        target: Target,
    },

    /// Restore the default layout
    Reset {
        /// Storage key (default: [layout] storage_key)
        #[arg(long)]
        key: Option<String>,
    },

    /// List the breakpoint table
    Breakpoints,
}

/// Which stored layout and breakpoint a command works on.
#[derive(Args, Debug, Clone, Default, PartialEq)]
struct Target {
    /// Viewport width in pixels (default: [viewport] default_width)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,
    /// Storage key (default: [layout] storage_key)
    #[arg(long)]
    key: Option<String>,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { action } => {
            logging::init(LogLevel::default());
            run_config_command(action, cli.config.as_deref())
        }
        Commands::Layout(command) => ConfigLoader::load(cli.config.as_deref())
            .map_err(Error::from)
            .and_then(|config| {
                logging::init(config.logging.log_level);
                run_layout_command(command, &config, cli.store_dir.as_deref())
            }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_layout_command(
    command: LayoutCommand,
    config: &Config,
    store_dir: Option<&Path>,
) -> Result<(), Error> {
    match command {
        LayoutCommand::Show { target, json } => {
            let dashboard = open_dashboard(config, store_dir, &target)?;
            if json {
                let set = LayoutSet::new(dashboard.storage_key(), dashboard.layout().clone());
                println!("{}", set.to_json()?);
            } else {
                print_layout(&dashboard, &GridMetrics::from(&config.grid));
            }
        }
        LayoutCommand::Move {
            panel,
            column,
            row,
            target,
        } => {
            let mut dashboard = open_dashboard(config, store_dir, &target)?;
            dashboard.unlock();
            let result = dashboard.move_panel(&panel, column, row);
            dashboard.lock();
            result?;
            if let Some(pos) = dashboard.position(&panel) {
                println!(
                    "Moved {} to column {}, row {} at {}",
                    panel,
                    pos.column,
                    pos.row,
                    dashboard.breakpoint().name
                );
            }
        }
        LayoutCommand::Resize {
            panel,
            columns,
            rows,
            target,
        } => {
            let mut dashboard = open_dashboard(config, store_dir, &target)?;
            dashboard.unlock();
            let result = dashboard.resize_panel(&panel, columns, rows);
            dashboard.lock();
            result?;
            if let Some(pos) = dashboard.position(&panel) {
                println!(
                    "Resized {} to {}x{} at {}",
                    panel,
                    pos.width,
                    pos.height,
                    dashboard.breakpoint().name
                );
            }
        }
        LayoutCommand::Reset { key } => {
            let target = Target { width: None, key };
            let mut dashboard = open_dashboard(config, store_dir, &target)?;
            dashboard.reset()?;
            println!("Reset layout '{}' to default", dashboard.storage_key());
        }
        LayoutCommand::Breakpoints => {
            let table = config.breakpoint_table()?;
            println!("{:<8} {:>10} {:>8}", "NAME", "MIN WIDTH", "COLUMNS");
            for bp in table.iter() {
                println!("{:<8} {:>10} {:>8}", bp.name, bp.min_width, bp.columns);
            }
        }
    }
    Ok(())
}

/// Opens the mining dashboard over the file store selected by `config`,
/// `store_dir` and `target`.
fn open_dashboard(
    config: &Config,
    store_dir: Option<&Path>,
    target: &Target,
) -> Result<FileDashboard, Error> {
    let breakpoints = config.breakpoint_table()?;
    let dir = store_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.layout.storage_dir());
    let options = DashboardOptions {
        breakpoints,
        storage_key: target
            .key
            .clone()
            .unwrap_or_else(|| config.layout.storage_key.clone()),
        defaults: mining_layout(),
        viewport_width: target.width.unwrap_or(config.viewport.default_width),
        editable: config.layout.editable,
    };
    Ok(Dashboard::open(
        mining_registry()?,
        LayoutStore::new(FileBackend::new(dir)),
        options,
    ))
}

fn print_layout(dashboard: &FileDashboard, metrics: &GridMetrics) {
    let bp = dashboard.breakpoint();
    let width = dashboard.viewport_width();
    let rows = dashboard.layout().height(&bp.name).unwrap_or(0);
    println!("Layout '{}' at {}px: {}", dashboard.storage_key(), width, bp);
    println!(
        "Grid height: {} rows ({}px)",
        rows,
        metrics.container_height(rows)
    );
    println!();
    println!(
        "{:<16} {:<20} {:>6} {:>4} {:>6} {:>6}  PIXELS",
        "PANEL", "TITLE", "COLUMN", "ROW", "WIDTH", "HEIGHT"
    );
    for pos in dashboard.positions() {
        let title = dashboard
            .registry()
            .get(&pos.panel_id)
            .map(|p| *p.content())
            .unwrap_or("");
        let px = metrics.to_pixels(pos, width, bp.columns);
        println!(
            "{:<16} {:<20} {:>6} {:>4} {:>6} {:>6}  {}x{} at ({}, {})",
            pos.panel_id,
            title,
            pos.column,
            pos.row,
            pos.width,
            pos.height,
            px.width,
            px.height,
            px.x,
            px.y
        );
    }
}

fn run_config_command(action: ConfigAction, explicit: Option<&Path>) -> Result<(), Error> {
    match action {
        ConfigAction::Init { force } => {
            let path = match explicit {
                Some(path) => {
                    default::create_default_config_at(path, force)?;
                    path.to_path_buf()
                }
                None => default::create_default_config(force)?,
            };
            println!("Created configuration at {}", path.display());
        }
        ConfigAction::Path => {
            let path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
        }
        ConfigAction::Validate => {
            let config = ConfigLoader::load(explicit)?;
            config.breakpoint_table()?;
            config.viewport.resize_debounce()?;
            println!("Configuration is valid");
            println!("{config:#?}");
        }
    }
    Ok(())
}
