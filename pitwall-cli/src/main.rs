//! pitwall CLI
//!
//! Command-line browser for the cars and tracks of an Assetto Corsa install.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{Level, LevelFilter};

use pitwall_lib::ContentKind;
use pitwall_lib::settings::{self, Settings};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Settings and global flags shared by every command.
pub(crate) struct Context {
    pub settings: Settings,
    pub install: Option<PathBuf>,
    pub quiet: bool,
}

impl Context {
    fn new(cli_install: Option<PathBuf>, quiet: bool) -> Self {
        let settings = settings::load_settings();
        let install = settings::resolve_install_path(cli_install, &settings);
        if let Some(path) = install.as_deref().filter(|p| !settings::is_valid_install_path(p)) {
            log::warn!(
                "{} does not look like an Assetto Corsa folder (expected a name ending in 'assettocorsa')",
                path.display()
            );
        }
        Self {
            settings,
            install,
            quiet,
        }
    }

    /// The folder to scan for `kind`, or a config error explaining how to set one.
    pub(crate) fn content_dir(
        &self,
        kind: ContentKind,
        dir: Option<PathBuf>,
    ) -> Result<PathBuf, CliError> {
        settings::content_dir(kind, dir, self.install.as_deref(), &self.settings).ok_or_else(|| {
            CliError::config(format!(
                "No {} folder configured. Pass --dir or --install, or set game.install_path in {}",
                kind.noun(1),
                settings::settings_path().display()
            ))
        })
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context::new(cli.install, cli.quiet);

    match cli.command {
        Commands::Cars {
            dir,
            search,
            year,
            class,
            brand,
            json,
        } => {
            let query = pitwall_lib::CarQuery {
                search,
                year,
                class,
                brand,
            };
            commands::cars::run_cars(&ctx, dir, &query, json)
        }
        Commands::Tracks {
            dir,
            search,
            year,
            country,
            json,
        } => {
            let query = pitwall_lib::TrackQuery {
                search,
                year,
                country,
            };
            commands::tracks::run_tracks(&ctx, dir, &query, json)
        }
        Commands::Parse { file } => commands::parse::run_parse(&file),
        Commands::Badge { brand } => commands::badge::run_badge(&ctx, &brand),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&ctx);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

/// Route `log` output to stdout: plain text for info, a level prefix otherwise.
///
/// `--quiet` keeps warnings and errors, `--verbose` adds debug output, and
/// `RUST_LOG` overrides both.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Debug | Level::Trace => {
                writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
            }
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Display a path relative to `base` when it lies inside it.
pub(crate) fn short_path<'a>(path: &'a Path, base: &Path) -> std::path::Display<'a> {
    path.strip_prefix(base).unwrap_or(path).display()
}
