//! # talents: Character Point-Cost Calculator
//!
//! Thin host around `talents-core`. It owns every I/O concern (files,
//! configuration, the tracing subscriber); the engine owns none.
//!
//! ## Commands
//! ```text
//! talents cost hero.json [--format json] [--budget 300]
//! talents validate hero.json
//! talents catalog extras
//! talents config [--write]
//! ```

mod config;
mod error;
mod report;
mod sheet;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{OutputFormat, TalentsConfig};
use report::{render_catalog, render_validation, CatalogSection, CostReport};

/// Point-cost calculator for superhero character sheets
#[derive(Parser)]
#[command(name = "talents")]
#[command(about = "Point-cost calculator for superhero character sheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to talents.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a character sheet
    Cost {
        /// Character snapshot (JSON)
        sheet: PathBuf,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Point budget (overrides config)
        #[arg(long)]
        budget: Option<i32>,
    },

    /// Check a character sheet for problems
    Validate {
        /// Character snapshot (JSON)
        sheet: PathBuf,
    },

    /// List rules reference data
    Catalog {
        #[arg(value_enum, default_value_t = CatalogSection::Archetypes)]
        section: CatalogSection,
    },

    /// Show the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The subscriber needs the configured level, so it is installed after the
    // load attempt; a load failure is reported once logging is up.
    let loaded = TalentsConfig::load(cli.config.clone());
    let level = match &loaded {
        Ok(config) => config.logging.level.clone(),
        Err(_) => config::LoggingSettings::default().level,
    };
    init_tracing(&level);

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        TalentsConfig::default()
    });

    match cli.command {
        Command::Cost {
            sheet,
            format,
            budget,
        } => {
            let config = config.with_point_budget(budget)?;
            let character = sheet::load_character(&sheet)?;
            let point_budget = config.sheet.point_budget;
            let report = CostReport::new(&character, point_budget);

            if report.over_budget {
                warn!(
                    total = %report.breakdown.total,
                    point_budget,
                    "Character is over budget"
                );
            }

            match format.unwrap_or(config.output.format) {
                OutputFormat::Text => print!("{}", report.to_text(&config.sheet)),
                OutputFormat::Json => println!("{}", report.to_json()?),
            }
        }
        Command::Validate { sheet } => {
            let character = sheet::load_character(&sheet)?;
            let errors = talents_core::validation::validate_character(&character);
            let name = sheet.display().to_string();
            print!("{}", render_validation(&name, &errors));

            if !errors.is_empty() {
                bail!("{} failed validation", name);
            }
        }
        Command::Catalog { section } => {
            print!("{}", render_catalog(section));
        }
        Command::Config { write } => {
            print!("{}", toml::to_string_pretty(&config)?);
            if write {
                let path = config.save(cli.config)?;
                info!(?path, "Wrote configuration");
            }
        }
    }

    Ok(())
}

/// Installs the log subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},talents_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
