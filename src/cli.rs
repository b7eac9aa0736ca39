use crate::config::{CONFIG_FILE_NAME, Config};
use crate::languages::{LanguageReport, load_records};
use crate::numbers;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Command-line interface for the visual-nuts exercises
#[derive(Parser, Debug)]
#[command(
    name = "visual-nuts",
    version,
    about = "Print Visual Nuts numbers and country language statistics."
)]
pub struct Cli {
    /// Path to a configuration file (defaults to ./visual-nuts.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print a range of numbers, replacing multiples of 3 and 5
    Numbers {
        /// First number to print
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,

        /// Last number to print (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,
    },

    /// Print statistics about official languages per country
    Languages {
        /// JSON file with an array of {country, languages} records
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Comma separated country codes whose languages are collected
        #[arg(long, value_delimiter = ',')]
        countries: Option<Vec<String>>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a template configuration file
    Init {
        /// Where to write the file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Run the selected command, writing its output to stdout
    pub fn run(&self, search_dir: &Path) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if let Commands::Init { output, force } = &self.command {
            return Self::handle_init_command(&search_dir.join(output), *force, &mut out);
        }

        let config = self.resolve_config(search_dir, |key| std::env::var(key).ok())?;
        self.execute(&config, &mut out)
    }

    /// Layer defaults, config file, environment and flags, in that order
    pub fn resolve_config<F>(&self, search_dir: &Path, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::load(self.config.as_deref(), search_dir)?;
        config.apply_env_with(lookup)?;

        match &self.command {
            Commands::Numbers { start, end } => {
                if let Some(start) = start {
                    config.numbers.start = *start;
                }
                if let Some(end) = end {
                    config.numbers.end = *end;
                }
            }
            Commands::Languages {
                data, countries, ..
            } => {
                if let Some(data) = data {
                    config.languages.data_path = data.clone();
                }
                if let Some(countries) = countries {
                    config.languages.listed_countries = countries.clone();
                }
            }
            Commands::Init { .. } => {}
        }

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Run the selected command against an already resolved configuration
    pub fn execute<W: Write>(&self, config: &Config, out: &mut W) -> Result<()> {
        match &self.command {
            Commands::Numbers { .. } => {
                let range = config.numbers.range();
                info!(start = range.start, end = range.end, "Printing numbers");
                numbers::run(&range, out).context("Failed to write numbers")?;
            }
            Commands::Languages { format, .. } => {
                let records = load_records(&config.languages.data_path)?;
                let report = LanguageReport::build(&records, &config.languages.listed_countries);
                match format {
                    OutputFormat::Text => report.write_text(out)?,
                    OutputFormat::Json => report.write_json(out)?,
                }
            }
            Commands::Init { .. } => {
                anyhow::bail!("init writes a template and does not run against a configuration");
            }
        }

        Ok(())
    }

    /// Write the template configuration to `output`
    pub fn handle_init_command<W: Write>(output: &Path, force: bool, out: &mut W) -> Result<()> {
        if output.exists() && !force {
            return Err(anyhow::anyhow!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                output.display()
            ));
        }

        std::fs::write(output, Config::template())
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        writeln!(out, "Created configuration file: {}", output.display())?;
        Ok(())
    }
}

/// Parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}
