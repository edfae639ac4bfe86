//! stylebridge CLI - translate StyleCI configuration for a local fixer tool
//!
//! Commands:
//! - show: resolve a `.styleci.yml` and print the rule set and finder spec
//! - validate: check a `.styleci.yml` against the rule catalog
//! - catalog update: regenerate the rule catalog from the upstream source
//! - catalog check: report whether the local catalog is stale

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use output::{print_text, ConsoleSink, JsonOutput, OutputFormat};
use stylebridge::{ConfigBridge, ConfigError, RuleCatalog, Strictness, ToolVersion};
use stylebridge_import::codegen::{catalog_is_current, CatalogGenerator};
use stylebridge_import::extract::extract_tables;
use stylebridge_import::fetch::{fetch_config_source, DEFAULT_CONFIG_URL};

/// Default location of the generated catalog module, relative to the
/// repository root.
const CATALOG_DATA_PATH: &str = "crates/stylebridge/src/catalog/data.rs";

#[derive(Parser)]
#[command(name = "stylebridge")]
#[command(version)]
#[command(about = "Translate StyleCI-style YAML configuration for a local fixer tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a StyleCI configuration and print the rule set
    Show {
        /// Directory containing .styleci.yml
        #[arg(long, value_name = "PATH", default_value = ".")]
        dir: PathBuf,

        /// Directories the finder should search (defaults to --dir)
        #[arg(long = "finder-dir", value_name = "PATH")]
        finder_dirs: Vec<PathBuf>,

        /// Target fixer tool major version: 1 or 2
        #[arg(long, value_name = "VERSION", default_value = "2")]
        tool_version: String,

        /// Output format: text, json
        #[arg(long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Shorthand for --format json
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// Reject unknown finder filter keys instead of warning
        #[arg(long)]
        strict_finder: bool,

        /// File whose contents become the header comment
        #[arg(long, value_name = "FILE")]
        header: Option<PathBuf>,
    },

    /// Validate a StyleCI configuration against the rule catalog
    Validate {
        /// Directory containing .styleci.yml
        #[arg(long, value_name = "PATH", default_value = ".")]
        dir: PathBuf,
    },

    /// Maintain the generated rule catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// Regenerate the catalog from the upstream config source
    Update {
        /// Upstream config source URL
        #[arg(long, value_name = "URL", default_value = DEFAULT_CONFIG_URL)]
        url: String,

        /// Where to write the generated catalog module
        #[arg(long, value_name = "PATH", default_value = CATALOG_DATA_PATH)]
        output: PathBuf,
    },

    /// Check whether the local catalog is up to date
    Check {
        /// Upstream config source URL
        #[arg(long, value_name = "URL", default_value = DEFAULT_CONFIG_URL)]
        url: String,

        /// Path of the generated catalog module
        #[arg(long, value_name = "PATH", default_value = CATALOG_DATA_PATH)]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            dir,
            finder_dirs,
            tool_version,
            format,
            json,
            strict_finder,
            header,
        } => cmd_show(
            dir,
            finder_dirs,
            &tool_version,
            &format,
            json,
            strict_finder,
            header,
        ),
        Commands::Validate { dir } => cmd_validate(&dir),
        Commands::Catalog(CatalogCommands::Update { url, output }) => cmd_catalog_update(&url, &output),
        Commands::Catalog(CatalogCommands::Check { url, path }) => cmd_catalog_check(&url, &path),
    }
}

fn cmd_show(
    dir: PathBuf,
    finder_dirs: Vec<PathBuf>,
    tool_version: &str,
    format: &str,
    json: bool,
    strict_finder: bool,
    header: Option<PathBuf>,
) -> Result<ExitCode> {
    let output_format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::from_str(format).ok_or_else(|| {
            anyhow::anyhow!("Invalid output format '{}'. Valid options: text, json", format)
        })?
    };

    let tool_version = ToolVersion::from_str(tool_version).ok_or_else(|| {
        anyhow::anyhow!("Invalid tool version '{}'. Valid options: 1, 2", tool_version)
    })?;

    let catalog = RuleCatalog::builtin();
    let mut bridge = ConfigBridge::from_dir(&dir)?
        .with_availability(tool_version.default_availability(&catalog))
        .with_sink(Box::new(ConsoleSink))
        .with_strictness(if strict_finder {
            Strictness::Strict
        } else {
            Strictness::Lenient
        });

    if !finder_dirs.is_empty() {
        bridge = bridge.with_finder_dirs(finder_dirs);
    }

    if let Some(path) = header {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read header file {}", path.display()))?;
        bridge = bridge.with_header(text);
    }

    let rules = bridge.rules()?;
    let finder = bridge.finder()?;
    let preset = bridge.config().preset.clone().unwrap_or_default();

    match output_format {
        OutputFormat::Text => print_text(&preset, bridge.linting(), &rules, &finder),
        OutputFormat::Json => {
            let output = JsonOutput::new(&preset, bridge.linting(), &rules, &finder);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(dir: &PathBuf) -> Result<ExitCode> {
    let bridge = match ConfigBridge::from_dir(dir) {
        Ok(bridge) => bridge,
        Err(e @ (ConfigError::Io(_) | ConfigError::Yaml(_))) => return Err(e.into()),
        Err(e) => return validation_failure(e),
    };

    // rules() runs the full validation pipeline, including the finder in
    // whatever strictness the config consumer will use.
    match bridge.rules() {
        Ok(_) => {
            println!("{}", "Configuration is valid.".green());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => validation_failure(e),
    }
}

fn validation_failure(e: ConfigError) -> Result<ExitCode> {
    eprintln!("{}: {}", "Invalid configuration".red(), e);
    Ok(ExitCode::from(2))
}

fn cmd_catalog_update(url: &str, output: &PathBuf) -> Result<ExitCode> {
    println!("Fetching {url}...");
    let source = fetch_config_source(url)?;
    let tables = extract_tables(&source)?;

    for skipped in &tables.skipped {
        eprintln!("{}: skipped unrecognized table {}", "Warning".yellow(), skipped);
    }

    let generated = CatalogGenerator::new().generate(&tables)?;
    fs::write(output, generated)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} presets, {} aliases, {} conflicts -> {}",
        "Updated".green(),
        tables.presets.len(),
        tables.aliases.len(),
        tables.conflicts.len(),
        output.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_catalog_check(url: &str, path: &PathBuf) -> Result<ExitCode> {
    let source = fetch_config_source(url)?;
    let tables = extract_tables(&source)?;
    let generated = CatalogGenerator::new().generate(&tables)?;

    if catalog_is_current(&generated, path)? {
        println!("{}", "Catalog is up to date.".green());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{}",
            "Catalog is out of date. Run `stylebridge catalog update` to fix it.".red()
        );
        Ok(ExitCode::from(1))
    }
}
