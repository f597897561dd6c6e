use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use option_enum::builders::reporter::{ConsoleReporter, StatusReporter};
use option_enum::builders::validator::{ConfigValidator, StandardValidator};
use option_enum::core::config::{ConfigManager, ConfigProvider};
use option_enum::{MultiSelectEnum, SingleSelectEnum, Vocabulary};

/// Installs the stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise the filter comes from
/// `OPTION_ENUM_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if let Ok(value) = std::env::var("OPTION_ENUM_LOG") {
        EnvFilter::builder().parse_lossy(value)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Splits an `OLD=NEW` deprecation argument.
pub fn parse_deprecation(text: &str) -> Result<(String, String)> {
    match text.split_once('=') {
        Some((old, new)) if !old.trim().is_empty() && !new.trim().is_empty() => {
            Ok((old.trim().to_string(), new.trim().to_string()))
        }
        _ => bail!("Deprecation must be in format 'old=new', got '{text}'"),
    }
}

pub fn check_value(
    declaration: &str,
    value: &str,
    multi: bool,
    deprecations: &[(String, String)],
) -> Result<()> {
    let vocabulary = Vocabulary::shared(declaration)?;
    for (old, new) in deprecations {
        vocabulary.deprecate(old, new)?;
    }

    if multi {
        let choices = MultiSelectEnum::new(vocabulary, Some(value))?;
        let names: Vec<&str> = choices.iter().collect();
        println!("✓ {} (ids {:?})", names.join(" "), choices.ids());
    } else {
        let choice = SingleSelectEnum::new(vocabulary, Some(value))?;
        // A successful assignment always leaves a selection.
        let id = choice.id().context("Value did not select an option")?;
        println!("✓ {choice} (id {id})");
    }
    Ok(())
}

pub fn validate_file(path: &Path) -> Result<()> {
    let config = ConfigManager::new(path).load_config()?;
    let validator = StandardValidator::new()?;
    let issues = validator.validate_config(&config)?;

    if issues.is_empty() {
        println!("✓ Option file is valid.");
        Ok(())
    } else {
        println!("⚠️  Found issues in option file:");
        for issue in issues {
            println!("  - {issue}");
        }
        bail!("Option file validation failed.");
    }
}

pub fn show_file(path: &Path) -> Result<()> {
    let config = ConfigManager::new(path).load_config()?;
    let options = config.bind()?;
    ConsoleReporter::new().generate_status_report(&options)
}

pub fn initialize_file(path: &Path) -> Result<()> {
    let config_manager = ConfigManager::new(path);
    if config_manager.initialize()? {
        println!("✓ Created option file {}", path.display());
    } else {
        println!("Option file {} already exists", path.display());
    }
    Ok(())
}
