//! Configuration management commands.

use std::path::Path;

use anyhow::{Context, Result};
use coffeetin_config::CoffeetinConfig;

use crate::style::{self, colors::SemanticStyle};

/// Shows the merged configuration.
pub fn show(config: &CoffeetinConfig, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(config)?),
        "toml" => println!("{}", toml::to_string_pretty(config)?),
        "text" => print_text(config),
        other => anyhow::bail!("Unknown format '{other}' (expected text, json or toml)"),
    }
    Ok(())
}

fn print_text(config: &CoffeetinConfig) {
    println!("{}", "Coffeetin Configuration".header());
    style::print_spacer();

    println!("Game:");
    style::print_labeled(
        "Seed",
        &config
            .game
            .seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
    );
    style::print_spacer();

    println!("Trials:");
    style::print_labeled("Seed", &config.trials.seed.to_string());
    style::print_labeled("Iterations", &config.trials.iterations.to_string());
    style::print_spacer();

    println!("Output:");
    style::print_labeled("Color", &config.output.color.to_string());
    style::print_labeled("Format", &format!("{:?}", config.output.format).to_lowercase());
    style::print_spacer();

    println!("Tins:");
    if config.tins.is_empty() {
        style::print_labeled("(none)", "classic scenarios are used");
    }
    for tin in &config.tins {
        style::print_labeled(&tin.name, &tin.beans);
    }
}

/// Parses and validates a single config file.
pub fn check(path: &Path) -> Result<()> {
    let config = CoffeetinConfig::from_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("{} is not valid", path.display()))?;

    style::print_success(&format!("{} is valid", path.display().to_string().code()));
    Ok(())
}
