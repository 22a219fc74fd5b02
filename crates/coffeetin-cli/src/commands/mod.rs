//! CLI command implementations.

pub mod config;
pub mod play;
pub mod scenarios;
pub mod trials;
pub mod version;

use anyhow::{Context, Result};
use coffeetin::Scenario;
use coffeetin_config::CoffeetinConfig;

/// Picks the tins to run: command-line tins first, then configured tins,
/// then the classic scenarios.
pub fn resolve_scenarios(tins: &[String], config: &CoffeetinConfig) -> Result<Vec<Scenario>> {
    if !tins.is_empty() {
        return tins
            .iter()
            .map(|beans| Scenario::parse(beans).with_context(|| format!("Invalid tin '{beans}'")))
            .collect();
    }

    if let Some(scenarios) = config.scenarios()? {
        return Ok(scenarios);
    }

    Ok(Scenario::classic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeetin_config::TinDefinition;

    #[test]
    fn command_line_tins_win() {
        let config = CoffeetinConfig {
            tins: vec![TinDefinition {
                name: "configured".to_string(),
                beans: "GG".to_string(),
            }],
            ..Default::default()
        };
        let scenarios = resolve_scenarios(&["BGB".to_string()], &config).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "BGB");
    }

    #[test]
    fn configured_tins_before_classics() {
        let config = CoffeetinConfig {
            tins: vec![TinDefinition {
                name: "configured".to_string(),
                beans: "GG".to_string(),
            }],
            ..Default::default()
        };
        let scenarios = resolve_scenarios(&[], &config).unwrap();
        assert_eq!(scenarios[0].name, "configured");
    }

    #[test]
    fn classics_by_default() {
        let scenarios = resolve_scenarios(&[], &CoffeetinConfig::default()).unwrap();
        assert_eq!(scenarios.len(), 5);
    }

    #[test]
    fn bad_tin_names_the_input() {
        let err = resolve_scenarios(&["BZ".to_string()], &CoffeetinConfig::default()).unwrap_err();
        assert!(err.to_string().contains("BZ"));
    }
}
