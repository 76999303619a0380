pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::PairingConfig;
#[cfg(feature = "cli")]
use crate::domain::model::Pairing;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "living-bridge")]
#[command(about = "Bridge pattern demo: living things bound to breathing mechanisms")]
pub struct CliConfig {
    /// TOML file listing [[pairings]]; the built-in pairings are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Show the pairings without making anything breathe
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Pairings from the config file, or the defaults when none is given.
    pub fn pairings(&self) -> Result<Vec<Pairing>> {
        let config = match &self.config {
            Some(path) => PairingConfig::from_file(path)?,
            None => PairingConfig::default(),
        };
        config.validate()?;
        Ok(config.pairings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_uses_defaults() {
        let config = CliConfig::parse_from(["living-bridge"]);

        assert!(config.validate().is_ok());
        assert_eq!(config.pairings().unwrap(), Pairing::defaults());
    }

    #[test]
    fn test_parse_flags() {
        let config =
            CliConfig::parse_from(["living-bridge", "--config", "zoo.toml", "-v", "--dry-run"]);

        assert_eq!(config.config.as_deref(), Some("zoo.toml"));
        assert!(config.verbose);
        assert!(config.dry_run);
    }

    #[test]
    fn test_empty_config_path_rejected() {
        let config = CliConfig {
            config: Some(String::new()),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let config = CliConfig {
            config: Some("/nonexistent/living-bridge/pairings.toml".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            config.pairings(),
            Err(crate::utils::error::BridgeError::IoError(_))
        ));
    }
}
