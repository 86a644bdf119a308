use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CliError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub ui: UiSection,
    pub inventory: InventorySection,
    pub gym: GymSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub currency: String,
    pub date_format: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency: "R$".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySection {
    pub low_stock_threshold: i64,
    pub price_band_min: Decimal,
    pub price_band_max: Decimal,
}

impl Default for InventorySection {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            price_band_min: Decimal::new(500, 2),
            price_band_max: Decimal::new(1000, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GymSection {
    pub trainer_age_min: i32,
    pub trainer_age_max: i32,
    pub client_age_min: i32,
    pub client_age_max: i32,
    pub bmi_threshold: f64,
}

impl Default for GymSection {
    fn default() -> Self {
        Self {
            trainer_age_min: 30,
            trainer_age_max: 50,
            client_age_min: 25,
            client_age_max: 40,
            bmi_threshold: 25.0,
        }
    }
}

impl TallyConfig {
    fn validate(&self, path: &Path) -> anyhow::Result<()> {
        let invalid = |message: &str| {
            CliError::invalid_input(format!("Invalid config {}: {}", path.display(), message))
        };
        if self.ui.currency.trim().is_empty() {
            return Err(invalid("ui.currency cannot be empty").into());
        }
        if !is_valid_date_format(&self.ui.date_format) {
            return Err(invalid(&format!(
                "ui.date_format {:?} is not a valid date pattern",
                self.ui.date_format
            ))
            .into());
        }
        if self.inventory.price_band_min > self.inventory.price_band_max {
            return Err(invalid("inventory.price_band_min exceeds price_band_max").into());
        }
        if self.gym.trainer_age_min > self.gym.trainer_age_max
            || self.gym.client_age_min > self.gym.client_age_max
        {
            return Err(invalid("gym age ranges must have min <= max").into());
        }
        Ok(())
    }
}

fn is_valid_date_format(pattern: &str) -> bool {
    !pattern.trim().is_empty()
        && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Resolve the config path: explicit flag/env first, then the XDG default.
pub fn resolve_config_path(explicit: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(value) = explicit {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load configuration.
///
/// An explicitly named file must exist; a missing default file yields the
/// built-in defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<TallyConfig> {
    let path = resolve_config_path(explicit)?;
    if !path.exists() {
        if explicit.is_some_and(|value| !value.trim().is_empty()) {
            return Err(CliError::not_found(
                format!("Config file not found: {}", path.display()),
                "Hint: Run `tally config init` to create it.",
            )
            .into());
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TallyConfig::default());
    }

    let config = read_config(&path)?;
    config.validate(&path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn read_config(path: &Path) -> anyhow::Result<TallyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents).map_err(|e| {
        CliError::invalid_input(format!("Failed to parse config {}: {}", path.display(), e))
            .into()
    })
}

pub fn write_config(path: &Path, config: &TallyConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tally"));
        }
    }
    Ok(home_dir()?.join(".config").join("tally"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.ui.currency, "R$");
        assert_eq!(config.inventory.low_stock_threshold, 10);
        assert_eq!(config.inventory.price_band_min, dec!(5.00));
        assert_eq!(config.inventory.price_band_max, dec!(10.00));
        assert_eq!(config.gym.bmi_threshold, 25.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\ncurrency = \"$\"\n\n[inventory]\nlow_stock_threshold = 3\n",
        )
        .unwrap();

        let config = load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.ui.currency, "$");
        assert_eq!(config.ui.date_format, "%d/%m/%Y");
        assert_eq!(config.inventory.low_stock_threshold, 3);
        assert_eq!(config.inventory.price_band_max, dec!(10.00));
        assert_eq!(config.gym, GymSection::default());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = TallyConfig::default();
        config.gym.bmi_threshold = 27.5;

        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("CliError");
        assert!(matches!(cli_err, CliError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[inventory]\nprice_band_min = 20.0\nprice_band_max = 10.0\n",
        )
        .unwrap();
        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("price_band_min"));
    }

    #[test]
    fn test_malformed_toml_is_invalid_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ncurrency = ").unwrap();
        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_date_format_is_invalid_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndate_format = \"%Q\"\n").unwrap();
        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("ui.date_format"));
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_date_format_patterns() {
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("  "));
    }
}
