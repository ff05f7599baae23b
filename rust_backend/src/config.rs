//! Converter configuration file support.
//!
//! Characteristic scales can be kept next to a project instead of being
//! hard-coded. TOML is the primary format; JSON files are accepted too.
//!
//! ```toml
//! [scales]
//! length = { value = 1.0, unit = "nanometer" }
//! mass = { value = 14.02, unit = "gram/mole" }
//! energy = { value = 2.48, unit = "kilojoule/mole" }
//! ```
//!
//! Any scale left out falls back to the polyethylene defaults shown above.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::converter::UnitConverter;
use crate::error::{ConverterResult, UnitConverterError};

/// A single characteristic scale: magnitude plus unit expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    pub value: f64,
    pub unit: String,
}

impl ScaleSpec {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// The three base scales of a reduced-unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicScales {
    #[serde(default = "default_length")]
    pub length: ScaleSpec,
    #[serde(default = "default_mass")]
    pub mass: ScaleSpec,
    #[serde(default = "default_energy")]
    pub energy: ScaleSpec,
}

fn default_length() -> ScaleSpec {
    ScaleSpec::new(1.0, "nanometer")
}

fn default_mass() -> ScaleSpec {
    ScaleSpec::new(14.02, "gram/mole")
}

fn default_energy() -> ScaleSpec {
    ScaleSpec::new(2.48, "kilojoule/mole")
}

impl Default for CharacteristicScales {
    fn default() -> Self {
        Self {
            length: default_length(),
            mass: default_mass(),
            energy: default_energy(),
        }
    }
}

/// Converter configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub scales: CharacteristicScales,
}

impl ConverterConfig {
    /// Load converter configuration from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    ///
    /// # Returns
    /// * `Ok(ConverterConfig)` if successful
    /// * `Err(UnitConverterError::ConfigurationError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConverterResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UnitConverterError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!("Loaded converter config from {}", path.display());
        Ok(config)
    }

    /// Parse a TOML document. Errors name the offending key, e.g. `scales.mass.value`.
    pub fn from_toml_str(content: &str) -> ConverterResult<Self> {
        let de = toml::Deserializer::new(content);
        serde_path_to_error::deserialize(de).map_err(|e| {
            UnitConverterError::ConfigurationError(format!("Failed to parse config: {}", e))
        })
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> ConverterResult<Self> {
        let mut de = serde_json::Deserializer::from_str(content);
        serde_path_to_error::deserialize(&mut de).map_err(|e| {
            UnitConverterError::ConfigurationError(format!("Failed to parse config: {}", e))
        })
    }

    /// Load converter configuration from the default location.
    ///
    /// Searches for `prism_units.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// A file that exists but fails to parse is skipped with a warning.
    pub fn from_default_location() -> ConverterResult<Self> {
        let search_paths = [
            PathBuf::from("prism_units.toml"),
            PathBuf::from("rust_backend/prism_units.toml"),
            PathBuf::from("../prism_units.toml"),
        ];

        for path in search_paths.iter().filter(|p| p.exists()) {
            match Self::from_file(path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Err(UnitConverterError::ConfigurationError(
            "No prism_units.toml found in standard locations".to_string(),
        ))
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> ConverterResult<String> {
        toml::to_string(self).map_err(|e| {
            UnitConverterError::ConfigurationError(format!("Failed to serialize config: {}", e))
        })
    }

    /// Build the converter described by this configuration.
    pub fn build(&self) -> ConverterResult<UnitConverter> {
        UnitConverter::from_scales(&self.scales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ConverterConfig::from_toml_str(
            r#"
            [scales]
            length = { value = 0.5, unit = "nm" }
            mass = { value = 28.05, unit = "g/mol" }
            energy = { value = 1.0, unit = "kcal/mol" }
            "#,
        )
        .unwrap();
        assert_eq!(config.scales.length, ScaleSpec::new(0.5, "nm"));
        assert_eq!(config.scales.energy.unit, "kcal/mol");
    }

    #[test]
    fn test_missing_scales_use_defaults() {
        let config = ConverterConfig::from_toml_str("[scales]\nenergy = { value = 3.0, unit = \"kJ/mol\" }\n").unwrap();
        assert_eq!(config.scales.length, default_length());
        assert_eq!(config.scales.mass, default_mass());
        assert_eq!(config.scales.energy.value, 3.0);

        let empty = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(empty, ConverterConfig::default());
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let err = ConverterConfig::from_toml_str(
            "[scales]\nmass = { value = \"heavy\", unit = \"g/mol\" }\n",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error:"), "{msg}");
        assert!(msg.contains("scales.mass.value"), "{msg}");
    }

    #[test]
    fn test_json_config() {
        let config = ConverterConfig::from_json_str(
            r#"{"scales": {"length": {"value": 2.0, "unit": "angstrom"}}}"#,
        )
        .unwrap();
        assert_eq!(config.scales.length, ScaleSpec::new(2.0, "angstrom"));
        assert_eq!(config.scales.mass, default_mass());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConverterConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ConverterConfig::from_toml_str(&text).unwrap(), config);
    }
}
