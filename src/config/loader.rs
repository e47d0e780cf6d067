//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, LimitConfig, LimitsConfigFile, TaxRates};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query limits and fiscal-year tax rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/sosfu/
/// ├── engine.yaml     # Deployment metadata
/// ├── limits.yaml     # Headcount/meal/deadline limits
/// └── tax/
///     └── 2025.yaml   # Tax rates effective from this fiscal year
/// ```
///
/// # Example
///
/// ```no_run
/// use suprimento_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sosfu").unwrap();
/// let rates = loader.tax_rates(2025).unwrap();
/// println!("INSS rate: {}", rates.inss_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sosfu")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;

        let limits_file = Self::load_yaml::<LimitsConfigFile>(&path.join("limits.yaml"))?;

        let tax_rates = Self::load_tax_rates(&path.join("tax"))?;

        Ok(Self {
            config: EngineConfig::new(metadata, limits_file.limits, tax_rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all fiscal-year tax-rate files from the tax directory.
    fn load_tax_rates(tax_dir: &Path) -> EngineResult<Vec<TaxRates>> {
        let tax_dir_str = tax_dir.display().to_string();

        if !tax_dir.exists() {
            return Err(EngineError::ConfigNotFound { path: tax_dir_str });
        }

        let entries = fs::read_dir(tax_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tax_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tax_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tables.push(Self::load_yaml::<TaxRates>(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax rate files found)", tax_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the limit configuration.
    pub fn limits(&self) -> &LimitConfig {
        self.config.limits()
    }

    /// Returns the tax rates in force for the given fiscal year.
    ///
    /// # Errors
    ///
    /// Returns `TaxRatesNotFound` when the year predates every configured
    /// rate table.
    pub fn tax_rates(&self, fiscal_year: i32) -> EngineResult<&TaxRates> {
        self.config
            .tax_rates_for(fiscal_year)
            .ok_or(EngineError::TaxRatesNotFound { fiscal_year })
    }
}
