/// Service configuration loader - parses ddl.toml
///
/// Keeps the provider endpoint and the default filter codes out of the
/// code, so deployments can point at a mirror or prefer a different
/// reference datum without recompiling. The crate works without a config
/// file: `ServiceConfig::default()` carries the documented defaults.

use serde::Deserialize;
use std::fs;

use crate::filters::FilterCriteria;

/// Default config file location: the current working directory.
pub const CONFIG_PATH: &str = "ddl.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub default_filters: FilterOverrides,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Overrides the public DDL base URL when set.
    pub base_url: Option<String>,
    /// Whether catalog lookups may be served from the provider's cache.
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

fn default_use_cache() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: None,
            use_cache: true,
        }
    }
}

/// Optional per-deployment replacements for the documented filter defaults.
/// A field left out of the file keeps its built-in default; it does not
/// become unconstrained.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FilterOverrides {
    pub quantity_code: Option<String>,
    pub grouping_code: Option<String>,
    pub reference_datum_code: Option<String>,
    pub process_type: Option<String>,
}

impl ServiceConfig {
    /// The effective filter criteria: built-in defaults with any configured
    /// overrides applied.
    pub fn filters(&self) -> FilterCriteria {
        let mut filters = FilterCriteria::default();
        if let Some(q) = &self.default_filters.quantity_code {
            filters.quantity_code = Some(q.clone());
        }
        if let Some(g) = &self.default_filters.grouping_code {
            filters.grouping_code = Some(g.clone());
        }
        if let Some(r) = &self.default_filters.reference_datum_code {
            filters.reference_datum_code = Some(r.clone());
        }
        if let Some(p) = &self.default_filters.process_type {
            filters.process_type = Some(p.clone());
        }
        filters
    }
}

/// Loads `ddl.toml` from the current working directory.
pub fn load_config() -> Result<ServiceConfig, String> {
    load_config_from(CONFIG_PATH)
}

/// Loads configuration from an explicit path.
pub fn load_config_from(path: &str) -> Result<ServiceConfig, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;

    toml::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}
