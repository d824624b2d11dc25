//! Course catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Course catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the YAML course catalog
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Passages returned per search
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_results == 0 {
            return Err(ValidationError::MustBePositive("max_results"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_results: default_max_results(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("docs/catalog.yaml")
}

fn default_max_results() -> usize {
    5
}
