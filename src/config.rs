use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::catalog::{Catalog, Edition};
use crate::components::stage_ticker::Pacing;
use crate::error::{ExplorerError, Result};

/// Environment prefix for every explorer setting
pub const ENV_PREFIX: &str = "EXPLORER_";

/// Optional settings read from `EXPLORER_*` variables
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub edition: Edition,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Overrides of the edition's pacing
    #[serde(default)]
    pub step_delay_ms: Option<u64>,
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
    #[serde(default)]
    pub linger_ms: Option<u64>,
}

impl ExplorerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    /// Read the configuration from explicit key/value pairs (keys carry the prefix)
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(pairs)?)
    }

    /// Pacing for a catalog of `edition`, with any configured overrides applied
    pub fn pacing(&self, edition: Edition) -> Pacing {
        let defaults = Pacing::for_edition(edition);
        Pacing {
            step_delay: self
                .step_delay_ms
                .map_or(defaults.step_delay, Duration::from_millis),
            settle_delay: self
                .settle_delay_ms
                .map_or(defaults.settle_delay, Duration::from_millis),
            linger: self.linger_ms.map_or(defaults.linger, Duration::from_millis),
        }
    }

    /// The catalog file if one is configured, otherwise the built-in edition
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Catalog::load_from_file(path)?
            }
            None => Catalog::builtin(self.edition),
        };

        if let Some(platform) = &self.platform {
            if catalog.platform(platform).is_none() {
                return Err(ExplorerError::UnknownPlatform(platform.clone()));
            }
        }

        Ok(catalog)
    }

    /// Platform the session starts on
    pub fn initial_platform<'a>(&'a self, catalog: &'a Catalog) -> &'a str {
        self.platform
            .as_deref()
            .filter(|id| catalog.platform(id).is_some())
            .unwrap_or(&catalog.default_platform)
    }
}
