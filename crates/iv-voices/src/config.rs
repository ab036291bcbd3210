//! Session configuration.

use iv_core::RegistryConfig;
use iv_core::config::preset;

use crate::interject::PRESSURE_BASELINE;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible checks and voice trials.
    pub seed: u64,
    /// Initial psychological pressure (lower = more pressure).
    pub pressure: u32,
    /// The skill catalog to build the registry from.
    pub catalog: RegistryConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pressure: PRESSURE_BASELINE,
            catalog: preset::detective(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initial pressure, clamped to `[0, PRESSURE_BASELINE]`.
    pub fn with_pressure(mut self, pressure: u32) -> Self {
        self.pressure = pressure.min(PRESSURE_BASELINE);
        self
    }

    /// Use a custom skill catalog.
    pub fn with_catalog(mut self, catalog: RegistryConfig) -> Self {
        self.catalog = catalog;
        self
    }
}
