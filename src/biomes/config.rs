//! Biome classification configuration.

use serde::{Deserialize, Serialize};

/// Configuration for classifying biomes from height maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeConfig {
    /// Water distance magnitude below which a cell is wet.
    pub wet_cutoff: i32,
    /// Treat the map as wrapping east/west when measuring distance to water.
    pub loop_x: bool,
}

impl Default for BiomeConfig {
    fn default() -> Self {
        Self {
            wet_cutoff: 64,
            loop_x: true,
        }
    }
}

impl BiomeConfig {
    /// Preset for maps with hard east and west edges.
    pub fn bounded() -> Self {
        Self {
            loop_x: false,
            ..Default::default()
        }
    }

    pub fn with_wet_cutoff(mut self, wet_cutoff: i32) -> Self {
        self.wet_cutoff = wet_cutoff;
        self
    }
}
