//! Biome classification from row temperatures and water distance.
//!
//! Each land cell gets a temperature band (from its row's temperature) and a
//! wetness band (from its distance to water). Cells close to water and near its
//! level become beach regardless of either band.

mod config;
mod temperature;

pub use config::BiomeConfig;
pub use temperature::{
    celsius_to_fahrenheit, fahrenheit_to_kelvin, kelvin_to_fahrenheit, TemperatureProfile,
    KELVIN_OFFSET,
};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::grid::{Grid, GridError, IntGrid};
use crate::water::{
    build_looped_water_distance_field, build_water_distance_field, WaterDistance,
    WaterDistanceGrid,
};

/// Largest climb to water a beach can have.
pub const MAX_BEACH_CLIMB: i32 = 3;
/// Largest water distance magnitude a beach can have.
pub const MAX_BEACH_DISTANCE: i32 = 6;

/// Errors that can occur during biome classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BiomeError {
    #[error("Expected one temperature per row ({expected}), got {actual}")]
    TemperatureRows { expected: usize, actual: usize },
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Temperature band. `bits()` occupies the low nibble of a biome code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeTemperature {
    Barren,
    Hot,
    Temperate,
    Cold,
}

impl BiomeTemperature {
    pub const fn bits(self) -> u16 {
        match self {
            BiomeTemperature::Barren => 0x0,
            BiomeTemperature::Hot => 0x1,
            BiomeTemperature::Temperate => 0x2,
            BiomeTemperature::Cold => 0x3,
        }
    }

    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0x0 => Some(BiomeTemperature::Barren),
            0x1 => Some(BiomeTemperature::Hot),
            0x2 => Some(BiomeTemperature::Temperate),
            0x3 => Some(BiomeTemperature::Cold),
            _ => None,
        }
    }
}

/// Wetness band. `bits()` occupies the second nibble of a biome code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeWetness {
    Barren,
    Wet,
    Dry,
}

impl BiomeWetness {
    pub const fn bits(self) -> u16 {
        match self {
            BiomeWetness::Barren => 0x00,
            BiomeWetness::Wet => 0x10,
            BiomeWetness::Dry => 0x20,
        }
    }

    fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0x00 => Some(BiomeWetness::Barren),
            0x10 => Some(BiomeWetness::Wet),
            0x20 => Some(BiomeWetness::Dry),
            _ => None,
        }
    }
}

/// Biome of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Climate {
        temperature: BiomeTemperature,
        wetness: BiomeWetness,
    },
    Outback,
    Beach,
}

const OUTBACK_CODE: u16 = 0x200;
const BEACH_CODE: u16 = 0x300;

impl Biome {
    pub const BARREN: Biome = Biome::climate(BiomeTemperature::Barren, BiomeWetness::Barren);
    pub const TROPICAL: Biome = Biome::climate(BiomeTemperature::Hot, BiomeWetness::Wet);
    pub const DESERT: Biome = Biome::climate(BiomeTemperature::Hot, BiomeWetness::Dry);
    pub const LUSH: Biome = Biome::climate(BiomeTemperature::Temperate, BiomeWetness::Wet);
    pub const SAVANNAH: Biome = Biome::climate(BiomeTemperature::Temperate, BiomeWetness::Dry);
    pub const SNOW: Biome = Biome::climate(BiomeTemperature::Cold, BiomeWetness::Wet);
    pub const TUNDRA: Biome = Biome::climate(BiomeTemperature::Cold, BiomeWetness::Dry);

    pub const fn climate(temperature: BiomeTemperature, wetness: BiomeWetness) -> Self {
        Biome::Climate { temperature, wetness }
    }

    /// Stable integer code: temperature bits OR wetness bits, or a reserved
    /// value for outback and beach.
    pub const fn code(self) -> u16 {
        match self {
            Biome::Climate { temperature, wetness } => temperature.bits() | wetness.bits(),
            Biome::Outback => OUTBACK_CODE,
            Biome::Beach => BEACH_CODE,
        }
    }

    /// Inverse of [`Biome::code`].
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            OUTBACK_CODE => Some(Biome::Outback),
            BEACH_CODE => Some(Biome::Beach),
            _ if code & !0xFF == 0 => {
                let temperature = BiomeTemperature::from_bits(code & 0x0F)?;
                let wetness = BiomeWetness::from_bits(code & 0xF0)?;
                Some(Biome::climate(temperature, wetness))
            }
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        use BiomeTemperature as T;
        use BiomeWetness as W;
        match self {
            Biome::Outback => "Outback",
            Biome::Beach => "Beach",
            Biome::Climate { temperature, wetness } => match (temperature, wetness) {
                (T::Hot, W::Wet) => "Tropical",
                (T::Hot, W::Dry) => "Desert",
                (T::Temperate, W::Wet) => "Lush",
                (T::Temperate, W::Dry) => "Savannah",
                (T::Cold, W::Wet) => "Snow",
                (T::Cold, W::Dry) => "Tundra",
                _ => "Barren",
            },
        }
    }
}

impl Default for Biome {
    fn default() -> Self {
        Biome::BARREN
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type BiomeGrid = Grid<Biome>;

/// Temperature band for a temperature in degrees Fahrenheit.
///
/// Each band includes its upper bound: `[0, 45]` is cold, `(45, 75]` temperate
/// and `(75, 110]` hot. Anything below 0 or above 110 is barren.
pub fn temperature_of(degrees_f: f32) -> BiomeTemperature {
    if degrees_f < 0.0 {
        BiomeTemperature::Barren
    } else if degrees_f <= 45.0 {
        BiomeTemperature::Cold
    } else if degrees_f <= 75.0 {
        BiomeTemperature::Temperate
    } else if degrees_f <= 110.0 {
        BiomeTemperature::Hot
    } else {
        BiomeTemperature::Barren
    }
}

pub fn wetness_of(distance: WaterDistance, wet_cutoff: i32) -> BiomeWetness {
    if distance.magnitude() < wet_cutoff {
        BiomeWetness::Wet
    } else {
        BiomeWetness::Dry
    }
}

/// Water cells themselves count as beach.
pub fn is_beach(distance: WaterDistance) -> bool {
    distance.z <= MAX_BEACH_CLIMB && distance.magnitude() <= MAX_BEACH_DISTANCE
}

pub fn classify(degrees_f: f32, distance: WaterDistance, wet_cutoff: i32) -> Biome {
    if is_beach(distance) {
        return Biome::Beach;
    }
    Biome::climate(temperature_of(degrees_f), wetness_of(distance, wet_cutoff))
}

/// Classifies every cell of `field`. `temperatures_f[row]` applies to the whole row.
#[instrument(
    skip_all,
    fields(width = field.width(), height = field.height(), wet_cutoff = wet_cutoff)
)]
pub fn build_biomes(
    field: &WaterDistanceGrid,
    temperatures_f: &[f32],
    wet_cutoff: i32,
) -> Result<BiomeGrid, BiomeError> {
    if temperatures_f.len() != field.height() {
        return Err(BiomeError::TemperatureRows {
            expected: field.height(),
            actual: temperatures_f.len(),
        });
    }

    let biomes = Grid::from_fn(field.width(), field.height(), |row, col| {
        classify(temperatures_f[row], *field.get(row, col), wet_cutoff)
    });
    debug!(
        beaches = biomes.iter().filter(|b| **b == Biome::Beach).count(),
        "biome classification complete"
    );
    Ok(biomes)
}

/// Measures water distance from height maps, then classifies it.
pub fn build_biomes_from_heights(
    land: &IntGrid,
    water: &IntGrid,
    temperatures: &TemperatureProfile,
    config: &BiomeConfig,
) -> Result<BiomeGrid, BiomeError> {
    if temperatures.len() != land.height() {
        return Err(BiomeError::TemperatureRows {
            expected: land.height(),
            actual: temperatures.len(),
        });
    }

    let field = if config.loop_x {
        build_looped_water_distance_field(land, water)?
    } else {
        build_water_distance_field(land, water)?
    };
    build_biomes(&field, &temperatures.to_fahrenheit(), config.wet_cutoff)
}
