//! Temperature units and per-row temperature profiles.

use serde::{Deserialize, Serialize};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f32 = 273.15;

pub fn kelvin_to_fahrenheit(kelvin: f32) -> f32 {
    (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_kelvin(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// One temperature per grid row, in either unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemperatureProfile {
    Fahrenheit(Vec<f32>),
    Kelvin(Vec<f32>),
}

impl TemperatureProfile {
    /// Number of rows covered.
    pub fn len(&self) -> usize {
        match self {
            TemperatureProfile::Fahrenheit(rows) | TemperatureProfile::Kelvin(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-row temperatures in degrees Fahrenheit.
    pub fn to_fahrenheit(&self) -> Vec<f32> {
        match self {
            TemperatureProfile::Fahrenheit(rows) => rows.clone(),
            TemperatureProfile::Kelvin(rows) => {
                rows.iter().copied().map(kelvin_to_fahrenheit).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_conversions() {
        assert!(close(kelvin_to_fahrenheit(300.0), 80.33));
        assert!(close(fahrenheit_to_kelvin(80.33), 300.0));
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert!(close(kelvin_to_fahrenheit(KELVIN_OFFSET), 32.0));
    }

    #[test]
    fn test_kelvin_profile_normalizes() {
        let profile = TemperatureProfile::Kelvin(vec![273.15, 308.0]);
        let rows = profile.to_fahrenheit();
        assert_eq!(profile.len(), 2);
        assert!(close(rows[0], 32.0));
        assert!(close(rows[1], 94.73));

        let same = TemperatureProfile::Fahrenheit(vec![50.0]);
        assert_eq!(same.to_fahrenheit(), vec![50.0]);
    }
}
