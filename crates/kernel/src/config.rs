use serde::{Deserialize, Serialize};
use tileworld_pgen::Octave;

use crate::error::WorldGenError;
use crate::tilemap::TileKind;

/// Tunables for island generation.
///
/// `Default` reproduces the stock terrain: five octaves from 0.01 to 0.4 with
/// amplitudes summing to 1.0, exponent 0.8, squared radial falloff, water
/// below 0.5 and grass from 0.6. Missing YAML keys fall back to these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub octaves: Vec<Octave>,
    pub exponent: f64,
    /// Blend heights toward zero with distance from the map centre.
    pub island_falloff: bool,
    pub island_exponent: f64,
    pub water_level: f64,
    /// Height above `water_level` where dirt gives way to grass.
    pub land_offset: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            octaves: vec![
                Octave::new(0.01, 0.6),
                Octave::new(0.05, 0.3),
                Octave::new(0.1, 0.07),
                Octave::new(0.2, 0.02),
                Octave::new(0.4, 0.01),
            ],
            exponent: 0.8,
            island_falloff: true,
            island_exponent: 2.0,
            water_level: 0.5,
            land_offset: 0.1,
        }
    }
}

impl GeneratorConfig {
    /// Parse a YAML document and validate it.
    pub fn from_yaml_str(source: &str) -> Result<Self, WorldGenError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, WorldGenError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn land_level(&self) -> f64 {
        self.water_level + self.land_offset
    }

    /// Reject configurations that would produce NaN heights or an empty
    /// dirt band.
    pub fn validate(&self) -> Result<(), WorldGenError> {
        if self.octaves.is_empty() {
            return Err(invalid("at least one octave is required"));
        }
        for (i, octave) in self.octaves.iter().enumerate() {
            if !octave.frequency.is_finite() || !octave.amplitude.is_finite() {
                return Err(invalid(format!("octave {i} has a non-finite value")));
            }
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(invalid(format!(
                "exponent must be finite and positive, got {}",
                self.exponent
            )));
        }
        if !self.island_exponent.is_finite() || self.island_exponent <= 0.0 {
            return Err(invalid(format!(
                "island_exponent must be finite and positive, got {}",
                self.island_exponent
            )));
        }
        if !self.water_level.is_finite() {
            return Err(invalid("water_level must be finite"));
        }
        if !self.land_offset.is_finite() || self.land_offset <= 0.0 {
            return Err(invalid(format!(
                "land_offset must be finite and positive, got {}",
                self.land_offset
            )));
        }
        Ok(())
    }

    /// Classify a blended height.
    ///
    /// Lower bounds are inclusive, so a height exactly on a threshold takes
    /// the higher tier. NaN heights classify as water.
    pub fn classify(&self, height: f64) -> TileKind {
        if height.is_nan() || height < self.water_level {
            TileKind::Water
        } else if height < self.land_level() {
            TileKind::Dirt
        } else {
            TileKind::Grass
        }
    }
}

fn invalid(msg: impl Into<String>) -> WorldGenError {
    WorldGenError::InvalidConfig(msg.into())
}
