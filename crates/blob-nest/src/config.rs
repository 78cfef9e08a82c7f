//! Configuration for polygonal approximation.

use blob_core::ConfigError;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tuning for turning chain-coded outlines into polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestConfig {
    /// Maximum distance (in pixels) a dropped chain point may lie from the
    /// simplified polygon edge.
    pub tolerance: f32,

    /// Polygons left with fewer vertices than this are degenerate and dropped.
    pub min_vertices: usize,

    /// Polygons whose absolute area is at or below this are dropped.
    pub min_area: f32,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            min_vertices: 3,
            min_area: 0.0,
        }
    }
}

impl NestConfig {
    /// Check that every field is usable.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.min_vertices < 3 {
            return Err(ConfigError::InvalidMinVertices {
                value: self.min_vertices,
            });
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(ConfigError::InvalidMinArea {
                value: self.min_area,
            });
        }
        Ok(())
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NestConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
