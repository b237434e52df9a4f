use crate::constants::{
    DEFAULT_PARTICLE_COUNT, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_PARTICLE_COUNT,
};
use crate::error::{FieldError, Result};
use serde::Deserialize;

/// Start-up options for an [`crate::Animator`].
///
/// Deserialises from the camelCase object the page passes to `start`.
/// `particle_count` is signed because it arrives as a JS number; negative
/// and oversized values are rejected rather than clamped.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub particle_count: i64,
    /// Fixed seed for reproducible trajectories; entropy when absent.
    pub seed: Option<u64>,
    pub width: f32,
    pub height: f32,
    pub bursts: bool,
    pub quantum: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            bursts: true,
            quantum: false,
        }
    }
}

impl FieldConfig {
    /// Check the options and return the particle count as a `usize`.
    pub fn validate(&self) -> Result<usize> {
        if !(0..=MAX_PARTICLE_COUNT).contains(&self.particle_count) {
            return Err(FieldError::InvalidConfig(format!(
                "particleCount must be in 0..={MAX_PARTICLE_COUNT}, got {}",
                self.particle_count
            )));
        }
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v < 0.0 {
                return Err(FieldError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number, got {v}"
                )));
            }
        }
        usize::try_from(self.particle_count)
            .map_err(|e| FieldError::InvalidConfig(format!("particleCount: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(8));
    }

    #[test]
    fn negative_count_is_rejected() {
        let cfg = FieldConfig {
            particle_count: -1,
            ..FieldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FieldError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_count_is_rejected() {
        let cfg = FieldConfig {
            particle_count: 1_000_000_000,
            ..FieldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FieldError::InvalidConfig(_))));
        let cfg = FieldConfig {
            particle_count: MAX_PARTICLE_COUNT,
            ..FieldConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(MAX_PARTICLE_COUNT as usize));
    }

    #[test]
    fn zero_count_is_allowed() {
        let cfg = FieldConfig {
            particle_count: 0,
            ..FieldConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(0));
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        let cfg = FieldConfig {
            width: f32::NAN,
            ..FieldConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = FieldConfig {
            height: -3.0,
            ..FieldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
