//! Animation Settings
//!
//! Tunables for keyframe playback and the manual explosion slider.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use keyview::settings::AnimationSettings;
//!
//! // Defaults: 0.005 phase units per frame, slider range [0, 5]
//! let settings = AnimationSettings::default();
//!
//! // Faster playback, loaded from JSON; missing fields keep their defaults
//! let settings = AnimationSettings::from_json_str(r#"{ "phase_step": 0.01 }"#)?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ViewerError};

/// Playback and explosion configuration for an
/// [`AnimationController`](crate::animation::AnimationController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Phase advance per displayed frame. The full path spans 3 phase units,
    /// so the default plays for 600 frames.
    pub phase_step: f32,
    /// Lower bound of the manual explosion slider.
    pub explosion_min: f32,
    /// Upper bound of the manual explosion slider.
    pub explosion_max: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            phase_step: 0.005,
            explosion_min: 0.0,
            explosion_max: 5.0,
        }
    }
}

impl AnimationSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.phase_step.is_finite() && self.phase_step > 0.0) {
            return Err(ViewerError::InvalidSettings(format!(
                "phase_step must be a positive number, got {}",
                self.phase_step
            )));
        }
        if self.explosion_min.is_nan()
            || self.explosion_max.is_nan()
            || self.explosion_min > self.explosion_max
        {
            return Err(ViewerError::InvalidSettings(format!(
                "explosion range [{}, {}] is empty",
                self.explosion_min, self.explosion_max
            )));
        }
        Ok(())
    }

    /// Clamps a slider value into the configured explosion range.
    #[must_use]
    pub fn clamp_explosion(&self, amount: f32) -> f32 {
        amount.max(self.explosion_min).min(self.explosion_max)
    }
}
