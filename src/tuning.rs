//! Data-driven game balance
//!
//! Loaded once at startup and validated before the first frame, so the
//! projection math never sees a degenerate vanishing point.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Balance values that shape the feel of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Forward scroll speed (viewport-height percent per 60 Hz frame)
    pub speed: f32,
    /// Steering speed (viewport-width percent per 60 Hz frame)
    pub speed_x: f32,
    /// Vanishing point height as a fraction of viewport height
    pub perspective_point_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed: 0.8,
            speed_x: 3.5,
            perspective_point_y: 0.75,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.perspective_point_y > 0.0) {
            return Err(ConfigError::VanishingPoint(self.perspective_point_y));
        }
        if !(self.speed > 0.0) {
            return Err(ConfigError::Speed(self.speed));
        }
        if !(self.speed_x > 0.0) {
            return Err(ConfigError::Speed(self.speed_x));
        }
        Ok(())
    }

    /// Parse and validate a tuning file
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_vanishing_point() {
        let tuning = Tuning {
            perspective_point_y: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::VanishingPoint(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let tuning = Tuning {
            speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::Speed(_))));
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{"speed": 1.2}"#).unwrap();
        assert_eq!(tuning.speed, 1.2);
        assert_eq!(tuning.speed_x, Tuning::default().speed_x);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(Tuning::from_json(r#"{"perspective_point_y": -0.5}"#).is_err());
        assert!(Tuning::from_json("not json").is_err());
    }
}
