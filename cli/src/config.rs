//! Animation tuning, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// Parameters for the visual rebound animation.
///
/// Any field missing from the file falls back to its default, so a
/// config file may override just one knob.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Speed cap for the layer rotation, in degrees per second.
    pub max_speed: f64,
    /// Ramp rate, in degrees per second squared.
    pub acceleration: f64,
    /// How often the animation is sampled, in frames per second.
    pub frame_rate: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            max_speed: 270.0,
            acceleration: 1080.0,
            frame_rate: 60.0,
        }
    }
}

impl AnimationConfig {
    /// Load the config from `path`, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<AnimationConfig> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path).wrap_err_with(|| {
                    format!("failed to read animation config {}", path.display())
                })?;
                Ok(toml::from_str(&text)?)
            }
            None => Ok(AnimationConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_keep_defaults_for_the_rest() {
        let config: AnimationConfig = toml::from_str("max_speed = 90.0").unwrap();
        assert_eq!(config.max_speed, 90.0);
        assert_eq!(config.acceleration, AnimationConfig::default().acceleration);
        assert_eq!(config.frame_rate, AnimationConfig::default().frame_rate);
    }
}
