//! Trimmer configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Duration of the clamp-pass correction animation.
pub const DEFAULT_CLAMP_ANIMATION_MS: u32 = 300;

/// Configuration errors reported by [`TrimConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Zoom scales must be positive and finite (min {min}, max {max})")]
    NonPositiveScale { min: f64, max: f64 },

    #[error("Minimum zoom scale {min} exceeds maximum {max}")]
    InvertedScaleRange { min: f64, max: f64 },

    #[error("Crop width fraction must be in (0, 1], got {0}")]
    InvalidCropFraction(f64),

    #[error("Overlay alpha must be in [0, 1], got {0}")]
    InvalidOverlayAlpha(f32),
}

/// User-tunable settings for a [`crate::PhotoTrimmer`].
///
/// Every field may be changed at any time; new zoom limits take effect at the
/// next pinch clamp pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrimConfig {
    /// Lower zoom bound. Pinching below it snaps back to scale 1.0.
    pub minimum_zoom_scale: f64,
    /// Upper zoom bound.
    pub maximum_zoom_scale: f64,
    /// Draw rule-of-thirds guide lines over the crop window.
    pub show_guide_lines: bool,
    /// Crop square side as a fraction of the container width.
    pub crop_width_fraction: f64,
    /// Dimming alpha of the overlay outside the circular window.
    pub overlay_alpha: f32,
    /// Duration hint for clamp corrections, in milliseconds.
    pub clamp_animation_ms: u32,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            minimum_zoom_scale: 1.0,
            maximum_zoom_scale: 3.0,
            show_guide_lines: true,
            crop_width_fraction: 0.8,
            overlay_alpha: 0.5,
            clamp_animation_ms: DEFAULT_CLAMP_ANIMATION_MS,
        }
    }
}

impl TrimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the settings for values the reconciler cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_zoom_scales()?;
        let (min, max) = (self.minimum_zoom_scale, self.maximum_zoom_scale);
        if min > max {
            return Err(ConfigError::InvertedScaleRange { min, max });
        }
        if !(self.crop_width_fraction > 0.0 && self.crop_width_fraction <= 1.0) {
            return Err(ConfigError::InvalidCropFraction(self.crop_width_fraction));
        }
        if !(0.0..=1.0).contains(&self.overlay_alpha) {
            return Err(ConfigError::InvalidOverlayAlpha(self.overlay_alpha));
        }
        Ok(())
    }

    /// Check that both zoom limits are positive and finite, without
    /// comparing them. Used when one limit changes at a time.
    pub fn validate_zoom_scales(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.minimum_zoom_scale, self.maximum_zoom_scale);
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(min) || !positive(max) {
            return Err(ConfigError::NonPositiveScale { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrimConfig::new();
        assert_eq!(config.minimum_zoom_scale, 1.0);
        assert_eq!(config.maximum_zoom_scale, 3.0);
        assert!(config.show_guide_lines);
        assert_eq!(config.crop_width_fraction, 0.8);
        assert_eq!(config.clamp_animation_ms, 300);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_inverted_range() {
        let mut config = TrimConfig::new();
        config.minimum_zoom_scale = 4.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedScaleRange { min: 4.0, max: 3.0 })
        );
    }

    #[test]
    fn test_zoom_scales_checked_without_order() {
        let mut config = TrimConfig::new();
        config.minimum_zoom_scale = 4.0;
        assert_eq!(config.validate_zoom_scales(), Ok(()));
        config.minimum_zoom_scale = f64::NAN;
        assert!(config.validate_zoom_scales().is_err());
    }

    #[test]
    fn test_non_positive_scale() {
        let mut config = TrimConfig::new();
        config.minimum_zoom_scale = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveScale { .. })
        ));

        config.minimum_zoom_scale = 1.0;
        config.maximum_zoom_scale = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveScale { .. })
        ));
    }

    #[test]
    fn test_crop_fraction_bounds() {
        let mut config = TrimConfig::new();
        config.crop_width_fraction = 1.0;
        assert_eq!(config.validate(), Ok(()));
        config.crop_width_fraction = 1.2;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCropFraction(1.2))
        );
        config.crop_width_fraction = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlay_alpha_bounds() {
        let mut config = TrimConfig::new();
        config.overlay_alpha = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOverlayAlpha(_))
        ));
    }
}
