//! Stage configuration: margins, seams, caps and thresholds.
//!
//! The defaults are the fixed contract every renderer of the row agrees on.
//! Hosts that need a different look override individual values:
//!
//! ```
//! use platelayout::StageConfig;
//!
//! let config = StageConfig::default().pad(16).gap(2.0);
//! assert_eq!(config.pad, 16);
//! assert_eq!(config.max_stage_width, 12_000);
//! ```

use core::time::Duration;

use crate::rules::PanelLimits;

/// Border margin around the row, in logical pixels.
pub const PAD: u32 = 24;
/// Seam width trimmed from the drawn width of every panel.
pub const GAP: f64 = 4.0;
/// Widest stage surface handed to the rendering backend.
pub const MAX_STAGE_WIDTH: u32 = 12_000;
/// Row width above which the source image is mirrored into a stripe.
pub const MIRROR_THRESHOLD: f64 = 300.0;
/// Length of add/remove/resize animations, in seconds.
pub const ANIMATION_SECONDS: f64 = 0.5;
/// Line spacing of the placeholder grid.
pub const GRID_STEP: f64 = 6.0;

/// Tunables shared by every stage computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case", default)
)]
pub struct StageConfig {
    /// Margin on every side of the row.
    pub pad: u32,
    /// Seam between neighbouring panels.
    pub gap: f64,
    /// Cap on the stage width. Wider rows are truncated, not rejected.
    pub max_stage_width: u32,
    /// Total row width that triggers mirrored-stripe sampling.
    pub mirror_threshold: f64,
    /// Animation length consumed by the rendering layer.
    pub animation_seconds: f64,
    /// Placeholder grid spacing.
    pub grid_step: f64,
    /// Accepted panel dimensions and counts.
    pub limits: PanelLimits,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            pad: PAD,
            gap: GAP,
            max_stage_width: MAX_STAGE_WIDTH,
            mirror_threshold: MIRROR_THRESHOLD,
            animation_seconds: ANIMATION_SECONDS,
            grid_step: GRID_STEP,
            limits: PanelLimits::default(),
        }
    }
}

impl StageConfig {
    /// Set the border margin.
    pub fn pad(mut self, pad: u32) -> Self {
        self.pad = pad;
        self
    }

    /// Set the seam width.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the stage width cap.
    pub fn max_stage_width(mut self, max: u32) -> Self {
        self.max_stage_width = max;
        self
    }

    /// Set the mirroring threshold.
    pub fn mirror_threshold(mut self, threshold: f64) -> Self {
        self.mirror_threshold = threshold;
        self
    }

    /// Set the animation length in seconds.
    pub fn animation_seconds(mut self, seconds: f64) -> Self {
        self.animation_seconds = seconds;
        self
    }

    /// Set the placeholder grid spacing.
    pub fn grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    /// Set the panel limits.
    pub fn limits(mut self, limits: PanelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Animation length as a [`Duration`]. Negative or non-finite values
    /// collapse to zero; lengths too large for a `Duration` saturate.
    pub fn animation_duration(&self) -> Duration {
        if self.animation_seconds.is_finite() && self.animation_seconds > 0.0 {
            Duration::try_from_secs_f64(self.animation_seconds).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let c = StageConfig::default();
        assert_eq!(c.pad, 24);
        assert_eq!(c.gap, 4.0);
        assert_eq!(c.max_stage_width, 12_000);
        assert_eq!(c.mirror_threshold, 300.0);
        assert_eq!(c.animation_duration(), Duration::from_millis(500));
        assert_eq!(c.grid_step, 6.0);
    }

    #[test]
    fn builder_overrides() {
        let c = StageConfig::default()
            .pad(0)
            .gap(0.0)
            .max_stage_width(500)
            .mirror_threshold(1000.0)
            .grid_step(10.0);
        assert_eq!(c.pad, 0);
        assert_eq!(c.gap, 0.0);
        assert_eq!(c.max_stage_width, 500);
        assert_eq!(c.mirror_threshold, 1000.0);
        assert_eq!(c.grid_step, 10.0);
    }

    #[test]
    fn bad_animation_length_is_zero() {
        assert_eq!(
            StageConfig::default().animation_seconds(-1.0).animation_duration(),
            Duration::ZERO
        );
        assert_eq!(
            StageConfig::default()
                .animation_seconds(f64::NAN)
                .animation_duration(),
            Duration::ZERO
        );
    }

    #[test]
    fn huge_animation_length_saturates() {
        let c = StageConfig::default().animation_seconds(1e30);
        assert_eq!(c.animation_duration(), Duration::MAX);
        let c = StageConfig::default().animation_seconds(f64::MAX);
        assert_eq!(c.animation_duration(), Duration::MAX);
    }
}
