//! Accepted panel dimensions and panel counts.
//!
//! Geometry never rejects input; these checks exist for the panel-list
//! owner, which decides whether an edit is allowed before it reaches the
//! engine.

use alloc::collections::BTreeSet;
use alloc::string::String;

use crate::layout::Panel;

/// Why a panel or panel list was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PanelError {
    /// Width is NaN, infinite, or outside the accepted range.
    #[error("panel {id}: width {value} cm is outside {min}..={max} cm")]
    WidthOutOfRange {
        id: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Height is NaN, infinite, or outside the accepted range.
    #[error("panel {id}: height {value} cm is outside {min}..={max} cm")]
    HeightOutOfRange {
        id: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// More panels than the row may hold.
    #[error("{count} panels exceed the maximum of {max}")]
    TooManyPanels { count: usize, max: usize },
    /// Fewer panels than the row must hold.
    #[error("{count} panels are below the minimum of {min}")]
    TooFewPanels { count: usize, min: usize },
    /// Two panels share an id.
    #[error("duplicate panel id {0:?}")]
    DuplicateId(String),
    /// A panel has an empty id.
    #[error("panel id must not be empty")]
    EmptyId,
}

/// Inclusive bounds on panel dimensions (centimeters) and panel count.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case", default)
)]
pub struct PanelLimits {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub min_panels: usize,
    pub max_panels: usize,
}

impl Default for PanelLimits {
    fn default() -> Self {
        Self {
            min_width: 20.0,
            max_width: 300.0,
            min_height: 30.0,
            max_height: 128.0,
            min_panels: 1,
            max_panels: 10,
        }
    }
}

impl PanelLimits {
    /// Check one panel's id and dimensions.
    pub fn validate_panel(&self, panel: &Panel) -> Result<(), PanelError> {
        if panel.id.is_empty() {
            return Err(PanelError::EmptyId);
        }
        if !in_range(panel.width, self.min_width, self.max_width) {
            return Err(PanelError::WidthOutOfRange {
                id: panel.id.clone(),
                value: panel.width,
                min: self.min_width,
                max: self.max_width,
            });
        }
        if !in_range(panel.height, self.min_height, self.max_height) {
            return Err(PanelError::HeightOutOfRange {
                id: panel.id.clone(),
                value: panel.height,
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }

    /// Check a whole row: count, unique ids, then every panel in order.
    pub fn validate_row(&self, panels: &[Panel]) -> Result<(), PanelError> {
        let count = panels.len();
        if count > self.max_panels {
            return Err(PanelError::TooManyPanels {
                count,
                max: self.max_panels,
            });
        }
        if count < self.min_panels {
            return Err(PanelError::TooFewPanels {
                count,
                min: self.min_panels,
            });
        }
        let mut seen = BTreeSet::new();
        for panel in panels {
            self.validate_panel(panel)?;
            if !seen.insert(panel.id.as_str()) {
                return Err(PanelError::DuplicateId(panel.id.clone()));
            }
        }
        Ok(())
    }

    /// Whether one more panel fits in a row of `count` panels.
    pub fn can_add(&self, count: usize) -> bool {
        count < self.max_panels
    }

    /// Whether a panel may be removed from a row of `count` panels.
    pub fn can_remove(&self, count: usize) -> bool {
        count > self.min_panels
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}
