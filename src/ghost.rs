//! Fade-out geometry for a panel that was just removed.
//!
//! The renderer keeps drawing a removed panel for one animation, at the
//! place and with the crop it had in the last frame before removal. Both
//! are reconstructed here from that frame's snapshot, never from the
//! current state.

use alloc::string::String;

use tracing::debug;

use crate::config::{GAP, StageConfig};
use crate::cover::{CoverRect, CropRect, Size};
use crate::layout::{Panel, placements};
use crate::placeholder::GridPattern;

/// Scale a ghost shrinks to while fading out.
pub const GHOST_END_SCALE: f64 = 0.85;

/// Last on-screen geometry of a removed panel, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemovedGhost {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Source window to sample, or `None` to draw the placeholder grid.
    pub crop: Option<CropRect>,
}

impl RemovedGhost {
    /// Placeholder grid to fade out when there is no crop to sample.
    pub fn placeholder(&self, config: &StageConfig) -> Option<GridPattern> {
        match self.crop {
            Some(_) => None,
            None => Some(GridPattern::with_step(self.w, self.h, config.grid_step)),
        }
    }
}

/// Animation end state for a ghost; it starts fully opaque at scale 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FadeOut {
    pub seconds: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl FadeOut {
    /// Fade-out target for the configured animation length.
    pub fn for_config(config: &StageConfig) -> Self {
        Self {
            seconds: config.animation_duration().as_secs_f64(),
            opacity: 0.0,
            scale: GHOST_END_SCALE,
        }
    }
}

impl Default for FadeOut {
    fn default() -> Self {
        Self::for_config(&StageConfig::default())
    }
}

/// Reconstruct a removed panel's ghost with the default seam width.
///
/// `prev_panels`, `snap_w`, `snap_h` and `snap_cover` must all come from the
/// frame rendered just before the removal. `source` is the size of the
/// buffer that frame sampled, `None` if no image was loaded.
pub fn compute_removed_ghost(
    prev_panels: &[Panel],
    removed_id: &str,
    snap_w: f64,
    snap_h: f64,
    snap_cover: Option<&CoverRect>,
    source: Option<Size>,
) -> Option<RemovedGhost> {
    compute_removed_ghost_with_gap(
        prev_panels,
        removed_id,
        snap_w,
        snap_h,
        snap_cover,
        source,
        GAP,
    )
}

/// Reconstruct a removed panel's ghost.
///
/// Returns `None` when `removed_id` was not in the previous list, meaning
/// there is nothing to animate.
pub fn compute_removed_ghost_with_gap(
    prev_panels: &[Panel],
    removed_id: &str,
    snap_w: f64,
    snap_h: f64,
    snap_cover: Option<&CoverRect>,
    source: Option<Size>,
    gap: f64,
) -> Option<RemovedGhost> {
    let Some(p) = placements(prev_panels).find(|p| p.panel.id == removed_id) else {
        debug!(removed_id, "removed panel not in previous snapshot; no ghost");
        return None;
    };

    let x = p.cursor;
    let y = p.top(snap_h);
    let draw_w = p.draw_width(gap);
    let draw_h = p.height;

    let sampling = source.is_some_and(|s| !s.is_empty());
    let crop = snap_cover.filter(|_| sampling).map(|cover| {
        let fx = p.cursor / snap_w;
        let fy = (snap_h - p.height) / snap_h;
        let fw = draw_w / snap_w;
        let fh = draw_h / snap_h;
        cover.clip(CropRect {
            x: cover.x + cover.w * fx,
            y: cover.y + cover.h * fy,
            width: cover.w * fw,
            height: cover.h * fh,
        })
    });

    Some(RemovedGhost {
        id: p.panel.id.clone(),
        x,
        y,
        w: draw_w,
        h: draw_h,
        crop,
    })
}
