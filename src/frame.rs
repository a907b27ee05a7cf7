//! Frames: one atomic recomputation of every derived rectangle.
//!
//! Layout, cover mapping and per-panel crops depend on each other through
//! `px_w`, `px_h` and the cover rectangle, so they are always computed
//! together. A [`Frame`] is that unit. The host keeps the last frame it
//! rendered and diffs it against the new one with
//! [`Frame::transition_to`] to find what to animate.
//!
//! # Example
//!
//! ```
//! use platelayout::{Frame, Panel, ResizeKind, Size, StageConfig};
//!
//! let config = StageConfig::default();
//! let image = Some(Size::new(100, 100));
//!
//! let before = Frame::compute(
//!     &[Panel::new("1", 30.0, 30.0), Panel::new("2", 40.0, 20.0)],
//!     image,
//!     &config,
//! );
//! let after = Frame::compute(&[Panel::new("1", 60.0, 30.0)], image, &config);
//!
//! let t = before.transition_to(&after);
//! assert_eq!(t.resized[0].kind, ResizeKind::Grow);
//! assert_eq!(t.removed[0].id, "2");
//! assert_eq!((t.removed[0].x, t.removed[0].y), (30.0, 10.0));
//! ```

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::changes::{ResizeChange, resize_changes};
use crate::config::StageConfig;
use crate::cover::{CoverRect, CropRect, Size, build_plate_crop};
use crate::ghost::{RemovedGhost, compute_removed_ghost_with_gap};
use crate::layout::{Panel, PanelRect, StageLayout, compute_sizes_with, placements};
use crate::placeholder::GridPattern;
use crate::stripe::{Sampling, sampling_for};

/// A panel's render target: where to draw it and what to sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlacedPanel {
    /// Rectangle in stage coordinates.
    pub rect: PanelRect,
    /// Left edge on the canvas, before the margin.
    pub cursor: f64,
    /// Source window, or `None` when no image is loaded.
    pub crop: Option<CropRect>,
}

impl PlacedPanel {
    /// Placeholder grid for this panel, if it has nothing to sample.
    pub fn placeholder(&self, config: &StageConfig) -> Option<GridPattern> {
        match self.crop {
            Some(_) => None,
            None => Some(GridPattern::with_step(
                self.rect.width,
                self.rect.height,
                config.grid_step,
            )),
        }
    }
}

/// Everything derived from one panel list and one source image.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// The panel list this frame was computed from.
    pub panels: Vec<Panel>,
    pub layout: StageLayout,
    /// Buffer the crops index into, or `None` without a loaded image.
    pub sampling: Option<Sampling>,
    /// Region of the sampled buffer covering the canvas.
    pub cover: Option<CoverRect>,
    /// One entry per panel, in row order.
    pub placed: Vec<PlacedPanel>,
    #[cfg_attr(feature = "serde", serde(skip))]
    config: StageConfig,
}

impl Frame {
    /// Recompute a frame.
    ///
    /// `source` is the size of the loaded image (not of any stripe), or
    /// `None` while nothing is loaded. When the row is wide enough the crops
    /// index into the mirrored stripe, whose size is reported in
    /// [`Frame::sampling`].
    pub fn compute(panels: &[Panel], source: Option<Size>, config: &StageConfig) -> Self {
        let layout = compute_sizes_with(panels, config);
        let sampling = sampling_for(source, layout.total_width, config);
        let cover = sampling.and_then(|s| CoverRect::for_canvas(s.size, layout.canvas()));

        let pad = config.pad as f64;
        let px_w = layout.px_w as f64;
        let px_h = layout.px_h as f64;
        let placed: Vec<PlacedPanel> = placements(panels)
            .map(|p| {
                let rect = p.rect(pad, px_h, config.gap);
                let crop = cover.as_ref().map(|c| {
                    build_plate_crop(c, px_w, px_h, p.cursor, p.height, rect.width, rect.height)
                });
                PlacedPanel {
                    rect,
                    cursor: p.cursor,
                    crop,
                }
            })
            .collect();

        trace!(
            panels = panels.len(),
            px_w = layout.px_w,
            px_h = layout.px_h,
            mirrored = sampling.is_some_and(|s| s.mirrored),
            "frame computed"
        );

        Self {
            panels: panels.to_vec(),
            layout,
            sampling,
            cover,
            placed,
            config: config.clone(),
        }
    }

    /// Configuration this frame was computed with.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Whether the crops index into a mirrored stripe.
    pub fn is_mirrored(&self) -> bool {
        self.sampling.is_some_and(|s| s.mirrored)
    }

    /// Size of the sampled buffer.
    pub fn source_size(&self) -> Option<Size> {
        self.sampling.map(|s| s.size)
    }

    /// Render target of one panel.
    pub fn panel(&self, id: &str) -> Option<&PlacedPanel> {
        self.placed.iter().find(|p| p.rect.id == id)
    }

    /// Ghost for a panel of this frame that is about to disappear.
    pub fn ghost(&self, removed_id: &str) -> Option<RemovedGhost> {
        compute_removed_ghost_with_gap(
            &self.panels,
            removed_id,
            self.layout.px_w as f64,
            self.layout.px_h as f64,
            self.cover.as_ref(),
            self.source_size(),
            self.config.gap,
        )
    }

    /// What changed between this frame and `next`.
    ///
    /// `self` must be the frame rendered immediately before `next`; ghosts
    /// are positioned from its snapshot.
    pub fn transition_to(&self, next: &Frame) -> Transition {
        let before: BTreeSet<&str> = self.panels.iter().map(|p| p.id.as_str()).collect();
        let after: BTreeSet<&str> = next.panels.iter().map(|p| p.id.as_str()).collect();

        let added: Vec<String> = next
            .panels
            .iter()
            .filter(|p| !before.contains(p.id.as_str()))
            .map(|p| p.id.clone())
            .collect();
        let removed: Vec<RemovedGhost> = self
            .panels
            .iter()
            .filter(|p| !after.contains(p.id.as_str()))
            .filter_map(|p| self.ghost(&p.id))
            .collect();
        let resized = resize_changes(&self.panels, &next.panels);

        debug!(
            added = added.len(),
            removed = removed.len(),
            resized = resized.len(),
            "panel transition"
        );

        Transition {
            added,
            resized,
            removed,
        }
    }
}

/// Animation cues between two consecutive frames.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Transition {
    /// Ids new in the later frame, in its order.
    pub added: Vec<String>,
    /// Surviving panels whose size changed, in the later frame's order.
    pub resized: Vec<ResizeChange>,
    /// Ghosts of panels gone from the later frame, in the earlier frame's order.
    pub removed: Vec<RemovedGhost>,
}

impl Transition {
    /// Whether anything needs animating.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.resized.is_empty() && self.removed.is_empty()
    }
}
