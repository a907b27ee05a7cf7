//! Seamless multi-panel image preview geometry.
//!
//! A row of independently sized rectangular panels is previewed as one
//! continuous picture: a single source image is cover-mapped onto the whole
//! row and every panel samples the slice under it, so the picture runs
//! across panel boundaries without a seam. Wide rows sample a mirrored
//! stripe instead of stretching the source.
//!
//! Pure geometry apart from the stripe compositor, which draws through a
//! small capability trait. `no_std` compatible with `alloc`.
//!
//! # Modules
//!
//! - [`layout`] — Panel list → canvas size, stage size, panel rectangles
//! - [`cover`] — Cover mapping and per-panel crop projection
//! - [`stripe`] — Mirrored stripe synthesis for wide rows
//! - [`changes`] — Grow/shrink classification between two panel lists
//! - [`ghost`] — Fade-out geometry for removed panels
//! - [`frame`] — Atomic per-frame recomputation and frame-to-frame transitions
//! - [`placeholder`] — Grid drawn where no image can be sampled
//! - [`rules`] — Accepted panel dimensions and counts
//! - [`config`] — Stage constants and overrides
//! - [`units`] — Centimeter ↔ logical pixel conversion

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod changes;
pub mod config;
pub mod cover;
pub mod frame;
pub mod ghost;
pub mod layout;
pub mod placeholder;
pub mod rules;
pub mod stripe;
#[cfg(feature = "svg")]
pub mod svg;
pub mod units;

pub use changes::{ResizeChange, ResizeKind, resize_changes, resize_changes_with};
pub use config::{GAP, MAX_STAGE_WIDTH, MIRROR_THRESHOLD, PAD, StageConfig};
pub use cover::{CoverRect, CropRect, Size, build_plate_crop, cover_src_rect};
pub use frame::{Frame, PlacedPanel, Transition};
pub use ghost::{FadeOut, RemovedGhost, compute_removed_ghost, compute_removed_ghost_with_gap};
pub use layout::{
    Panel, PanelRect, RowSummary, StageLayout, compute_sizes, compute_sizes_with, panel_rects,
    panel_rects_with, seam_positions, summarize,
};
pub use placeholder::GridPattern;
pub use rules::{PanelError, PanelLimits};
pub use stripe::{
    MirroredStripe, RasterSource, Sampling, StripeSource, StripeSurface, make_mirrored_stripe,
    prepare_source, sampling_for,
};
