//! Row layout: panel list → canvas size, stage size and panel rectangles.
//!
//! Panels are laid out left to right in a single row and share a common
//! bottom edge. The canvas is as wide as the sum of panel widths and as tall
//! as the tallest panel; the stage adds a fixed margin on every side.
//!
//! # Example
//!
//! ```
//! use platelayout::{Panel, compute_sizes};
//!
//! let layout = compute_sizes(&[Panel::new("1", 300.0, 128.0)]);
//! assert_eq!((layout.px_w, layout.px_h), (300, 128));
//! assert_eq!((layout.stage_width, layout.stage_height), (348, 176));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::config::StageConfig;
use crate::cover::Size;
use crate::units::{cm_to_px, round_px};

/// One rectangular plate in the row. Dimensions are in centimeters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Panel {
    /// Stable identity across edits.
    pub id: String,
    pub width: f64,
    pub height: f64,
}

impl Panel {
    /// Create a panel.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// Width in logical pixels, with non-finite values read as `0`.
    pub fn width_px(&self) -> f64 {
        cm_to_px(self.width)
    }

    /// Height in logical pixels, with non-finite values read as `0`.
    pub fn height_px(&self) -> f64 {
        cm_to_px(self.height)
    }

    /// Area in square logical pixels.
    pub fn area_px(&self) -> f64 {
        self.width_px() * self.height_px()
    }
}

/// Sizes derived from a panel list.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StageLayout {
    /// Unrounded sum of panel widths.
    pub total_width: f64,
    /// Tallest panel, floored at 1.
    pub max_height: f64,
    /// Canvas width, `max(1, round(total_width))`.
    pub px_w: u32,
    /// Canvas height, `max(1, round(max_height))`.
    pub px_h: u32,
    /// Canvas width plus margins, capped at the configured maximum.
    pub stage_width: u32,
    /// Canvas height plus margins.
    pub stage_height: u32,
}

impl StageLayout {
    /// Logical canvas dimensions.
    pub fn canvas(&self) -> Size {
        Size::new(self.px_w, self.px_h)
    }

    /// Stage surface dimensions.
    pub fn stage(&self) -> Size {
        Size::new(self.stage_width, self.stage_height)
    }

    /// Whether the stage width hit the cap and the row is visually truncated.
    pub fn is_truncated(&self, config: &StageConfig) -> bool {
        u64::from(self.px_w) + 2 * u64::from(config.pad) > u64::from(self.stage_width)
    }

    /// Scale that fits the stage into a container of the given width.
    ///
    /// Returns `1.0` when either width is not positive.
    pub fn fit_scale(&self, container_width: f64) -> f64 {
        if self.stage_width > 0 && container_width.is_finite() && container_width > 0.0 {
            container_width / self.stage_width as f64
        } else {
            1.0
        }
    }
}

/// A panel's drawn rectangle in stage coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelRect {
    pub id: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    /// The same rectangle under a uniform display scale.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            id: self.id.clone(),
            left: self.left * scale,
            top: self.top * scale,
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

/// A panel's position along the row, before margins and seam trimming.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement<'a> {
    pub panel: &'a Panel,
    /// Left edge in canvas coordinates (sum of preceding widths).
    pub cursor: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement<'_> {
    /// Width actually drawn: the layout width minus the seam.
    pub fn draw_width(&self, gap: f64) -> f64 {
        (self.width - gap).max(0.0)
    }

    /// Top edge in canvas coordinates for a canvas `px_h` tall.
    pub fn top(&self, px_h: f64) -> f64 {
        px_h - self.height
    }

    /// Drawn rectangle in stage coordinates: offset by the margin,
    /// bottom-aligned to the canvas and narrowed by the seam.
    pub fn rect(&self, pad: f64, px_h: f64, gap: f64) -> PanelRect {
        PanelRect {
            id: self.panel.id.clone(),
            left: pad + self.cursor,
            top: pad + self.top(px_h),
            width: self.draw_width(gap),
            height: self.height,
        }
    }
}

/// Walk panels left to right, accumulating the row cursor.
///
/// The cursor advances by the full panel width; seam trimming never shifts
/// later panels.
pub fn placements(panels: &[Panel]) -> impl Iterator<Item = Placement<'_>> {
    panels.iter().scan(0.0_f64, |cursor, panel| {
        let width = panel.width_px();
        let placement = Placement {
            panel,
            cursor: *cursor,
            width,
            height: panel.height_px(),
        };
        *cursor += width;
        Some(placement)
    })
}

/// Compute canvas and stage sizes with the default stage constants.
pub fn compute_sizes(panels: &[Panel]) -> StageLayout {
    compute_sizes_with(panels, &StageConfig::default())
}

/// Compute canvas and stage sizes.
///
/// Never fails: empty lists and degenerate dimensions produce a 1×1 canvas.
pub fn compute_sizes_with(panels: &[Panel], config: &StageConfig) -> StageLayout {
    let total_width: f64 = panels.iter().map(Panel::width_px).sum();
    let max_height = panels.iter().map(Panel::height_px).fold(1.0_f64, f64::max);
    let px_w = round_px(total_width);
    let px_h = round_px(max_height);
    let margin = config.pad.saturating_mul(2);
    let full_width = px_w.saturating_add(margin);
    let stage_width = full_width.min(config.max_stage_width);
    if stage_width < full_width {
        debug!(
            full_width,
            stage_width, "stage width capped; row will be truncated"
        );
    }
    StageLayout {
        total_width,
        max_height,
        px_w,
        px_h,
        stage_width,
        stage_height: px_h.saturating_add(margin),
    }
}

/// Panel rectangles in stage coordinates, with the default stage constants.
pub fn panel_rects(panels: &[Panel], layout: &StageLayout) -> Vec<PanelRect> {
    panel_rects_with(panels, layout, &StageConfig::default())
}

/// Panel rectangles in stage coordinates. See [`Placement::rect`].
pub fn panel_rects_with(
    panels: &[Panel],
    layout: &StageLayout,
    config: &StageConfig,
) -> Vec<PanelRect> {
    let pad = config.pad as f64;
    let px_h = layout.px_h as f64;
    placements(panels)
        .map(|p| p.rect(pad, px_h, config.gap))
        .collect()
}

/// Stage x positions of every panel boundary, starting at the left margin.
///
/// A row of `n` panels has `n + 1` boundaries.
pub fn seam_positions(panels: &[Panel], config: &StageConfig) -> Vec<f64> {
    let pad = config.pad as f64;
    let mut seams = Vec::with_capacity(panels.len() + 1);
    seams.push(pad);
    seams.extend(placements(panels).map(|p| pad + p.cursor + p.width));
    seams
}

/// Aggregate figures for a row, as shown next to the editor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowSummary {
    pub total_width: f64,
    /// Tallest panel, `0` for an empty row.
    pub max_height: f64,
    pub total_area: f64,
    pub panel_count: usize,
    /// Whether the row is wide enough to sample a mirrored stripe.
    pub needs_mirroring: bool,
}

/// Summarize a row against the configured mirroring threshold.
pub fn summarize(panels: &[Panel], config: &StageConfig) -> RowSummary {
    let total_width: f64 = panels.iter().map(Panel::width_px).sum();
    RowSummary {
        total_width,
        max_height: panels.iter().map(Panel::height_px).fold(0.0_f64, f64::max),
        total_area: panels.iter().map(Panel::area_px).sum(),
        panel_count: panels.len(),
        needs_mirroring: total_width > config.mirror_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn two() -> Vec<Panel> {
        vec![Panel::new("1", 30.0, 30.0), Panel::new("2", 40.0, 20.0)]
    }

    #[test]
    fn single_default_panel() {
        let l = compute_sizes(&[Panel::new("1", 300.0, 128.0)]);
        assert_eq!(l.total_width, 300.0);
        assert_eq!(l.px_w, 300);
        assert_eq!(l.px_h, 128);
        assert_eq!(l.stage_width, 348);
        assert_eq!(l.stage_height, 176);
    }

    #[test]
    fn empty_list_is_drawable() {
        let l = compute_sizes(&[]);
        assert_eq!(l.total_width, 0.0);
        assert_eq!(l.max_height, 1.0);
        assert_eq!((l.px_w, l.px_h), (1, 1));
        assert_eq!((l.stage_width, l.stage_height), (49, 49));
    }

    #[test]
    fn non_finite_dimensions_are_zero() {
        let panels = [
            Panel::new("a", f64::NAN, 50.0),
            Panel::new("b", 40.0, f64::INFINITY),
        ];
        let l = compute_sizes(&panels);
        assert_eq!(l.total_width, 40.0);
        assert_eq!(l.px_h, 50);
    }

    #[test]
    fn stage_width_capped() {
        let panels: Vec<Panel> = (0..50)
            .map(|i| Panel::new(alloc::format!("{i}"), 300.0, 100.0))
            .collect();
        let config = StageConfig::default();
        let l = compute_sizes_with(&panels, &config);
        assert_eq!(l.px_w, 15_000);
        assert_eq!(l.stage_width, 12_000);
        assert_eq!(l.stage_height, 148);
        assert!(l.is_truncated(&config));
        assert!(!compute_sizes(&two()).is_truncated(&config));
    }

    #[test]
    fn fractional_widths_round_once() {
        let panels = [Panel::new("a", 20.3, 30.4), Panel::new("b", 20.3, 30.0)];
        let l = compute_sizes(&panels);
        assert!((l.total_width - 40.6).abs() < 1e-9);
        assert_eq!(l.px_w, 41);
        assert_eq!(l.px_h, 30);
    }

    #[test]
    fn rects_bottom_aligned_with_seam() {
        let panels = two();
        let l = compute_sizes(&panels);
        let rects = panel_rects(&panels, &l);
        assert_eq!(rects.len(), 2);
        assert_eq!(
            rects[0],
            PanelRect {
                id: "1".into(),
                left: 24.0,
                top: 24.0,
                width: 26.0,
                height: 30.0,
            }
        );
        assert_eq!(
            rects[1],
            PanelRect {
                id: "2".into(),
                left: 54.0,
                top: 34.0,
                width: 36.0,
                height: 20.0,
            }
        );
    }

    #[test]
    fn placement_rect_matches_panel_rects() {
        let panels = two();
        let l = compute_sizes(&panels);
        let second = placements(&panels).nth(1).unwrap();
        assert_eq!(second.rect(24.0, l.px_h as f64, 4.0), panel_rects(&panels, &l)[1]);
        let flush = second.rect(0.0, l.px_h as f64, 0.0);
        assert_eq!((flush.left, flush.top, flush.width), (30.0, 10.0, 40.0));
    }

    #[test]
    fn seam_never_goes_negative() {
        let panels = [Panel::new("thin", 3.0, 10.0)];
        let rects = panel_rects(&panels, &compute_sizes(&panels));
        assert_eq!(rects[0].width, 0.0);
    }

    #[test]
    fn placements_sum_to_canvas() {
        let panels = two();
        let widths: f64 = placements(&panels).map(|p| p.width).sum();
        assert_eq!(widths, compute_sizes(&panels).px_w as f64);
        let cursors: Vec<f64> = placements(&panels).map(|p| p.cursor).collect();
        assert_eq!(cursors, vec![0.0, 30.0]);
    }

    #[test]
    fn seams_follow_cursor() {
        let seams = seam_positions(&two(), &StageConfig::default());
        assert_eq!(seams, vec![24.0, 54.0, 94.0]);
    }

    #[test]
    fn fit_scale_to_container() {
        let l = compute_sizes(&[Panel::new("1", 300.0, 128.0)]);
        assert!((l.fit_scale(174.0) - 0.5).abs() < 1e-12);
        assert_eq!(l.fit_scale(0.0), 1.0);
        assert_eq!(l.fit_scale(f64::NAN), 1.0);
        let rect = panel_rects(&[Panel::new("1", 300.0, 128.0)], &l)[0].scaled(0.5);
        assert_eq!(rect.left, 12.0);
        assert_eq!(rect.width, 148.0);
    }

    #[test]
    fn summary() {
        let config = StageConfig::default();
        let s = summarize(&two(), &config);
        assert_eq!(s.total_width, 70.0);
        assert_eq!(s.max_height, 30.0);
        assert_eq!(s.total_area, 30.0 * 30.0 + 40.0 * 20.0);
        assert_eq!(s.panel_count, 2);
        assert!(!s.needs_mirroring);
        let wide = [Panel::new("1", 300.0, 128.0), Panel::new("2", 20.0, 30.0)];
        assert!(summarize(&wide, &config).needs_mirroring);
        assert!(!summarize(&[Panel::new("1", 300.0, 128.0)], &config).needs_mirroring);
    }
}
