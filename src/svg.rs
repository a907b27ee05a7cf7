//! SVG visualization of a frame.
//!
//! Draws two annotated views stacked vertically: the sampled source buffer
//! with the cover rectangle and every panel's crop window, then the stage
//! with each panel (and any fading ghosts) where the renderer will draw it.
//!
//! # Example
//!
//! ```
//! use platelayout::{Frame, Panel, Size, StageConfig, svg::render_frame_svg};
//!
//! let frame = Frame::compute(
//!     &[Panel::new("1", 30.0, 30.0), Panel::new("2", 40.0, 20.0)],
//!     Some(Size::new(640, 480)),
//!     &StageConfig::default(),
//! );
//! let svg = render_frame_svg(&frame, &[]);
//! assert!(svg.starts_with("<svg"));
//! ```

use std::fmt::Write as _;

use crate::frame::Frame;
use crate::ghost::RemovedGhost;
use crate::placeholder::LINE;

/// Maximum pixel width of either view.
const MAX_VIEW_W: f64 = 600.0;
/// Maximum pixel height of either view.
const MAX_VIEW_H: f64 = 240.0;
/// Vertical gap between views.
const VIEW_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 40.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label line above each view.
const LABEL_H: f64 = 22.0;

/// A rectangle inside a view, in the view's own pixel units.
struct Shape {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    class: &'static str,
    label: Option<String>,
}

/// One boxed view with its contents.
struct View {
    label: String,
    outer: (f64, f64),
    shapes: Vec<Shape>,
    annotation: String,
}

/// Render a frame, plus any ghosts still fading out, as an SVG document.
pub fn render_frame_svg(frame: &Frame, ghosts: &[RemovedGhost]) -> String {
    let mut views = Vec::with_capacity(2);
    if let Some(source) = source_view(frame) {
        views.push(source);
    }
    views.push(stage_view(frame, ghosts));
    render_views(&views)
}

fn source_view(frame: &Frame) -> Option<View> {
    let sampling = frame.sampling?;
    let cover = frame.cover?;
    let (sw, sh) = (sampling.size.width as f64, sampling.size.height as f64);

    let mut shapes = Vec::new();
    if sampling.mirrored {
        shapes.push(Shape {
            x: sw / 2.0,
            y: 0.0,
            w: sw / 2.0,
            h: sh,
            class: "mirror",
            label: None,
        });
    }
    shapes.push(Shape {
        x: cover.x,
        y: cover.y,
        w: cover.w,
        h: cover.h,
        class: "cover",
        label: None,
    });
    for placed in &frame.placed {
        if let Some(crop) = placed.crop {
            shapes.push(Shape {
                x: crop.x,
                y: crop.y,
                w: crop.width,
                h: crop.height,
                class: "crop",
                label: Some(placed.rect.id.clone()),
            });
        }
    }

    Some(View {
        label: format!(
            "{}  {}×{}",
            if sampling.mirrored { "Stripe" } else { "Source" },
            sampling.size.width,
            sampling.size.height
        ),
        outer: (sw, sh),
        shapes,
        annotation: format!(
            "cover ({:.1}, {:.1}) {:.1}×{:.1}",
            cover.x, cover.y, cover.w, cover.h
        ),
    })
}

fn stage_view(frame: &Frame, ghosts: &[RemovedGhost]) -> View {
    let layout = &frame.layout;
    let pad = frame.config().pad as f64;

    let mut shapes: Vec<Shape> = frame
        .placed
        .iter()
        .map(|placed| Shape {
            x: placed.rect.left,
            y: placed.rect.top,
            w: placed.rect.width,
            h: placed.rect.height,
            class: if placed.crop.is_some() { "panel" } else { "placeholder" },
            label: Some(placed.rect.id.clone()),
        })
        .collect();
    shapes.extend(ghosts.iter().map(|ghost| Shape {
        x: pad + ghost.x,
        y: pad + ghost.y,
        w: ghost.w,
        h: ghost.h,
        class: "ghost",
        label: Some(ghost.id.clone()),
    }));

    let truncated = layout.is_truncated(frame.config());
    View {
        label: format!("Stage  {}×{}", layout.stage_width, layout.stage_height),
        outer: (layout.stage_width as f64, layout.stage_height as f64),
        shapes,
        annotation: format!(
            "canvas {}×{}, {} panel(s){}",
            layout.px_w,
            layout.px_h,
            frame.placed.len(),
            if truncated { ", truncated" } else { "" }
        ),
    }
}

/// Scale a box to fit within MAX_VIEW_W × MAX_VIEW_H, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if w <= 0.0 || h <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_VIEW_W / w).min(MAX_VIEW_H / h);
    (w * scale, h * scale, scale)
}

fn render_views(views: &[View]) -> String {
    let total_w = MAX_VIEW_W + 2.0 * MARGIN_X;
    let total_h = 2.0 * MARGIN_TOP
        + views.len() as f64 * (LABEL_H + MAX_VIEW_H)
        + views.len().saturating_sub(1) as f64 * VIEW_GAP;
    let line = format!("#{:02x}{:02x}{:02x}", LINE[0], LINE[1], LINE[2]);

    let mut svg = String::with_capacity(4096);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    );

    let _ = writeln!(
        svg,
        r##"<style>
  text {{ font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }}
  .label {{ font-size: 13px; font-weight: bold; fill: #333; }}
  .annotation {{ font-size: 11px; fill: #666; }}
  .tag {{ font-size: 10px; fill: #1d3d5c; }}
  .outer {{ fill: #e8e8e8; stroke: #999; stroke-width: 1; }}
  .mirror {{ fill: #d8d0ec; stroke: none; }}
  .cover {{ fill: none; stroke: #c0392b; stroke-width: 1.5; stroke-dasharray: 5,3; }}
  .crop {{ fill: #6ba3d6; fill-opacity: 0.45; stroke: #2c6faa; stroke-width: 1; }}
  .panel {{ fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }}
  .placeholder {{ fill: #ffffff; stroke: {line}; stroke-width: 1; }}
  .ghost {{ fill: #6ba3d6; fill-opacity: 0.3; stroke: #2c6faa; stroke-dasharray: 3,3; }}
  @media (prefers-color-scheme: dark) {{
    .label {{ fill: #e0e0e0; }}
    .annotation {{ fill: #aaa; }}
    .tag {{ fill: #e0e0e0; }}
    .outer {{ fill: #2d2d2d; stroke: #555; }}
    .mirror {{ fill: #3b3550; }}
    .panel, .crop {{ fill: #3a72a4; stroke: #5a9fd4; }}
  }}
</style>"##
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;
    for (i, view) in views.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&view.label)
        );
        y += LABEL_H;

        let (vw, vh, scale) = scale_to_fit(view.outer.0, view.outer.1);
        let vx = center_x - vw / 2.0;
        let _ = writeln!(
            svg,
            r#"<rect x="{vx:.1}" y="{y:.1}" width="{vw:.1}" height="{vh:.1}" class="outer" rx="2"/>"#
        );

        for shape in &view.shapes {
            let sx = vx + shape.x * scale;
            let sy = y + shape.y * scale;
            let sw = shape.w * scale;
            let sh = shape.h * scale;
            let _ = writeln!(
                svg,
                r#"<rect x="{sx:.1}" y="{sy:.1}" width="{sw:.1}" height="{sh:.1}" class="{}"/>"#,
                shape.class
            );
            if let Some(label) = &shape.label {
                let _ = writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" class="tag">{}</text>"#,
                    sx + 2.0,
                    sy + 11.0,
                    escape_xml(label)
                );
            }
        }

        if !view.annotation.is_empty() {
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                y + vh + 14.0,
                escape_xml(&view.annotation)
            );
        }

        y += MAX_VIEW_H;
        if i + 1 < views.len() {
            y += VIEW_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
