//! Cover mapping and per-panel crop projection.
//!
//! The whole logical canvas is mapped onto one centered sub-rectangle of the
//! source image, the way CSS `background-size: cover` does: the source is
//! cropped to the canvas aspect ratio, never distorted. Each panel then
//! samples the slice of that rectangle lying under it, so panel boundaries
//! line up with no visible seam in the picture.
//!
//! # Example
//!
//! ```
//! use platelayout::cover_src_rect;
//!
//! // 100×100 source behind a 60×30 canvas → full width, centered band.
//! let cover = cover_src_rect(100.0, 100.0, 60.0, 30.0);
//! assert_eq!((cover.x, cover.y, cover.w, cover.h), (0.0, 25.0, 100.0, 50.0));
//! ```

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero, as for an image that has not loaded.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Region of the source image that covers the full logical canvas.
///
/// Source-image pixel coordinates, fractional.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CoverRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl CoverRect {
    /// Cover rectangle for a source of `source` pixels behind a canvas of
    /// `canvas` pixels.
    ///
    /// Returns `None` when either size is empty; the caller then draws the
    /// placeholder instead of sampling.
    pub fn for_canvas(source: Size, canvas: Size) -> Option<Self> {
        if source.is_empty() || canvas.is_empty() {
            return None;
        }
        Some(cover_src_rect(
            source.width as f64,
            source.height as f64,
            canvas.width as f64,
            canvas.height as f64,
        ))
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.w / self.h
    }

    /// Whether `crop` lies inside this rectangle, allowing `tolerance`
    /// pixels of floating-point slack on every edge.
    pub fn contains(&self, crop: &CropRect, tolerance: f64) -> bool {
        crop.x >= self.x - tolerance
            && crop.y >= self.y - tolerance
            && crop.x + crop.width <= self.x + self.w + tolerance
            && crop.y + crop.height <= self.y + self.h + tolerance
    }

    /// Intersect `crop` with this rectangle.
    ///
    /// Rounding the canvas to whole pixels can push a projected crop past
    /// the cover by a fraction of a canvas pixel; clipping keeps every crop
    /// inside the sampled buffer. A crop already inside is returned as is.
    pub fn clip(&self, crop: CropRect) -> CropRect {
        let x0 = crop.x.max(self.x);
        let y0 = crop.y.max(self.y);
        let x1 = (crop.x + crop.width).min(self.x + self.w);
        let y1 = (crop.y + crop.height).min(self.y + self.h);
        if x0 == crop.x && y0 == crop.y && x1 == crop.x + crop.width && y1 == crop.y + crop.height
        {
            return crop;
        }
        CropRect {
            x: x0,
            y: y0,
            width: (x1 - x0).max(0.0),
            height: (y1 - y0).max(0.0),
        }
    }
}

/// Region of the source image sampled for one panel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Centered crop of an `img_w`×`img_h` source with the aspect ratio of a
/// `dest_w`×`dest_h` destination.
///
/// All four arguments must be positive. The result is the largest centered
/// rectangle of the destination's aspect ratio that fits in the source.
pub fn cover_src_rect(img_w: f64, img_h: f64, dest_w: f64, dest_h: f64) -> CoverRect {
    debug_assert!(img_w > 0.0 && img_h > 0.0 && dest_w > 0.0 && dest_h > 0.0);
    let src_ratio = img_w / img_h;
    let dest_ratio = dest_w / dest_h;
    if dest_ratio > src_ratio {
        // Destination is wider: keep full width, crop top and bottom.
        let h = img_w / dest_ratio;
        CoverRect {
            x: 0.0,
            y: (img_h - h) / 2.0,
            w: img_w,
            h,
        }
    } else {
        // Destination is taller or equal: keep full height, crop the sides.
        let w = img_h * dest_ratio;
        CoverRect {
            x: (img_w - w) / 2.0,
            y: 0.0,
            w,
            h: img_h,
        }
    }
}

/// Project the global cover rectangle down to one panel's crop window.
///
/// `cursor_x` is the panel's left edge on the canvas, `panel_height` its
/// layout height, and `draw_w`×`draw_h` the size actually drawn. Panels are
/// bottom-anchored, so the crop starts `px_h - panel_height` canvas pixels
/// below the top of the cover. The result is clipped to the cover.
pub fn build_plate_crop(
    cover: &CoverRect,
    px_w: f64,
    px_h: f64,
    cursor_x: f64,
    panel_height: f64,
    draw_w: f64,
    draw_h: f64,
) -> CropRect {
    let sx = cover.w / px_w;
    let sy = cover.h / px_h;
    cover.clip(CropRect {
        x: cover.x + cursor_x * sx,
        y: cover.y + (px_h - panel_height) * sy,
        width: draw_w * sx,
        height: draw_h * sy,
    })
}
