//! Mirrored stripe synthesis for wide rows.
//!
//! A row wider than the mirroring threshold samples from a buffer twice as
//! wide as the source: the source on the left, its horizontal mirror image
//! on the right. The two halves meet at a reflection axis, so the column on
//! either side of the join is identical and the join is invisible.
//!
//! Pixel work goes through [`StripeSurface`], a small capability trait that
//! any 2D raster backend can implement. With the `image` feature enabled it
//! is implemented for [`image::ImageBuffer`].
//!
//! ```text
//!     source          stripe
//!     ┌─────┐         ┌─────┬─────┐
//!     │ F   │   →     │ F   │   Ꟊ │
//!     └─────┘         └─────┴─────┘
//!                     0     w     2w
//! ```

use tracing::{debug, trace};

use crate::config::StageConfig;
use crate::cover::Size;

/// Anything with known pixel dimensions that a stripe can be drawn from.
pub trait RasterSource {
    /// Pixel dimensions. Either side is `0` while the image is loading.
    fn dimensions(&self) -> Size;
}

/// Offscreen drawing surface used to build a mirrored stripe.
pub trait StripeSurface: Sized {
    /// Image type this surface draws from.
    type Source: RasterSource + ?Sized;

    /// Allocate a blank surface.
    fn allocate(width: u32, height: u32) -> Self;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Draw `source` unmodified with its left edge at `dx`.
    fn draw_source(&mut self, source: &Self::Source, dx: u32);

    /// Draw `source` flipped left-right with its left edge at `dx`, so that
    /// surface column `dx + i` shows source column `source_width - 1 - i`.
    fn draw_mirrored_source(&mut self, source: &Self::Source, dx: u32);
}

/// A synthesized `source | mirror(source)` buffer.
#[derive(Clone, Debug)]
pub struct MirroredStripe<S> {
    pub surface: S,
    /// Pixel dimensions of `surface`: twice the source width, same height.
    pub size: Size,
}

/// Build a mirrored stripe from a loaded source image.
///
/// Returns `None` when the source has a zero dimension (not loaded yet) or
/// the doubled width would overflow; the caller then samples the source
/// directly.
pub fn make_mirrored_stripe<S: StripeSurface>(source: &S::Source) -> Option<MirroredStripe<S>> {
    let src = source.dimensions();
    if src.is_empty() {
        debug!(
            width = src.width,
            height = src.height,
            "source not loaded; skipping mirrored stripe"
        );
        return None;
    }
    let stripe_w = src.width.checked_mul(2)?;
    let mut surface = S::allocate(stripe_w, src.height);
    surface.draw_source(source, 0);
    surface.draw_mirrored_source(source, src.width);
    let size = Size::new(surface.width(), surface.height());
    debug!(width = size.width, height = size.height, "mirrored stripe synthesized");
    Some(MirroredStripe { surface, size })
}

/// Whether a row of `total_width` samples a mirrored stripe.
pub fn needs_mirror(total_width: f64, config: &StageConfig) -> bool {
    total_width > config.mirror_threshold
}

/// Which pixels the cover mapping is computed against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sampling {
    /// Dimensions of the sampled buffer (the stripe when `mirrored`).
    pub size: Size,
    pub mirrored: bool,
}

/// Decide the sampling buffer for a row, from source dimensions alone.
///
/// `None` when no image is available; callers fall back to the placeholder.
pub fn sampling_for(
    source: Option<Size>,
    total_width: f64,
    config: &StageConfig,
) -> Option<Sampling> {
    let Some(src) = source.filter(|s| !s.is_empty()) else {
        trace!("no loaded source image; sampling disabled");
        return None;
    };
    if needs_mirror(total_width, config)
        && let Some(width) = src.width.checked_mul(2)
    {
        return Some(Sampling {
            size: Size::new(width, src.height),
            mirrored: true,
        });
    }
    Some(Sampling {
        size: src,
        mirrored: false,
    })
}

/// The pixels a row actually samples from.
pub enum StripeSource<'a, S: StripeSurface> {
    /// The loaded source image as-is.
    Original(&'a S::Source),
    /// A synthesized mirrored stripe.
    Mirrored(MirroredStripe<S>),
}

impl<S: StripeSurface> StripeSource<'_, S> {
    /// Dimensions the cover mapping must be computed against.
    pub fn size(&self) -> Size {
        match self {
            Self::Original(source) => source.dimensions(),
            Self::Mirrored(stripe) => stripe.size,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        matches!(self, Self::Mirrored(_))
    }
}

/// Pick or synthesize the sampling buffer for a row.
///
/// Makes the same decision as [`sampling_for`], on real pixels. Rebuild it
/// whenever the source image or the row width changes; the stripe is
/// replaced, never patched.
pub fn prepare_source<'a, S: StripeSurface>(
    source: Option<&'a S::Source>,
    total_width: f64,
    config: &StageConfig,
) -> Option<StripeSource<'a, S>> {
    let source = source.filter(|s| !s.dimensions().is_empty())?;
    if needs_mirror(total_width, config)
        && let Some(stripe) = make_mirrored_stripe::<S>(source)
    {
        return Some(StripeSource::Mirrored(stripe));
    }
    Some(StripeSource::Original(source))
}

#[cfg(feature = "image")]
mod raster {
    use image::{ImageBuffer, Pixel, imageops};

    use super::{RasterSource, StripeSurface};
    use crate::cover::Size;

    impl<P: Pixel> RasterSource for ImageBuffer<P, Vec<P::Subpixel>> {
        fn dimensions(&self) -> Size {
            let (width, height) = ImageBuffer::dimensions(self);
            Size::new(width, height)
        }
    }

    impl<P: Pixel + 'static> StripeSurface for ImageBuffer<P, Vec<P::Subpixel>> {
        type Source = Self;

        fn allocate(width: u32, height: u32) -> Self {
            ImageBuffer::new(width, height)
        }

        fn width(&self) -> u32 {
            ImageBuffer::width(self)
        }

        fn height(&self) -> u32 {
            ImageBuffer::height(self)
        }

        fn draw_source(&mut self, source: &Self, dx: u32) {
            imageops::replace(self, source, i64::from(dx), 0);
        }

        fn draw_mirrored_source(&mut self, source: &Self, dx: u32) {
            let flipped = imageops::flip_horizontal(source);
            imageops::replace(self, &flipped, i64::from(dx), 0);
        }
    }
}
