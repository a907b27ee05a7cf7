//! Centimeter ↔ logical pixel conversion.
//!
//! One centimeter maps to one logical pixel. Values are kept fractional
//! through every derived coordinate space; rounding happens exactly once,
//! when the stage canvas size is fixed by [`round_px`].

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Logical pixels per centimeter.
pub const PX_PER_CM: f64 = 1.0;

/// Replace NaN and infinities with `0.0`.
///
/// Panel dimensions come from an external store and are never trusted to
/// be finite.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Convert centimeters to logical pixels. Non-finite input becomes `0.0`.
#[inline]
pub fn cm_to_px(cm: f64) -> f64 {
    finite_or_zero(cm) * PX_PER_CM
}

/// Convert logical pixels back to centimeters. Non-finite input becomes `0.0`.
#[inline]
pub fn px_to_cm(px: f64) -> f64 {
    finite_or_zero(px) / PX_PER_CM
}

/// Round a logical pixel length to a drawable canvas length.
///
/// Never returns less than 1, so a canvas is always drawable. Lengths
/// beyond `u32::MAX` saturate.
pub fn round_px(px: f64) -> u32 {
    let rounded = finite_or_zero(px).round().max(1.0);
    if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
