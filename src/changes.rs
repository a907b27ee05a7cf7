//! Resize classification between two panel-list snapshots.
//!
//! Panels are matched by id. Every panel whose size changed noticeably is
//! tagged as growing or shrinking so the renderer can pick an animation.
//! Added and removed panels are not reported here.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::layout::Panel;

/// Absolute dimension change at or below which a panel counts as unchanged.
pub const DIM_EPSILON: f64 = 1e-6;
/// Relative area change at or below which area is considered unchanged.
pub const AREA_EPSILON: f64 = 1e-6;

/// Direction of a resize.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum ResizeKind {
    Grow,
    Shrink,
}

impl ResizeKind {
    fn from_sign(delta: f64) -> Self {
        if delta >= 0.0 { Self::Grow } else { Self::Shrink }
    }
}

/// One panel's resize between two snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResizeChange {
    pub id: String,
    pub kind: ResizeKind,
}

/// Classify resizes with the default thresholds.
pub fn resize_changes(prev: &[Panel], next: &[Panel]) -> Vec<ResizeChange> {
    resize_changes_with(prev, next, DIM_EPSILON, AREA_EPSILON)
}

/// Classify resizes between `prev` and `next`, in `next` order.
///
/// Area decides first. When the area is practically unchanged but the
/// shape is not (width up, height down), the dimension that moved more
/// decides, and width wins an exact tie.
pub fn resize_changes_with(
    prev: &[Panel],
    next: &[Panel],
    eps_dim: f64,
    eps_area_rel: f64,
) -> Vec<ResizeChange> {
    let before: BTreeMap<&str, &Panel> = prev.iter().map(|p| (p.id.as_str(), p)).collect();

    next.iter()
        .filter_map(|cur| {
            let old = before.get(cur.id.as_str())?;
            let kind = classify(old, cur, eps_dim, eps_area_rel)?;
            Some(ResizeChange {
                id: cur.id.clone(),
                kind,
            })
        })
        .collect()
}

fn classify(
    before: &Panel,
    after: &Panel,
    eps_dim: f64,
    eps_area_rel: f64,
) -> Option<ResizeKind> {
    let dw = after.width_px() - before.width_px();
    let dh = after.height_px() - before.height_px();
    if dw.abs() <= eps_dim && dh.abs() <= eps_dim {
        return None;
    }

    let area_before = before.area_px();
    let rel_delta = (after.area_px() - area_before) / area_before.max(1.0);
    if rel_delta.abs() > eps_area_rel {
        return Some(ResizeKind::from_sign(rel_delta));
    }

    if dw.abs() >= dh.abs() {
        Some(ResizeKind::from_sign(dw))
    } else {
        Some(ResizeKind::from_sign(dh))
    }
}
