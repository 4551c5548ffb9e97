//! Placement of the preview child inside its container.
//!
//! Two policies are supported:
//! - [`ScalePolicy::Fit`] scales the preview to fit entirely inside the
//!   container, anchored at the top-left corner (letterboxing).
//! - [`ScalePolicy::Fill`] scales the preview to cover the whole container
//!   and centers it, cropping the overflow on one axis.
//!
//! All math is done in integers widened to `i64`, so a fill layout never
//! comes out one unit short of the container because of float rounding.

use crate::Orientation;
use lens_base::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalePolicy {
    Fit,
    #[default]
    Fill,
}

/// Native preview size paired with the orientation it will be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewGeometry {
    pub native: Vec2<i32>,
    pub orientation: Orientation,
}

impl PreviewGeometry {
    pub fn new(native: Vec2<i32>, orientation: Orientation) -> Self {
        Self {
            native,
            orientation,
        }
    }

    /// Size as displayed: cameras report landscape-native sizes, so portrait
    /// swaps width and height.
    pub fn oriented(&self) -> Vec2<i32> {
        if self.orientation.is_portrait() {
            self.native.transposed()
        } else {
            self.native
        }
    }
}

// floor(a * b / c) without intermediate overflow, saturating at i32::MAX
fn scale(a: i32, b: i32, c: i32) -> i32 {
    i32::try_from(a as i64 * b as i64 / c as i64).unwrap_or(i32::MAX)
}

/// Fit the preview inside the container, placed at `(0, 0)`.
///
/// Tries to match the container width first and falls back to matching the
/// height when the width-based height would overflow.
pub fn fit_layout(container: Vec2<i32>, preview: Vec2<i32>) -> Rect<i32> {
    let mut child = Vec2::new(container.x, scale(container.x, preview.y, preview.x));
    if child.y > container.y {
        child = Vec2::new(scale(container.y, preview.x, preview.y), container.y);
    }
    Rect::new(Vec2::zero(), child)
}

/// Cover the container with the preview, centered, cropping the overflow.
pub fn fill_layout(container: Vec2<i32>, preview: Vec2<i32>) -> Rect<i32> {
    // width ratio > height ratio  <=>  W * h > H * w
    let width_bound = container.x as i64 * preview.y as i64 > container.y as i64 * preview.x as i64;

    let (child, padding) = if width_bound {
        let height = scale(preview.y, container.x, preview.x);
        (
            Vec2::new(container.x, height),
            Vec2::new(0, (height - container.y) / 2),
        )
    } else {
        let width = scale(preview.x, container.y, preview.y);
        (
            Vec2::new(width, container.y),
            Vec2::new((width - container.x) / 2, 0),
        )
    };

    Rect::new(Vec2::new(-padding.x, -padding.y), child)
}

/// Lay out `preview` in `container` with `policy`.
///
/// Returns `None` when either size has a zero (or negative) dimension; there
/// is nothing to lay out and the ratios would divide by zero.
pub fn compute_layout(
    policy: ScalePolicy,
    container: Vec2<i32>,
    preview: Vec2<i32>,
) -> Option<Rect<i32>> {
    if container.x <= 0 || container.y <= 0 || preview.x <= 0 || preview.y <= 0 {
        return None;
    }
    Some(match policy {
        ScalePolicy::Fit => fit_layout(container, preview),
        ScalePolicy::Fill => fill_layout(container, preview),
    })
}

/// Percentage of the child's area that falls outside the container.
///
/// Only meaningful for centered fill layouts, where the child origin is the
/// negated padding.
pub fn cropped_percent(child: Rect<i32>) -> u32 {
    let area = child.width() as i64 * child.height() as i64;
    if area <= 0 {
        return 0;
    }
    let padding = Vec2::new(-child.left() as i64, -child.top() as i64);
    let cropped = padding.x * 2 * child.height() as i64 + padding.y * 2 * child.width() as i64;
    (cropped * 100 / area).max(0) as u32
}
