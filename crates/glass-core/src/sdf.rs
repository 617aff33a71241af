use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::outline::CORNER_CONTROL_RATIO;

/// Corner shape of a glass surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CornerProfile {
    /// Superellipse-like corner (4th-power norm).
    #[default]
    Squircle,
    /// Circular corner, as produced by CSS `border-radius`.
    Rounded,
}

impl CornerProfile {
    pub fn from_squircle_flag(use_squircle: bool) -> Self {
        if use_squircle {
            CornerProfile::Squircle
        } else {
            CornerProfile::Rounded
        }
    }

    /// Signed distance from `p` to this profile's rounded box.
    pub fn distance(&self, p: Vec2, half_extents: Vec2, radius: f32) -> f32 {
        match self {
            CornerProfile::Squircle => squircle_sdf(p, half_extents, radius),
            CornerProfile::Rounded => rounded_rect_sdf(p, half_extents, radius),
        }
    }

    /// Cubic control-point offset for one corner, as a fraction of the radius.
    pub fn control_ratio(&self) -> f32 {
        match self {
            CornerProfile::Squircle => CORNER_CONTROL_RATIO,
            // 1 - 4/3 * (sqrt(2) - 1): the quarter-circle approximation.
            CornerProfile::Rounded => 1.0 - 0.552_284_8,
        }
    }
}

/// Per-axis offset of `p` past the straight part of a rounded box.
fn corner_offset(p: Vec2, half_extents: Vec2, radius: f32) -> Vec2 {
    p.abs() - (half_extents - Vec2::splat(radius))
}

/// Signed distance from `p` (centered on the shape) to a squircle with the
/// given half extents and corner radius.
///
/// The corner distance uses the 4th-power norm, which flattens the sides and
/// tightens the corner compared to a circular arc. Negative inside, zero on
/// the boundary, positive outside.
pub fn squircle_sdf(p: Vec2, half_extents: Vec2, radius: f32) -> f32 {
    let d = corner_offset(p, half_extents, radius);
    let q = d.max(Vec2::ZERO);

    // radius * |q / radius|_4 == |q|_4, so a zero radius needs no special case.
    let q2 = q * q;
    let outside = (q2.x * q2.x + q2.y * q2.y).sqrt().sqrt() - radius;
    let inside = d.x.max(d.y).min(0.0);

    outside + inside
}

/// Signed distance to a rounded box with circular corners.
pub fn rounded_rect_sdf(p: Vec2, half_extents: Vec2, radius: f32) -> f32 {
    let d = corner_offset(p, half_extents, radius);
    let outside = d.max(Vec2::ZERO).length() - radius;
    let inside = d.x.max(d.y).min(0.0);

    outside + inside
}
