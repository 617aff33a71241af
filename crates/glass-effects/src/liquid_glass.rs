use glam::Vec2;
use glass_core::{smooth_step, CornerProfile};

use crate::fragment::Fragment;

const CENTER: Vec2 = Vec2::splat(0.5);

/// Liquid glass lens. Pulls samples toward the center near the rim of a
/// rounded box, leaving the middle of the surface undistorted.
///
/// The signed distance to the box is eased into a weight over the falloff
/// band, the weight is eased a second time, and the sample position is
/// scaled toward the center by it.
#[derive(Debug, Clone)]
pub struct LiquidGlassFragment {
    /// Half extents of the lens box in unit-square coordinates.
    pub half_extents: Vec2,
    pub corner_radius: f32,
    /// Width of the band over which the distortion ramps in.
    pub falloff: f32,
    /// Distance subtracted before easing; moves the band outward.
    pub band_offset: f32,
    pub profile: CornerProfile,
}

impl Default for LiquidGlassFragment {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(0.3, 0.2),
            corner_radius: 0.6,
            falloff: 0.8,
            band_offset: 0.15,
            profile: CornerProfile::Squircle,
        }
    }
}

impl LiquidGlassFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same lens with circular corners.
    pub fn rounded() -> Self {
        Self { profile: CornerProfile::Rounded, ..Self::default() }
    }

    pub fn with_profile(mut self, profile: CornerProfile) -> Self {
        self.profile = profile;
        self
    }

    /// How much of the original offset from the center survives at `uv`:
    /// 1 means undistorted, 0 means fully collapsed onto the center.
    pub fn retention(&self, uv: Vec2) -> f32 {
        let p = uv - CENTER;
        let distance_to_edge = self.profile.distance(p, self.half_extents, self.corner_radius);
        let weight = smooth_step(self.falloff, 0.0, distance_to_edge - self.band_offset);
        smooth_step(0.0, 1.0, weight)
    }
}

impl Fragment for LiquidGlassFragment {
    fn sample(&self, uv: Vec2) -> Vec2 {
        CENTER + (uv - CENTER) * self.retention(uv)
    }

    fn clone_fragment(&self) -> Box<dyn Fragment> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        match self.profile {
            CornerProfile::Squircle => "Liquid Glass",
            CornerProfile::Rounded => "Liquid Glass (Rounded)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_fixed_point() {
        let lens = LiquidGlassFragment::new();
        assert_eq!(lens.sample(CENTER), CENTER);
    }

    #[test]
    fn test_inner_region_undistorted() {
        // Well inside the band the retention saturates at 1.
        let lens = LiquidGlassFragment::new();
        let uv = Vec2::new(0.45, 0.52);
        assert_eq!(lens.retention(uv), 1.0);
        assert!((lens.sample(uv) - uv).length() < 1e-6);
    }

    #[test]
    fn test_corner_pulled_toward_center() {
        let lens = LiquidGlassFragment::new();
        let out = lens.sample(Vec2::ZERO);
        assert!(out.x > 0.0 && out.y > 0.0);
        assert!(out.x < 0.5 && out.y < 0.5);
    }

    #[test]
    fn test_retention_in_unit_range() {
        let lens = LiquidGlassFragment::rounded();
        for i in 0..=10 {
            for j in 0..=10 {
                let r = lens.retention(Vec2::new(i as f32 / 10.0, j as f32 / 10.0));
                assert!((0.0..=1.0).contains(&r));
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(LiquidGlassFragment::new().name(), "Liquid Glass");
        assert_eq!(LiquidGlassFragment::rounded().name(), "Liquid Glass (Rounded)");
    }
}
