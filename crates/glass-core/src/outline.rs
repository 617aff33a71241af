use glam::Vec2;

use crate::sdf::CornerProfile;
use crate::shape::{format_point, shapes_bounds, Bounds, CubicBezierCurve, Line, Shape};

/// Control-point offset of a squircle corner, as a fraction of the corner radius.
///
/// Matches the usual CSS mask approximation of a superellipse corner using a
/// single cubic segment.
pub const CORNER_CONTROL_RATIO: f32 = 6.0 / 28.0;

/// A closed rounded-rectangle outline: one move-to followed by four corner
/// curves and four straight edges, in clockwise order starting at the top of
/// the left edge.
pub struct Outline {
    start: Vec2,
    segments: Vec<Box<dyn Shape>>,
    radius: f32,
    inset: f32,
}

/// Clamp a corner radius into `[0, min(width, height) / 2]`.
///
/// Non-finite radii collapse to 0.
pub fn clamp_radius(radius: f32, width: f32, height: f32) -> f32 {
    let max_radius = (width.min(height) * 0.5).max(0.0);
    if !radius.is_finite() {
        return 0.0;
    }
    let clamped = radius.clamp(0.0, max_radius);
    if clamped != radius {
        log::debug!("corner radius {radius} clamped to {clamped} for {width}x{height}");
    }
    clamped
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Build the squircle outline of a `w`×`h` surface with corner radius `r`,
/// inset by `o` on every side.
pub fn outline_path(w: f32, h: f32, r: f32, o: f32) -> Outline {
    outline_path_with(w, h, r, o, CornerProfile::Squircle)
}

/// Build an outline with the corner shape given by `profile`.
///
/// The inset is clamped to half the smaller side and the radius to half the
/// smaller inset side, so the result never self-intersects.
pub fn outline_path_with(w: f32, h: f32, r: f32, o: f32, profile: CornerProfile) -> Outline {
    let w = finite_or_zero(w);
    let h = finite_or_zero(h);
    let o = finite_or_zero(o).min(w.min(h) * 0.5);
    let r = clamp_radius(r, w - 2.0 * o, h - 2.0 * o);
    let c = r * profile.control_ratio();

    let left = o;
    let top = o;
    let right = w - o;
    let bottom = h - o;

    let v = Vec2::new;
    let start = v(left, top + r);

    let segments: Vec<Box<dyn Shape>> = vec![
        Box::new(CubicBezierCurve::new(start, v(left, top + c), v(left + c, top), v(left + r, top))),
        Box::new(Line::new(v(left + r, top), v(right - r, top))),
        Box::new(CubicBezierCurve::new(
            v(right - r, top),
            v(right - c, top),
            v(right, top + c),
            v(right, top + r),
        )),
        Box::new(Line::new(v(right, top + r), v(right, bottom - r))),
        Box::new(CubicBezierCurve::new(
            v(right, bottom - r),
            v(right, bottom - c),
            v(right - c, bottom),
            v(right - r, bottom),
        )),
        Box::new(Line::new(v(right - r, bottom), v(left + r, bottom))),
        Box::new(CubicBezierCurve::new(
            v(left + r, bottom),
            v(left + c, bottom),
            v(left, bottom - c),
            v(left, bottom - r),
        )),
        Box::new(Line::new(v(left, bottom - r), start)),
    ];

    Outline { start, segments, radius: r, inset: o }
}

impl Outline {
    /// First point of the path (the move-to target).
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Last point reached before the close command.
    pub fn end(&self) -> Vec2 {
        self.segments.last().map_or(self.start, |s| s.end())
    }

    pub fn segments(&self) -> &[Box<dyn Shape>] {
        &self.segments
    }

    /// Corner radius actually used after clamping.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inset actually used after clamping.
    pub fn inset(&self) -> f32 {
        self.inset
    }

    /// True when every segment starts where the previous one ended and the
    /// last segment returns to the start point.
    pub fn is_closed(&self) -> bool {
        let mut cursor = self.start;
        for segment in &self.segments {
            if segment.start() != cursor {
                return false;
            }
            cursor = segment.end();
        }
        cursor == self.start
    }

    pub fn curve_count(&self) -> usize {
        self.count_type("CubicBezierCurve")
    }

    pub fn line_count(&self) -> usize {
        self.count_type("Line")
    }

    fn count_type(&self, ty: &str) -> usize {
        self.segments.iter().filter(|s| s.shape_type() == ty).count()
    }

    /// Extent of the path including control points.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = shapes_bounds(&self.segments);
        bounds.include(self.start);
        bounds
    }

    /// Render the outline as SVG path data, e.g. `M 0,12 C … Z`.
    pub fn to_path_data(&self) -> String {
        let mut data = format!("M {}", format_point(self.start));
        for segment in &self.segments {
            data.push(' ');
            data.push_str(&segment.path_command());
        }
        data.push_str(" Z");
        data
    }
}

impl Clone for Outline {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            segments: self.segments.iter().map(|s| s.clone_shape()).collect(),
            radius: self.radius,
            inset: self.inset,
        }
    }
}

impl std::fmt::Debug for Outline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outline")
            .field("path", &self.to_path_data())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_command() {
        let outline = outline_path(100.0, 50.0, 12.0, 0.0);
        assert!(outline.to_path_data().starts_with("M 0,12 "));
    }

    #[test]
    fn test_extent_matches_surface() {
        let b = outline_path(100.0, 50.0, 12.0, 0.0).bounds();
        assert_eq!(b.min, Vec2::new(0.0, 0.0));
        assert_eq!(b.max, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_closed_with_four_corners() {
        let outline = outline_path(80.0, 40.0, 10.0, 2.0);
        assert!(outline.is_closed());
        assert_eq!(outline.curve_count(), 4);
        assert_eq!(outline.line_count(), 4);
        assert!(outline.to_path_data().ends_with(" Z"));
    }

    #[test]
    fn test_gap_between_segments_is_open() {
        let mut outline = outline_path(80.0, 40.0, 10.0, 0.0);
        outline.segments[1] = Box::new(Line::new(Vec2::new(11.0, 0.0), Vec2::new(70.0, 0.0)));
        assert_eq!(outline.end(), outline.start());
        assert!(!outline.is_closed());
    }

    #[test]
    fn test_missing_closing_edge_is_open() {
        let mut outline = outline_path(80.0, 40.0, 10.0, 0.0);
        outline.segments.pop();
        assert!(!outline.is_closed());
    }

    #[test]
    fn test_control_offset() {
        let outline = outline_path(100.0, 100.0, 28.0, 0.0);
        let corner = outline.segments()[0].points();
        assert!((corner[1] - Vec2::new(0.0, 6.0)).length() < 1e-4);
        assert!((corner[2] - Vec2::new(6.0, 0.0)).length() < 1e-4);
        assert_eq!(corner[3], Vec2::new(28.0, 0.0));
    }

    #[test]
    fn test_radius_clamped() {
        let outline = outline_path(100.0, 40.0, 500.0, 0.0);
        assert_eq!(outline.radius(), 20.0);
        let outline = outline_path(100.0, 40.0, -3.0, 0.0);
        assert_eq!(outline.radius(), 0.0);
    }

    #[test]
    fn test_radius_clamped_against_inset_box() {
        let outline = outline_path(100.0, 40.0, 20.0, 5.0);
        assert_eq!(outline.radius(), 15.0);
    }

    #[test]
    fn test_inset_clamped() {
        let outline = outline_path(10.0, 6.0, 0.0, 100.0);
        assert_eq!(outline.inset(), 3.0);
        let b = outline.bounds();
        assert_eq!(b.height(), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = outline_path(123.5, 77.25, 16.0, 0.5).to_path_data();
        let b = outline_path(123.5, 77.25, 16.0, 0.5).to_path_data();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rounded_profile_control_points_further_from_corner() {
        let squircle = outline_path_with(100.0, 100.0, 20.0, 0.0, CornerProfile::Squircle);
        let rounded = outline_path_with(100.0, 100.0, 20.0, 0.0, CornerProfile::Rounded);
        let sq = squircle.segments()[0].points()[1];
        let ro = rounded.segments()[0].points()[1];
        assert!(ro.y > sq.y);
    }
}
