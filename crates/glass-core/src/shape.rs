use glam::Vec2;

/// A path segment that can be sampled at any drawing progress [0, 1].
///
/// Outlines are built from these primitives. Each segment knows its own
/// end points and control points, and can render itself as a single SVG
/// path command continuing from the previous segment's end point.
pub trait Shape: Send + Sync {
    /// Sample the segment at a given drawing progress in [0, 1].
    fn next_vector(&self, drawing_progress: f32) -> Vec2;

    /// All points defining the segment, end points and control points included.
    fn points(&self) -> Vec<Vec2>;

    /// SVG path command drawing this segment from its start point.
    fn path_command(&self) -> String;

    /// Clone this segment into a boxed trait object.
    fn clone_shape(&self) -> Box<dyn Shape>;

    /// Shape type name for debugging.
    fn shape_type(&self) -> &'static str;

    fn start(&self) -> Vec2 {
        self.next_vector(0.0)
    }

    fn end(&self) -> Vec2 {
        self.next_vector(1.0)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// An inverted box that any `include` call will replace.
    pub const EMPTY: Bounds = Bounds {
        min: Vec2::splat(f32::MAX),
        max: Vec2::splat(f32::MIN),
    };

    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }
}

/// Bounding box over every end point and control point of the shapes.
pub fn shapes_bounds(shapes: &[Box<dyn Shape>]) -> Bounds {
    let mut bounds = Bounds::EMPTY;
    for shape in shapes {
        for p in shape.points() {
            bounds.include(p);
        }
    }
    bounds
}

/// Format a coordinate in its shortest round-trip decimal form.
///
/// Negative zero is printed as `0` so mirrored outlines stay byte-identical.
pub fn format_coord(v: f32) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

pub(crate) fn format_point(p: Vec2) -> String {
    format!("{},{}", format_coord(p.x), format_coord(p.y))
}

// --- Concrete shape implementations ---

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
}

impl Line {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }
}

impl Shape for Line {
    fn next_vector(&self, drawing_progress: f32) -> Vec2 {
        self.from.lerp(self.to, drawing_progress)
    }

    fn points(&self) -> Vec<Vec2> {
        vec![self.from, self.to]
    }

    fn path_command(&self) -> String {
        format!("L {}", format_point(self.to))
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn shape_type(&self) -> &'static str {
        "Line"
    }

    fn start(&self) -> Vec2 {
        self.from
    }

    fn end(&self) -> Vec2 {
        self.to
    }
}

/// A cubic Bezier curve defined by 4 control points.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezierCurve {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezierCurve {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Shape for CubicBezierCurve {
    fn next_vector(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;

        self.p0 * (mt2 * mt)
            + self.p1 * (3.0 * mt2 * t)
            + self.p2 * (3.0 * mt * t2)
            + self.p3 * (t2 * t)
    }

    fn points(&self) -> Vec<Vec2> {
        vec![self.p0, self.p1, self.p2, self.p3]
    }

    fn path_command(&self) -> String {
        format!(
            "C {} {} {}",
            format_point(self.p1),
            format_point(self.p2),
            format_point(self.p3)
        )
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn shape_type(&self) -> &'static str {
        "CubicBezierCurve"
    }

    fn start(&self) -> Vec2 {
        self.p0
    }

    fn end(&self) -> Vec2 {
        self.p3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_interpolation() {
        let line = Line::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let mid = line.next_vector(0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_line_endpoints_exact() {
        let line = Line::new(Vec2::new(0.1, 0.7), Vec2::new(3.3, 4.9));
        assert_eq!(line.start(), Vec2::new(0.1, 0.7));
        assert_eq!(line.end(), Vec2::new(3.3, 4.9));
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let curve = CubicBezierCurve::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        );
        let start = curve.start();
        let end = curve.end();
        assert!(start.length() < 0.001);
        assert!((end - Vec2::new(0.0, 1.0)).length() < 0.001);
    }

    #[test]
    fn test_cubic_midpoint() {
        let curve = CubicBezierCurve::new(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        );
        assert!((curve.next_vector(0.5) - Vec2::new(1.5, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_path_commands() {
        let line = Line::new(Vec2::ZERO, Vec2::new(10.0, 2.5));
        assert_eq!(line.path_command(), "L 10,2.5");

        let curve = CubicBezierCurve::new(
            Vec2::ZERO,
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 2.0),
        );
        assert_eq!(curve.path_command(), "C 0,1 1,2 3,2");
    }

    #[test]
    fn test_negative_zero_formatting() {
        assert_eq!(format_coord(-0.0), "0");
        assert_eq!(format_coord(12.0), "12");
    }

    #[test]
    fn test_shapes_bounds() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Line::new(Vec2::ZERO, Vec2::new(3.0, 4.0))),
            Box::new(Line::new(Vec2::new(-1.0, 2.0), Vec2::new(6.0, 8.0))),
        ];
        let b = shapes_bounds(&shapes);
        assert_eq!(b.min, Vec2::new(-1.0, 0.0));
        assert_eq!(b.max, Vec2::new(6.0, 8.0));
    }
}
