/// Cubic Hermite easing between two edges.
///
/// `edge0` may be greater than `edge1`, which inverts the ramp: the result
/// is 1 at or below `edge1` and 0 at or above `edge0`.
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(smooth_step(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smooth_step(0.0, 1.0, 2.0), 1.0);
        assert_eq!(smooth_step(0.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn test_reversed_edges() {
        assert_eq!(smooth_step(0.8, 0.0, 1.0), 0.0);
        assert_eq!(smooth_step(0.8, 0.0, -0.1), 1.0);
        assert!((smooth_step(0.8, 0.0, 0.4) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_band() {
        assert_eq!(smooth_step(0.5, 0.5, 0.4), 0.0);
        assert_eq!(smooth_step(0.5, 0.5, 0.6), 1.0);
    }
}
