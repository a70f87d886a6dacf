use bevy::prelude::*;

/// The type of spline interpolation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Default)]
pub enum SplineType {
    /// Straight segments between consecutive control points.
    Linear,
    /// Cubic Bézier spline - 4 control points per segment.
    /// Points 0 and 3 are on the curve, 1 and 2 are handles.
    /// Bézier paths ignore the `closed` flag; repeat the first anchor to close one.
    CubicBezier,
    /// Catmull-Rom spline - passes through all control points.
    /// Requires at least 4 points, curve is defined between points 1 and n-2.
    #[default]
    CatmullRom,
    /// Uniform cubic B-Spline - smooth curve with local control.
    /// Approximates its control points and passes through none of them,
    /// endpoints included.
    BSpline,
}

impl SplineType {
    /// Minimum number of control points required for this spline type.
    pub fn min_points(&self) -> usize {
        match self {
            Self::Linear => 2,
            Self::CubicBezier | Self::CatmullRom | Self::BSpline => 4,
        }
    }
}

/// Trait for evaluating spline curves.
pub trait SplineEvaluator {
    /// Evaluate the spline at parameter t (0.0 to 1.0 across entire spline).
    fn evaluate(&self, points: &[Vec2], t: f32, closed: bool) -> Option<Vec2>;

    /// Evaluate the tangent at parameter t.
    fn evaluate_tangent(&self, points: &[Vec2], t: f32, closed: bool) -> Option<Vec2>;

    /// Get the number of segments in the spline.
    fn segment_count(&self, points: &[Vec2], closed: bool) -> usize;
}

impl SplineEvaluator for SplineType {
    fn evaluate(&self, points: &[Vec2], t: f32, closed: bool) -> Option<Vec2> {
        let (p, local_t) = self.segment_points(points, t, closed)?;
        Some(match self {
            Self::Linear => p[0].lerp(p[1], local_t),
            Self::CubicBezier => cubic_bezier(p, local_t),
            Self::CatmullRom => catmull_rom(p, local_t),
            Self::BSpline => bspline(p, local_t),
        })
    }

    fn evaluate_tangent(&self, points: &[Vec2], t: f32, closed: bool) -> Option<Vec2> {
        let (p, local_t) = self.segment_points(points, t, closed)?;
        Some(match self {
            Self::Linear => p[1] - p[0],
            Self::CubicBezier => cubic_bezier_derivative(p, local_t),
            Self::CatmullRom => catmull_rom_derivative(p, local_t),
            Self::BSpline => bspline_derivative(p, local_t),
        })
    }

    fn segment_count(&self, points: &[Vec2], closed: bool) -> usize {
        let n = points.len();
        if n < self.min_points() {
            return 0;
        }
        match self {
            Self::Linear => {
                if closed {
                    n
                } else {
                    n - 1
                }
            }
            Self::CubicBezier => (n - 1) / 3,
            Self::CatmullRom | Self::BSpline => {
                if closed {
                    n
                } else {
                    n - 3
                }
            }
        }
    }
}

impl SplineType {
    /// Locate the segment containing `t` and gather its control points.
    ///
    /// Linear segments only use the first two entries of the returned array.
    fn segment_points(&self, points: &[Vec2], t: f32, closed: bool) -> Option<([Vec2; 4], f32)> {
        let num_segments = self.segment_count(points, closed);
        if num_segments == 0 {
            return None;
        }

        let t_scaled = t.clamp(0.0, 1.0) * num_segments as f32;
        let segment = (t_scaled.floor() as usize).min(num_segments - 1);
        let local_t = t_scaled - segment as f32;

        let n = points.len();
        let at = |offset: usize| points[(segment + offset) % n];

        let p = match self {
            Self::Linear => [at(0), at(1), Vec2::ZERO, Vec2::ZERO],
            Self::CubicBezier => {
                let i = segment * 3;
                [points[i], points[i + 1], points[i + 2], points[i + 3]]
            }
            // Closed Catmull-Rom segments start one point behind the segment index.
            Self::CatmullRom if closed => [at(n - 1), at(0), at(1), at(2)],
            Self::CatmullRom | Self::BSpline => [at(0), at(1), at(2), at(3)],
        };

        Some((p, local_t))
    }
}

fn cubic_bezier([p0, p1, p2, p3]: [Vec2; 4], t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    p0 * mt3 + p1 * 3.0 * mt2 * t + p2 * 3.0 * mt * t2 + p3 * t3
}

fn cubic_bezier_derivative([p0, p1, p2, p3]: [Vec2; 4], t: f32) -> Vec2 {
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    (p1 - p0) * 3.0 * mt2 + (p2 - p1) * 6.0 * mt * t + (p3 - p2) * 3.0 * t2
}

fn catmull_rom([p0, p1, p2, p3]: [Vec2; 4], t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

fn catmull_rom_derivative([p0, p1, p2, p3]: [Vec2; 4], t: f32) -> Vec2 {
    let t2 = t * t;

    0.5 * ((-p0 + p2)
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * 2.0 * t
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * 3.0 * t2)
}

// Uniform cubic B-spline
fn bspline([p0, p1, p2, p3]: [Vec2; 4], t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;

    (1.0 / 6.0)
        * ((1.0 - 3.0 * t + 3.0 * t2 - t3) * p0
            + (4.0 - 6.0 * t2 + 3.0 * t3) * p1
            + (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) * p2
            + t3 * p3)
}

fn bspline_derivative([p0, p1, p2, p3]: [Vec2; 4], t: f32) -> Vec2 {
    let t2 = t * t;

    (1.0 / 6.0)
        * ((-3.0 + 6.0 * t - 3.0 * t2) * p0
            + (-12.0 * t + 9.0 * t2) * p1
            + (3.0 + 6.0 * t - 9.0 * t2) * p2
            + 3.0 * t2 * p3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_segments() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];

        assert_eq!(SplineType::Linear.segment_count(&points, false), 2);
        assert_eq!(SplineType::Linear.segment_count(&points, true), 3);

        let mid = SplineType::Linear.evaluate(&points, 0.75, false).unwrap();
        assert_abs_diff_eq!(mid.x, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(mid.y, 5.0, epsilon = 1e-5);

        let tangent = SplineType::Linear.evaluate_tangent(&points, 0.25, false).unwrap();
        assert_eq!(tangent, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_too_few_points() {
        let points = [Vec2::ZERO, Vec2::X, Vec2::Y];
        assert!(SplineType::CatmullRom.evaluate(&points, 0.5, false).is_none());
        assert!(SplineType::Linear.evaluate(&points[..1], 0.5, false).is_none());
    }

    #[test]
    fn test_catmull_rom_passes_through_inner_points() {
        let points = [
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 1.0),
        ];

        let start = SplineType::CatmullRom.evaluate(&points, 0.0, false).unwrap();
        let middle = SplineType::CatmullRom.evaluate(&points, 0.5, false).unwrap();
        let end = SplineType::CatmullRom.evaluate(&points, 1.0, false).unwrap();

        assert!((start - points[1]).length() < 1e-5);
        assert!((middle - points[2]).length() < 1e-5);
        assert!((end - points[3]).length() < 1e-5);
    }

    #[test]
    fn test_bezier_endpoints() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 2.0),
            Vec2::new(4.0, 0.0),
        ];

        let start = SplineType::CubicBezier.evaluate(&points, 0.0, false).unwrap();
        let end = SplineType::CubicBezier.evaluate(&points, 1.0, false).unwrap();
        assert_eq!(start, points[0]);
        assert!((end - points[3]).length() < 1e-5);

        // Out-of-range parameters are clamped to the curve ends.
        let past_end = SplineType::CubicBezier.evaluate(&points, 1.5, false).unwrap();
        assert!((past_end - points[3]).length() < 1e-5);
    }

    #[test]
    fn test_bspline_misses_endpoints() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 2.0),
            Vec2::new(4.0, 0.0),
        ];

        let start = SplineType::BSpline.evaluate(&points, 0.0, false).unwrap();
        let end = SplineType::BSpline.evaluate(&points, 1.0, false).unwrap();

        assert!((start - points[0]).length() > 0.5);
        assert!((end - points[3]).length() > 0.5);
        assert_abs_diff_eq!(start.x, 7.0 / 6.0, epsilon = 1e-5);
        assert_abs_diff_eq!(start.y, 10.0 / 6.0, epsilon = 1e-5);
        assert_abs_diff_eq!(end.x, 17.0 / 6.0, epsilon = 1e-5);
    }
}
