use bevy::prelude::*;

use super::arc_length::{ArcLengthTable, DEFAULT_ARC_LENGTH_SAMPLES};
use super::types::{SplineEvaluator, SplineType};

/// A 2D spline component that followers can be bound to.
///
/// The arc length table is derived data: it is rebuilt by the mutators below
/// and by the plugin whenever the component changes. Code that edits the public
/// fields outside of a running app should call [`Spline::rebuild_arc_length`].
#[derive(Component, Debug, Clone, Reflect, Default)]
#[reflect(Component)]
pub struct Spline {
    /// The type of spline interpolation.
    pub spline_type: SplineType,
    /// Control points defining the spline shape.
    pub control_points: Vec<Vec2>,
    /// Whether the spline forms a closed loop.
    pub closed: bool,
    #[reflect(ignore)]
    arc_length: ArcLengthTable,
}

impl Spline {
    /// Create a new spline with the given type and control points.
    pub fn new(spline_type: SplineType, control_points: Vec<Vec2>) -> Self {
        Self::build(spline_type, control_points, false)
    }

    /// Create a new closed spline.
    pub fn closed(spline_type: SplineType, control_points: Vec<Vec2>) -> Self {
        Self::build(spline_type, control_points, true)
    }

    /// A straight path from `start` to `end`.
    pub fn line(start: Vec2, end: Vec2) -> Self {
        Self::new(SplineType::Linear, vec![start, end])
    }

    fn build(spline_type: SplineType, control_points: Vec<Vec2>, closed: bool) -> Self {
        let mut spline = Self {
            spline_type,
            control_points,
            closed,
            arc_length: ArcLengthTable::default(),
        };
        spline.rebuild_arc_length(DEFAULT_ARC_LENGTH_SAMPLES);
        spline
    }

    /// Evaluate the spline at raw parameter t (0.0 to 1.0).
    pub fn evaluate(&self, t: f32) -> Option<Vec2> {
        self.spline_type
            .evaluate(&self.control_points, t, self.closed)
    }

    /// Evaluate the tangent at raw parameter t.
    pub fn evaluate_tangent(&self, t: f32) -> Option<Vec2> {
        self.spline_type
            .evaluate_tangent(&self.control_points, t, self.closed)
    }

    /// Get the number of segments in this spline.
    pub fn segment_count(&self) -> usize {
        self.spline_type
            .segment_count(&self.control_points, self.closed)
    }

    /// Check if the spline has enough points to be valid.
    pub fn is_valid(&self) -> bool {
        self.control_points.len() >= self.spline_type.min_points()
    }

    /// Cached arc length table.
    pub fn arc_length(&self) -> &ArcLengthTable {
        &self.arc_length
    }

    /// Total length of the curve in world units.
    pub fn total_length(&self) -> f32 {
        self.arc_length.total_length()
    }

    /// Recompute the arc length table with the given sample count.
    pub fn rebuild_arc_length(&mut self, samples: usize) {
        self.arc_length = ArcLengthTable::compute(self, samples);
    }

    /// Add a control point at the end of the spline.
    pub fn add_point(&mut self, position: Vec2) {
        self.control_points.push(position);
        self.rebuild_arc_length(DEFAULT_ARC_LENGTH_SAMPLES);
    }

    /// Replace all control points.
    pub fn set_control_points(&mut self, control_points: Vec<Vec2>) {
        self.control_points = control_points;
        self.rebuild_arc_length(DEFAULT_ARC_LENGTH_SAMPLES);
    }

    /// Toggle between closed and open spline.
    pub fn toggle_closed(&mut self) {
        self.closed = !self.closed;
        self.rebuild_arc_length(DEFAULT_ARC_LENGTH_SAMPLES);
    }
}
