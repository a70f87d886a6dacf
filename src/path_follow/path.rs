use bevy::prelude::*;

use crate::geometry::PathFrame;
use crate::spline::Spline;

/// A path a follower can be bound to.
///
/// Sampling must be pure: the same progress always yields the same result, so
/// any number of followers can share one path.
pub trait FollowPath {
    /// Point at `progress` (0 = start, 1 = end), by distance along the path.
    fn point_at(&self, progress: f32) -> Option<Vec2>;

    /// Direction of the path at `progress`, in radians from +X.
    ///
    /// `None` where the tangent vanishes.
    fn tangent_angle(&self, progress: f32) -> Option<f32>;

    /// Total length in world units.
    fn length(&self) -> f32;
}

impl FollowPath for Spline {
    fn point_at(&self, progress: f32) -> Option<Vec2> {
        self.evaluate(self.arc_length().progress_to_t(progress))
    }

    fn tangent_angle(&self, progress: f32) -> Option<f32> {
        let tangent = self.evaluate_tangent(self.arc_length().progress_to_t(progress))?;
        PathFrame::from_tangent(tangent).map(|frame| frame.angle())
    }

    fn length(&self) -> f32 {
        self.total_length()
    }
}

/// The object a follower moves: anything with a 2D position and a rotation.
pub trait FollowTarget {
    /// Current world position.
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Set the rotation in radians, counter-clockwise from +X.
    fn set_rotation(&mut self, angle: f32);
}

/// Writes x/y of the translation and rotates about Z. Depth is left alone.
impl FollowTarget for Transform {
    fn position(&self) -> Vec2 {
        self.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.translation.x = position.x;
        self.translation.y = position.y;
    }

    fn set_rotation(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_z(angle);
    }
}
