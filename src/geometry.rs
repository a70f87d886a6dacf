//! Geometry utilities for orienting objects along 2D paths.

use std::f32::consts::PI;

use bevy::prelude::*;

/// A local frame on a 2D path defined by the tangent and its left-hand normal.
///
/// Used to place offsets relative to the direction of the path and to derive
/// the rotation of an object facing along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFrame {
    /// Unit tangent (along the path).
    pub tangent: Vec2,
    /// Unit normal, the tangent rotated a quarter turn counter-clockwise.
    pub normal: Vec2,
}

impl PathFrame {
    /// Build a frame from a (not necessarily normalized) tangent.
    ///
    /// Returns `None` for zero-length or non-finite tangents.
    pub fn from_tangent(tangent: Vec2) -> Option<Self> {
        let tangent = tangent.try_normalize()?;
        Some(Self {
            tangent,
            normal: tangent.perp(),
        })
    }

    /// Build a frame from an angle in radians, measured from +X.
    pub fn from_angle(angle: f32) -> Self {
        let tangent = Vec2::from_angle(angle);
        Self {
            tangent,
            normal: tangent.perp(),
        }
    }

    /// Angle of the tangent in radians, measured counter-clockwise from +X.
    pub fn angle(&self) -> f32 {
        self.tangent.to_angle()
    }

    /// Transform a local offset into world space.
    ///
    /// Local coordinates map as: X → tangent, Y → normal.
    pub fn transform_offset(&self, local: Vec2) -> Vec2 {
        self.tangent * local.x + self.normal * local.y
    }
}

/// Angle an object should face when travelling along a tangent of the given
/// angle. Travelling backward faces the opposite way.
pub fn heading(tangent_angle: f32, backward: bool) -> f32 {
    let angle = if backward { tangent_angle + PI } else { tangent_angle };
    wrap_angle(angle)
}

/// Wrap an angle into (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}
