use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use super::FollowError;

/// How the follower behaves when progress leaves [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub enum LoopMode {
    /// Stop at the end of the path and report completion.
    #[default]
    None,
    /// Wrap around to the other end and keep going.
    Loop,
    /// Reverse direction at each end.
    Yoyo,
}

/// Direction of travel along the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub enum TravelDirection {
    /// Progress increases towards 1.
    #[default]
    Forward,
    /// Progress decreases towards 0.
    Backward,
}

impl TravelDirection {
    /// +1.0 for forward, -1.0 for backward.
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Progress at which a traversal in this direction begins.
    pub fn start_progress(self) -> f32 {
        match self {
            Self::Forward => 0.0,
            Self::Backward => 1.0,
        }
    }
}

/// How fast a traversal runs.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum Pace {
    /// Time for one full traversal, in milliseconds.
    Duration(f32),
    /// Travel speed in world units per second.
    Speed(f32),
}

impl Default for Pace {
    fn default() -> Self {
        Self::Duration(1000.0)
    }
}

impl Pace {
    /// Milliseconds needed to cover a path of the given length.
    pub fn traversal_ms(self, path_length: f32) -> f32 {
        match self {
            Self::Duration(ms) => ms,
            Self::Speed(units_per_sec) => path_length / units_per_sec * 1000.0,
        }
    }
}

/// Coordinate space of the configured position offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub enum OffsetSpace {
    /// Offset is added in world axes.
    #[default]
    World,
    /// Offset x runs along the path tangent, y along its left-hand normal.
    Path,
}

/// Settings for a single traversal, applied by
/// [`PathFollower::start_follow`](super::PathFollower::start_follow).
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Default)]
pub struct FollowConfig {
    /// Initial progress. Defaults to the start of the chosen direction.
    pub start_at: Option<f32>,
    /// Initial direction of travel.
    pub direction: TravelDirection,
    /// What happens at the ends of the path.
    pub loop_mode: LoopMode,
    /// Whether the follower's rotation tracks the path tangent.
    pub rotate_to_path: bool,
    /// Angle in radians added to the tangent-derived rotation.
    pub rotation_offset: f32,
    /// Traversal duration or speed.
    pub pace: Pace,
    /// Static offset added to every sampled position.
    pub offset: Vec2,
    /// Space the offset is expressed in.
    pub offset_space: OffsetSpace,
    /// When false the follower keeps its distance from the path start instead
    /// of snapping onto the path.
    pub position_on_path: bool,
    /// Easing applied to progress before the path is sampled.
    pub ease: EaseFunction,
    /// Milliseconds to wait after starting before progress advances.
    pub delay_ms: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            start_at: None,
            direction: TravelDirection::Forward,
            loop_mode: LoopMode::None,
            rotate_to_path: false,
            rotation_offset: 0.0,
            pace: Pace::default(),
            offset: Vec2::ZERO,
            offset_space: OffsetSpace::World,
            position_on_path: true,
            ease: EaseFunction::Linear,
            delay_ms: 0.0,
        }
    }
}

impl FollowConfig {
    /// Traverse the whole path in `ms` milliseconds.
    pub fn with_duration(mut self, ms: f32) -> Self {
        self.pace = Pace::Duration(ms);
        self
    }

    /// Travel at `units_per_sec` world units per second.
    pub fn with_speed(mut self, units_per_sec: f32) -> Self {
        self.pace = Pace::Speed(units_per_sec);
        self
    }

    /// Set the starting progress (0.0 to 1.0).
    pub fn with_start_at(mut self, progress: f32) -> Self {
        self.start_at = Some(progress);
        self
    }

    /// Set the initial direction of travel.
    pub fn with_direction(mut self, direction: TravelDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the loop mode.
    pub fn with_loop_mode(mut self, mode: LoopMode) -> Self {
        self.loop_mode = mode;
        self
    }

    /// Enable tangent alignment with an extra rotation in radians.
    pub fn with_rotate_to_path(mut self, enabled: bool, offset: f32) -> Self {
        self.rotate_to_path = enabled;
        self.rotation_offset = offset;
        self
    }

    /// Set a position offset and the space it is expressed in.
    pub fn with_offset(mut self, offset: Vec2, space: OffsetSpace) -> Self {
        self.offset = offset;
        self.offset_space = space;
        self
    }

    /// Keep the follower's current distance from the path start.
    pub fn keep_relative_position(mut self) -> Self {
        self.position_on_path = false;
        self
    }

    /// Set the easing curve.
    pub fn with_ease(mut self, ease: EaseFunction) -> Self {
        self.ease = ease;
        self
    }

    /// Wait before starting to move.
    pub fn with_delay(mut self, ms: f32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Progress the traversal starts from.
    pub fn initial_progress(&self) -> f32 {
        self.start_at
            .unwrap_or_else(|| self.direction.start_progress())
    }

    /// Check every numeric field.
    pub fn validate(&self) -> Result<(), FollowError> {
        let (field, pace) = match self.pace {
            Pace::Duration(ms) => ("duration", ms),
            Pace::Speed(speed) => ("speed", speed),
        };
        if !(pace.is_finite() && pace > 0.0) {
            return Err(FollowError::InvalidConfig { field, value: pace });
        }

        if let Some(start) = self.start_at {
            if !(0.0..=1.0).contains(&start) {
                return Err(FollowError::InvalidConfig {
                    field: "start_at",
                    value: start,
                });
            }
        }

        if !(self.delay_ms.is_finite() && self.delay_ms >= 0.0) {
            return Err(FollowError::InvalidConfig {
                field: "delay_ms",
                value: self.delay_ms,
            });
        }

        if !self.rotation_offset.is_finite() {
            return Err(FollowError::InvalidConfig {
                field: "rotation_offset",
                value: self.rotation_offset,
            });
        }

        if let Some(bad) = [self.offset.x, self.offset.y]
            .into_iter()
            .find(|v| !v.is_finite())
        {
            return Err(FollowError::InvalidConfig {
                field: "offset",
                value: bad,
            });
        }

        Ok(())
    }
}
