use bevy::prelude::*;

use super::{FollowConfig, FollowError, TravelDirection};

/// Current state of a path follower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Default)]
pub enum FollowerState {
    /// No traversal is active.
    #[default]
    Idle,
    /// Progress advances on every update.
    Running,
    /// Suspended mid-traversal; progress is retained.
    Paused,
    /// A non-looping traversal reached its end, or a fault stopped it.
    Completed,
}

/// Component that moves an entity along a path.
///
/// The follower holds a non-owning handle to the path entity (an entity with a
/// [`Spline`](crate::spline::Spline)). Many followers can share one path, and
/// the path may be despawned or swapped at any time. Each frame the plugin
/// writes the sampled position, and optionally the rotation, onto the entity's
/// [`Transform`].
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component, Default)]
pub struct PathFollower {
    pub(super) path: Option<Entity>,
    pub(super) progress: f32,
    pub(super) state: FollowerState,
    pub(super) direction: TravelDirection,
    pub(super) config: FollowConfig,
    pub(super) delay_remaining: f32,
    /// Last point sampled from the path.
    pub(super) path_vector: Option<Vec2>,
    /// Distance kept from the path start when not snapping onto the path.
    /// Captured on the first sample after a start.
    pub(super) anchor: Option<Vec2>,
}

impl Default for PathFollower {
    fn default() -> Self {
        Self {
            path: None,
            progress: 0.0,
            state: FollowerState::Idle,
            direction: TravelDirection::Forward,
            config: FollowConfig::default(),
            delay_remaining: 0.0,
            path_vector: None,
            anchor: None,
        }
    }
}

impl PathFollower {
    /// Create an idle follower bound to the given path entity.
    pub fn new(path: Entity) -> Self {
        Self {
            path: Some(path),
            ..default()
        }
    }

    /// Create a follower bound to `path` that starts right away.
    pub fn following(path: Entity, config: FollowConfig) -> Result<Self, FollowError> {
        let mut follower = Self::new(path);
        follower.start_follow(config)?;
        Ok(follower)
    }

    /// Bind to a different path.
    ///
    /// Progress, state and the kept distance from the path start carry over;
    /// the cached sample is discarded so the next update samples only the new
    /// path.
    pub fn bind_path(&mut self, path: Entity) {
        if self.path != Some(path) {
            debug!("path follower rebound from {:?} to {path:?}", self.path);
        }
        self.path = Some(path);
        self.path_vector = None;
    }

    /// Drop the path handle and go idle.
    pub fn unbind_path(&mut self) {
        self.path = None;
        self.path_vector = None;
        self.anchor = None;
        self.state = FollowerState::Idle;
    }

    /// Bind to `path` and, when a config is given, start following it.
    ///
    /// An invalid config is rejected before anything is changed.
    pub fn set_path(
        &mut self,
        path: Entity,
        config: Option<FollowConfig>,
    ) -> Result<(), FollowError> {
        if let Some(config) = &config {
            config.validate()?;
        }
        self.bind_path(path);
        match config {
            Some(config) => self.start_follow(config),
            None => Ok(()),
        }
    }

    /// Start a new traversal from any state.
    ///
    /// Progress resets to the configured start and every setting from the
    /// previous traversal is replaced. On error the follower is left untouched.
    pub fn start_follow(&mut self, config: FollowConfig) -> Result<(), FollowError> {
        if self.path.is_none() {
            return Err(FollowError::NoPathBound);
        }
        config.validate()?;

        self.progress = config.initial_progress();
        self.direction = config.direction;
        self.delay_remaining = config.delay_ms;
        self.config = config;
        self.path_vector = None;
        self.anchor = None;
        self.state = FollowerState::Running;
        debug!(
            "path follower started at {} ({:?}, {:?})",
            self.progress, self.direction, self.config.loop_mode
        );
        Ok(())
    }

    /// Suspend a running traversal.
    pub fn pause_follow(&mut self) {
        if self.state == FollowerState::Running {
            self.state = FollowerState::Paused;
        } else {
            debug!("pause ignored: follower is {:?}", self.state);
        }
    }

    /// Continue a paused traversal.
    pub fn resume_follow(&mut self) {
        if self.state == FollowerState::Paused {
            self.state = FollowerState::Running;
        } else {
            debug!("resume ignored: follower is {:?}", self.state);
        }
    }

    /// Stop the traversal. Progress stays where it is.
    pub fn stop_follow(&mut self) {
        self.state = FollowerState::Idle;
    }

    /// Change tangent alignment without restarting.
    ///
    /// A non-finite offset is rejected and nothing is changed.
    pub fn set_rotate_to_path(&mut self, enabled: bool, offset: f32) -> Result<(), FollowError> {
        if !offset.is_finite() {
            return Err(FollowError::InvalidConfig {
                field: "rotation_offset",
                value: offset,
            });
        }
        self.config.rotate_to_path = enabled;
        self.config.rotation_offset = offset;
        Ok(())
    }

    /// The bound path entity, if any.
    pub fn path(&self) -> Option<Entity> {
        self.path
    }

    /// Current progress along the path.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current state.
    pub fn state(&self) -> FollowerState {
        self.state
    }

    /// Current direction of travel.
    pub fn direction(&self) -> TravelDirection {
        self.direction
    }

    /// Settings of the current (or last) traversal.
    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Point last sampled from the path, before offsets.
    pub fn path_vector(&self) -> Option<Vec2> {
        self.path_vector
    }

    /// Check if progress advances on update.
    pub fn is_running(&self) -> bool {
        self.state == FollowerState::Running
    }

    /// Check if a traversal is in progress, running or paused, on a bound path.
    pub fn is_following(&self) -> bool {
        self.path.is_some()
            && matches!(self.state, FollowerState::Running | FollowerState::Paused)
    }

    /// Check if the follower is paused mid-traversal.
    pub fn is_paused(&self) -> bool {
        self.state == FollowerState::Paused
    }

    /// Check if the last traversal has completed.
    pub fn is_completed(&self) -> bool {
        self.state == FollowerState::Completed
    }
}

/// Message emitted when a follower reaches a significant point.
#[derive(Message, Debug, Clone)]
pub struct FollowerEvent {
    /// The entity with the PathFollower component.
    pub entity: Entity,
    /// The type of event.
    pub kind: FollowerEventKind,
}

/// Types of follower events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowerEventKind {
    /// Bounced off the end of the path (yoyo mode).
    ReachedEnd,
    /// Bounced off the start of the path (yoyo mode).
    ReachedStart,
    /// Wrapped around to the other end (loop mode).
    LoopCompleted,
    /// A non-looping traversal reached its end.
    Finished,
    /// The traversal was stopped by an error.
    Faulted(FollowError),
}
