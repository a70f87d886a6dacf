use bevy::math::curve::Curve;
use bevy::prelude::*;

use crate::geometry::{heading, PathFrame};
use crate::settings::PathFollowSettings;

use super::{
    FollowError, FollowPath, FollowTarget, FollowerEventKind, FollowerState, LoopMode,
    OffsetSpace, PathFollower, TravelDirection,
};

impl PathFollower {
    /// Advance one frame and write the result onto `target`.
    ///
    /// `time` and `delta` are in milliseconds. Does nothing unless the follower
    /// is running. Returns the boundary event crossed this frame, if any.
    ///
    /// On error the follower has already been moved to
    /// [`FollowerState::Completed`] and `target` was not written.
    pub fn update(
        &mut self,
        time: f64,
        delta: f32,
        path: &impl FollowPath,
        target: &mut impl FollowTarget,
        settings: &PathFollowSettings,
    ) -> Result<Option<FollowerEventKind>, FollowError> {
        if self.state != FollowerState::Running {
            return Ok(None);
        }

        if !delta.is_finite() {
            return Err(self.fault(FollowError::InvalidFrameTime { delta }));
        }

        let length = path.length();
        // Written as a negated comparison so NaN lengths are caught too.
        if !(length >= settings.min_path_length) {
            return Err(self.fault(FollowError::DegenerateShape { length }));
        }

        let mut remaining = delta.max(0.0);
        if self.delay_remaining > 0.0 {
            let waited = remaining.min(self.delay_remaining);
            self.delay_remaining -= waited;
            remaining -= waited;
        }

        let traversal_ms = self.config.pace.traversal_ms(length);
        let raw = self.progress + self.direction.sign() * remaining / traversal_ms;
        if !raw.is_finite() {
            return Err(self.fault(FollowError::InvalidSample { progress: raw }));
        }

        let (progress, direction, event) =
            resolve_bounds(raw, self.direction, self.config.loop_mode);
        self.progress = progress;
        self.direction = direction;
        if event == Some(FollowerEventKind::Finished) {
            self.state = FollowerState::Completed;
            debug!("path follower finished at {time:.0}ms");
        }

        self.apply(path, target)?;
        Ok(event)
    }

    /// Sample the path at the current progress and write position/rotation.
    fn apply(
        &mut self,
        path: &impl FollowPath,
        target: &mut impl FollowTarget,
    ) -> Result<(), FollowError> {
        let eased = self.config.ease.sample_clamped(self.progress);
        let Some(point) = path.point_at(eased).filter(|p| p.is_finite()) else {
            return Err(self.fault(FollowError::InvalidSample {
                progress: self.progress,
            }));
        };
        self.path_vector = Some(point);

        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => {
                let anchor = if self.config.position_on_path {
                    Vec2::ZERO
                } else {
                    let start = path.point_at(0.0).unwrap_or(point);
                    target.position() - start
                };
                self.anchor = Some(anchor);
                anchor
            }
        };

        let angle = path.tangent_angle(eased).filter(|a| a.is_finite());

        let offset = match (self.config.offset_space, angle) {
            (OffsetSpace::Path, Some(angle)) => {
                PathFrame::from_angle(angle).transform_offset(self.config.offset)
            }
            _ => self.config.offset,
        };
        target.set_position(point + anchor + offset);

        if self.config.rotate_to_path {
            // Keep the previous rotation where the tangent vanishes.
            if let Some(angle) = angle {
                let backward = self.direction == TravelDirection::Backward;
                target.set_rotation(heading(angle, backward) + self.config.rotation_offset);
            }
        }

        Ok(())
    }

    fn fault(&mut self, error: FollowError) -> FollowError {
        self.state = FollowerState::Completed;
        error
    }
}

/// Bring raw progress back into [0, 1] according to the loop mode.
///
/// Only the bound ahead in the direction of travel counts as reached, so a
/// follower sitting at its start is never reported as finished.
fn resolve_bounds(
    progress: f32,
    direction: TravelDirection,
    loop_mode: LoopMode,
) -> (f32, TravelDirection, Option<FollowerEventKind>) {
    let reached = match direction {
        TravelDirection::Forward => progress >= 1.0,
        TravelDirection::Backward => progress <= 0.0,
    };
    if !reached {
        return (progress.clamp(0.0, 1.0), direction, None);
    }

    match loop_mode {
        LoopMode::None => (
            direction.reversed().start_progress(),
            direction,
            Some(FollowerEventKind::Finished),
        ),
        LoopMode::Loop => {
            // Backward followers sitting exactly on 0 wrap on the next step.
            if progress == 0.0 {
                return (0.0, direction, None);
            }
            (
                progress.rem_euclid(1.0),
                direction,
                Some(FollowerEventKind::LoopCompleted),
            )
        }
        LoopMode::Yoyo => {
            // Fold onto a triangle wave so overshoots of any size land in range.
            let phase = progress.rem_euclid(2.0);
            let folded = if phase <= 1.0 { phase } else { 2.0 - phase };
            let direction = if phase == 0.0 {
                TravelDirection::Forward
            } else if phase == 1.0 {
                TravelDirection::Backward
            } else if phase < 1.0 {
                direction
            } else {
                direction.reversed()
            };
            let event = match direction {
                TravelDirection::Backward => FollowerEventKind::ReachedEnd,
                TravelDirection::Forward => FollowerEventKind::ReachedStart,
            };
            (folded, direction, Some(event))
        }
    }
}
