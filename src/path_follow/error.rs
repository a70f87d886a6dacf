/// Errors reported by [`PathFollower`](super::PathFollower) control calls and
/// per-frame updates.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FollowError {
    #[error("no path is bound to the follower")]
    NoPathBound,

    #[error("invalid follow config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },

    #[error("path is too short to follow (length {length})")]
    DegenerateShape { length: f32 },

    #[error("path produced a non-finite sample at progress {progress}")]
    InvalidSample { progress: f32 },

    #[error("frame delta must be finite, got {delta}")]
    InvalidFrameTime { delta: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_error_display() {
        let err = FollowError::InvalidConfig {
            field: "duration",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "invalid follow config: duration = 0");
        assert_eq!(
            FollowError::NoPathBound.to_string(),
            "no path is bound to the follower"
        );
    }
}
