use bevy::prelude::*;

use crate::spline::DEFAULT_ARC_LENGTH_SAMPLES;

/// Global settings for path following.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource, Default)]
pub struct PathFollowSettings {
    /// Number of samples used when a spline's arc length table is rebuilt.
    pub arc_length_samples: usize,
    /// Paths shorter than this (in world units) are treated as degenerate.
    pub min_path_length: f32,
}

impl Default for PathFollowSettings {
    fn default() -> Self {
        Self {
            arc_length_samples: DEFAULT_ARC_LENGTH_SAMPLES,
            min_path_length: 1e-4,
        }
    }
}
