//! Arc length parameterization for splines.
//!
//! Followers sample paths by distance travelled rather than by the raw spline
//! parameter, so a constant pace gives a constant on-screen speed regardless of
//! how the control points are spaced.

use std::cmp::Ordering;

use bevy::prelude::*;

use super::Spline;

/// Default number of samples for arc length calculations.
pub const DEFAULT_ARC_LENGTH_SAMPLES: usize = 128;

/// Arc length lookup table for length-to-t conversion.
///
/// The table is built by sampling the spline at regular t intervals and
/// accumulating the distance between samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArcLengthTable {
    /// (t, cumulative_length) pairs, always starting with (0.0, 0.0).
    samples: Vec<(f32, f32)>,
}

impl ArcLengthTable {
    /// Compute an arc length table for a spline.
    ///
    /// Returns an empty table when the spline cannot be evaluated.
    pub fn compute(spline: &Spline, samples: usize) -> Self {
        let samples = samples.max(1);
        let Some(mut prev_point) = spline.evaluate(0.0) else {
            return Self::default();
        };

        let mut table = Vec::with_capacity(samples + 1);
        let mut cumulative_length = 0.0;
        table.push((0.0, 0.0));

        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            let point = spline.evaluate(t).unwrap_or(prev_point);
            cumulative_length += point.distance(prev_point);
            table.push((t, cumulative_length));
            prev_point = point;
        }

        Self { samples: table }
    }

    /// Get the total arc length of the spline.
    pub fn total_length(&self) -> f32 {
        self.samples.last().map(|(_, l)| *l).unwrap_or(0.0)
    }

    /// Whether the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Find the t parameter for a given arc length.
    ///
    /// Returns a value in [0, 1] corresponding to the position along
    /// the spline at the given arc length from the start.
    pub fn length_to_t(&self, target_length: f32) -> f32 {
        let total_length = self.total_length();
        if total_length <= 0.0 {
            return 0.0;
        }

        let target = target_length.clamp(0.0, total_length);

        let idx = self
            .samples
            .binary_search_by(|(_, l)| l.partial_cmp(&target).unwrap_or(Ordering::Equal))
            .unwrap_or_else(|i| i.saturating_sub(1));

        if idx >= self.samples.len() - 1 {
            return 1.0;
        }

        let (t0, l0) = self.samples[idx];
        let (t1, l1) = self.samples[idx + 1];

        if (l1 - l0).abs() < 1e-6 {
            return t0;
        }

        let alpha = (target - l0) / (l1 - l0);
        t0 + alpha * (t1 - t0)
    }

    /// Map a normalized distance (0 = start, 1 = end) to the spline parameter.
    pub fn progress_to_t(&self, progress: f32) -> f32 {
        if self.is_empty() {
            return progress.clamp(0.0, 1.0);
        }
        self.length_to_t(progress * self.total_length())
    }
}
