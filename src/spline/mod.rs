mod arc_length;
mod components;
mod types;

pub use arc_length::*;
pub use components::*;
pub use types::*;

use bevy::prelude::*;

use crate::settings::PathFollowSettings;

/// Plugin that registers spline types for reflection/serialization and keeps
/// each spline's arc length table in sync with its control points.
pub struct SplinePlugin;

impl Plugin for SplinePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SplineType>()
            .register_type::<Spline>()
            .add_systems(Update, refresh_arc_lengths.in_set(SplineSystems));
    }
}

/// System set containing spline maintenance systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplineSystems;

/// Rebuild arc length tables for splines that were added or edited.
///
/// Uses [`PathFollowSettings::arc_length_samples`] when that resource exists,
/// [`DEFAULT_ARC_LENGTH_SAMPLES`] otherwise.
pub fn refresh_arc_lengths(
    mut splines: Query<&mut Spline, Changed<Spline>>,
    settings: Option<Res<PathFollowSettings>>,
) {
    let samples = settings.map_or(DEFAULT_ARC_LENGTH_SAMPLES, |s| s.arc_length_samples);
    for mut spline in &mut splines {
        // Rebuilding derived data must not retrigger change detection.
        spline
            .bypass_change_detection()
            .rebuild_arc_length(samples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_plugin_runs_without_settings() {
        let mut app = App::new();
        app.add_plugins(SplinePlugin);
        assert!(app.world().get_resource::<PathFollowSettings>().is_none());

        let entity = app
            .world_mut()
            .spawn(Spline::line(Vec2::ZERO, Vec2::new(100.0, 0.0)))
            .id();
        app.update();

        // Field edits leave the table stale until the system runs.
        app.world_mut()
            .get_mut::<Spline>(entity)
            .unwrap()
            .control_points[1] = Vec2::new(0.0, 40.0);
        app.update();

        let spline = app.world().get::<Spline>(entity).unwrap();
        assert!((spline.total_length() - 40.0).abs() < 1e-3);
    }
}
