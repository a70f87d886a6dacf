use bevy::prelude::*;

use crate::settings::PathFollowSettings;
use crate::spline::Spline;

use super::{FollowError, FollowerEvent, FollowerEventKind, PathFollower};

/// System that advances all running path followers by one frame.
pub fn update_path_followers(
    mut followers: Query<(Entity, &mut PathFollower, &mut Transform)>,
    paths: Query<&Spline>,
    time: Res<Time>,
    settings: Res<PathFollowSettings>,
    mut events: MessageWriter<FollowerEvent>,
) {
    let now = time.elapsed_secs_f64() * 1000.0;
    let delta = time.delta_secs() * 1000.0;

    for (entity, mut follower, mut transform) in &mut followers {
        if !follower.is_running() {
            continue;
        }

        // Despawned paths leave a dangling handle behind.
        let Some(path) = follower.path().and_then(|path| paths.get(path).ok()) else {
            warn!(
                "{entity:?} lost its path {:?}; stopping follower",
                follower.path()
            );
            follower.unbind_path();
            events.write(FollowerEvent {
                entity,
                kind: FollowerEventKind::Faulted(FollowError::NoPathBound),
            });
            continue;
        };

        match follower.update(now, delta, path, &mut *transform, &settings) {
            Ok(Some(kind)) => {
                events.write(FollowerEvent { entity, kind });
            }
            Ok(None) => {}
            Err(err) => {
                warn!("{entity:?} stopped following: {err}");
                events.write(FollowerEvent {
                    entity,
                    kind: FollowerEventKind::Faulted(err),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::path_follow::{FollowConfig, FollowerState, PathFollowPlugin, PathFollowSystems};
    use approx::assert_abs_diff_eq;

    #[derive(Resource, Default)]
    struct Received(Vec<FollowerEventKind>);

    fn collect(mut reader: MessageReader<FollowerEvent>, mut received: ResMut<Received>) {
        received.0.extend(reader.read().map(|event| event.kind));
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<Received>()
            .add_plugins(PathFollowPlugin)
            .add_systems(Update, collect.after(PathFollowSystems));
        app
    }

    fn step(app: &mut App, ms: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(ms));
        app.update();
    }

    #[test]
    fn test_system_moves_and_finishes() {
        let mut app = test_app();
        let path = app
            .world_mut()
            .spawn(Spline::line(Vec2::ZERO, Vec2::new(100.0, 0.0)))
            .id();
        let follower = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 0.0, 3.0),
                PathFollower::following(path, FollowConfig::default().with_speed(50.0))
                    .unwrap(),
            ))
            .id();

        step(&mut app, 1000);
        let transform = app.world().get::<Transform>(follower).unwrap();
        assert_abs_diff_eq!(transform.translation.x, 50.0, epsilon = 1e-2);
        assert_eq!(transform.translation.z, 3.0);

        step(&mut app, 1500);
        let state = app.world().get::<PathFollower>(follower).unwrap().state();
        assert_eq!(state, FollowerState::Completed);
        assert_eq!(
            app.world().resource::<Received>().0,
            vec![FollowerEventKind::Finished]
        );
    }

    #[test]
    fn test_despawned_path_stops_follower() {
        let mut app = test_app();
        let path = app
            .world_mut()
            .spawn(Spline::line(Vec2::ZERO, Vec2::new(100.0, 0.0)))
            .id();
        let follower = app
            .world_mut()
            .spawn((
                Transform::default(),
                PathFollower::following(path, FollowConfig::default()).unwrap(),
            ))
            .id();

        step(&mut app, 100);
        app.world_mut().despawn(path);
        step(&mut app, 100);

        let follower = app.world().get::<PathFollower>(follower).unwrap();
        assert_eq!(follower.state(), FollowerState::Idle);
        assert_eq!(follower.path(), None);
        assert_eq!(
            app.world().resource::<Received>().0,
            vec![FollowerEventKind::Faulted(FollowError::NoPathBound)]
        );
    }

    #[test]
    fn test_shared_path_drives_many_followers() {
        let mut app = test_app();
        let path = app
            .world_mut()
            .spawn(Spline::line(Vec2::ZERO, Vec2::new(0.0, 100.0)))
            .id();
        let slow = app
            .world_mut()
            .spawn((
                Transform::default(),
                PathFollower::following(path, FollowConfig::default().with_duration(4000.0))
                    .unwrap(),
            ))
            .id();
        let fast = app
            .world_mut()
            .spawn((
                Transform::default(),
                PathFollower::following(path, FollowConfig::default().with_duration(2000.0))
                    .unwrap(),
            ))
            .id();

        step(&mut app, 1000);

        let slow = app.world().get::<Transform>(slow).unwrap().translation.y;
        let fast = app.world().get::<Transform>(fast).unwrap().translation.y;
        assert_abs_diff_eq!(slow, 25.0, epsilon = 1e-2);
        assert_abs_diff_eq!(fast, 50.0, epsilon = 1e-2);
    }
}
