//! Path following plugin for moving entities along 2D splines.
//!
//! A [`PathFollower`] is bound to one path entity at a time and advances its
//! progress every frame, writing the sampled position (and optionally the
//! tangent rotation) onto the entity's [`Transform`]. Traversals are started,
//! paused, resumed and stopped through methods on the component.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_path_follow::prelude::*;
//!
//! fn setup(mut commands: Commands) {
//!     let path = commands.spawn(Spline::new(
//!         SplineType::CatmullRom,
//!         vec![
//!             Vec2::new(-200.0, 0.0),
//!             Vec2::new(-100.0, 80.0),
//!             Vec2::new(100.0, -80.0),
//!             Vec2::new(200.0, 0.0),
//!         ],
//!     )).id();
//!
//!     let config = FollowConfig::default()
//!         .with_speed(120.0)
//!         .with_loop_mode(LoopMode::Yoyo)
//!         .with_rotate_to_path(true, 0.0);
//!
//!     commands.spawn((
//!         Transform::default(),
//!         PathFollower::following(path, config).expect("valid config"),
//!     ));
//! }
//! ```

mod components;
mod config;
mod error;
mod path;
mod systems;
mod traversal;

pub use components::*;
pub use config::*;
pub use error::FollowError;
pub use path::{FollowPath, FollowTarget};
pub use systems::update_path_followers;

use bevy::prelude::*;

use crate::settings::PathFollowSettings;
use crate::spline::{SplinePlugin, SplineSystems};

/// System set containing the follower update.
///
/// Order your own per-frame systems (animation, for instance) relative to it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathFollowSystems;

/// Plugin that enables entities to follow spline paths.
///
/// Add this plugin to your app, then add [`PathFollower`] components to entities
/// you want to move along splines.
pub struct PathFollowPlugin;

impl Plugin for PathFollowPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SplinePlugin>() {
            app.add_plugins(SplinePlugin);
        }

        app.init_resource::<PathFollowSettings>()
            .register_type::<PathFollowSettings>()
            .register_type::<PathFollower>()
            .register_type::<FollowConfig>()
            .register_type::<LoopMode>()
            .register_type::<TravelDirection>()
            .register_type::<Pace>()
            .register_type::<OffsetSpace>()
            .register_type::<FollowerState>()
            .add_message::<FollowerEvent>()
            .configure_sets(Update, PathFollowSystems.after(SplineSystems))
            .add_systems(
                Update,
                systems::update_path_followers.in_set(PathFollowSystems),
            );
    }
}
