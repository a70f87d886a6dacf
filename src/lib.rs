//! # bevy_path_follow
//!
//! A Bevy plugin for moving 2D entities along spline paths.
//!
//! ## Features
//!
//! - Multiple path types: polyline, cubic Bézier, Catmull-Rom, B-Spline
//! - Distance-based sampling, so a constant pace gives a constant speed
//! - Traversal by duration or by world-space speed
//! - Stop-at-end, loop and yoyo modes with follower events
//! - Optional rotation to the path tangent, static or path-relative offsets
//! - Easing and start delays
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_path_follow::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PathFollowPlugin)
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     commands.spawn(Camera2d);
//!
//!     let path = commands
//!         .spawn(Spline::line(Vec2::new(-200.0, 0.0), Vec2::new(200.0, 0.0)))
//!         .id();
//!
//!     commands.spawn((
//!         Sprite::from_color(Color::WHITE, Vec2::splat(16.0)),
//!         Transform::default(),
//!         PathFollower::following(path, FollowConfig::default().with_duration(3000.0))
//!             .expect("valid config"),
//!     ));
//! }
//! ```
//!
//! ## Plugins
//!
//! - [`SplinePlugin`]: Spline type registration and arc length upkeep
//! - [`PathFollowPlugin`]: Moves [`PathFollower`](path_follow::PathFollower)
//!   entities every frame (adds [`SplinePlugin`] if missing)

pub mod geometry;
pub mod path_follow;
pub mod settings;
pub mod spline;

pub use path_follow::PathFollowPlugin;
pub use settings::PathFollowSettings;
pub use spline::SplinePlugin;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::path_follow::{
        FollowConfig, FollowError, FollowPath, FollowTarget, FollowerEvent, FollowerEventKind,
        FollowerState, LoopMode, OffsetSpace, Pace, PathFollowPlugin, PathFollowSystems,
        PathFollower, TravelDirection,
    };
    pub use crate::settings::PathFollowSettings;
    pub use crate::spline::{Spline, SplineEvaluator, SplinePlugin, SplineType};
}
