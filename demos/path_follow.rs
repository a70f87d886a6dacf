//! Path following example.
//!
//! Demonstrates sprites following one closed path with different loop modes.
//!
//! Run with: `cargo run --example path_follow`

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy_path_follow::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PathFollowPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (handle_input, log_follower_events))
        .run();
}

#[derive(Component)]
pub struct FollowerLabel(&'static str);

#[derive(Component)]
pub struct StartConfig(FollowConfig);

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    // Closed figure-8; (0, 0) is listed twice so the curve crosses itself there
    let path = commands
        .spawn(Spline::closed(
            SplineType::CatmullRom,
            vec![
                Vec2::new(-320.0, 0.0),
                Vec2::new(-160.0, 200.0),
                Vec2::new(0.0, 0.0),
                Vec2::new(160.0, -200.0),
                Vec2::new(320.0, 0.0),
                Vec2::new(160.0, 200.0),
                Vec2::new(0.0, 0.0),
                Vec2::new(-160.0, -200.0),
            ],
        ))
        .id();

    let followers = [
        (
            "Loop",
            Color::srgb(0.9, 0.2, 0.2),
            FollowConfig::default()
                .with_speed(240.0)
                .with_loop_mode(LoopMode::Loop)
                .with_rotate_to_path(true, 0.0),
        ),
        (
            "Yoyo",
            Color::srgb(0.2, 0.9, 0.2),
            FollowConfig::default()
                .with_speed(160.0)
                .with_start_at(0.25)
                .with_loop_mode(LoopMode::Yoyo)
                .with_rotate_to_path(true, FRAC_PI_2),
        ),
        (
            "None",
            Color::srgb(0.2, 0.2, 0.9),
            FollowConfig::default()
                .with_duration(8000.0)
                .with_start_at(0.5)
                .with_offset(Vec2::new(0.0, 24.0), OffsetSpace::Path)
                .with_delay(1000.0),
        ),
    ];

    for (label, color, config) in followers {
        let Ok(follower) = PathFollower::following(path, config) else {
            continue;
        };
        commands.spawn((
            Sprite::from_color(color, Vec2::new(32.0, 16.0)),
            Transform::default(),
            follower,
            StartConfig(config),
            FollowerLabel(label),
        ));
    }

    println!("\n=== Path Following Example ===");
    println!("Red: Loop mode (continuous)");
    println!("Green: Yoyo mode (bounces)");
    println!("Blue: None mode (stops at end, path-relative offset)");
    println!();
    println!("Controls:");
    println!("  Space  - Pause/Resume all followers");
    println!("  R      - Restart all followers");
    println!("================================\n");
}

fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut followers: Query<(&mut PathFollower, &StartConfig)>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        for (mut follower, _) in &mut followers {
            if follower.is_running() {
                follower.pause_follow();
                println!("Paused");
            } else {
                follower.resume_follow();
                println!("Playing");
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        for (mut follower, start) in &mut followers {
            if let Err(err) = follower.start_follow(start.0) {
                println!("Restart failed: {err}");
            }
        }
        println!("Restarted all followers");
    }
}

fn log_follower_events(mut events: MessageReader<FollowerEvent>, labels: Query<&FollowerLabel>) {
    for event in events.read() {
        let label = labels.get(event.entity).map(|l| l.0).unwrap_or("Unknown");

        match event.kind {
            FollowerEventKind::ReachedEnd => {
                println!("[{}] Reached end", label);
            }
            FollowerEventKind::ReachedStart => {
                println!("[{}] Reached start", label);
            }
            FollowerEventKind::LoopCompleted => {
                println!("[{}] Loop completed", label);
            }
            FollowerEventKind::Finished => {
                println!("[{}] Finished!", label);
            }
            FollowerEventKind::Faulted(err) => {
                println!("[{}] Stopped: {}", label, err);
            }
        }
    }
}
