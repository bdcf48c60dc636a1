//! Playback Tests
//!
//! Tests for:
//! - Looping resets to 0 at the clip end
//! - One-shot playback holds the last pose
//! - Time scale, pause and zero-duration clips
//! - Timer-driven updates

use std::time::Duration;

use glam::{Mat4, Vec3};

use armature::{
    AnimationDescriptor, AnimationPlayer, ChannelDescriptor, Model, ModelDescriptor, ModelSettings,
    NodeDescriptor, PlaybackSettings, Timer,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One node sliding from x = 0 to x = 4 over `duration` seconds.
fn slider(duration: f32) -> Model {
    let channel = ChannelDescriptor::linear(
        "slider",
        vec![0.0, duration],
        vec![Mat4::IDENTITY, Mat4::from_translation(Vec3::new(4.0, 0.0, 0.0))],
    );
    let descriptor = ModelDescriptor {
        name: "slider".into(),
        nodes: vec![NodeDescriptor::new("slider").with_geometry("box")],
        animations: vec![AnimationDescriptor {
            name: Some("slide".into()),
            channels: vec![channel],
        }],
    };
    Model::from_descriptor(&descriptor, &ModelSettings::default()).unwrap()
}

fn slider_x(model: &Model) -> f32 {
    let node = model.find_by_name("slider").unwrap();
    model.world_transform(node).unwrap().w_axis.x
}

#[test]
fn looping_restarts_at_zero() {
    init_logger();
    let mut model = slider(2.0);
    let mut player = AnimationPlayer::default();

    player.advance(&mut model, 1.5).unwrap();
    assert!(approx(player.elapsed(), 1.5));
    assert!(approx(slider_x(&model), 3.0));

    // Overshoot is discarded, not carried into the next cycle.
    player.advance(&mut model, 0.75).unwrap();
    assert_eq!(player.elapsed(), 0.0);
    assert!(approx(slider_x(&model), 0.0));
    assert!(!player.is_finished());
}

#[test]
fn reaching_duration_exactly_restarts() {
    let mut model = slider(1.0);
    let mut player = AnimationPlayer::default();

    player.advance(&mut model, 1.0).unwrap();
    assert_eq!(player.elapsed(), 0.0);
}

#[test]
fn one_shot_holds_last_pose() {
    let mut model = slider(2.0);
    let mut player = AnimationPlayer::new(PlaybackSettings {
        looping: false,
        ..Default::default()
    });

    player.advance(&mut model, 5.0).unwrap();
    assert!(player.is_finished());
    assert!(approx(player.elapsed(), 2.0));
    assert!(approx(slider_x(&model), 4.0));

    player.advance(&mut model, 1.0).unwrap();
    assert!(approx(player.elapsed(), 2.0));

    player.reset();
    assert!(!player.is_finished());
    assert_eq!(player.elapsed(), 0.0);
}

#[test]
fn time_scale_and_pause() {
    let mut model = slider(4.0);
    let mut player = AnimationPlayer::new(PlaybackSettings {
        time_scale: 0.5,
        ..Default::default()
    });

    player.advance(&mut model, 2.0).unwrap();
    assert!(approx(player.elapsed(), 1.0));

    player.paused = true;
    player.advance(&mut model, 2.0).unwrap();
    assert!(approx(player.elapsed(), 1.0));
    assert!(approx(slider_x(&model), 1.0));
}

#[test]
fn zero_duration_clip_holds_time_at_zero() {
    let mut model = slider(0.0);
    let mut player = AnimationPlayer::default();

    assert_eq!(model.duration(), 0.0);
    player.advance(&mut model, 0.5).unwrap();
    assert_eq!(player.elapsed(), 0.0);
}

#[test]
fn timer_steps_drive_playback() {
    let mut model = slider(1.0);
    let mut player = AnimationPlayer::default();
    let mut timer = Timer::new();

    for _ in 0..3 {
        timer.step(Duration::from_millis(250));
        player.update(&mut model, &timer).unwrap();
    }

    assert_eq!(timer.frame_count, 3);
    assert!(approx(player.elapsed(), 0.75));
    assert!(approx(slider_x(&model), 3.0));
}
