use std::path::PathBuf;
use std::time::Duration;

use armature::{
    AnimationPlayer, BindingPolicy, Model, ModelDescriptor, ModelSettings, PlaybackSettings,
    Timer, ViewTransforms,
};

const FRAME: Duration = Duration::from_micros(16_667);
const FRAMES: u32 = 180;
const REPORT_EVERY: u32 = 30;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (flags, paths): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg.starts_with("--"));
    let path = paths.first().map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/two_bone.json"),
        PathBuf::from,
    );
    let lenient = flags.iter().any(|flag| flag == "--lenient");

    println!("Loading model from: {}", path.display());
    let descriptor = ModelDescriptor::from_path(&path)?;

    let settings = ModelSettings {
        binding: if lenient {
            BindingPolicy::Lenient
        } else {
            BindingPolicy::Strict
        },
        ..Default::default()
    };
    let mut model = Model::from_descriptor(&descriptor, &settings)?;

    println!(
        "Model '{}': {} nodes, {} geometries, {} animations",
        model.name(),
        model.tree().len(),
        model.geometries().len(),
        model.animations().len()
    );
    if let Some(clip) = model.active_animation() {
        println!(
            "Playing animation: {} (duration: {:.2}s)",
            clip.name().unwrap_or("<unnamed>"),
            clip.duration()
        );
    }

    let mut player = AnimationPlayer::new(PlaybackSettings::default());
    let mut timer = Timer::new();
    let view = ViewTransforms::default();

    for frame in 0..FRAMES {
        timer.step(FRAME);
        player.update(&mut model, &timer)?;

        if frame % REPORT_EVERY != 0 {
            continue;
        }

        println!("frame {frame:>4}  t = {:.3}s", player.elapsed());
        for (geometry, draw) in model.geometries().iter().zip(model.draw_transforms(&view)) {
            match draw.palette() {
                Some(palette) => {
                    for (i, joint) in palette.joints().iter().enumerate() {
                        let origin = joint.transform_point3(glam::Vec3::ZERO);
                        let tip = joint.transform_point3(glam::Vec3::Y);
                        println!("  {} joint {i}: origin {origin:.3} y-axis tip {tip:.3}", geometry.name());
                    }
                }
                None => {
                    let origin = draw.world().transform_point3(glam::Vec3::ZERO);
                    println!("  {} at {origin:.3}", geometry.name());
                }
            }
        }
    }

    log::info!("Played {} frames", timer.frame_count);
    Ok(())
}
