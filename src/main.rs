//! Headless rail-shooter runner
//!
//! Drives a scene with a scripted pilot and the recording audio/renderer
//! sinks, then prints a session summary. Useful for balancing tunings and
//! checking that an asset directory is complete.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use rail_shooter::assets::{AssetLoader, AssetManifest, DirectoryLoader, HeadlessLoader};
use rail_shooter::audio::RecordingAudio;
use rail_shooter::platform::{Control, InputState};
use rail_shooter::renderer::CommandRecorder;
use rail_shooter::{Mode, Scene, Tuning};

#[derive(Parser, Debug)]
#[command(about = "Run the rail shooter headless with a scripted pilot", version)]
struct Args {
    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Tuning JSON file (missing fields keep their defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Use the first-release balance instead of the default tuning
    #[arg(long, conflicts_with = "tuning")]
    classic: bool,
    /// Asset manifest JSON file
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Require every asset to exist under this directory
    #[arg(long)]
    assets: Option<PathBuf>,
}

type HeadlessScene = Scene<InputState, RecordingAudio, CommandRecorder>;

#[derive(Debug, Default)]
struct Summary {
    runs: u32,
    best_score: u32,
    total_score: u32,
    draw_calls: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading tuning {}", path.display()))?;
            Tuning::from_json(&json)?
        }
        None if args.classic => Tuning::classic(),
        None => Tuning::default(),
    };
    let manifest = match &args.manifest {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading manifest {}", path.display()))?;
            AssetManifest::from_json(&json)?
        }
        None => AssetManifest::default(),
    };

    let mut scene = match &args.assets {
        Some(root) => build_scene(&mut DirectoryLoader::new(root), &manifest, tuning, args.seed)
            .with_context(|| format!("loading assets from {}", root.display()))?,
        None => build_scene(&mut HeadlessLoader::new(), &manifest, tuning, args.seed)?,
    };

    log::info!("Rail Shooter (headless) running {} frames", args.frames);
    let summary = run(&mut scene, args.frames);

    println!(
        "frames={} runs={} best_score={} total_score={} mode={:?}",
        args.frames,
        summary.runs,
        summary.best_score,
        summary.total_score,
        scene.mode()
    );
    println!(
        "draw_calls={} audio_commands={}",
        summary.draw_calls,
        scene.audio().commands.len()
    );
    Ok(())
}

fn build_scene(
    loader: &mut impl AssetLoader,
    manifest: &AssetManifest,
    tuning: Tuning,
    seed: u64,
) -> Result<HeadlessScene> {
    let scene = Scene::new(
        InputState::new(),
        RecordingAudio::new(),
        CommandRecorder::new(),
        loader,
        manifest,
        tuning,
        seed,
    )?;
    Ok(scene)
}

fn run(scene: &mut HeadlessScene, frames: u64) -> Summary {
    let mut summary = Summary::default();
    for frame in 0..frames {
        pilot(scene, frame);

        let before = scene.mode();
        scene.update();
        scene.input_mut().end_frame();

        match (before, scene.mode()) {
            (Mode::Title, Mode::Playing) => summary.runs += 1,
            (Mode::Playing, Mode::GameOver) => {
                let score = scene.world().ledger.score;
                summary.best_score = summary.best_score.max(score);
                summary.total_score += score;
            }
            _ => {}
        }

        scene.renderer_mut().begin_frame();
        scene.draw();
        summary.draw_calls += scene.renderer().commands.len();
    }
    summary
}

/// Tap confirm on menus; in play, chase the nearest enemy's lane and fire
fn pilot(scene: &mut HeadlessScene, frame: u64) {
    let mode = scene.mode();
    let world = scene.world();
    let player = world.player.transform.translation;
    let target = world
        .enemies
        .iter_active()
        .map(|(_, e)| e.transform.translation)
        .filter(|t| t.z > player.z)
        .min_by(|a, b| a.z.total_cmp(&b.z))
        .map(|t| t.x);

    let input = scene.input_mut();
    for control in Control::ALL {
        input.release(control);
    }
    match mode {
        Mode::Title | Mode::GameOver => {
            // Tap once a second
            if frame % 60 == 59 {
                input.press(Control::Confirm);
            }
        }
        Mode::Playing => {
            input.press(Control::Fire);
            if let Some(x) = target {
                if x < player.x - 0.1 {
                    input.press(Control::Left);
                } else if x > player.x + 0.1 {
                    input.press(Control::Right);
                }
            }
        }
    }
}
