//! Scene state machine
//!
//! Owns the world, the injected input/audio/renderer capabilities and the
//! loaded asset ids. The host calls [`Scene::update`] then [`Scene::draw`]
//! once per frame.

use crate::assets::{AssetLoader, AssetManifest, SceneAssets};
use crate::audio::{AudioSink, Jukebox, SoundEffect, Track};
use crate::blink_visible;
use crate::error::SceneError;
use crate::platform::{Control, InputSource};
use crate::renderer::{Camera, RendererSink};
use crate::sim::{GameEvent, TickInput, World, tick};
use crate::tuning::Tuning;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Title screen, waiting for confirm
    #[default]
    Title,
    /// A run in progress
    Playing,
    /// Run ended; the world stays frozen behind the game-over sprite
    GameOver,
}

impl Mode {
    /// Run this mode's update and return the mode for the next frame
    fn on_update<I, A, R>(self, scene: &mut Scene<I, A, R>) -> Mode
    where
        I: InputSource,
        A: AudioSink,
        R: RendererSink,
    {
        match self {
            Mode::Title => {
                if !scene.input.is_triggered(Control::Confirm) {
                    return Mode::Title;
                }
                scene.world.start_run();
                scene.jukebox.switch_to(&mut scene.audio, Track::GamePlay);
                Mode::Playing
            }
            Mode::Playing => {
                let input = TickInput {
                    left: scene.input.is_held(Control::Left),
                    right: scene.input.is_held(Control::Right),
                    fire: scene.input.is_held(Control::Fire),
                };
                for event in tick(&mut scene.world, &input, &scene.tuning) {
                    let effect = match event {
                        GameEvent::PlayerHit { enemy } => {
                            log::debug!("enemy {enemy} hit the player");
                            SoundEffect::PlayerHit
                        }
                        GameEvent::EnemyHit { beam, enemy } => {
                            log::debug!("beam {beam} destroyed enemy {enemy}");
                            SoundEffect::EnemyHit
                        }
                    };
                    scene.jukebox.play_effect(&mut scene.audio, effect);
                }
                if !scene.world.ledger.is_dead() {
                    return Mode::Playing;
                }
                log::info!(
                    "game over at frame {} with score {}",
                    scene.world.ledger.frame,
                    scene.world.ledger.score
                );
                scene.jukebox.switch_to(&mut scene.audio, Track::GameOver);
                Mode::GameOver
            }
            Mode::GameOver => {
                if !scene.input.is_triggered(Control::Confirm) {
                    return Mode::GameOver;
                }
                scene.jukebox.switch_to(&mut scene.audio, Track::Title);
                Mode::Title
            }
        }
    }

    fn on_draw<I, A, R>(self, scene: &mut Scene<I, A, R>)
    where
        I: InputSource,
        A: AudioSink,
        R: RendererSink,
    {
        let sprites = scene.assets.sprites;
        let prompt = blink_visible(scene.world.ledger.frame);
        match self {
            Mode::Title => {
                scene.renderer.draw_sprite(sprites.title);
                if prompt {
                    scene.renderer.draw_sprite(sprites.enter);
                }
            }
            Mode::Playing => scene.draw_world(),
            Mode::GameOver => {
                scene.draw_world();
                scene.renderer.draw_sprite(sprites.game_over);
                if prompt {
                    scene.renderer.draw_sprite(sprites.enter);
                }
            }
        }
    }
}

/// The whole game scene
pub struct Scene<I, A, R> {
    input: I,
    audio: A,
    renderer: R,
    world: World,
    mode: Mode,
    tuning: Tuning,
    assets: SceneAssets,
    jukebox: Jukebox,
    camera: Camera,
}

impl<I, A, R> Scene<I, A, R>
where
    I: InputSource,
    A: AudioSink,
    R: RendererSink,
{
    /// Validate the tuning, acquire every asset and start the title music.
    /// Any asset failure aborts construction.
    pub fn new(
        input: I,
        mut audio: A,
        renderer: R,
        loader: &mut impl AssetLoader,
        manifest: &AssetManifest,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, SceneError> {
        tuning.validate()?;
        let assets = SceneAssets::load(loader, manifest)?;
        let mut jukebox = Jukebox::new(assets.sounds);
        jukebox.switch_to(&mut audio, Track::Title);
        log::info!("scene ready (seed {seed})");

        Ok(Self {
            input,
            audio,
            renderer,
            world: World::new(seed),
            mode: Mode::Title,
            tuning,
            assets,
            jukebox,
            camera: Camera::default(),
        })
    }

    /// Advance one frame in the current mode
    pub fn update(&mut self) {
        let mode = self.mode;
        let next = mode.on_update(self);
        if next != mode {
            log::info!("{mode:?} -> {next:?}");
            self.mode = next;
        }
        self.world.ledger.frame += 1;
    }

    /// Emit this frame's draw calls. Reads the world only.
    pub fn draw(&mut self) {
        let mode = self.mode;
        mode.on_draw(self);
    }

    /// Background, stage, ship, beams, enemies, HUD
    fn draw_world(&mut self) {
        let Self {
            renderer,
            world,
            assets,
            camera,
            ..
        } = self;
        let textures = assets.textures;

        renderer.draw_sprite(assets.sprites.background);
        for segment in &world.stage.segments {
            renderer.draw_model(segment, camera, textures.stage);
        }
        renderer.draw_model(&world.player.transform, camera, textures.player);
        for (_, beam) in world.beams.iter_active() {
            renderer.draw_model(&beam.transform, camera, textures.beam);
        }
        // Dying enemies stay visible while they fall
        for (_, enemy) in world.enemies.iter_live() {
            renderer.draw_model(&enemy.transform, camera, textures.enemy);
        }

        renderer.draw_text(&format!("SCORE {}", world.ledger.score), 200.0, 10.0, 2.0);
        renderer.draw_text(&format!("LIFE {}", world.ledger.life), 800.0, 10.0, 2.0);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
