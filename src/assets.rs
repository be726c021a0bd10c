//! Asset manifest and loader capability
//!
//! Textures, sprites and sounds are opaque ids handed out by the host's
//! loader. The scene acquires everything up front; any failure aborts scene
//! entry since there is no fallback art or audio.

use std::collections::HashSet;
use std::path::PathBuf;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::{SoundBank, SoundId};
use crate::error::{AssetError, SceneError};

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque handle to a positioned 2D sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u32);

/// Loader capability supplied by the host
pub trait AssetLoader {
    fn load_texture(&mut self, name: &str) -> Result<TextureId, AssetError>;
    fn create_sprite(&mut self, texture: TextureId, position: Vec2) -> Result<SpriteId, AssetError>;
    fn load_sound(&mut self, name: &str) -> Result<SoundId, AssetError>;
}

/// File names for every asset the scene needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub background: String,
    pub stage: String,
    pub player: String,
    pub beam: String,
    pub enemy: String,
    pub title: String,
    pub game_over: String,
    pub enter: String,
    pub title_bgm: String,
    pub gameplay_bgm: String,
    pub game_over_bgm: String,
    pub enemy_hit_se: String,
    pub player_hit_se: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: "bg.jpg".into(),
            stage: "stage2.jpg".into(),
            player: "player.png".into(),
            beam: "beam.png".into(),
            enemy: "enemy.png".into(),
            title: "title.png".into(),
            game_over: "gameover.png".into(),
            enter: "enter.png".into(),
            title_bgm: "Audio/Ring05.wav".into(),
            gameplay_bgm: "Audio/Ring08.wav".into(),
            game_over_bgm: "Audio/Ring09.wav".into(),
            enemy_hit_se: "Audio/chord.wav".into(),
            player_hit_se: "Audio/tada.wav".into(),
        }
    }
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every file the manifest refers to
    pub fn files(&self) -> [&str; 13] {
        [
            &self.background,
            &self.stage,
            &self.player,
            &self.beam,
            &self.enemy,
            &self.title,
            &self.game_over,
            &self.enter,
            &self.title_bgm,
            &self.gameplay_bgm,
            &self.game_over_bgm,
            &self.enemy_hit_se,
            &self.player_hit_se,
        ]
    }
}

/// Screen anchors for the 2D sprites
pub const BACKGROUND_POS: Vec2 = Vec2::new(0.0, 0.0);
pub const TITLE_POS: Vec2 = Vec2::new(0.0, 0.0);
pub const GAME_OVER_POS: Vec2 = Vec2::new(0.0, 100.0);
pub const ENTER_POS: Vec2 = Vec2::new(400.0, 500.0);

/// Model textures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Textures {
    pub stage: TextureId,
    pub player: TextureId,
    pub beam: TextureId,
    pub enemy: TextureId,
}

/// Screen sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprites {
    pub background: SpriteId,
    pub title: SpriteId,
    pub game_over: SpriteId,
    pub enter: SpriteId,
}

/// Everything the scene draws or plays, acquired at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneAssets {
    pub textures: Textures,
    pub sprites: Sprites,
    pub sounds: SoundBank,
}

impl SceneAssets {
    /// Acquire all assets; the first failure is returned
    pub fn load(loader: &mut impl AssetLoader, manifest: &AssetManifest) -> Result<Self, AssetError> {
        let mut sprite = |name: &str, position: Vec2| -> Result<SpriteId, AssetError> {
            let texture = loader.load_texture(name)?;
            loader.create_sprite(texture, position)
        };
        let sprites = Sprites {
            background: sprite(&manifest.background, BACKGROUND_POS)?,
            title: sprite(&manifest.title, TITLE_POS)?,
            game_over: sprite(&manifest.game_over, GAME_OVER_POS)?,
            enter: sprite(&manifest.enter, ENTER_POS)?,
        };

        let textures = Textures {
            stage: loader.load_texture(&manifest.stage)?,
            player: loader.load_texture(&manifest.player)?,
            beam: loader.load_texture(&manifest.beam)?,
            enemy: loader.load_texture(&manifest.enemy)?,
        };

        let sounds = SoundBank {
            title_bgm: loader.load_sound(&manifest.title_bgm)?,
            gameplay_bgm: loader.load_sound(&manifest.gameplay_bgm)?,
            game_over_bgm: loader.load_sound(&manifest.game_over_bgm)?,
            enemy_hit: loader.load_sound(&manifest.enemy_hit_se)?,
            player_hit: loader.load_sound(&manifest.player_hit_se)?,
        };

        log::info!("loaded {} assets", manifest.files().len());
        Ok(Self {
            textures,
            sprites,
            sounds,
        })
    }
}

/// Loader that hands out sequential ids without touching disk.
/// Names listed in `missing` fail with [`AssetError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessLoader {
    next_id: u32,
    pub missing: HashSet<String>,
}

impl HeadlessLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            next_id: 0,
            missing: names.into_iter().map(Into::into).collect(),
        }
    }

    fn issue(&mut self, name: &str) -> Result<u32, AssetError> {
        if self.missing.contains(name) {
            return Err(AssetError::NotFound(name.to_owned()));
        }
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }
}

impl AssetLoader for HeadlessLoader {
    fn load_texture(&mut self, name: &str) -> Result<TextureId, AssetError> {
        self.issue(name).map(TextureId)
    }

    fn create_sprite(&mut self, texture: TextureId, _position: Vec2) -> Result<SpriteId, AssetError> {
        Ok(SpriteId(texture.0))
    }

    fn load_sound(&mut self, name: &str) -> Result<SoundId, AssetError> {
        self.issue(name).map(SoundId)
    }
}

/// Loader that requires every asset to exist under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
    ids: HeadlessLoader,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ids: HeadlessLoader::new(),
        }
    }

    fn check(&self, name: &str) -> Result<(), AssetError> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(())
        } else if path.exists() {
            Err(AssetError::LoadFailed(format!("{} is not a file", path.display())))
        } else {
            Err(AssetError::NotFound(path.display().to_string()))
        }
    }
}

impl AssetLoader for DirectoryLoader {
    fn load_texture(&mut self, name: &str) -> Result<TextureId, AssetError> {
        self.check(name)?;
        self.ids.load_texture(name)
    }

    fn create_sprite(&mut self, texture: TextureId, position: Vec2) -> Result<SpriteId, AssetError> {
        self.ids.create_sprite(texture, position)
    }

    fn load_sound(&mut self, name: &str) -> Result<SoundId, AssetError> {
        self.check(name)?;
        self.ids.load_sound(name)
    }
}
