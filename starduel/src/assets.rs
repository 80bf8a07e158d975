use std::path::Path;
use std::path::PathBuf;

use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing game assets under {}: {}", .root.display(), .missing.join(", "))]
    Missing {
        root: PathBuf,
        missing: Vec<String>,
    },
}

// Files the game needs, relative to the asset root. All of them get loaded once at startup and are
// held for the lifetime of the app.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub yellow_ship: String,
    pub red_ship: String,
    pub background: String,
    pub fire_sound: String,
    pub hit_sound: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        AssetManifest {
            yellow_ship: "spaceship_yellow.png".to_string(),
            red_ship: "spaceship_red.png".to_string(),
            background: "space.png".to_string(),
            fire_sound: "Gun+Silencer.mp3".to_string(),
            hit_sound: "Grenade+1.mp3".to_string(),
        }
    }
}

impl AssetManifest {
    pub fn files(&self) -> [&str; 5] {
        [
            self.yellow_ship.as_str(),
            self.red_ship.as_str(),
            self.background.as_str(),
            self.fire_sound.as_str(),
            self.hit_sound.as_str(),
        ]
    }

    // Bevy loads assets asynchronously and would happily run with blank sprites and silence, so
    // check everything is on disk before the app starts
    pub fn verify(&self, root: &Path) -> Result<(), AssetError> {
        let missing: Vec<String> = self.files()
            .into_iter()
            .filter(|file| !root.join(file).is_file())
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AssetError::Missing { root: root.to_path_buf(), missing })
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub yellow_ship: Handle<Image>,
    pub red_ship: Handle<Image>,
    pub background: Handle<Image>,
    pub fire_sound: Handle<AudioSource>,
    pub hit_sound: Handle<AudioSource>,
}

pub struct GameAssetsPlugin;
impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetManifest>()
            .add_systems(PreStartup, load_assets);
    }
}

pub(crate) fn load_assets(
    mut commands: Commands,
    server: Res<AssetServer>,
    manifest: Res<AssetManifest>,
) {
    info!("Loading {} assets", manifest.files().len());

    commands.insert_resource(GameAssets {
        yellow_ship: server.load(manifest.yellow_ship.clone()),
        red_ship: server.load(manifest.red_ship.clone()),
        background: server.load(manifest.background.clone()),
        fire_sound: server.load(manifest.fire_sound.clone()),
        hit_sound: server.load(manifest.hit_sound.clone()),
    });
}
