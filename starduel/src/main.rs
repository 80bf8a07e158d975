use anyhow::anyhow;
use anyhow::Context;

use bevy::asset::io::file::FileAssetReader;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use starduel::arena::ArenaPlugin;
use starduel::assets::AssetManifest;
use starduel::assets::GameAssetsPlugin;
use starduel::audio::SoundPlugin;
use starduel::config::DuelConfig;
use starduel::render::DrawPlugin;
use starduel::DuelSimPlugin;

fn main() -> anyhow::Result<()> {
    let cfg = DuelConfig::default();
    let manifest = AssetManifest::default();

    let asset_root = FileAssetReader::get_base_path().join("assets");
    manifest.verify(&asset_root)
        .context("cannot start without the game assets")?;

    let exit = App::new()
        .add_plugins(DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.title.clone(),
                    resolution: (cfg.width as f32, cfg.height as f32).into(),
                    resizable: false,
                    ..default()
                }),
                // Closing the window is a quit event like any other, the match loop decides when
                // to exit
                close_when_requested: false,
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,starduel=debug".to_string(),
                ..default()
            }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(cfg)
        .insert_resource(manifest)

        // Game bits
        .add_plugins(GameAssetsPlugin)
        .add_plugins(DuelSimPlugin)
        .add_plugins(ArenaPlugin)
        .add_plugins(DrawPlugin)
        .add_plugins(SoundPlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("game exited with code {}", code)),
    }
}
