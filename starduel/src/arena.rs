use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;

use crate::assets::GameAssets;
use crate::config::DuelConfig;
use crate::math::Bounds;

// Render layers, back to front
pub const BACKGROUND_Z: f32 = -10.0;
pub const DIVIDER_Z: f32 = -5.0;
pub const SHIP_Z: f32 = 0.0;
pub const BULLET_Z: f32 = 1.0;
pub const HUD_Z: f32 = 5.0;
pub const BANNER_Z: f32 = 10.0;

pub struct ArenaPlugin;
impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ShapePlugin)
            .add_systems(Startup, (
                camera_setup,
                arena_setup,
            ));
    }
}

// Simulation works in screen space (top-left origin, +Y down), Bevy's 2D camera is centered with
// +Y up. Returns the world position of the center of `bounds`.
pub fn to_world(bounds: &Bounds, cfg: &DuelConfig) -> Vec2 {
    let (x, y) = bounds.center();
    Vec2::new(
        x - cfg.width as f32 / 2.0,
        cfg.height as f32 / 2.0 - y,
    )
}

// Filled rectangle centered on the entity's transform
pub fn rect_shape(size: IVec2, color: Color) -> Shape {
    let half = size.as_vec2() / 2.0;
    let path = ShapePath::new()
        .move_to(Vec2::new(-half.x, -half.y))
        .line_to(Vec2::new(half.x, -half.y))
        .line_to(Vec2::new(half.x, half.y))
        .line_to(Vec2::new(-half.x, half.y))
        .close();

    ShapeBuilder::with(&path)
        .fill(Fill::color(color))
        .build()
}

fn camera_setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn arena_setup(
    mut commands: Commands,
    cfg: Res<DuelConfig>,
    assets: Res<GameAssets>,
) {
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(cfg.width as f32, cfg.height as f32)),
            ..default()
        },
        Transform::from_xyz(0., 0., BACKGROUND_Z),
    ));

    commands.spawn((
        rect_shape(cfg.divider.size(), cfg.divider_color),
        Transform::from_translation(to_world(&cfg.divider, &cfg).extend(DIVIDER_Z)),
    ));
}

#[test]
fn test_to_world() {
    let cfg = DuelConfig::default();

    assert_eq!(to_world(&cfg.arena(), &cfg), Vec2::ZERO);
    assert_eq!(to_world(&cfg.divider, &cfg), Vec2::ZERO);

    // Top-left 10x10 square sits in the upper left quadrant
    assert_eq!(to_world(&Bounds::new(0, 0, 10, 10), &cfg), Vec2::new(-445., 245.));
    assert_eq!(to_world(&Bounds::new(100, 300, 55, 40), &cfg), Vec2::new(-322.5, -70.));
}
