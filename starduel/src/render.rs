use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::arena::rect_shape;
use crate::arena::to_world;
use crate::arena::BANNER_Z;
use crate::arena::BULLET_Z;
use crate::arena::HUD_Z;
use crate::arena::SHIP_Z;
use crate::assets::GameAssets;
use crate::config::DuelConfig;
use crate::game::Match;
use crate::outcome::banner_text;
use crate::ship::Side;

const HEALTH_FONT_SIZE: f32 = 32.0;
const BANNER_FONT_SIZE: f32 = 80.0;
const HUD_PADDING: f32 = 10.0;

#[derive(Component)]
pub struct ShipMarker;

// Bullets never exceed the cap, so each side gets a fixed pool of `max_bullets` shapes that are
// shown/hidden instead of spawning and despawning entities every tick
#[derive(Component, Debug, Clone, Copy)]
pub struct BulletSlot {
    pub side: Side,
    pub index: usize,
}

#[derive(Component)]
pub struct HealthLabel(pub Side);

#[derive(Component)]
pub struct WinnerBanner;

// Everything here only reads the match, it runs once the fixed ticks for the frame are done so
// what's on screen always matches a completed tick.
pub struct DrawPlugin;
impl Plugin for DrawPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, scene_setup)
            .add_systems(RunFixedMainLoop, (
                sync_ships,
                sync_bullets,
                sync_health_labels,
                sync_banner,
            ).in_set(RunFixedMainLoopSystem::AfterFixedMainLoop));
    }
}

pub fn health_text(duel: &Match, side: Side) -> String {
    format!("Health: {}", duel.ship(side).health.current)
}

// World position for a pool slot, None when that slot has no live bullet
pub fn bullet_slot_position(duel: &Match, slot: &BulletSlot, cfg: &DuelConfig) -> Option<Vec2> {
    duel.magazine(slot.side)
        .iter()
        .nth(slot.index)
        .map(|bullet| to_world(&bullet.bounds, cfg))
}

fn scene_setup(
    mut commands: Commands,
    cfg: Res<DuelConfig>,
    assets: Res<GameAssets>,
    duel: Res<Match>,
) {
    // Ship art points up, yellow gets turned to face right and red to face left
    for (side, image, angle) in [
        (Side::Yellow, assets.yellow_ship.clone(), 90.0_f32),
        (Side::Red, assets.red_ship.clone(), 270.0_f32),
    ] {
        let mut transform = Transform::from_translation(
            to_world(&duel.ship(side).bounds, &cfg).extend(SHIP_Z)
        );
        transform.rotate(Quat::from_rotation_z(angle.to_radians()));

        commands.spawn((
            Sprite {
                image,
                custom_size: Some(cfg.ship_size.as_vec2()),
                ..default()
            },
            transform,
            side,
            ShipMarker,
        ));
    }

    for side in Side::ALL {
        for index in 0..cfg.max_bullets {
            commands.spawn((
                rect_shape(cfg.bullet_size, side.color(&cfg)),
                Transform::from_xyz(0., 0., BULLET_Z),
                Visibility::Hidden,
                BulletSlot { side, index },
            ));
        }
    }

    let half = Vec2::new(cfg.width as f32, cfg.height as f32) / 2.0;
    for (side, anchor, x) in [
        (Side::Yellow, Anchor::TopLeft, -half.x + HUD_PADDING),
        (Side::Red, Anchor::TopRight, half.x - HUD_PADDING),
    ] {
        commands.spawn((
            Text2d::new(health_text(&duel, side)),
            TextFont {
                font_size: HEALTH_FONT_SIZE,
                ..default()
            },
            TextColor(cfg.text_color),
            anchor,
            Transform::from_xyz(x, half.y - HUD_PADDING, HUD_Z),
            HealthLabel(side),
        ));
    }

    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: BANNER_FONT_SIZE,
            ..default()
        },
        TextColor(cfg.text_color),
        Anchor::Center,
        Transform::from_xyz(0., 0., BANNER_Z),
        Visibility::Hidden,
        WinnerBanner,
    ));
}

pub(crate) fn sync_ships(
    cfg: Res<DuelConfig>,
    duel: Res<Match>,
    mut query: Query<(&Side, &mut Transform), With<ShipMarker>>,
) {
    for (side, mut transform) in query.iter_mut() {
        let pos = to_world(&duel.ship(*side).bounds, &cfg);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

pub(crate) fn sync_bullets(
    cfg: Res<DuelConfig>,
    duel: Res<Match>,
    mut query: Query<(&BulletSlot, &mut Transform, &mut Visibility)>,
) {
    for (slot, mut transform, mut visibility) in query.iter_mut() {
        match bullet_slot_position(&duel, slot, &cfg) {
            Some(pos) => {
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;
                visibility.set_if_neq(Visibility::Inherited);
            },
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            },
        }
    }
}

pub(crate) fn sync_health_labels(
    duel: Res<Match>,
    mut query: Query<(&HealthLabel, &mut Text2d)>,
) {
    for (HealthLabel(side), mut text) in query.iter_mut() {
        let wanted = health_text(&duel, *side);
        if text.0 != wanted {
            text.0 = wanted;
        }
    }
}

pub(crate) fn sync_banner(
    duel: Res<Match>,
    mut query: Query<(&mut Text2d, &mut Visibility), With<WinnerBanner>>,
) {
    for (mut text, mut visibility) in query.iter_mut() {
        match duel.phase.winner() {
            Some(winner) => {
                let wanted = banner_text(winner);
                if text.0 != wanted {
                    text.0 = wanted;
                }
                visibility.set_if_neq(Visibility::Inherited);
            },
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::GameEvent;

    #[test]
    fn test_health_text() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);
        duel.dispatch(GameEvent::ShipHit(Side::Red), &cfg);

        assert_eq!(health_text(&duel, Side::Yellow), "Health: 10");
        assert_eq!(health_text(&duel, Side::Red), "Health: 9");
    }

    #[test]
    fn test_bullet_slots_follow_magazine() {
        let cfg = DuelConfig::default();
        let mut duel = Match::new(&cfg);
        duel.fire(Side::Yellow, &cfg);

        let first = BulletSlot { side: Side::Yellow, index: 0 };
        let second = BulletSlot { side: Side::Yellow, index: 1 };
        let red = BulletSlot { side: Side::Red, index: 0 };

        // Bullet at (155, 318) 10x5 -> center (160, 320.5)
        assert_eq!(bullet_slot_position(&duel, &first, &cfg), Some(Vec2::new(-290., -70.5)));
        assert_eq!(bullet_slot_position(&duel, &second, &cfg), None);
        assert_eq!(bullet_slot_position(&duel, &red, &cfg), None);
    }
}
