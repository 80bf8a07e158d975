use bevy::prelude::*;

use crate::math::Bounds;

// Arena size in pixels, screen space is origin top-left with +Y going down
pub const ARENA: IVec2 = IVec2::new(900, 500);

pub const SHIP_SIZE: IVec2 = IVec2::new(55, 40);
pub const BULLET_SIZE: IVec2 = IVec2::new(10, 5);

// Per tick velocities
pub const SHIP_SPEED: i32 = 5;
pub const BULLET_SPEED: i32 = 7;

pub const MAX_BULLETS: usize = 3;
pub const STARTING_HEALTH: u16 = 10;
pub const TICK_HZ: f64 = 60.0;

// Everything the match needs to know about the arena and its rules.
//
// Built once at startup and handed out by reference, nothing in here changes while the game runs.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DuelConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub tick_hz: f64,

    pub ship_size: IVec2,
    pub ship_speed: i32,
    pub yellow_spawn: IVec2,
    pub red_spawn: IVec2,

    pub bullet_size: IVec2,
    pub bullet_speed: i32,
    pub max_bullets: usize,

    pub starting_health: u16,

    // Ships can't go below this line, keeps them off the bottom edge
    pub floor_margin: i32,
    pub divider: Bounds,

    // How long the winner banner stays up before the next round
    pub banner_ticks: u32,

    pub text_color: Color,
    pub divider_color: Color,
    pub yellow_color: Color,
    pub red_color: Color,
}

impl Default for DuelConfig {
    fn default() -> Self {
        DuelConfig {
            title: "Super Amazing, Awesome Game".to_string(),
            width: ARENA.x,
            height: ARENA.y,
            tick_hz: TICK_HZ,

            ship_size: SHIP_SIZE,
            ship_speed: SHIP_SPEED,
            yellow_spawn: IVec2::new(100, 300),
            red_spawn: IVec2::new(700, 300),

            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,
            max_bullets: MAX_BULLETS,

            starting_health: STARTING_HEALTH,

            floor_margin: 15,
            divider: Bounds::new(ARENA.x / 2 - 5, 0, 10, ARENA.y),

            banner_ticks: (TICK_HZ * 5.0) as u32,

            text_color: Color::WHITE,
            divider_color: Color::BLACK,
            yellow_color: Color::srgb(1.0, 1.0, 0.0),
            red_color: Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

impl DuelConfig {
    pub fn arena(&self) -> Bounds {
        Bounds::new(0, 0, self.width, self.height)
    }
}

#[test]
fn test_divider_splits_arena() {
    let cfg = DuelConfig::default();
    assert_eq!(cfg.divider.x, 445);
    assert_eq!(cfg.divider.right(), 455);
    assert_eq!(cfg.divider.h, cfg.height);
    assert_eq!(cfg.banner_ticks, 300);
}
