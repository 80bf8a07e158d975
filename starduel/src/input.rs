use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::config::DuelConfig;
use crate::event::EventQueue;
use crate::event::GameEvent;
use crate::ship::Ship;
use crate::ship::Side;

// Key bindings for one player, the two sets are disjoint so both players share a keyboard
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Controls {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub fire: KeyCode,
}

pub const YELLOW_CONTROLS: Controls = Controls {
    left: KeyCode::KeyA,
    right: KeyCode::KeyD,
    up: KeyCode::KeyW,
    down: KeyCode::KeyS,
    fire: KeyCode::ControlLeft,
};

pub const RED_CONTROLS: Controls = Controls {
    left: KeyCode::ArrowLeft,
    right: KeyCode::ArrowRight,
    up: KeyCode::ArrowUp,
    down: KeyCode::ArrowDown,
    fire: KeyCode::ControlRight,
};

impl Controls {
    pub fn for_side(side: Side) -> Controls {
        match side {
            Side::Yellow => YELLOW_CONTROLS,
            Side::Red => RED_CONTROLS,
        }
    }
}

// Which side, if any, a key press fires for
pub fn fire_side(key: KeyCode) -> Option<Side> {
    Side::ALL.into_iter().find(|side| Controls::for_side(*side).fire == key)
}

// Move the ship by one tick worth of held keys.
//
// Each axis key is checked on its own against the position it would produce, the move only
// happens if the ship stays strictly inside its lane and above the floor margin. Holding both
// directions on an axis cancels out.
pub fn steer(ship: &mut Ship, held: &ButtonInput<KeyCode>, cfg: &DuelConfig) {
    let controls = Controls::for_side(ship.side);
    let (lane_min, lane_max) = ship.side.lane(cfg);
    let speed = cfg.ship_speed;
    let floor = cfg.height - cfg.floor_margin;
    let bounds = &mut ship.bounds;

    if held.pressed(controls.left) && bounds.x - speed > lane_min {
        bounds.x -= speed;
    }
    if held.pressed(controls.right) && bounds.x + speed + bounds.w < lane_max {
        bounds.x += speed;
    }
    if held.pressed(controls.up) && bounds.y - speed > 0 {
        bounds.y -= speed;
    }
    if held.pressed(controls.down) && bounds.y + speed + bounds.h < floor {
        bounds.y += speed;
    }
}

// Platform -> event queue. Only press transitions count, OS key repeat is dropped so holding the
// fire key doesn't spray bullets.
pub(crate) fn poll_input(
    mut keyboard: EventReader<KeyboardInput>,
    mut close_requested: EventReader<WindowCloseRequested>,
    mut queue: ResMut<EventQueue>,
) {
    for key in keyboard.read() {
        if key.state == ButtonState::Pressed && !key.repeat {
            queue.push(GameEvent::KeyDown(key.key_code));
        }
    }

    if close_requested.read().count() > 0 {
        queue.push(GameEvent::Quit);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Bounds;

    fn held(keys: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut input = ButtonInput::<KeyCode>::default();
        for key in keys {
            input.press(*key);
        }
        input
    }

    fn ship_at(side: Side, x: i32, y: i32, cfg: &DuelConfig) -> Ship {
        let mut ship = Ship::new(side, cfg);
        ship.bounds = Bounds::new(x, y, cfg.ship_size.x, cfg.ship_size.y);
        ship
    }

    #[test]
    fn test_fire_side() {
        assert_eq!(fire_side(KeyCode::ControlLeft), Some(Side::Yellow));
        assert_eq!(fire_side(KeyCode::ControlRight), Some(Side::Red));
        assert_eq!(fire_side(KeyCode::Space), None);
    }

    #[test]
    fn test_steer_moves_each_axis() {
        let cfg = DuelConfig::default();
        let mut ship = Ship::new(Side::Yellow, &cfg);

        steer(&mut ship, &held(&[KeyCode::KeyD, KeyCode::KeyW]), &cfg);
        assert_eq!(ship.position(), IVec2::new(105, 295));

        steer(&mut ship, &held(&[KeyCode::KeyA, KeyCode::KeyS]), &cfg);
        assert_eq!(ship.position(), IVec2::new(100, 300));
    }

    #[test]
    fn test_steer_ignores_other_players_keys() {
        let cfg = DuelConfig::default();
        let mut ship = Ship::new(Side::Yellow, &cfg);

        steer(&mut ship, &held(&[KeyCode::ArrowLeft, KeyCode::ArrowUp, KeyCode::Space]), &cfg);
        assert_eq!(ship.position(), IVec2::new(100, 300));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let cfg = DuelConfig::default();
        let mut ship = Ship::new(Side::Red, &cfg);

        steer(&mut ship, &held(&[KeyCode::ArrowLeft, KeyCode::ArrowRight]), &cfg);
        assert_eq!(ship.position(), IVec2::new(700, 300));
    }

    #[test]
    fn test_yellow_stops_short_of_divider() {
        let cfg = DuelConfig::default();
        // 445 is the divider, 384 + 5 + 55 = 444 is still allowed
        let mut ship = ship_at(Side::Yellow, 384, 200, &cfg);

        steer(&mut ship, &held(&[KeyCode::KeyD]), &cfg);
        assert_eq!(ship.bounds.x, 389);

        steer(&mut ship, &held(&[KeyCode::KeyD]), &cfg);
        assert_eq!(ship.bounds.x, 389);
        assert!(ship.bounds.right() < cfg.divider.x);
    }

    #[test]
    fn test_red_stops_short_of_divider() {
        let cfg = DuelConfig::default();
        let mut ship = ship_at(Side::Red, 461, 200, &cfg);

        steer(&mut ship, &held(&[KeyCode::ArrowLeft]), &cfg);
        assert_eq!(ship.bounds.x, 456);

        steer(&mut ship, &held(&[KeyCode::ArrowLeft]), &cfg);
        assert_eq!(ship.bounds.x, 456);
        assert!(ship.bounds.x > cfg.divider.right());
    }

    #[test]
    fn test_edges_are_exclusive() {
        let cfg = DuelConfig::default();

        let mut ship = ship_at(Side::Yellow, 5, 5, &cfg);
        steer(&mut ship, &held(&[KeyCode::KeyA, KeyCode::KeyW]), &cfg);
        assert_eq!(ship.position(), IVec2::new(5, 5));

        let mut ship = ship_at(Side::Red, 840, 440, &cfg);
        steer(&mut ship, &held(&[KeyCode::ArrowRight, KeyCode::ArrowDown]), &cfg);
        assert_eq!(ship.position(), IVec2::new(840, 440));
        assert!(ship.bounds.right() < cfg.width);
        assert!(ship.bounds.bottom() < cfg.height - cfg.floor_margin);
    }

    #[test]
    fn test_ship_never_leaves_lane() {
        let cfg = DuelConfig::default();

        for (side, keys) in [
            (Side::Yellow, [KeyCode::KeyD, KeyCode::KeyS]),
            (Side::Yellow, [KeyCode::KeyA, KeyCode::KeyW]),
            (Side::Red, [KeyCode::ArrowLeft, KeyCode::ArrowDown]),
            (Side::Red, [KeyCode::ArrowRight, KeyCode::ArrowUp]),
        ] {
            let mut ship = Ship::new(side, &cfg);
            let (lane_min, lane_max) = side.lane(&cfg);

            for _ in 0..200 {
                steer(&mut ship, &held(&keys), &cfg);

                assert!(ship.bounds.x > lane_min);
                assert!(ship.bounds.right() < lane_max);
                assert!(ship.bounds.y > 0);
                assert!(ship.bounds.bottom() < cfg.height - cfg.floor_margin);
            }
        }
    }
}
