use bevy::prelude::*;

use crate::config::DuelConfig;
use crate::health::Health;
use crate::math::Bounds;

// The two players, yellow holds the left half of the arena and red the right half
#[derive(Component, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Side {
    Yellow,
    Red,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Yellow, Side::Red];

    pub fn opponent(&self) -> Side {
        match self {
            Side::Yellow => Side::Red,
            Side::Red => Side::Yellow,
        }
    }

    // Direction along X the bullets of this side travel in
    pub fn heading(&self) -> i32 {
        match self {
            Side::Yellow => 1,
            Side::Red => -1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Yellow => "Yellow",
            Side::Red => "Red",
        }
    }

    pub fn spawn(&self, cfg: &DuelConfig) -> IVec2 {
        match self {
            Side::Yellow => cfg.yellow_spawn,
            Side::Red => cfg.red_spawn,
        }
    }

    pub fn color(&self, cfg: &DuelConfig) -> Color {
        match self {
            Side::Yellow => cfg.yellow_color,
            Side::Red => cfg.red_color,
        }
    }

    // Horizontal zone (exclusive on both ends) this side's ship must stay strictly within
    pub fn lane(&self, cfg: &DuelConfig) -> (i32, i32) {
        match self {
            Side::Yellow => (0, cfg.divider.x),
            Side::Red => (cfg.divider.right(), cfg.width),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Ship {
    pub side: Side,
    pub bounds: Bounds,
    pub health: Health,
}

impl Ship {
    pub fn new(side: Side, cfg: &DuelConfig) -> Self {
        Ship {
            side,
            bounds: Bounds::from_corner(side.spawn(cfg), cfg.ship_size),
            health: Health::new(cfg.starting_health),
        }
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.bounds.x, self.bounds.y)
    }

    // Back to the spawn point with full health
    pub fn reset(&mut self, cfg: &DuelConfig) {
        self.bounds = Bounds::from_corner(self.side.spawn(cfg), cfg.ship_size);
        self.health.restore();
    }
}

#[test]
fn test_opponent() {
    assert_eq!(Side::Yellow.opponent(), Side::Red);
    assert_eq!(Side::Red.opponent(), Side::Yellow);
}

#[test]
fn test_lanes_do_not_touch_divider() {
    let cfg = DuelConfig::default();
    assert_eq!(Side::Yellow.lane(&cfg), (0, 445));
    assert_eq!(Side::Red.lane(&cfg), (455, 900));
}

#[test]
fn test_new_ship() {
    let cfg = DuelConfig::default();
    let ship = Ship::new(Side::Red, &cfg);
    assert_eq!(ship.bounds, Bounds::new(700, 300, 55, 40));
    assert_eq!(ship.health.current, 10);
}

#[test]
fn test_reset_restores_health_and_spawn() {
    let cfg = DuelConfig::default();
    let mut ship = Ship::new(Side::Yellow, &cfg);
    ship.bounds.x = 300;
    ship.bounds.y = 20;
    for _ in 0..7 {
        ship.health.hit();
    }

    ship.reset(&cfg);
    assert_eq!(ship, Ship::new(Side::Yellow, &cfg));
}
