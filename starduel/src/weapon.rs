use crate::config::DuelConfig;
use crate::math::Bounds;
use crate::ship::Ship;
use crate::ship::Side;

// A bullet only needs its rectangle, the direction comes from which magazine it lives in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Bullet {
    pub bounds: Bounds,
}

impl Bullet {
    // Leading edge along the direction of travel
    pub fn leading_edge(&self, side: Side) -> i32 {
        match side {
            Side::Yellow => self.bounds.right(),
            Side::Red => self.bounds.x,
        }
    }
}

// Live bullets for one side, insertion ordered. Never holds more than `max_bullets`.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Magazine {
    pub bullets: Vec<Bullet>,
}

impl Magazine {
    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }
}

// Bullet leaves from the front of the ship, vertically centered (nudged up by 2 px so the 5 px
// bullet sits on the middle line)
pub fn muzzle(ship: &Ship, cfg: &DuelConfig) -> Bounds {
    let x = match ship.side {
        Side::Yellow => ship.bounds.right(),
        Side::Red => ship.bounds.x,
    };
    let y = ship.bounds.y + ship.bounds.h / 2 - 2;

    Bounds::new(x, y, cfg.bullet_size.x, cfg.bullet_size.y)
}

// Fire a single bullet if the magazine has room for it.
//
// Returns true if a bullet was added, the caller is the one that plays the sound.
pub fn fire(ship: &Ship, magazine: &mut Magazine, cfg: &DuelConfig) -> bool {
    if magazine.len() >= cfg.max_bullets {
        return false;
    }

    magazine.bullets.push(Bullet { bounds: muzzle(ship, cfg) });
    true
}
