// Health for the ships
//
// Only the event dispatcher touches this while a round is running, the collision step just emits
// hit events. It never goes up again until the match is reset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Health {
    pub current: u16,
    pub maximum: u16,
}

impl Health {
    pub fn new(maximum: u16) -> Self {
        Health { current: maximum, maximum }
    }

    // A hit is always worth exactly one point, clamped at zero
    pub fn hit(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_defeated(&self) -> bool {
        self.current == 0
    }

    pub fn restore(&mut self) {
        self.current = self.maximum;
    }
}

#[test]
fn test_hit() {
    let mut health = Health::new(10);
    health.hit();
    assert_eq!(health.current, 9);
    assert!(!health.is_defeated());
}

#[test]
fn test_hit_clamps_at_zero() {
    let mut health = Health::new(1);
    health.hit();
    health.hit();
    assert_eq!(health.current, 0);
    assert!(health.is_defeated());
}

#[test]
fn test_restore() {
    let mut health = Health::new(10);
    for _ in 0..4 {
        health.hit();
    }
    health.restore();
    assert_eq!(health, Health::new(10));
}
