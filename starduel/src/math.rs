use bevy::prelude::IVec2;

// Integer axis aligned rectangle in screen space: origin top-left, +Y goes down.
//
// All of the simulation runs on these, the conversion to the Bevy world (center origin, +Y up)
// only happens at render time, see `arena::to_world`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Bounds { x, y, w, h }
    }

    pub fn from_corner(corner: IVec2, size: IVec2) -> Self {
        Bounds::new(corner.x, corner.y, size.x, size.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    // Center in floating point, rounding here would make odd sized sprites jitter
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    // Strict overlap, rectangles that only share an edge are not colliding
    pub fn overlaps(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[test]
fn test_overlaps() {
    let ship = Bounds::new(700, 300, 55, 40);

    assert!(!ship.overlaps(&Bounds::new(690, 318, 10, 5)));
    assert!(ship.overlaps(&Bounds::new(691, 318, 10, 5)));
    assert!(ship.overlaps(&Bounds::new(720, 310, 10, 5)));
    assert!(ship.overlaps(&Bounds::new(754, 339, 10, 5)));
    assert!(!ship.overlaps(&Bounds::new(755, 318, 10, 5)));
    assert!(!ship.overlaps(&Bounds::new(720, 340, 10, 5)));
}

#[test]
fn test_overlaps_is_symmetric() {
    let a = Bounds::new(0, 0, 10, 10);
    let b = Bounds::new(5, 5, 10, 10);
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
}

#[test]
fn test_empty_never_overlaps() {
    let a = Bounds::new(0, 0, 10, 10);
    assert!(!a.overlaps(&Bounds::new(5, 5, 0, 10)));
    assert!(!Bounds::new(5, 5, 10, -1).overlaps(&a));
}

#[test]
fn test_edges() {
    let a = Bounds::from_corner(IVec2::new(100, 300), IVec2::new(55, 40));
    assert_eq!(a.right(), 155);
    assert_eq!(a.bottom(), 340);
    assert_eq!(a.center(), (127.5, 320.0));
    assert_eq!(a.size(), IVec2::new(55, 40));
}
