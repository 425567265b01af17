use super::Degrees;
use super::Pixels;
use serde::Deserialize;
use serde::Serialize;

/// A point in table space. Origin is the top-left corner; y grows downward,
/// matching the browser coordinate system the wire format inherits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Pixels,
    pub y: Pixels,
}

impl Point {
    pub const fn new(x: Pixels, y: Pixels) -> Self {
        Self { x, y }
    }
    /// Squared Euclidean distance. The assignment cost metric; cheaper than
    /// the true distance and order-equivalent for minimization.
    pub fn squared(&self, other: &Self) -> Pixels {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
    pub fn distance(&self, other: &Self) -> Pixels {
        self.squared(other).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl std::ops::Mul<Pixels> for Point {
    type Output = Point;
    fn mul(self, rhs: Pixels) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// An axis-aligned selection rectangle in table coordinates.
///
/// Stored normalized (`x1 <= x2`, `y1 <= y2`); the wire accepts corners
/// in any order since a drag can proceed in any direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: Pixels,
    pub y1: Pixels,
    pub x2: Pixels,
    pub y2: Pixels,
}

impl Rect {
    pub fn new(x1: Pixels, y1: Pixels, x2: Pixels, y2: Pixels) -> Self {
        Self { x1, y1, x2, y2 }.normalized()
    }
    /// Reorders corners so that (x1, y1) is top-left.
    pub fn normalized(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }
    /// Strict interior test. Points exactly on a bound are excluded, so a
    /// degenerate (zero-area) rectangle contains nothing.
    pub fn contains(&self, p: &Point) -> bool {
        p.x > self.x1 && p.x < self.x2 && p.y > self.y1 && p.y < self.y2
    }
}

/// Table geometry. Bounds, the hand threshold, and the staging position are
/// configuration rather than hard-coded pixels; the defaults reproduce the
/// reference client's 400x500 table with the hand region below y = 300.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Inclusive clamp bound on card x.
    pub width: Pixels,
    /// Inclusive clamp bound on card y.
    pub height: Pixels,
    /// Cards at or below this y are in the hand region.
    pub hand_threshold: Pixels,
    /// Where reset and released cards stack.
    pub staging: Point,
    /// Rotation applied to cards at rest.
    pub rotation: Degrees,
}

impl Geometry {
    /// Clamps a point into table bounds.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
    /// True when the point lies in the shared table region (above the
    /// hand threshold).
    pub fn on_table(&self, p: &Point) -> bool {
        p.y < self.hand_threshold
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 500.0,
            hand_threshold: 300.0,
            staging: Point::new(0.0, 0.0),
            rotation: 0.0,
        }
    }
}
