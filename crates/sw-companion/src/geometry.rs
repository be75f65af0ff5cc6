use std::ops::{Add, Sub};

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether `p` lies inside, edges included.
    pub fn contains(&self, p: Point) -> bool {
        (self.left..=self.right).contains(&p.x) && (self.top..=self.bottom).contains(&p.y)
    }
}

/// Rotate `p` about `origin` by `angle_deg` degrees.
///
/// In screen coordinates (y down) a positive angle turns clockwise.
pub fn rotate_point(p: Point, origin: Point, angle_deg: f32) -> Point {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let d = p - origin;
    Point::new(origin.x + c * d.x - s * d.y, origin.y + s * d.x + c * d.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let p = Point::new(12.5, -3.0);
        assert_close(rotate_point(p, Point::new(4.0, 4.0), 0.0), p);
    }

    #[test]
    fn rotate_by_full_turn_is_identity() {
        let p = Point::new(75.0, 150.0);
        assert_close(rotate_point(p, Point::new(75.0, 100.0), 360.0), p);
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = rotate_point(Point::new(0.0, 1.0), Point::default(), 90.0);
        assert_close(rotated, Point::new(-1.0, 0.0));
    }

    #[test]
    fn rotate_preserves_length() {
        let origin = Point::new(75.0, 32.0);
        let p = Point::new(75.0, 82.0);
        for angle in [-90.0, -25.0, 13.0, 200.0] {
            let r = rotate_point(p, origin, angle);
            assert!((origin.distance(r) - 50.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn rect_contains_and_extent() {
        let r = Rect::from_origin(Point::new(10.0, 20.0), 100.0, 50.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(110.0, 70.0)));
        assert!(!r.contains(Point::new(111.0, 30.0)));
    }

    #[test]
    fn rect_contains_needs_both_axes() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let edges = [
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        for p in edges {
            assert!(r.contains(p), "{p:?}");
        }
        assert!(!r.contains(Point::new(5.0, 10.5)));
        assert!(!r.contains(Point::new(-0.5, 5.0)));
        assert!(!r.contains(Point::new(f32::NAN, 5.0)));
    }
}
