use crate::foundation::core::{Point, Vec2};

/// Lines shorter than this are considered degenerate.
pub const MIN_LINE_LENGTH: f64 = 1e-9;

/// Oriented feature line in image coordinates.
///
/// A line defines a local frame: positions along it are measured by the
/// normalized projection `u` (0 at `start`, 1 at `end`) and the signed
/// perpendicular offset `v` in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlLine {
    /// Line start point.
    pub start: Point,
    /// Line end point.
    pub end: Point,
}

impl ControlLine {
    /// Create a line from `start` to `end`.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Direction vector from start to end.
    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }

    /// Euclidean length in pixels.
    pub fn length(&self) -> f64 {
        self.vector().hypot()
    }

    /// Whether the line is too short to define a direction.
    pub fn is_degenerate(&self) -> bool {
        !(self.length() >= MIN_LINE_LENGTH)
    }

    /// Unit normal, the direction vector rotated by +90 degrees.
    ///
    /// Callers must reject degenerate lines first.
    pub fn unit_normal(&self) -> Vec2 {
        let v = self.vector();
        Vec2::new(-v.y, v.x) / self.length()
    }

    /// Normalized projection of `p` onto the line (0 at `start`, 1 at `end`).
    pub fn projection(&self, p: Point) -> f64 {
        let v = self.vector();
        (p - self.start).dot(v) / v.hypot2()
    }

    /// Signed perpendicular distance from `p` to the line, in pixels.
    ///
    /// Positive on the side the unit normal points to.
    pub fn signed_distance(&self, p: Point) -> f64 {
        (p - self.start).dot(self.unit_normal())
    }

    /// Map line-local coordinates `(u, v)` back to image coordinates.
    ///
    /// Inverse of ([`projection`](Self::projection),
    /// [`signed_distance`](Self::signed_distance)) for non-degenerate lines.
    pub fn point_at(&self, u: f64, v: f64) -> Point {
        self.start + self.vector() * u + self.unit_normal() * v
    }

    /// Interpolate endpoint-wise towards `other` at parameter `t`.
    pub fn lerp(&self, other: &ControlLine, t: f64) -> ControlLine {
        ControlLine {
            start: self.start.lerp(other.start, t),
            end: self.end.lerp(other.end, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/line.rs"]
mod tests;
