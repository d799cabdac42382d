use std::fmt;

use glam::DVec2;

/// 2D vector type used throughout Drift2D.
///
/// Operators (`+`, `-`, `*`, `/`) return new vectors; the assigning forms and
/// [`Vec2::normalize`] / [`Vec2::limit`] mutate in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Creates a unit vector pointing in the given direction (angle in radians).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the squared length of the vector (faster than `length()`).
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales the vector to unit length. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len == 0.0 {
            return;
        }
        *self /= len;
    }

    /// Returns a unit-length copy, or [`Vec2::ZERO`] for a zero vector.
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Caps the length of the vector at `limit`, keeping its direction.
    pub fn limit(&mut self, limit: f64) {
        if self.length() > limit {
            self.normalize();
            *self *= limit;
        }
    }

    /// Subtracts `value` from both components.
    pub fn sub_scalar(&mut self, value: f64) {
        self.x -= value;
        self.y -= value;
    }

    /// Computes the dot product of two vectors.
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// The z component of the 3D cross product of two planar vectors.
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Cross product of this vector with a scalar z axis.
    pub fn cross_scalar(self, s: f64) -> Self {
        Self::new(-self.y * s, self.x * s)
    }

    /// Computes the distance between two points.
    pub fn distance(self, rhs: Self) -> f64 {
        (self - rhs).length()
    }

    /// Computes the squared distance between two points (faster than `distance()`).
    pub fn distance_squared(self, rhs: Self) -> f64 {
        (self - rhs).length_squared()
    }

    /// Angle in radians of the segment from `self` to `rhs`.
    pub fn angle_to(self, rhs: Self) -> f64 {
        (rhs.y - self.y).atan2(rhs.x - self.x)
    }

    /// Rounds both components to the nearest integer.
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn to_glam(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{:.6}, Y:{:.6}}}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<DVec2> for Vec2 {
    fn from(value: DVec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl std::ops::Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl std::ops::DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    /// Same area with a non-negative width and height.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x.min(self.x + self.w),
            self.y.min(self.y + self.h),
            self.w.abs(),
            self.h.abs(),
        )
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True if the point lies strictly inside the rectangle (edges excluded).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// A line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Angle of the segment in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.start.angle_to(self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// True if `point` lies within the square of half-size `radius` around `anchor`
/// (edges included).
pub fn near_coords(point: Vec2, anchor: Vec2, radius: f64) -> bool {
    point.x <= anchor.x + radius
        && point.x >= anchor.x - radius
        && point.y <= anchor.y + radius
        && point.y >= anchor.y - radius
}
