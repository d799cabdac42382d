//! Simple AABB and circle overlap helpers.

use crate::math::{Rect, Vec2};

/// A circle in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// True if the point lies strictly inside the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// Collision shape attached to a game object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Box(Rect),
    Circle(Circle),
}

impl Shape {
    /// Test whether two shapes overlap. Shapes that merely touch do not.
    pub fn overlaps(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Box(a), Shape::Box(b)) => a.intersects(b),
            (Shape::Circle(a), Shape::Circle(b)) => circles_overlap(a, b),
            (Shape::Circle(c), Shape::Box(r)) | (Shape::Box(r), Shape::Circle(c)) => {
                circle_box_overlap(c, r)
            }
        }
    }

    /// Axis-aligned bounds of the shape.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Box(r) => *r,
            Shape::Circle(c) => Rect::from_center(c.center, Vec2::splat(c.radius * 2.0)),
        }
    }
}

pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) < reach * reach
}

/// Clamp the circle center onto the box and compare against the radius.
///
/// Rectangles with a negative width or height are normalized first.
pub fn circle_box_overlap(circle: &Circle, rect: &Rect) -> bool {
    let rect = rect.normalized();
    let closest = Vec2::new(
        circle.center.x.clamp(rect.left(), rect.right()),
        circle.center.y.clamp(rect.top(), rect.bottom()),
    );
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}
