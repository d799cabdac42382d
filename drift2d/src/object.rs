//! Game object capabilities consumed by the camera and collision helpers.

use std::f64::consts::TAU;

use crate::{
    collision::{Circle, Shape},
    math::{Rect, Vec2},
};

/// Anything with a world-space position the camera can track.
pub trait Positioned {
    fn position(&self) -> Vec2;
}

impl Positioned for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

/// Capability interface implemented by concrete game objects.
pub trait GameObject: Positioned {
    fn set_position(&mut self, position: Vec2);
    fn size(&self) -> Vec2;
    fn angle(&self) -> f64;
    fn velocity(&self) -> Vec2;
    /// True if the world-space point lies strictly inside the object.
    fn contains(&self, point: Vec2) -> bool;
}

/// Kind of collider to derive from an object's footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColliderKind {
    Box,
    Circle,
}

/// The bare implementation of a [`GameObject`].
///
/// By default the position names the object's center; with `centered` set to
/// `false` it names the top-left corner instead.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicObject {
    pub position: Vec2,
    pub size: Vec2,
    /// Facing in radians, kept in `[0, 2π)`.
    pub angle: f64,
    pub speed: f64,
    pub velocity: Vec2,
    pub centered: bool,
}

impl BasicObject {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            angle: 0.0,
            speed: 0.0,
            velocity: Vec2::ZERO,
            centered: true,
        }
    }

    /// Anchor the object at its top-left corner instead of its center.
    #[must_use]
    pub fn top_left_anchored(mut self) -> Self {
        self.centered = false;
        self
    }

    /// World-space footprint of the object.
    pub fn bounds(&self) -> Rect {
        if self.centered {
            Rect::from_center(self.position, self.size)
        } else {
            Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
        }
    }

    pub fn left(&self) -> f64 {
        self.bounds().left()
    }

    pub fn right(&self) -> f64 {
        self.bounds().right()
    }

    pub fn top(&self) -> f64 {
        self.bounds().top()
    }

    pub fn bottom(&self) -> f64 {
        self.bounds().bottom()
    }

    pub fn add_position(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle.rem_euclid(TAU);
    }

    pub fn add_angle(&mut self, delta: f64) {
        self.set_angle(self.angle + delta);
    }

    /// Advance the position by one tick of velocity.
    pub fn step(&mut self) {
        self.position += self.velocity;
    }

    /// Collision shape covering the object's footprint.
    ///
    /// Circles are centered on the footprint with a radius of half the width.
    pub fn collider(&self, kind: ColliderKind) -> Shape {
        let bounds = self.bounds();
        match kind {
            ColliderKind::Box => Shape::Box(bounds),
            ColliderKind::Circle => Shape::Circle(Circle::new(bounds.center(), self.size.x / 2.0)),
        }
    }
}

impl Positioned for BasicObject {
    fn position(&self) -> Vec2 {
        self.position
    }
}

impl GameObject for BasicObject {
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn angle(&self) -> f64 {
        self.angle
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_object_edges_surround_position() {
        let obj = BasicObject::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(obj.left(), 40.0);
        assert_eq!(obj.right(), 60.0);
        assert_eq!(obj.top(), 45.0);
        assert_eq!(obj.bottom(), 55.0);
        assert!(obj.contains(Vec2::new(50.0, 50.0)));
        assert!(!obj.contains(Vec2::new(40.0, 50.0)));
    }

    #[test]
    fn top_left_object_extends_down_right() {
        let obj = BasicObject::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0)).top_left_anchored();
        assert_eq!(obj.left(), 50.0);
        assert_eq!(obj.bottom(), 60.0);
        assert!(obj.contains(Vec2::new(65.0, 55.0)));
        assert!(!obj.contains(Vec2::new(45.0, 55.0)));
    }

    #[test]
    fn angle_wraps_into_full_turn() {
        let mut obj = BasicObject::new(Vec2::ZERO, Vec2::ONE);
        obj.set_angle(TAU - 0.5);
        obj.add_angle(1.0);
        assert!((obj.angle - 0.5).abs() < 1e-9);
        obj.add_angle(-1.0);
        assert!((obj.angle - (TAU - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn colliders_follow_the_footprint() {
        let a = BasicObject::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = BasicObject::new(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.collider(ColliderKind::Box).overlaps(&b.collider(ColliderKind::Box)));
        assert!(a.collider(ColliderKind::Circle).overlaps(&b.collider(ColliderKind::Circle)));

        let far = BasicObject::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.collider(ColliderKind::Circle).overlaps(&far.collider(ColliderKind::Circle)));
    }

    #[test]
    fn step_applies_velocity() {
        let mut obj = BasicObject::new(Vec2::ZERO, Vec2::ONE);
        obj.velocity = Vec2::new(1.5, -2.0);
        obj.step();
        obj.step();
        assert_eq!(obj.position, Vec2::new(3.0, -4.0));
    }
}
