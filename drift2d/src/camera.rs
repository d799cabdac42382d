//! Viewport camera with zoom, follow modes, shake and smoothed movement.
//!
//! The camera position is the top-left corner of the viewport in zoomed
//! world space: `screen = (world + offset) * zoom - position`.

use std::f64::consts::TAU;

use glam::{DAffine2, DVec2, Mat4, Vec3};

use crate::{
    config::CameraConfig,
    math::{Rect, Vec2},
    object::Positioned,
};

/// Base shake angle increment per tick (150 degrees).
const SHAKE_ANGLE_STEP: f64 = 150.0 * std::f64::consts::PI / 180.0;
/// Random extra angle added on top of the base step (up to 60 degrees).
const SHAKE_ANGLE_JITTER: f64 = std::f64::consts::FRAC_PI_3;

/// World-space rectangle the camera may not leave during a bounded follow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds covering `(0, 0)` to `(width, height)`.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }
}

#[derive(Clone, Copy, Debug)]
struct Shake {
    /// Position the camera shakes around and returns to.
    anchor: Vec2,
    radius: f64,
    angle: f64,
    /// Glide destination (unzoomed) to pick up again once the shake settles.
    resume: Option<Vec2>,
}

/// 2D camera mapping world coordinates to screen coordinates.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec2,
    rotation: f64,
    zoom: f64,
    viewport: Vec2,
    screen: Vec2,
    offset: Vec2,
    /// Movement target in unzoomed world units.
    destination: Vec2,
    moving_to_destination: bool,
    shake: Option<Shake>,
    zoom_cooldown: u32,
    config: CameraConfig,
    rng: fastrand::Rng,
}

impl Camera {
    /// Create a camera whose viewport and screen are both `width` x `height`.
    ///
    /// # Panics
    /// If either dimension is not strictly positive.
    pub fn new(width: f64, height: f64) -> Self {
        assert_positive_size(width, height);
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
            viewport: Vec2::new(width, height),
            screen: Vec2::new(width, height),
            offset: Vec2::ZERO,
            destination: Vec2::ZERO,
            moving_to_destination: false,
            shake: None,
            zoom_cooldown: 0,
            config: CameraConfig::default(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Replace the tuning values. The current zoom is re-clamped.
    ///
    /// The config is expected to pass [`CameraConfig::validate`];
    /// [`crate::Settings`] loading checks it.
    #[must_use]
    pub fn with_config(mut self, config: CameraConfig) -> Self {
        self.config = config;
        self.zoom = self.clamp_zoom(self.zoom);
        self
    }

    /// Seed the shake random source for reproducible motion.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn set_pixel_snap(&mut self, enabled: bool) {
        self.config.pixel_snap = enabled;
        if enabled {
            self.position = self.position.round();
        }
    }

    /// Distance travelled per tick while moving to a destination.
    pub fn set_free_float_speed(&mut self, speed: f64) {
        self.config.free_float_speed = speed;
    }

    /// Resize the viewport.
    ///
    /// # Panics
    /// If either dimension is not strictly positive.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        assert_positive_size(width, height);
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    /// Size of the render target, used to detect worlds narrower than the screen.
    pub fn set_screen_size(&mut self, width: f64, height: f64) {
        self.screen = Vec2::new(width, height);
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Move the viewport's top-left corner, cancelling any smoothed movement.
    pub fn set_position(&mut self, position: Vec2) {
        self.place(position);
    }

    pub fn set_x(&mut self, x: f64) {
        self.place(Vec2::new(x, self.base_position().y));
    }

    pub fn set_y(&mut self, y: f64) {
        self.place(Vec2::new(self.base_position().x, y));
    }

    /// Center the viewport on a point in camera space.
    pub fn center(&mut self, point: Vec2) {
        self.place(point - self.viewport / 2.0);
    }

    pub fn center_x(&mut self, x: f64) {
        self.set_x(x - self.viewport.x / 2.0);
    }

    pub fn center_y(&mut self, y: f64) {
        self.set_y(y - self.viewport.y / 2.0);
    }

    /// Rotation in radians applied by the view transforms.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// World-space offset added to targets before zooming.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the configured range.
    ///
    /// The position is re-anchored on the stored destination scaled by the
    /// new zoom, so the same world point stays at the viewport origin.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = self.clamp_zoom(zoom);
        if clamped != zoom {
            log::trace!("Zoom {zoom} clamped to {clamped}");
        }
        let scale = clamped / self.zoom;
        self.zoom = clamped;
        if let Some(shake) = &mut self.shake {
            shake.anchor *= scale;
        }
        self.position = self.snap(self.destination * self.zoom);
    }

    /// Step the zoom towards `max_zoom_in`.
    ///
    /// After each change the next `zoom_cooldown_ticks` calls are ignored.
    pub fn zoom_in(&mut self) {
        self.step_zoom(self.config.zoom_step);
    }

    /// Step the zoom towards `max_zoom_out`.
    pub fn zoom_out(&mut self) {
        self.step_zoom(-self.config.zoom_step);
    }

    /// Destination of smoothed movement, in unzoomed world units.
    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    pub fn is_moving(&self) -> bool {
        self.moving_to_destination
    }

    /// Glide to `position` (camera space) at `free_float_speed` per tick.
    pub fn move_to(&mut self, position: Vec2) {
        self.travel_to(position);
    }

    /// Start a decaying shake of the given radius around the current position.
    ///
    /// Shaking again while already shaking keeps the original anchor. A glide
    /// in progress is suspended and resumes once the shake settles.
    pub fn start_shaking(&mut self, radius: f64) {
        if radius < self.config.shake_min_radius {
            return;
        }
        let (anchor, resume) = match self.shake {
            Some(shake) => (shake.anchor, shake.resume),
            None => (
                self.position,
                self.moving_to_destination.then_some(self.destination),
            ),
        };
        self.moving_to_destination = false;
        self.shake = Some(Shake {
            anchor,
            radius,
            angle: self.rng.f64() * TAU,
            resume,
        });
        log::debug!("Camera shake started with radius {radius}");
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Current shake radius, or zero when still.
    pub fn shake_radius(&self) -> f64 {
        self.shake.map_or(0.0, |s| s.radius)
    }

    /// Advance shake and smoothed movement by one tick.
    pub fn update(&mut self) {
        if self.shake.is_some() {
            self.shake_step();
        } else if self.moving_to_destination {
            self.move_to_destination();
        }
    }

    /// Follow `target` inside a world of `world_size`, snapping every call.
    ///
    /// Each axis is clamped to `[0, world - viewport]`; an axis on which the
    /// zoomed world is smaller than the screen is centered instead.
    pub fn follow(&mut self, target: &impl Positioned, world_size: Vec2) {
        let world = world_size * self.zoom;
        let t = self.zoomed_target(target);
        let x = follow_axis(t.x, world.x, self.viewport.x, self.screen.x);
        let y = follow_axis(t.y, world.y, self.viewport.y, self.screen.y);
        self.place(Vec2::new(x, y));
    }

    /// Follow `target` clamped to `bounds`, gliding there through [`Camera::update`].
    ///
    /// An axis on which the zoomed bounds are narrower than the viewport is
    /// centered on the bounds.
    pub fn follow_bounded(&mut self, target: &impl Positioned, bounds: Bounds) {
        let lo = bounds.min * self.zoom;
        let hi = bounds.max * self.zoom;
        let t = self.zoomed_target(target);
        let x = clamp_axis(t.x, lo.x, hi.x, self.viewport.x);
        let y = clamp_axis(t.y, lo.y, hi.y, self.viewport.y);
        self.travel_to(Vec2::new(x, y));
    }

    /// Center on `target` immediately with no clamping.
    pub fn follow_direct(&mut self, target: &impl Positioned) {
        let t = self.zoomed_target(target);
        self.place(t - self.viewport / 2.0);
    }

    /// Viewport rectangle in zoomed world space.
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.viewport.x, self.viewport.y)
    }

    /// True if the world rectangle overlaps the viewport. Touching edges do
    /// not count.
    pub fn on_screen(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        let zoomed = Rect::new(x * self.zoom, y * self.zoom, w * self.zoom, h * self.zoom);
        zoomed.intersects(&self.viewport_rect())
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world + self.offset) * self.zoom - self.position
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen + self.position) / self.zoom - self.offset
    }

    /// Draw transform: offset, then rotation, then zoom, then translation by
    /// `-position`.
    pub fn view_transform(&self) -> DAffine2 {
        DAffine2::from_translation(-self.position.to_glam())
            * DAffine2::from_scale(DVec2::splat(self.zoom))
            * DAffine2::from_angle(self.rotation)
            * DAffine2::from_translation(self.offset.to_glam())
    }

    /// Same as [`Camera::view_transform`] without the zoom.
    pub fn view_transform_ignore_zoom(&self) -> DAffine2 {
        DAffine2::from_translation(-self.position.to_glam())
            * DAffine2::from_angle(self.rotation)
            * DAffine2::from_translation(self.offset.to_glam())
    }

    /// Orthographic view-projection over the screen, y pointing down.
    pub fn view_projection(&self) -> Mat4 {
        let projection =
            Mat4::orthographic_rh_gl(0.0, self.screen.x as f32, self.screen.y as f32, 0.0, -1.0, 1.0);

        let translation =
            Mat4::from_translation(Vec3::new(-self.position.x as f32, -self.position.y as f32, 0.0));
        let zoom = Mat4::from_scale(Vec3::new(self.zoom as f32, self.zoom as f32, 1.0));
        let rotation = Mat4::from_rotation_z(self.rotation as f32);
        let offset = Mat4::from_translation(Vec3::new(self.offset.x as f32, self.offset.y as f32, 0.0));

        projection * translation * zoom * rotation * offset
    }

    fn zoomed_target(&self, target: &impl Positioned) -> Vec2 {
        (target.position() + self.offset) * self.zoom
    }

    /// Position the camera rests at, ignoring any shake displacement.
    fn base_position(&self) -> Vec2 {
        self.shake.map_or(self.position, |s| s.anchor)
    }

    /// Snap to a camera-space position. While shaking, the shake anchor moves.
    fn place(&mut self, position: Vec2) {
        let position = self.snap(position);
        self.moving_to_destination = false;
        self.destination = position / self.zoom;
        match &mut self.shake {
            Some(shake) => {
                shake.anchor = position;
                shake.resume = None;
            }
            None => self.position = position,
        }
    }

    /// Start gliding to a camera-space position. While shaking, the glide is
    /// queued until the shake settles.
    fn travel_to(&mut self, position: Vec2) {
        if let Some(shake) = &mut self.shake {
            shake.resume = Some(position / self.zoom);
            return;
        }
        self.destination = position / self.zoom;
        self.moving_to_destination = true;
    }

    fn shake_step(&mut self) {
        let Some(mut shake) = self.shake.take() else {
            return;
        };
        shake.radius *= self.config.shake_decay;
        if shake.radius < self.config.shake_min_radius {
            self.destination = shake.resume.unwrap_or(shake.anchor / self.zoom);
            log::debug!("Camera shake settled, gliding to {}", self.destination);
            self.moving_to_destination = true;
            return;
        }

        shake.angle += SHAKE_ANGLE_STEP + self.rng.f64() * SHAKE_ANGLE_JITTER;
        let displacement = Vec2::new(shake.angle.sin(), shake.angle.cos()) * shake.radius;
        self.position = self.snap(shake.anchor + displacement);
        self.shake = Some(shake);
    }

    fn move_to_destination(&mut self) {
        let target = self.destination * self.zoom;
        let distance = self.position.distance(target);
        let speed = self.config.free_float_speed;
        if distance < self.config.arrival_radius || distance <= speed {
            self.position = self.snap(target);
            self.moving_to_destination = false;
            log::debug!("Camera arrived at {}", self.position);
            return;
        }
        let step = Vec2::from_angle(self.position.angle_to(target)) * speed;
        self.position = self.snap(self.position + step);
    }

    fn step_zoom(&mut self, delta: f64) {
        if self.zoom_cooldown > 0 {
            self.zoom_cooldown += 1;
            if self.zoom_cooldown > self.config.zoom_cooldown_ticks {
                self.zoom_cooldown = 0;
            }
            return;
        }
        let before = self.zoom;
        self.set_zoom(self.zoom + delta);
        if self.zoom != before && self.config.zoom_cooldown_ticks > 0 {
            self.zoom_cooldown = 1;
        }
    }

    /// An inverted range resolves to `max_zoom_in`.
    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.config.max_zoom_out).min(self.config.max_zoom_in)
    }

    fn snap(&self, position: Vec2) -> Vec2 {
        if self.config.pixel_snap {
            position.round()
        } else {
            position
        }
    }
}

fn assert_positive_size(width: f64, height: f64) {
    assert!(
        width > 0.0 && height > 0.0,
        "camera viewport must have a positive size, got {width}x{height}"
    );
}

/// Unbounded follow on one axis, all values in zoomed space.
fn follow_axis(target: f64, world: f64, view: f64, screen: f64) -> f64 {
    if world < screen {
        world / 2.0 - view / 2.0
    } else if target - view / 2.0 > 0.0 && target + view / 2.0 < world {
        target - view / 2.0
    } else if target + view / 2.0 >= world {
        world - view
    } else {
        0.0
    }
}

/// Bounded follow on one axis, all values in zoomed space.
fn clamp_axis(target: f64, lo: f64, hi: f64, view: f64) -> f64 {
    if hi - lo < view {
        lo + (hi - lo) / 2.0 - view / 2.0
    } else {
        (target - view / 2.0).clamp(lo, hi - view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    fn settle(camera: &mut Camera) -> usize {
        let mut ticks = 0;
        while camera.is_moving() || camera.is_shaking() {
            camera.update();
            ticks += 1;
            assert!(ticks < 10_000, "camera never settled");
        }
        ticks
    }

    #[test]
    #[should_panic(expected = "positive size")]
    fn zero_viewport_panics() {
        let _ = Camera::new(0.0, 600.0);
    }

    #[test]
    fn zoom_is_clamped_both_ways() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_zoom(10.0);
        assert_eq!(camera.zoom(), 2.0);
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), 0.1);
    }

    #[test]
    fn zoom_steps_skip_cooldown_calls() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.zoom_in();
        assert!((camera.zoom() - 1.01).abs() < EPSILON);
        camera.zoom_in();
        assert!((camera.zoom() - 1.01).abs() < EPSILON);
        camera.zoom_in();
        assert!((camera.zoom() - 1.02).abs() < EPSILON);
        // Cooldown from the last zoom-in swallows the first call.
        for _ in 0..4 {
            camera.zoom_out();
        }
        assert!((camera.zoom() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn set_zoom_reanchors_on_destination() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_position(Vec2::new(100.0, 40.0));
        camera.set_zoom(2.0);
        assert_eq!(camera.position(), Vec2::new(200.0, 80.0));
        assert_eq!(camera.screen_to_world(Vec2::ZERO), Vec2::new(100.0, 40.0));
    }

    #[test]
    fn follow_centers_target_inside_world() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.follow(&Vec2::new(1000.0, 1000.0), Vec2::new(4000.0, 4000.0));
        assert_eq!(camera.position(), Vec2::new(600.0, 700.0));
    }

    #[test]
    fn follow_stops_at_world_edges() {
        let mut camera = Camera::new(800.0, 600.0);
        let world = Vec2::new(4000.0, 4000.0);
        camera.follow(&Vec2::new(10.0, 3990.0), world);
        assert_eq!(camera.position(), Vec2::new(0.0, 3400.0));
    }

    #[test]
    fn follow_centers_small_world() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.follow(&Vec2::new(50.0, 2000.0), Vec2::new(400.0, 4000.0));
        assert_eq!(camera.x(), -200.0);
        assert_eq!(camera.y(), 1700.0);
    }

    #[test]
    fn follow_zero_sized_world_centers_on_origin() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.follow(&Vec2::new(50.0, 50.0), Vec2::ZERO);
        assert_eq!(camera.position(), Vec2::new(-400.0, -300.0));
    }

    #[test]
    fn follow_direct_centers_without_clamping() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_offset(Vec2::new(10.0, 0.0));
        camera.follow_direct(&Vec2::new(-1000.0, 0.0));
        assert_eq!(camera.position(), Vec2::new(-1390.0, -300.0));
        assert!(!camera.is_moving());
    }

    #[test]
    fn bounded_follow_glides_to_clamped_destination() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_free_float_speed(10.0);
        camera.follow_bounded(&Vec2::new(500.0, 320.0), Bounds::from_size(2000.0, 2000.0));
        assert!(camera.is_moving());
        assert_eq!(camera.position(), Vec2::ZERO);

        camera.update();
        let moved = camera.position().length();
        assert!((moved - 10.0).abs() < EPSILON);

        settle(&mut camera);
        assert_eq!(camera.position(), Vec2::new(100.0, 20.0));
    }

    #[test]
    fn bounded_follow_centers_narrow_bounds() {
        let mut camera = Camera::new(800.0, 600.0);
        let bounds = Bounds::new(Vec2::new(100.0, 0.0), Vec2::new(500.0, 2000.0));
        camera.follow_bounded(&Vec2::ZERO, bounds);
        settle(&mut camera);
        assert_eq!(camera.x(), 100.0 + 200.0 - 400.0);
        assert_eq!(camera.y(), 0.0);
    }

    #[test]
    fn move_to_snaps_when_close() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.move_to(Vec2::new(3.0, 3.0));
        camera.update();
        assert_eq!(camera.position(), Vec2::new(3.0, 3.0));
        assert!(!camera.is_moving());
    }

    #[test]
    fn shake_returns_to_anchor() {
        let mut camera = Camera::new(800.0, 600.0).with_seed(7);
        camera.set_position(Vec2::new(250.0, 125.0));
        camera.start_shaking(30.0);
        camera.update();
        assert!(camera.is_shaking());
        assert_ne!(camera.position(), Vec2::new(250.0, 125.0));
        assert!(camera.position().distance(Vec2::new(250.0, 125.0)) <= 27.0 + EPSILON);

        settle(&mut camera);
        assert!(approx_eq(camera.position(), Vec2::new(250.0, 125.0)));
    }

    #[test]
    fn tiny_shake_is_ignored() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.start_shaking(0.1);
        assert!(!camera.is_shaking());
    }

    #[test]
    fn follow_while_shaking_moves_anchor() {
        let mut camera = Camera::new(800.0, 600.0).with_seed(3);
        camera.start_shaking(20.0);
        camera.follow_direct(&Vec2::new(1400.0, 300.0));
        settle(&mut camera);
        assert!(approx_eq(camera.position(), Vec2::new(1000.0, 0.0)));
    }

    #[test]
    fn shake_mid_glide_stays_put_then_resumes() {
        let mut camera = Camera::new(800.0, 600.0).with_seed(11);
        let bounds = Bounds::from_size(4000.0, 4000.0);
        camera.follow_bounded(&Vec2::new(2000.0, 300.0), bounds);
        camera.update();
        let before = camera.position();
        assert!(camera.is_moving());

        camera.start_shaking(10.0);
        assert!(!camera.is_moving());
        camera.update();
        assert!(camera.position().distance(before) <= 9.0 + EPSILON);

        settle(&mut camera);
        assert!(approx_eq(camera.position(), Vec2::new(1600.0, 0.0)));
    }

    #[test]
    fn bounded_follow_during_shake_is_queued() {
        let mut camera = Camera::new(800.0, 600.0).with_seed(5);
        camera.start_shaking(10.0);
        camera.follow_bounded(&Vec2::new(1000.0, 600.0), Bounds::from_size(2000.0, 2000.0));
        camera.update();
        assert!(camera.position().length() <= 9.0 + EPSILON);

        settle(&mut camera);
        assert!(approx_eq(camera.position(), Vec2::new(600.0, 300.0)));
    }

    #[test]
    fn inverted_zoom_range_does_not_panic() {
        let config = CameraConfig {
            max_zoom_out: 3.0,
            ..CameraConfig::default()
        };
        let camera = Camera::new(800.0, 600.0).with_config(config);
        assert_eq!(camera.zoom(), 2.0);
    }

    #[test]
    fn pixel_snap_rounds_positions() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_pixel_snap(true);
        camera.set_position(Vec2::new(10.4, 20.6));
        assert_eq!(camera.position(), Vec2::new(10.0, 21.0));

        camera.set_free_float_speed(3.3);
        camera.move_to(Vec2::new(100.0, 21.0));
        camera.update();
        assert_eq!(camera.position(), Vec2::new(13.0, 21.0));
    }

    #[test]
    fn screen_and_world_round_trip() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_position(Vec2::new(35.0, -12.0));
        camera.set_offset(Vec2::new(4.0, 2.0));
        camera.set_zoom(1.5);
        let world = Vec2::new(123.0, 456.0);
        let screen = camera.world_to_screen(world);
        assert!(approx_eq(camera.screen_to_world(screen), world));
    }

    #[test]
    fn view_transform_matches_world_to_screen() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_position(Vec2::new(40.0, 30.0));
        camera.set_offset(Vec2::new(-5.0, 5.0));
        camera.set_zoom(0.5);
        let world = Vec2::new(300.0, 200.0);
        let via_affine: Vec2 = camera.view_transform().transform_point2(world.to_glam()).into();
        assert!(approx_eq(via_affine, camera.world_to_screen(world)));

        let ignore_zoom: Vec2 = camera
            .view_transform_ignore_zoom()
            .transform_point2(world.to_glam())
            .into();
        assert!(approx_eq(ignore_zoom, world + camera.offset() - camera.position()));
    }

    #[test]
    fn view_projection_maps_viewport_origin_to_top_left() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_position(Vec2::new(100.0, 100.0));
        let clip = camera.view_projection() * glam::Vec4::new(100.0, 100.0, 0.0, 1.0);
        assert!((clip.x + 1.0).abs() < 1e-5);
        assert!((clip.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn on_screen_excludes_touching_rectangles() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_position(Vec2::new(100.0, 100.0));
        assert!(!camera.on_screen(50.0, 150.0, 50.0, 10.0));
        assert!(camera.on_screen(51.0, 150.0, 50.0, 10.0));
        assert!(!camera.on_screen(900.0, 150.0, 10.0, 10.0));
        assert!(camera.on_screen(899.0, 150.0, 10.0, 10.0));
    }

    #[test]
    fn on_screen_accounts_for_zoom() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_zoom(2.0);
        // The viewport covers world x in (0, 400) at 2x zoom.
        assert!(camera.on_screen(390.0, 10.0, 5.0, 5.0));
        assert!(!camera.on_screen(400.0, 10.0, 5.0, 5.0));
    }
}
