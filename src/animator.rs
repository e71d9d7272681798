//! Per-frame animation of the quad's model matrix.
//!
//! The [`Animator`] owns all mutable animation state: the accumulated
//! rotation angle and the instant of the last update. Timestamps are
//! passed in rather than read from a clock inside `update`, so the math
//! can be driven (and tested) with simulated time.
//!
//! Each update rebuilds the model matrix from scratch in a fixed order:
//! scale, then rotate, then translate. Scaling and rotating happen about
//! the quad's own center, and the translation is applied last, so the
//! quad spins in place while its center orbits the world origin at a
//! fixed radius.

use std::time::Instant;

use glam::Mat4;

use crate::transform::{rotation_matrix, scale_matrix, translation_matrix};

/// Animation constants for the orbiting quad.
///
/// Defaults match the reference scene: 10 degrees per second of spin,
/// an orbit radius of 1, and a quarter-size quad.
#[derive(Clone, Copy, Debug)]
pub struct AnimatorConfig {
    /// Spin rate in degrees per second.
    pub rotation_speed: f32,
    /// Distance from the world origin to the quad's center.
    pub orbit_distance: f32,
    /// Uniform scale applied to the quad.
    pub model_size: f32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 10.0,
            orbit_distance: 1.0,
            model_size: 0.25,
        }
    }
}

impl AnimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation_speed(mut self, degrees_per_second: f32) -> Self {
        self.rotation_speed = degrees_per_second;
        self
    }

    pub fn orbit_distance(mut self, distance: f32) -> Self {
        self.orbit_distance = distance;
        self
    }

    pub fn model_size(mut self, size: f32) -> Self {
        self.model_size = size;
        self
    }
}

/// Tracks elapsed time and rotation, and produces the current model matrix.
///
/// There is exactly one writer: [`Animator::update`], which advances the
/// rotation by `rotation_speed * dt` and recomputes the model matrix.
/// The rotation angle grows without bound; the trigonometry wraps it
/// implicitly, so it is never normalized.
#[derive(Debug)]
pub struct Animator {
    config: AnimatorConfig,
    current_rotation: f32,
    last_update: Instant,
    model: Mat4,
}

impl Animator {
    /// Creates an animator at rotation zero, timestamped at `now`.
    ///
    /// The model matrix is valid immediately; a scene drawn before its
    /// first update shows the quad unrotated at the orbit radius.
    pub fn new(config: AnimatorConfig, now: Instant) -> Self {
        let mut animator = Self {
            config,
            current_rotation: 0.0,
            last_update: now,
            model: Mat4::IDENTITY,
        };
        animator.rebuild_model();
        animator
    }

    /// Advances the animation to `now` and rebuilds the model matrix.
    ///
    /// Call once per frame, before the draw that consumes the matrix.
    /// An unchanged timestamp is a zero-length frame: the rotation and
    /// matrix come out identical.
    pub fn update(&mut self, now: Instant) {
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;

        self.current_rotation += self.config.rotation_speed * dt;
        log::trace!("rotation: {:.3} degrees", self.current_rotation);

        self.rebuild_model();
    }

    // Scale, then rotate, then translate. Translation last keeps the
    // orbit radius independent of spin angle.
    fn rebuild_model(&mut self) {
        self.model = translation_matrix(self.config.orbit_distance, 0.0)
            * rotation_matrix(self.current_rotation.to_radians())
            * scale_matrix(self.config.model_size, self.config.model_size);
    }

    /// The model matrix as of the last update.
    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }

    /// Accumulated rotation in degrees. Monotonically increasing.
    pub fn rotation_degrees(&self) -> f32 {
        self.current_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use std::time::Duration;

    #[test]
    fn zero_delta_leaves_rotation_unchanged() {
        let t0 = Instant::now();
        let mut animator = Animator::new(AnimatorConfig::default(), t0);

        animator.update(t0);
        let first = animator.rotation_degrees();
        animator.update(t0);

        assert_eq!(animator.rotation_degrees(), first);
        assert_eq!(first, 0.0);
    }

    #[test]
    fn one_second_advances_by_rotation_speed() {
        let t0 = Instant::now();
        let mut animator = Animator::new(AnimatorConfig::default(), t0);

        animator.update(t0 + Duration::from_secs(1));

        assert_eq!(animator.rotation_degrees(), 10.0);
    }

    #[test]
    fn rotation_accumulates_across_updates() {
        let t0 = Instant::now();
        let config = AnimatorConfig::new().rotation_speed(90.0);
        let mut animator = Animator::new(config, t0);

        animator.update(t0 + Duration::from_millis(500));
        animator.update(t0 + Duration::from_millis(1500));

        assert!((animator.rotation_degrees() - 135.0).abs() < 1e-3);
    }

    #[test]
    fn origin_orbits_at_fixed_radius() {
        let t0 = Instant::now();
        let config = AnimatorConfig::new().orbit_distance(2.0);
        let mut animator = Animator::new(config, t0);

        // Scale and rotation pin the local origin; only the translation
        // moves it, so its distance from the world origin never changes.
        for seconds in [0, 1, 7, 360] {
            animator.update(t0 + Duration::from_secs(seconds));
            let origin = animator.model_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
            assert!((origin.truncate().length() - 2.0).abs() < 1e-4);
            assert_eq!(origin.w, 1.0);
        }
    }

    #[test]
    fn translation_column_is_orbit_offset() {
        let t0 = Instant::now();
        let mut animator = Animator::new(AnimatorConfig::default(), t0);

        animator.update(t0 + Duration::from_secs(1));

        // Translation composes after the rotation, so the offset stays on
        // the x axis no matter the spin angle.
        let translation = animator.model_matrix().col(3);
        assert!((translation - Vec4::new(1.0, 0.0, 0.0, 1.0)).abs().max_element() < 1e-6);
    }

    #[test]
    fn model_matrix_spins_the_quad_about_its_center() {
        let t0 = Instant::now();
        let config = AnimatorConfig::new()
            .rotation_speed(90.0)
            .orbit_distance(1.0)
            .model_size(1.0);
        let mut animator = Animator::new(config, t0);

        animator.update(t0 + Duration::from_secs(1));

        // A quarter turn sends the local +x vertex to +y, relative to the
        // orbit-displaced center.
        let p = animator.model_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p - Vec4::new(1.0, 1.0, 0.0, 1.0)).abs().max_element() < 1e-4);
    }

    #[test]
    fn fresh_animator_has_unrotated_model() {
        let animator = Animator::new(AnimatorConfig::default(), Instant::now());

        let p = animator.model_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p - Vec4::new(1.25, 0.0, 0.0, 1.0)).abs().max_element() < 1e-6);
    }
}
