//! Transform Component
//!
//! Plain position/rotation/scale bag for 2D actors. Only `rotation.x` is
//! used as an angle (degrees); `rotation.y` is carried for editing symmetry.
//!
//! The transform is the source of truth for where an actor is. Once per
//! frame the owning actor copies it into its shape (see `Actor::update`).

use macroquad::math::Vec2;

/// Local 2D transform of an actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in scene pixels
    position: Vec2,
    /// Rotation; x = angle in degrees
    rotation: Vec2,
    /// Scale factor per axis
    scale: Vec2,
}

impl Transform {
    /// Identity transform (origin, no rotation, scale 1)
    pub const IDENTITY: Transform = Transform {
        position: Vec2::ZERO,
        rotation: Vec2::ZERO,
        scale: Vec2::ONE,
    };

    /// Create transform at a position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Move toward `target` at `speed` units/second.
    ///
    /// Does nothing while the target is within `range`. The step is not
    /// clamped: callers detect arrival themselves. Returns true if the
    /// position changed.
    pub fn seek(&mut self, target: Vec2, speed: f32, delta_time: f32, range: f32) -> bool {
        let direction = target - self.position;
        let length = direction.length();

        // Zero-length direction cannot be normalized (negative range case)
        if length <= range || length <= f32::EPSILON {
            return false;
        }

        self.position += (direction / length) * speed * delta_time;
        true
    }

    /// Overwrite all three fields at once
    pub fn set_transform(&mut self, position: Vec2, rotation: Vec2, scale: Vec2) {
        self.position = position;
        self.rotation = rotation;
        self.scale = scale;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec2) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Rotation angle in degrees (the x component)
    pub fn angle(&self) -> f32 {
        self.rotation.x
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec2::ZERO);
        assert_eq!(t.rotation(), Vec2::ZERO);
        assert_eq!(t.scale(), Vec2::ONE);
    }

    #[test]
    fn test_seek_moves_toward_target() {
        let mut t = Transform::from_position(vec2(0.0, 0.0));
        let moved = t.seek(vec2(100.0, 0.0), 200.0, 0.1, 10.0);

        assert!(moved);
        assert!((t.position().x - 20.0).abs() < 0.001);
        assert!(t.position().y.abs() < 0.001);
    }

    #[test]
    fn test_seek_step_is_bounded_by_speed() {
        let start = vec2(10.0, 10.0);
        let target = vec2(310.0, 410.0);
        let mut t = Transform::from_position(start);
        t.seek(target, 50.0, 0.5, 1.0);

        let step = t.position().distance(start);
        assert!((step - 25.0).abs() < 0.001);
        // Strictly closer, no overshoot
        assert!(t.position().distance(target) < start.distance(target));
        assert!((t.position().distance(target) - (500.0 - 25.0)).abs() < 0.01);
    }

    #[test]
    fn test_seek_within_range_does_not_move() {
        let mut t = Transform::from_position(vec2(95.0, 0.0));
        let moved = t.seek(vec2(100.0, 0.0), 200.0, 1.0, 10.0);

        assert!(!moved);
        assert_eq!(t.position(), vec2(95.0, 0.0));

        // Exactly at range boundary is still "arrived"
        let mut t = Transform::from_position(vec2(90.0, 0.0));
        assert!(!t.seek(vec2(100.0, 0.0), 200.0, 1.0, 10.0));
        assert_eq!(t.position(), vec2(90.0, 0.0));
    }

    #[test]
    fn test_seek_at_target_is_noop_even_with_negative_range() {
        let mut t = Transform::from_position(vec2(5.0, 5.0));
        assert!(!t.seek(vec2(5.0, 5.0), 100.0, 1.0, -1.0));
        assert_eq!(t.position(), vec2(5.0, 5.0));
        assert!(!t.position().x.is_nan());
    }

    #[test]
    fn test_setters() {
        let mut t = Transform::default();
        t.set_transform(vec2(1.0, 2.0), vec2(45.0, 0.0), vec2(2.0, 3.0));
        assert_eq!(t.position(), vec2(1.0, 2.0));
        assert!((t.angle() - 45.0).abs() < 0.001);
        assert_eq!(t.scale(), vec2(2.0, 3.0));

        t.set_scale(Vec2::ONE);
        assert_eq!(t.scale(), Vec2::ONE);
    }
}
