//! Waypoint Path
//!
//! A fixed, cyclic list of points and the index of the one currently being
//! chased. There is no terminal state: arriving at the last point wraps
//! back to the first.

use macroquad::math::Vec2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointPath {
    points: Vec<Vec2>,
    index: usize,
}

impl WaypointPath {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points, index: 0 }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point currently being chased, None for an empty path
    pub fn current(&self) -> Option<Vec2> {
        self.points.get(self.index).copied()
    }

    /// Advance to the next point (wrapping) if `position` is closer than
    /// `threshold` to the current one. At most one step per call.
    pub fn advance_on_arrival(&mut self, position: Vec2, threshold: f32) -> bool {
        let Some(target) = self.current() else {
            return false;
        };
        if position.distance(target) < threshold {
            self.index = (self.index + 1) % self.points.len();
            true
        } else {
            false
        }
    }
}
