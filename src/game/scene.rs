//! Scene
//!
//! The actor list plus the shared waypoint state. `update` runs the per
//! frame logic (actor sync, then waypoint following) and `render` draws
//! every actor with whatever camera is active.

use super::actor::{Actor, ActorRole};
use super::transform::Transform;
use super::waypoint::WaypointPath;
use crate::config::MotionConfig;

pub struct Scene {
    actors: Vec<Actor>,
    waypoints: WaypointPath,
    motion: MotionConfig,
}

impl Scene {
    pub fn new(waypoints: WaypointPath, motion: MotionConfig) -> Self {
        Self {
            actors: Vec::new(),
            waypoints,
            motion,
        }
    }

    /// Append an actor, returning its index
    pub fn add_actor(&mut self, actor: Actor) -> usize {
        self.actors.push(actor);
        self.actors.len() - 1
    }

    /// Destroy and remove the actor at `index`. Later indices shift down.
    pub fn destroy_actor(&mut self, index: usize) -> Option<Actor> {
        if index >= self.actors.len() {
            return None;
        }
        let mut actor = self.actors.remove(index);
        actor.destroy();
        Some(actor)
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, index: usize) -> Option<&Actor> {
        self.actors.get(index)
    }

    pub fn actor_mut(&mut self, index: usize) -> Option<&mut Actor> {
        self.actors.get_mut(index)
    }

    pub fn waypoints(&self) -> &WaypointPath {
        &self.waypoints
    }

    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    /// Actor sync followed by waypoint following
    pub fn update(&mut self, delta_time: f32) {
        for actor in &mut self.actors {
            actor.update(delta_time);
        }
        self.update_movement(delta_time);
    }

    /// Seek the first active waypoint follower toward the current waypoint
    /// and advance the path if it arrived. Returns true on advance.
    pub fn update_movement(&mut self, delta_time: f32) -> bool {
        let Some(target) = self.waypoints.current() else {
            return false;
        };
        let Some(follower) = self
            .actors
            .iter_mut()
            .find(|a| a.is_active() && a.role() == ActorRole::WaypointFollower)
        else {
            return false;
        };
        // A follower without a transform stalls the path
        let Some(transform) = follower.get_component_mut::<Transform>() else {
            return false;
        };

        let motion = &self.motion;
        transform.seek(target, motion.speed, delta_time, motion.range);
        self.waypoints
            .advance_on_arrival(transform.position(), motion.arrival_threshold)
    }

    pub fn render(&self) {
        for actor in &self.actors {
            actor.render();
        }
    }
}
