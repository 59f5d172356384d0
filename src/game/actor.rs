//! Actors
//!
//! An actor is a named, ordered list of components plus an explicit role.
//! Lookup is a linear scan in insertion order; actors hold at most a handful
//! of components so nothing smarter is needed. Duplicates are allowed but
//! only the first of a kind is ever returned.

use macroquad::prelude::Color;
use macroquad::math::Vec2;

use super::component::{Component, ComponentKind, ComponentType};
use super::shape::{ShapeFactory, ShapeKind};
use super::texture::TextureComponent;
use super::transform::Transform;

/// What the scene driver does with an actor each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorRole {
    /// Updated and drawn, never moved by the driver
    #[default]
    Static,
    /// Driven along the scene's waypoint path
    WaypointFollower,
}

impl ActorRole {
    pub fn label(&self) -> &'static str {
        match self {
            ActorRole::Static => "Static",
            ActorRole::WaypointFollower => "Waypoint follower",
        }
    }
}

/// A named container owning components
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    role: ActorRole,
    active: bool,
    components: Vec<Component>,
}

impl Actor {
    /// Create an empty, active, static actor
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ActorRole::Static,
            active: true,
            components: Vec::new(),
        }
    }

    /// Create an actor with a transform at `position` and a filled shape
    pub fn with_shape(name: impl Into<String>, kind: ShapeKind, color: Color, position: Vec2) -> Self {
        let mut shape = ShapeFactory::new();
        shape.create_shape(kind);
        shape.set_fill_color(color);
        shape.set_position(position);

        let mut actor = Self::new(name);
        actor.add_component(Transform::from_position(position));
        actor.add_component(shape);
        actor
    }

    /// Builder-style role assignment
    pub fn with_role(mut self, role: ActorRole) -> Self {
        self.role = role;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> ActorRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Append a component. No duplicate check.
    pub fn add_component(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    /// First component of type `T` in insertion order
    pub fn get_component<T: ComponentType>(&self) -> Option<&T> {
        self.components.iter().find_map(T::from_component)
    }

    /// First component of type `T` in insertion order, mutably
    pub fn get_component_mut<T: ComponentType>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(T::from_component_mut)
    }

    pub fn has_component<T: ComponentType>(&self) -> bool {
        self.components.iter().any(|c| c.kind() == T::KIND)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(Component::kind).collect()
    }

    /// Push the transform into the shape. Either one missing is a no-op.
    pub fn update(&mut self, _delta_time: f32) {
        let Some(transform) = self.get_component::<Transform>().copied() else {
            return;
        };
        if let Some(shape) = self.get_component_mut::<ShapeFactory>() {
            shape.set_position(transform.position());
            shape.set_rotation(transform.angle());
            shape.set_scale(transform.scale());
        }
    }

    /// Draw the owned shape with the current camera
    pub fn render(&self) {
        if !self.active {
            return;
        }
        let Some(shape) = self.get_component::<ShapeFactory>().and_then(ShapeFactory::shape) else {
            return;
        };
        let texture = self
            .get_component::<TextureComponent>()
            .map(|t| t.asset().gpu_texture());
        shape.draw(texture);
    }

    /// Drop every component and deactivate
    pub fn destroy(&mut self) {
        self.components.clear();
        self.active = false;
    }
}
