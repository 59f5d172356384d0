//! Actor factory panel - build new static actors from a name, archetype and colour

use macroquad::math::Vec2;
use macroquad::prelude::Color;

use crate::game::{Actor, Scene, ShapeKind};
use crate::services::{NotificationService, Severity};
use crate::ui::{button, draw_panel, label, radio_button, text_field, theme, Rect, Rows, UiContext};

/// Longest name the text field accepts
pub const MAX_NAME_LEN: usize = 63;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActorArchetype {
    #[default]
    Track,
    Circle,
    Triangle,
}

impl ActorArchetype {
    pub const ALL: [ActorArchetype; 3] = [
        ActorArchetype::Track,
        ActorArchetype::Circle,
        ActorArchetype::Triangle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActorArchetype::Track => "Track",
            ActorArchetype::Circle => "Circle",
            ActorArchetype::Triangle => "Triangle",
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            ActorArchetype::Track => ShapeKind::Rectangle,
            ActorArchetype::Circle => ShapeKind::Circle,
            ActorArchetype::Triangle => ShapeKind::Triangle,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FactoryColor {
    #[default]
    Red,
    Blue,
    Purple,
}

impl FactoryColor {
    pub const ALL: [FactoryColor; 3] = [FactoryColor::Red, FactoryColor::Blue, FactoryColor::Purple];

    pub fn label(&self) -> &'static str {
        match self {
            FactoryColor::Red => "Red",
            FactoryColor::Blue => "Blue",
            FactoryColor::Purple => "Purple",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FactoryColor::Red => Color::from_rgba(255, 0, 0, 255),
            FactoryColor::Blue => Color::from_rgba(0, 0, 255, 255),
            FactoryColor::Purple => Color::from_rgba(128, 0, 128, 255),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActorFactoryState {
    pub name: String,
    pub archetype: ActorArchetype,
    pub color: FactoryColor,
}

impl ActorFactoryState {
    /// Name to give the next actor. Falls back to the archetype label.
    pub fn actor_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            self.archetype.label()
        } else {
            trimmed
        }
    }

    /// Static actor with a transform at `position` and the chosen shape
    pub fn build_actor(&self, position: Vec2) -> Actor {
        Actor::with_shape(
            self.actor_name(),
            self.archetype.shape_kind(),
            self.color.color(),
            position,
        )
    }
}

/// Append the actor described by `state` at `spawn`, report it and clear
/// the name field. Returns the new actor's index.
pub fn create_actor(
    state: &mut ActorFactoryState,
    scene: &mut Scene,
    notes: &mut NotificationService,
    spawn: Vec2,
) -> usize {
    let actor = state.build_actor(spawn);
    notes.add_message(
        Severity::Info,
        format!(
            "ActorFactory : created {} '{}' ({})",
            state.archetype.label(),
            actor.name(),
            state.color.label()
        ),
    );
    let index = scene.add_actor(actor);
    state.name.clear();
    index
}

/// Returns the index of the actor created this frame, if any
pub fn draw_actor_factory(
    ctx: &mut UiContext,
    rect: Rect,
    state: &mut ActorFactoryState,
    scene: &mut Scene,
    notes: &mut NotificationService,
    spawn: Vec2,
) -> Option<usize> {
    let content = draw_panel(rect, "Actor Factory");
    let mut rows = Rows::new(content);

    let name_row = rows.next();
    label(name_row.slice_left(50.0), "Name", theme::TEXT_DIM);
    text_field(ctx, name_row.remaining_after_left(54.0), &mut state.name, MAX_NAME_LEN);

    label(rows.next(), "Shape", theme::TEXT_DIM);
    let shape_row = rows.next();
    let third = shape_row.w / 3.0;
    for (i, archetype) in ActorArchetype::ALL.into_iter().enumerate() {
        let cell = Rect::new(shape_row.x + third * i as f32, shape_row.y, third, shape_row.h);
        if radio_button(ctx, cell, archetype.label(), state.archetype == archetype) {
            state.archetype = archetype;
        }
    }

    label(rows.next(), "Color", theme::TEXT_DIM);
    let color_row = rows.next();
    for (i, color) in FactoryColor::ALL.into_iter().enumerate() {
        let cell = Rect::new(color_row.x + third * i as f32, color_row.y, third, color_row.h);
        if radio_button(ctx, cell, color.label(), state.color == color) {
            state.color = color;
        }
    }

    rows.next();
    if !button(ctx, rows.next().slice_left(140.0), "Create Actor") {
        return None;
    }
    Some(create_actor(state, scene, notes, spawn))
}
