//! Inspector - view and edit the selected actor's transform in place

use macroquad::math::Vec2;

use crate::game::{Actor, ShapeFactory, TextureComponent, Transform};
use crate::ui::{button, draw_panel, drag_vec2, label, radio_button, theme, Rect, Rows, UiContext};

/// Editable transform field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformField {
    Position,
    Rotation,
    Scale,
}

impl TransformField {
    pub const ALL: [TransformField; 3] = [
        TransformField::Position,
        TransformField::Rotation,
        TransformField::Scale,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransformField::Position => "Position",
            TransformField::Rotation => "Rotation",
            TransformField::Scale => "Scale",
        }
    }

    /// Value change per dragged pixel
    pub fn drag_speed(&self) -> f32 {
        match self {
            TransformField::Position => 1.0,
            TransformField::Rotation => 1.0,
            TransformField::Scale => 0.01,
        }
    }

    pub fn get(&self, transform: &Transform) -> Vec2 {
        match self {
            TransformField::Position => transform.position(),
            TransformField::Rotation => transform.rotation(),
            TransformField::Scale => transform.scale(),
        }
    }

    pub fn set(&self, transform: &mut Transform, value: Vec2) {
        match self {
            TransformField::Position => transform.set_position(value),
            TransformField::Rotation => transform.set_rotation(value),
            TransformField::Scale => transform.set_scale(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorAction {
    None,
    Destroy,
}

pub fn draw_inspector(ctx: &mut UiContext, rect: Rect, actor: Option<&mut Actor>) -> InspectorAction {
    let content = draw_panel(rect, "Inspector");
    let mut rows = Rows::new(content);

    let Some(actor) = actor else {
        label(rows.next(), "Select an actor in the outliner", theme::TEXT_DIM);
        return InspectorAction::None;
    };

    label(rows.next(), &format!("Actor: {}", actor.name()), theme::TEXT_COLOR);
    label(rows.next(), &format!("Role: {}", actor.role().label()), theme::TEXT_DIM);
    // Inactive actors are neither drawn nor driven
    if radio_button(ctx, rows.next(), "Active", actor.is_active()) {
        actor.set_active(!actor.is_active());
    }

    let kinds: Vec<&str> = actor.component_kinds().iter().map(|k| k.label()).collect();
    label(rows.next(), &format!("Components: {}", kinds.join(", ")), theme::TEXT_DIM);

    if let Some(shape) = actor.get_component::<ShapeFactory>() {
        label(rows.next(), &format!("Shape: {}", shape.kind().label()), theme::TEXT_DIM);
    }
    if let Some(texture) = actor.get_component::<TextureComponent>() {
        label(rows.next(), &format!("Texture: {}", texture.texture_name()), theme::TEXT_DIM);
    }

    match actor.get_component_mut::<Transform>() {
        Some(transform) => {
            for field in TransformField::ALL {
                label(rows.next(), field.label(), theme::TEXT_COLOR);
                let mut value = field.get(transform);
                if drag_vec2(ctx, rows.next(), &mut value, field.drag_speed()) {
                    field.set(transform, value);
                }
            }
        }
        None => label(rows.next(), "No transform", theme::TEXT_DIM),
    }

    rows.next();
    let destroy_rect = rows.next().slice_left(120.0);
    if button(ctx, destroy_rect, "Destroy") {
        InspectorAction::Destroy
    } else {
        InspectorAction::None
    }
}
