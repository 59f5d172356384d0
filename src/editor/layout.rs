//! Editor layout - splitter-based panel arrangement around the scene view

use macroquad::prelude::*;

use crate::game::Scene;
use crate::services::NotificationService;
use crate::ui::{draw_panel, theme, Rect, SplitPanel, UiContext};
use super::actor_factory::draw_actor_factory;
use super::console::draw_console;
use super::inspector::{draw_inspector, InspectorAction};
use super::outliner::draw_outliner;
use super::EditorState;

/// Split panel ids sit far above the per-frame widget ids
const SPLIT_ID_BASE: u64 = 1_000_000;

/// Editor layout state (split panel ratios)
pub struct EditorLayout {
    /// Outliner | center + inspector
    pub main_split: SplitPanel,
    /// Center column | inspector
    pub right_split: SplitPanel,
    /// Scene view / bottom panels
    pub center_split: SplitPanel,
    /// Console | actor factory
    pub bottom_split: SplitPanel,
}

impl EditorLayout {
    pub fn new() -> Self {
        Self {
            main_split: SplitPanel::horizontal(SPLIT_ID_BASE + 1).with_ratio(0.18).with_min_size(150.0),
            right_split: SplitPanel::horizontal(SPLIT_ID_BASE + 2).with_ratio(0.75).with_min_size(200.0),
            center_split: SplitPanel::vertical(SPLIT_ID_BASE + 3).with_ratio(0.68).with_min_size(120.0),
            bottom_split: SplitPanel::horizontal(SPLIT_ID_BASE + 4).with_ratio(0.6).with_min_size(150.0),
        }
    }
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the scene target into `rect`, letterboxed to keep its aspect ratio
pub fn draw_scene_view(rect: Rect, texture: &Texture2D, scene_size: Vec2) {
    let content = draw_panel(rect, "Scene");
    draw_rectangle(content.x, content.y, content.w, content.h, theme::SCENE_BG);
    if scene_size.x <= 0.0 || scene_size.y <= 0.0 {
        return;
    }

    let view = content.fit_aspect(scene_size.x / scene_size.y);
    draw_texture_ex(
        texture,
        view.x,
        view.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(view.w, view.h)),
            // Render targets come out upside down
            flip_y: true,
            ..Default::default()
        },
    );
}

/// Draw the complete editor UI over the screen
pub fn draw_editor(
    ctx: &mut UiContext,
    state: &mut EditorState,
    scene: &mut Scene,
    notes: &mut NotificationService,
    scene_texture: &Texture2D,
    scene_size: Vec2,
) {
    let screen = Rect::screen(screen_width(), screen_height());
    clear_background(theme::BG_COLOR);

    let (outliner_rect, rest_rect) = state.layout.main_split.update(ctx, screen);
    let (center_rect, inspector_rect) = state.layout.right_split.update(ctx, rest_rect);
    let (scene_rect, bottom_rect) = state.layout.center_split.update(ctx, center_rect);
    let (console_rect, factory_rect) = state.layout.bottom_split.update(ctx, bottom_rect);

    state.outliner.sync(scene.actors().len());
    draw_outliner(ctx, outliner_rect, &mut state.outliner, scene.actors());

    draw_scene_view(scene_rect, scene_texture, scene_size);

    let selected = state.outliner.selected();
    let action = draw_inspector(ctx, inspector_rect, selected.and_then(|i| scene.actor_mut(i)));
    if let (InspectorAction::Destroy, Some(index)) = (action, selected) {
        if let Some(actor) = scene.destroy_actor(index) {
            notes.log(format!("Inspector : destroyed actor '{}'", actor.name()));
            state.outliner.on_removed(index);
        }
    }

    draw_console(ctx, console_rect, &mut state.console, notes);

    let spawn = scene_size * 0.5;
    if let Some(index) = draw_actor_factory(ctx, factory_rect, &mut state.factory, scene, notes, spawn) {
        state.outliner.select(index);
    }
}
