//! Scene driver
//!
//! Owns the window, the scene, the services and the editor state, and runs
//! the frame loop: poll events, update, render into the scene target, draw
//! the editor around it, present.

use macroquad::prelude::*;

use crate::config::AppConfig;
use crate::editor::{draw_editor, EditorState};
use crate::error::AppError;
use crate::game::{Actor, ActorRole, Scene, ShapeKind, TextureComponent, WaypointPath};
use crate::services::{NotificationService, ResourceManager, Severity};
use crate::ui::{theme, KeyboardState, MouseState, UiContext};
use crate::window::Window;

const CIRCLE_START: Vec2 = Vec2::new(200.0, 200.0);
const TRIANGLE_START: Vec2 = Vec2::new(600.0, 200.0);
const TRACK_START: Vec2 = Vec2::new(600.0, 450.0);

const WAYPOINT_MARKER_RADIUS: f32 = 4.0;

pub struct BaseApp {
    config: AppConfig,
    window: Option<Window>,
    scene: Scene,
    notifications: NotificationService,
    resources: ResourceManager,
    editor: EditorState,
    ui: UiContext,
}

impl BaseApp {
    /// `notifications` carries anything reported before the app existed
    /// (config loading).
    pub fn new(config: AppConfig, notifications: NotificationService) -> Self {
        let scene = Scene::new(WaypointPath::new(config.waypoint_points()), config.motion);
        let resources = ResourceManager::new(
            config.texture_dir.clone(),
            config.default_texture.0.clone(),
            config.default_texture.1.clone(),
        );
        Self {
            config,
            window: None,
            scene,
            notifications,
            resources,
            editor: EditorState::new(),
            ui: UiContext::new(),
        }
    }

    /// Create the window and the initial actors
    pub fn initialize(&mut self) -> Result<(), AppError> {
        self.config.validate()?;
        self.window = Some(Window::new(&self.config.window, &mut self.notifications)?);

        let circle = Actor::with_shape("Circle", ShapeKind::Circle, BLUE, CIRCLE_START)
            .with_role(ActorRole::WaypointFollower);
        self.scene.add_actor(circle);

        let triangle = Actor::with_shape("Triangle", ShapeKind::Triangle, WHITE, TRIANGLE_START);
        self.scene.add_actor(triangle);

        let mut track = Actor::with_shape("Track", ShapeKind::Rectangle, WHITE, TRACK_START);
        if let Err(e) = self.attach_texture(&mut track, "Track", "png") {
            self.notifications
                .add_message(Severity::Error, format!("BaseApp::initialize : Track drawn untextured ({})", e));
        }
        self.scene.add_actor(track);

        self.notifications.log(format!(
            "BaseApp::initialize : {} actors, {} waypoints",
            self.scene.actors().len(),
            self.scene.waypoints().len()
        ));
        Ok(())
    }

    fn attach_texture(&mut self, actor: &mut Actor, name: &str, extension: &str) -> Result<(), AppError> {
        let asset = self.resources.load_texture(name, extension, &mut self.notifications)?;
        actor.add_component(TextureComponent::new(asset));
        Ok(())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn update(&mut self, delta_time: f32) {
        if let Some(window) = &mut self.window {
            window.handle_events(&mut self.notifications);
        }
        self.scene.update(delta_time);
    }

    pub fn render(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        window.begin_scene(theme::SCENE_BG);
        self.scene.render();
        draw_waypoints(self.scene.waypoints());
        window.end_scene();

        self.ui.begin_frame(MouseState::poll(), KeyboardState::poll());
        draw_editor(
            &mut self.ui,
            &mut self.editor,
            &mut self.scene,
            &mut self.notifications,
            window.scene_texture(),
            window.scene_size(),
        );
    }

    fn is_running(&self) -> bool {
        self.window.as_ref().is_some_and(Window::is_open)
    }

    pub async fn run(&mut self) {
        while self.is_running() {
            self.update(get_frame_time());
            self.render();
            next_frame().await;
        }
        if let Err(e) = self.cleanup() {
            log::error!("could not write {}: {}", self.config.log_file, e);
        }
    }

    /// Close the window and write every collected message to the log file
    pub fn cleanup(&mut self) -> Result<(), AppError> {
        if let Some(mut window) = self.window.take() {
            window.close();
        }
        self.notifications.show_all_messages();
        self.notifications.save_messages_to_file(&self.config.log_file)?;
        Ok(())
    }
}

/// Waypoint markers, the current target highlighted
fn draw_waypoints(path: &WaypointPath) {
    for (i, point) in path.points().iter().enumerate() {
        let color = if i == path.index() { YELLOW } else { GRAY };
        draw_circle(point.x, point.y, WAYPOINT_MARKER_RADIUS, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_has_no_window_and_empty_scene() {
        let app = BaseApp::new(AppConfig::default(), NotificationService::new());
        assert!(!app.is_running());
        assert!(app.scene().actors().is_empty());
        assert_eq!(app.scene().waypoints().len(), 5);
    }

    #[test]
    fn test_cleanup_writes_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Messages.txt");

        let mut config = AppConfig::default();
        config.log_file = path.to_string_lossy().into_owned();
        let mut notes = NotificationService::new();
        notes.add_message(Severity::Warning, "config ignored");

        let mut app = BaseApp::new(config, notes);
        app.cleanup().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Code: WARNING - Messages:"));
        assert!(written.contains("   config ignored"));
    }
}
