//! Scene window
//!
//! macroquad owns the OS window; this wraps the parts the app cares about:
//! the off-screen target the scene is drawn into, resize tracking and an
//! explicit open/closed state so shutdown code gets a chance to run.

use macroquad::camera::{set_camera, set_default_camera, Camera2D};
use macroquad::math::{vec2, Rect as MqRect, Vec2};
use macroquad::prelude::{
    clear_background, is_quit_requested, prevent_quit, render_target, screen_height, screen_width,
    Color, FilterMode, RenderTarget, Texture2D,
};

use crate::config::WindowConfig;
use crate::error::AppError;
use crate::services::NotificationService;

pub struct Window {
    /// Scene target size in pixels
    width: u32,
    height: u32,
    target: RenderTarget,
    camera: Camera2D,
    /// Last seen screen size, for resize detection
    screen_size: Vec2,
    open: bool,
}

impl Window {
    /// Set up the scene target. Fails on an unusable size.
    pub fn new(config: &WindowConfig, notes: &mut NotificationService) -> Result<Self, AppError> {
        if config.width == 0 || config.height == 0 {
            return Err(AppError::Window(format!(
                "invalid size {}x{}",
                config.width, config.height
            )));
        }

        // Window close goes through is_quit_requested so cleanup can run
        prevent_quit();

        let (target, camera) = create_target(config.width, config.height);
        notes.log(format!(
            "Window::new : [CREATION OF RESOURCE] : {} ({}x{}) OK",
            config.title, config.width, config.height
        ));

        Ok(Self {
            width: config.width,
            height: config.height,
            target,
            camera,
            screen_size: vec2(screen_width(), screen_height()),
            open: true,
        })
    }

    /// Close requests and resizes. The scene target follows the window size.
    pub fn handle_events(&mut self, notes: &mut NotificationService) {
        if is_quit_requested() {
            self.open = false;
        }

        let size = vec2(screen_width(), screen_height());
        if size == self.screen_size {
            return;
        }
        self.screen_size = size;

        // Minimized windows report zero; keep the old target
        let (w, h) = (size.x.round() as u32, size.y.round() as u32);
        if w == 0 || h == 0 {
            return;
        }
        let (target, camera) = create_target(w, h);
        self.target = target;
        self.camera = camera;
        self.width = w;
        self.height = h;
        notes.log(format!("Window::handle_events : resized to {}x{}", w, h));
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Route drawing into the scene target and clear it
    pub fn begin_scene(&self, color: Color) {
        set_camera(&self.camera);
        clear_background(color);
    }

    /// Route drawing back to the screen
    pub fn end_scene(&self) {
        set_default_camera();
    }

    pub fn scene_texture(&self) -> &Texture2D {
        &self.target.texture
    }

    pub fn scene_size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }
}

fn create_target(width: u32, height: u32) -> (RenderTarget, Camera2D) {
    let target = render_target(width, height);
    target.texture.set_filter(FilterMode::Linear);

    let mut camera = Camera2D::from_display_rect(MqRect::new(0.0, 0.0, width as f32, height as f32));
    camera.render_target = Some(target.clone());
    (target, camera)
}
