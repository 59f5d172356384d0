//! Input state for UI interaction

use macroquad::prelude::*;
use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
}

impl MouseState {
    /// Snapshot macroquad's mouse for this frame
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// Text typed this frame
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub chars: Vec<char>,
    pub backspace: bool,
}

impl KeyboardState {
    /// Drain macroquad's character queue for this frame
    pub fn poll() -> Self {
        let mut chars = Vec::new();
        while let Some(c) = get_char_pressed() {
            if !c.is_control() {
                chars.push(c);
            }
        }
        Self {
            chars,
            backspace: is_key_pressed(KeyCode::Backspace),
        }
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    pub keyboard: KeyboardState,
    /// Horizontal mouse movement since last frame
    pub mouse_dx: f32,
    /// ID of the widget currently being dragged (if any)
    pub dragging: Option<u64>,
    /// ID of the widget that is "hot" (mouse hovering)
    pub hot: Option<u64>,
    /// ID of the text field receiving keyboard input
    pub focused: Option<u64>,
    /// Counter for generating unique IDs
    id_counter: u64,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            keyboard: KeyboardState::default(),
            mouse_dx: 0.0,
            dragging: None,
            hot: None,
            focused: None,
            id_counter: 0,
        }
    }

    /// Generate a unique ID for a widget. Stable as long as widgets are
    /// drawn in the same order every frame.
    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState, keyboard: KeyboardState) {
        self.mouse_dx = mouse.x - self.mouse.x;
        self.mouse = mouse;
        self.keyboard = keyboard;
        self.hot = None;
        self.id_counter = 0;

        // Clear dragging if mouse released
        if !self.mouse.left_down {
            self.dragging = None;
        }
        // Clicking anywhere drops focus; a text field re-claims it
        if self.mouse.left_pressed {
            self.focused = None;
        }
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    /// Set hot widget (hovering)
    pub fn set_hot(&mut self, id: u64) {
        // Only set hot if not dragging something else
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }

    pub fn is_hot(&self, id: u64) -> bool {
        self.hot == Some(id)
    }

    pub fn is_focused(&self, id: u64) -> bool {
        self.focused == Some(id)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(x: f32, left_down: bool, left_pressed: bool) -> MouseState {
        MouseState { x, left_down, left_pressed, ..Default::default() }
    }

    #[test]
    fn test_ids_restart_each_frame() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState::default(), KeyboardState::default());
        assert_eq!(ctx.next_id(), 1);
        assert_eq!(ctx.next_id(), 2);

        ctx.begin_frame(MouseState::default(), KeyboardState::default());
        assert_eq!(ctx.next_id(), 1);
    }

    #[test]
    fn test_drag_released_with_mouse() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse(10.0, true, true), KeyboardState::default());
        ctx.start_drag(3);

        ctx.begin_frame(mouse(25.0, true, false), KeyboardState::default());
        assert!(ctx.is_dragging(3));
        assert!((ctx.mouse_dx - 15.0).abs() < 0.001);

        ctx.begin_frame(mouse(25.0, false, false), KeyboardState::default());
        assert!(ctx.dragging.is_none());
    }

    #[test]
    fn test_click_clears_focus() {
        let mut ctx = UiContext::new();
        ctx.focused = Some(7);

        ctx.begin_frame(mouse(0.0, false, false), KeyboardState::default());
        assert!(ctx.is_focused(7));

        ctx.begin_frame(mouse(0.0, true, true), KeyboardState::default());
        assert!(!ctx.is_focused(7));
    }
}
