//! Basic UI widgets
//!
//! Immediate mode: each call draws the widget and returns what the user did
//! to it this frame.

use macroquad::prelude::*;
use super::theme::*;
use super::{Rect, UiContext};

/// Top-to-bottom row layout inside a panel
pub struct Rows {
    rect: Rect,
    cursor_y: f32,
    spacing: f32,
}

impl Rows {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_y: rect.y,
            spacing: 4.0,
        }
    }

    /// Next full-width row of the standard height
    pub fn next(&mut self) -> Rect {
        self.next_with_height(ROW_HEIGHT)
    }

    pub fn next_with_height(&mut self, height: f32) -> Rect {
        let row = Rect::new(self.rect.x, self.cursor_y, self.rect.w, height);
        self.cursor_y += height + self.spacing;
        row
    }

    /// Space below the last row
    pub fn remaining(&self) -> Rect {
        let h = (self.rect.bottom() - self.cursor_y).max(0.0);
        Rect::new(self.rect.x, self.cursor_y, self.rect.w, h)
    }

    /// True once rows would be drawn past the bottom
    pub fn is_full(&self) -> bool {
        self.cursor_y + ROW_HEIGHT > self.rect.bottom()
    }
}

/// Single line of text, vertically centered in `rect`
pub fn label(rect: Rect, text: &str, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, (rect.x + 4.0).round(), y, FONT_SIZE_CONTENT, color);
}

/// Push button, returns true when clicked
pub fn button(ctx: &mut UiContext, rect: Rect, text: &str) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    if hovered {
        ctx.set_hot(id);
    }

    let bg = if hovered && ctx.mouse.left_down {
        BUTTON_ACTIVE
    } else if hovered {
        BUTTON_HOVERED
    } else {
        BUTTON_COLOR
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);

    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let tx = (rect.x + (rect.w - dims.width) * 0.5).round();
    let ty = (rect.y + (rect.h + dims.height) * 0.5).round();
    let fg = if hovered { HEADER_TEXT } else { TEXT_COLOR };
    draw_text(text, tx, ty, FONT_SIZE_CONTENT, fg);

    ctx.mouse.clicked(&rect)
}

/// List row that can be selected, returns true when clicked
pub fn selectable(ctx: &mut UiContext, rect: Rect, text: &str, selected: bool) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    if hovered {
        ctx.set_hot(id);
    }

    let (bg, fg) = if selected {
        (Some(HEADER_ACTIVE), HEADER_TEXT)
    } else if hovered {
        (Some(HEADER_HOVERED), HEADER_TEXT)
    } else {
        (None, TEXT_COLOR)
    };
    if let Some(bg) = bg {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    }
    label(rect, text, fg);

    ctx.mouse.clicked(&rect)
}

/// Radio button (square marker + label), returns true when clicked
pub fn radio_button(ctx: &mut UiContext, rect: Rect, text: &str, active: bool) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    if hovered {
        ctx.set_hot(id);
    }

    let mark = Rect::new(rect.x + 2.0, rect.y + (rect.h - 12.0) * 0.5, 12.0, 12.0);
    draw_rectangle(mark.x, mark.y, mark.w, mark.h, FIELD_BG);
    draw_rectangle_lines(mark.x, mark.y, mark.w, mark.h, 1.0, if hovered { BUTTON_HOVERED } else { BORDER_COLOR });
    if active {
        let inner = mark.pad(3.0);
        draw_rectangle(inner.x, inner.y, inner.w, inner.h, HEADER_ACTIVE);
    }
    label(rect.remaining_after_left(16.0), text, TEXT_COLOR);

    ctx.mouse.clicked(&rect)
}

/// Horizontal drag field for one float. Returns true if the value changed.
pub fn drag_float(ctx: &mut UiContext, rect: Rect, value: &mut f32, speed: f32) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    if hovered {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed && ctx.dragging.is_none() {
            ctx.start_drag(id);
        }
    }

    let mut changed = false;
    if ctx.is_dragging(id) && ctx.mouse_dx != 0.0 {
        *value += ctx.mouse_dx * speed;
        changed = true;
    }

    let border = if ctx.is_dragging(id) {
        BUTTON_ACTIVE
    } else if hovered {
        BUTTON_HOVERED
    } else {
        BORDER_COLOR
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, FIELD_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);
    label(rect, &format!("{:.2}", value), TEXT_COLOR);

    changed
}

/// Two drag fields side by side. Returns true if either changed.
pub fn drag_vec2(ctx: &mut UiContext, rect: Rect, value: &mut Vec2, speed: f32) -> bool {
    let half = (rect.w - 4.0) * 0.5;
    let x_rect = rect.slice_left(half);
    let y_rect = rect.remaining_after_left(half + 4.0);
    let changed_x = drag_float(ctx, x_rect, &mut value.x, speed);
    let changed_y = drag_float(ctx, y_rect, &mut value.y, speed);
    changed_x || changed_y
}

/// Single-line text input. Click to focus, type, backspace to delete.
/// Returns true if the text changed.
pub fn text_field(ctx: &mut UiContext, rect: Rect, text: &mut String, max_len: usize) -> bool {
    let id = ctx.next_id();
    if ctx.mouse.clicked(&rect) {
        ctx.focused = Some(id);
    }

    let focused = ctx.is_focused(id);
    let changed = focused && apply_typing(text, &ctx.keyboard.chars, ctx.keyboard.backspace, max_len);

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, FIELD_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, if focused { FIELD_FOCUS } else { BORDER_COLOR });

    let shown = if focused && (get_time() * 2.0) as i64 % 2 == 0 {
        format!("{}|", text)
    } else {
        text.clone()
    };
    label(rect, &shown, TEXT_COLOR);

    changed
}

/// Apply one frame of typing to `text`. Backspace is applied first.
pub fn apply_typing(text: &mut String, chars: &[char], backspace: bool, max_len: usize) -> bool {
    let mut changed = false;
    if backspace && text.pop().is_some() {
        changed = true;
    }
    for &c in chars {
        if text.chars().count() >= max_len {
            break;
        }
        text.push(c);
        changed = true;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_typing_appends_and_deletes() {
        let mut text = String::from("Bo");
        assert!(apply_typing(&mut text, &['x'], true, 64));
        assert_eq!(text, "Bx");

        assert!(!apply_typing(&mut text, &[], false, 64));
        assert_eq!(text, "Bx");
    }

    #[test]
    fn test_apply_typing_respects_max_len() {
        let mut text = String::from("abc");
        apply_typing(&mut text, &['d', 'e', 'f'], false, 4);
        assert_eq!(text, "abcd");
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut text = String::new();
        assert!(!apply_typing(&mut text, &[], true, 8));
    }

    #[test]
    fn test_rows_layout() {
        let mut rows = Rows::new(Rect::new(0.0, 0.0, 100.0, 60.0));
        let first = rows.next();
        let second = rows.next();
        assert_eq!(first.y, 0.0);
        assert!((second.y - (ROW_HEIGHT + 4.0)).abs() < 0.001);
        assert!(rows.is_full());
    }
}
