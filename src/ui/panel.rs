//! Resizable panel system
//!
//! Panels can be split horizontally or vertically with draggable dividers.

use macroquad::prelude::*;
use super::theme::{BG_COLOR, BORDER_COLOR, FONT_SIZE_HEADER, HEADER_COLOR, HEADER_TEXT, TITLE_HEIGHT};
use super::{Rect, UiContext};

/// Direction of a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitDir {
    Horizontal, // Left | Right
    Vertical,   // Top / Bottom
}

/// A split panel that divides space between two children
pub struct SplitPanel {
    pub id: u64,
    pub dir: SplitDir,
    pub ratio: f32,        // 0.0 - 1.0
    pub min_size: f32,     // Minimum size in pixels for each side
    pub divider_size: f32, // Width/height of the draggable divider
}

impl SplitPanel {
    /// `id` must not collide with per-frame widget ids; use large values
    pub fn new(id: u64, dir: SplitDir) -> Self {
        Self {
            id,
            dir,
            ratio: 0.5,
            min_size: 50.0,
            divider_size: 4.0,
        }
    }

    pub fn horizontal(id: u64) -> Self {
        Self::new(id, SplitDir::Horizontal)
    }

    pub fn vertical(id: u64) -> Self {
        Self::new(id, SplitDir::Vertical)
    }

    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Handle divider dragging, draw the divider, return the two child rects
    pub fn update(&mut self, ctx: &mut UiContext, bounds: Rect) -> (Rect, Rect) {
        let divider = self.divider_rect(bounds);

        if ctx.dragging.is_none() && ctx.mouse.inside(&divider) {
            ctx.set_hot(self.id);
            if ctx.mouse.left_pressed {
                ctx.start_drag(self.id);
            }
        }

        if ctx.is_dragging(self.id) {
            let (offset, total) = match self.dir {
                SplitDir::Horizontal => (ctx.mouse.x - bounds.x, bounds.w),
                SplitDir::Vertical => (ctx.mouse.y - bounds.y, bounds.h),
            };
            if total > 0.0 {
                self.ratio = self.clamp_ratio(offset / total, total);
            }
        }

        let color = if ctx.is_hot(self.id) || ctx.is_dragging(self.id) {
            Color::from_rgba(100, 150, 255, 255)
        } else {
            Color::from_rgba(60, 60, 60, 255)
        };
        draw_rectangle(divider.x, divider.y, divider.w, divider.h, color);

        self.child_rects(bounds)
    }

    /// Clamp ratio to respect minimum sizes
    fn clamp_ratio(&self, ratio: f32, total_size: f32) -> f32 {
        let min_ratio = (self.min_size / total_size).min(0.5);
        ratio.clamp(min_ratio, 1.0 - min_ratio)
    }

    fn divider_rect(&self, bounds: Rect) -> Rect {
        match self.dir {
            SplitDir::Horizontal => {
                let x = bounds.x + bounds.w * self.ratio - self.divider_size * 0.5;
                Rect::new(x, bounds.y, self.divider_size, bounds.h)
            }
            SplitDir::Vertical => {
                let y = bounds.y + bounds.h * self.ratio - self.divider_size * 0.5;
                Rect::new(bounds.x, y, bounds.w, self.divider_size)
            }
        }
    }

    /// The two child rectangles (excluding divider)
    fn child_rects(&self, bounds: Rect) -> (Rect, Rect) {
        let half_div = self.divider_size * 0.5;

        match self.dir {
            SplitDir::Horizontal => {
                let split = bounds.w * self.ratio;
                (
                    Rect::new(bounds.x, bounds.y, (split - half_div).max(0.0), bounds.h),
                    Rect::new(bounds.x + split + half_div, bounds.y, (bounds.w - split - half_div).max(0.0), bounds.h),
                )
            }
            SplitDir::Vertical => {
                let split = bounds.h * self.ratio;
                (
                    Rect::new(bounds.x, bounds.y, bounds.w, (split - half_div).max(0.0)),
                    Rect::new(bounds.x, bounds.y + split + half_div, bounds.w, (bounds.h - split - half_div).max(0.0)),
                )
            }
        }
    }
}

/// Draw a panel background with a title bar, return the content area
pub fn draw_panel(rect: Rect, title: &str) -> Rect {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BG_COLOR);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);

    let title_rect = rect.slice_top(TITLE_HEIGHT);
    draw_rectangle(title_rect.x, title_rect.y, title_rect.w, title_rect.h, HEADER_COLOR);
    draw_text(title, rect.x + 6.0, rect.y + 16.0, FONT_SIZE_HEADER, HEADER_TEXT);

    rect.remaining_after_top(TITLE_HEIGHT).pad(4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_rects_horizontal() {
        let panel = SplitPanel::horizontal(1000).with_ratio(0.25);
        let (left, right) = panel.child_rects(Rect::new(0.0, 0.0, 400.0, 100.0));
        assert!((left.w - 98.0).abs() < 0.001);
        assert!((right.x - 102.0).abs() < 0.001);
        assert!((right.w - 298.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_ratio_respects_min_size() {
        let panel = SplitPanel::vertical(1001).with_min_size(100.0);
        assert!((panel.clamp_ratio(0.05, 400.0) - 0.25).abs() < 0.001);
        assert!((panel.clamp_ratio(0.99, 400.0) - 0.75).abs() < 0.001);
        // Too small to honor both minimums: stays centered
        assert!((panel.clamp_ratio(0.9, 100.0) - 0.5).abs() < 0.001);
    }
}
