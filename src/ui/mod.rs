//! Immediate-mode UI library for the scene editor
//!
//! Design principles:
//! - Immediate mode (no retained widget tree, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

#![allow(dead_code)]

mod filter;
mod input;
mod panel;
mod rect;
pub mod theme;
mod widgets;

pub use filter::TextFilter;
pub use input::{KeyboardState, MouseState, UiContext};
pub use panel::{draw_panel, SplitPanel};
pub use rect::Rect;
pub use widgets::*;
