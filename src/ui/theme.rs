//! UI Theme - Shared colors and styling constants
//!
//! Near-black panels, white text, loud red/green/yellow accents on headers
//! and square corners everywhere.

use macroquad::prelude::Color;

use crate::services::Severity;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Window/panel background
pub const BG_COLOR: Color = Color::new(0.05, 0.05, 0.05, 1.0);

/// Scene view letterbox background
pub const SCENE_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Border around panels and fields
pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Disabled/secondary text
pub const TEXT_DIM: Color = Color::new(0.5, 0.5, 0.5, 1.0);

// =============================================================================
// Headers (panel titles, selected rows)
// =============================================================================

pub const HEADER_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const HEADER_HOVERED: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const HEADER_ACTIVE: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Text drawn on top of a bright header
pub const HEADER_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Buttons and fields
// =============================================================================

pub const BUTTON_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
pub const BUTTON_HOVERED: Color = Color::new(1.0, 0.65, 0.0, 1.0);
pub const BUTTON_ACTIVE: Color = Color::new(0.85, 0.85, 0.0, 1.0);

/// Text field / drag field background
pub const FIELD_BG: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Focus outline on text fields
pub const FIELD_FOCUS: Color = Color::new(1.0, 0.65, 0.0, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_HEADER: f32 = 18.0;
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Height of one widget row
pub const ROW_HEIGHT: f32 = 22.0;

/// Height of a panel title bar
pub const TITLE_HEIGHT: f32 = 22.0;

// =============================================================================
// Console
// =============================================================================

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::new(1.0, 0.4, 0.4, 1.0),
        Severity::Warning => Color::new(1.0, 1.0, 0.4, 1.0),
        Severity::Info => Color::new(0.8, 0.8, 0.8, 1.0),
    }
}
