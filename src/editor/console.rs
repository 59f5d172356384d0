//! Console - notification log with a text filter

use crate::services::{NotificationService, Severity};
use crate::ui::{draw_panel, label, text_field, theme, Rect, Rows, TextFilter, UiContext};

const FILTER_MAX_LEN: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub filter_text: String,
}

/// Messages that pass `filter`, grouped by severity in Info, Warning, Error
/// order and in insertion order within a severity.
pub fn visible_lines<'a>(notes: &'a NotificationService, filter: &TextFilter) -> Vec<(Severity, &'a str)> {
    Severity::ALL
        .iter()
        .flat_map(|&severity| {
            notes
                .messages_for(severity)
                .iter()
                .filter(|msg| filter.passes(msg))
                .map(move |msg| (severity, msg.as_str()))
        })
        .collect()
}

pub fn draw_console(ctx: &mut UiContext, rect: Rect, state: &mut ConsoleState, notes: &NotificationService) {
    let content = draw_panel(rect, "Console");
    let mut rows = Rows::new(content);

    let filter_row = rows.next();
    label(filter_row.slice_left(50.0), "Filter", theme::TEXT_DIM);
    text_field(ctx, filter_row.remaining_after_left(54.0), &mut state.filter_text, FILTER_MAX_LEN);

    let filter = TextFilter::parse(&state.filter_text);
    let lines = visible_lines(notes, &filter);

    // Stick to the newest lines
    let area = rows.remaining();
    let step = theme::ROW_HEIGHT;
    let capacity = (area.h / step).floor().max(0.0) as usize;
    let start = lines.len().saturating_sub(capacity);

    for (i, (severity, msg)) in lines[start..].iter().enumerate() {
        let row = Rect::new(area.x, area.y + i as f32 * step, area.w, step);
        label(row, &format!("[{}] {}", severity.label(), msg), theme::severity_color(*severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> NotificationService {
        let mut notes = NotificationService::new();
        notes.add_message(Severity::Error, "Failed to load texture Track.png");
        notes.add_message(Severity::Info, "Window::new OK");
        notes.add_message(Severity::Warning, "Config missing, using defaults");
        notes.add_message(Severity::Info, "Actor created: Ball");
        notes
    }

    #[test]
    fn test_visible_lines_without_filter() {
        let notes = sample_notes();
        let lines = visible_lines(&notes, &TextFilter::default());
        assert_eq!(
            lines,
            vec![
                (Severity::Info, "Window::new OK"),
                (Severity::Info, "Actor created: Ball"),
                (Severity::Warning, "Config missing, using defaults"),
                (Severity::Error, "Failed to load texture Track.png"),
            ]
        );
    }

    #[test]
    fn test_visible_lines_with_filter() {
        let notes = sample_notes();
        let lines = visible_lines(&notes, &TextFilter::parse("texture,actor"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (Severity::Info, "Actor created: Ball"));
        assert_eq!(lines[1].0, Severity::Error);

        let lines = visible_lines(&notes, &TextFilter::parse("-ok"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_visible_lines_empty_service() {
        let notes = NotificationService::new();
        assert!(visible_lines(&notes, &TextFilter::default()).is_empty());
    }
}
