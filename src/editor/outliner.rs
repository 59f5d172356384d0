//! Outliner - flat list of actors with single selection

use crate::game::Actor;
use crate::ui::{draw_panel, label, selectable, theme, Rect, Rows, UiContext};

/// Which actor is selected, by index into the scene's actor list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutlinerState {
    selected: Option<usize>,
}

impl OutlinerState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Keep the selection pointing at the same actor after `removed` is
    /// taken out of the list.
    pub fn on_removed(&mut self, removed: usize) {
        self.selected = match self.selected {
            Some(i) if i == removed => None,
            Some(i) if i > removed => Some(i - 1),
            other => other,
        };
    }

    /// Drop a selection that is out of range
    pub fn sync(&mut self, actor_count: usize) {
        if self.selected.is_some_and(|i| i >= actor_count) {
            self.selected = None;
        }
    }
}

pub fn draw_outliner(ctx: &mut UiContext, rect: Rect, state: &mut OutlinerState, actors: &[Actor]) {
    let content = draw_panel(rect, "Outliner");
    let mut rows = Rows::new(content);

    if actors.is_empty() {
        label(rows.next(), "(no actors)", theme::TEXT_DIM);
        return;
    }

    for (i, actor) in actors.iter().enumerate() {
        if rows.is_full() {
            break;
        }
        let text = if actor.is_active() {
            actor.name().to_string()
        } else {
            format!("{} (inactive)", actor.name())
        };
        if selectable(ctx, rows.next(), &text, state.selected == Some(i)) {
            state.select(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear() {
        let mut state = OutlinerState::default();
        assert_eq!(state.selected(), None);
        state.select(2);
        assert_eq!(state.selected(), Some(2));
        state.clear();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_on_removed_tracks_the_same_actor() {
        let mut state = OutlinerState::default();
        state.select(3);

        state.on_removed(1);
        assert_eq!(state.selected(), Some(2));

        state.on_removed(5);
        assert_eq!(state.selected(), Some(2));

        state.on_removed(2);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_sync_clamps_out_of_range() {
        let mut state = OutlinerState::default();
        state.select(4);
        state.sync(5);
        assert_eq!(state.selected(), Some(4));
        state.sync(4);
        assert_eq!(state.selected(), None);
    }
}
