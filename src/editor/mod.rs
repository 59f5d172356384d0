//! Scene editor
//!
//! Panels around the scene view:
//! - Outliner (actor list, selection)
//! - Inspector (selected actor's transform)
//! - Console (filtered notifications)
//! - Actor factory (create new actors)

mod actor_factory;
mod console;
mod inspector;
mod layout;
mod outliner;

pub use actor_factory::{ActorArchetype, ActorFactoryState, FactoryColor};
pub use console::ConsoleState;
pub use layout::{draw_editor, EditorLayout};
pub use outliner::OutlinerState;

/// Everything the editor panels remember between frames
#[derive(Default)]
pub struct EditorState {
    pub layout: EditorLayout,
    pub outliner: OutlinerState,
    pub console: ConsoleState,
    pub factory: ActorFactoryState,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }
}
