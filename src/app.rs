//! Application state shared by the views.
//!
//! Everything the interface needs lives in one owned [`AppState`] value.
//! Views read from it; changes go through the store or through the
//! request/confirm/cancel methods here.

use crate::confirm::{ActionOutcome, ConfirmationPrompt, DestructiveAction};
use crate::models::CourseFilter;
use crate::store::MenuStore;

/// Which view is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    AddItem,
    Filter(CourseFilter),
}

#[derive(Debug, Default)]
pub struct AppState {
    pub store: MenuStore,
    pub screen: Screen,
    pending: Option<ConfirmationPrompt>,
}

impl AppState {
    pub fn new(store: MenuStore) -> Self {
        Self {
            store,
            screen: Screen::Home,
            pending: None,
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(?screen, "navigate");
        self.screen = screen;
    }

    pub fn pending(&self) -> Option<&ConfirmationPrompt> {
        self.pending.as_ref()
    }

    /// Stores a prompt for `action`, replacing any prompt still waiting.
    pub fn request(&mut self, action: DestructiveAction) -> &ConfirmationPrompt {
        let prompt = action.prompt(&self.store);
        self.pending.insert(prompt)
    }

    /// Commits the pending action. Returns `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<ActionOutcome> {
        let prompt = self.pending.take()?;
        Some(self.store.commit(prompt.action))
    }

    /// Drops the pending action. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
