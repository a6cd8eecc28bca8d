//! Two-step confirmation for destructive menu actions.
//!
//! A caller first turns a [`DestructiveAction`] into a [`ConfirmationPrompt`]
//! to show the user, and only once the user agrees hands the action to
//! [`MenuStore::commit`], which executes it unconditionally.

use serde::Serialize;
use uuid::Uuid;

use crate::models::MenuItem;
use crate::store::MenuStore;

/// An action that removes items from the menu.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum DestructiveAction {
    DeleteItem(Uuid),
    DeleteLast,
    ClearAll,
}

/// What to ask the user before running an action.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
    pub action: DestructiveAction,
}

/// Result of a committed [`DestructiveAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Whether an item with the requested id existed.
    Deleted(bool),
    DeletedLast(Option<MenuItem>),
    /// Number of items removed.
    Cleared(usize),
}

impl DestructiveAction {
    /// Describes the action against the current menu without changing it.
    pub fn prompt(&self, store: &MenuStore) -> ConfirmationPrompt {
        let (title, message) = match self {
            Self::DeleteItem(id) => match store.get(*id) {
                Some(item) => (
                    "Delete item".to_string(),
                    format!("Remove \"{}\" from the menu?", item.name),
                ),
                None => (
                    "Delete item".to_string(),
                    "That item is no longer on the menu. Continue anyway?".to_string(),
                ),
            },
            Self::DeleteLast => match store.items().last() {
                Some(item) => (
                    "Delete last item".to_string(),
                    format!("Remove the last added item \"{}\"?", item.name),
                ),
                None => (
                    "Delete last item".to_string(),
                    "The menu is already empty. Continue anyway?".to_string(),
                ),
            },
            Self::ClearAll => (
                "Clear menu".to_string(),
                format!(
                    "Remove all {} item(s) from the menu? This cannot be undone.",
                    store.len()
                ),
            ),
        };

        ConfirmationPrompt {
            title,
            message,
            action: *self,
        }
    }
}
