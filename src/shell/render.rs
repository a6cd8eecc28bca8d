//! Plain-text rendering of the menu.
//!
//! Every function here is a pure view of the state it is given. Prices are
//! rounded to two decimals at this point and nowhere else.

use uuid::Uuid;

use crate::app::{AppState, Screen};
use crate::confirm::{ActionOutcome, ConfirmationPrompt};
use crate::models::{CourseAverages, MenuItem};

const TITLE: &str = "Christopher's Kitchen";

pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

/// First block of the id, enough to tell items apart on screen.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Numbered list of items, one per line, with descriptions indented below.
///
/// Example output:
/// ```text
///   1. [3f2a9c1e] Garlic Bread (Starters) R35.00
///      Toasted ciabatta with garlic butter
/// ```
pub fn render_items(items: &[MenuItem], currency: &str) -> String {
    if items.is_empty() {
        return "  (no items)\n".to_string();
    }

    let mut output = String::new();
    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. [{}] {} ({}) {}\n",
            i + 1,
            short_id(&item.id),
            item.name,
            item.course,
            format_price(item.price, currency)
        ));
        if !item.description.is_empty() {
            output.push_str(&format!("     {}\n", item.description));
        }
    }
    output
}

pub fn render_averages(averages: &CourseAverages, currency: &str) -> String {
    let mut output = String::from("Average price per course:\n");
    for (course, average) in averages.iter() {
        output.push_str(&format!(
            "  {:<9} {}\n",
            course.as_str(),
            format_price(average, currency)
        ));
    }
    output
}

/// Renders whichever screen `state` has selected.
pub fn render_screen(state: &AppState, currency: &str) -> String {
    let store = &state.store;
    match state.screen {
        Screen::Home => {
            let mut output = format!("{}\nTotal Items: {}\n", TITLE, store.len());
            output.push_str(&render_items(store.items(), currency));
            output.push_str(&render_averages(
                &store.average_price_by_course(),
                currency,
            ));
            output
        }
        Screen::AddItem => "Add a dish:\n  add <name> <course> <price> [description...]\n  \
             course is one of: starters, mains, dessert\n  \
             quote names with spaces, e.g. add \"Beef Burger\" mains 95\n"
            .to_string(),
        Screen::Filter(filter) => {
            let items = store.filter_by_course(filter);
            let mut output = format!(
                "Filter: {} ({} of {})\n",
                filter,
                items.len(),
                store.len()
            );
            output.push_str(&render_items(&items, currency));
            output
        }
    }
}

pub fn render_prompt(prompt: &ConfirmationPrompt) -> String {
    format!("{}: {} [yes/no]\n", prompt.title, prompt.message)
}

pub fn render_outcome(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Deleted(true) => "Item deleted.\n".to_string(),
        ActionOutcome::Deleted(false) => "Item was already gone.\n".to_string(),
        ActionOutcome::DeletedLast(Some(item)) => format!("Deleted \"{}\".\n", item.name),
        ActionOutcome::DeletedLast(None) => "The menu is empty.\n".to_string(),
        ActionOutcome::Cleared(count) => format!("Cleared {} item(s).\n", count),
    }
}
