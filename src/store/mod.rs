mod seed;

pub use seed::SeedSet;

use chrono::Utc;
use uuid::Uuid;

use crate::confirm::{ActionOutcome, DestructiveAction};
use crate::error::{Field, ValidationError};
use crate::models::*;

/// Owner of the menu collection.
///
/// Items keep insertion order. The only ways in are [`add_item`](Self::add_item)
/// and the seed set; the only ways out are the delete operations and
/// [`clear_all`](Self::clear_all). Derived views are computed from the
/// current items on every call.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: SeedSet) -> Self {
        let items = seed.items();
        tracing::debug!(seed = seed.as_str(), count = items.len(), "seeded menu");
        Self { items }
    }

    // ============================================================
    // Reads
    // ============================================================

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by the start of its id.
    ///
    /// Returns `None` when the prefix is empty, matches nothing, or matches
    /// more than one item.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Option<&MenuItem> {
        let prefix = prefix.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return None;
        }

        let mut matches = self
            .items
            .iter()
            .filter(|item| item.id.to_string().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (Some(item), None) => Some(item),
            _ => None,
        }
    }

    pub fn count_by_course(&self, course: Course) -> usize {
        self.items.iter().filter(|item| item.course == course).count()
    }

    // ============================================================
    // Derived views
    // ============================================================

    pub fn average_price_by_course(&self) -> CourseAverages {
        CourseAverages::from_items(&self.items)
    }

    /// Items matching `filter`, in insertion order.
    pub fn filter_by_course(&self, filter: CourseFilter) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.course))
            .cloned()
            .collect()
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Validates raw form input and appends a new item.
    ///
    /// Fields are checked in form order (name, course, price) and the first
    /// failure is reported. Nothing is stored unless every field is valid.
    pub fn add_item(&mut self, input: CreateMenuItemInput) -> Result<MenuItem, ValidationError> {
        let item = match build_item(&input) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(field = %e.field, reason = %e.reason, "rejected menu item");
                return Err(e);
            }
        };

        tracing::debug!(id = %item.id, name = %item.name, course = %item.course, "added menu item");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes the item with `id`. Returns false when there is no such item.
    pub fn delete_item(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let removed = self.items.remove(pos);
        tracing::debug!(id = %removed.id, name = %removed.name, "deleted menu item");
        true
    }

    /// Removes the most recently added item.
    pub fn delete_last(&mut self) -> Option<MenuItem> {
        let removed = self.items.pop()?;
        tracing::debug!(id = %removed.id, name = %removed.name, "deleted last menu item");
        Some(removed)
    }

    /// Empties the menu and returns how many items were dropped.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        tracing::debug!(removed, "cleared menu");
        removed
    }

    /// Executes a destructive action that has already been confirmed.
    pub fn commit(&mut self, action: DestructiveAction) -> ActionOutcome {
        match action {
            DestructiveAction::DeleteItem(id) => ActionOutcome::Deleted(self.delete_item(id)),
            DestructiveAction::DeleteLast => ActionOutcome::DeletedLast(self.delete_last()),
            DestructiveAction::ClearAll => ActionOutcome::Cleared(self.clear_all()),
        }
    }
}

fn build_item(input: &CreateMenuItemInput) -> Result<MenuItem, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new(Field::Name, "name required"));
    }

    let course = Course::from_str(&input.course)
        .ok_or_else(|| ValidationError::new(Field::Course, "unknown course"))?;

    let price = parse_price(&input.price)?;

    Ok(MenuItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: input.description.trim().to_string(),
        course,
        price,
        created_at: Utc::now(),
    })
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new(Field::Price, "price required"));
    }

    let price: f64 = raw
        .parse()
        .map_err(|_| ValidationError::new(Field::Price, "invalid price"))?;

    // "inf" and "NaN" parse as f64
    if !price.is_finite() {
        return Err(ValidationError::new(Field::Price, "invalid price"));
    }
    if price < 0.0 {
        return Err(ValidationError::new(
            Field::Price,
            "price must not be negative",
        ));
    }

    // Normalize "-0"
    Ok(if price == 0.0 { 0.0 } else { price })
}
