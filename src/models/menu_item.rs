use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Course;

/// A single dish on the menu.
///
/// Items are only ever built by [`MenuStore::add_item`](crate::store::MenuStore::add_item)
/// or the seed sets, so `name` is always non-empty and `price` is always a
/// finite, non-negative number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    /// Free text shown under the name. May be empty.
    pub description: String,
    pub course: Course,
    /// Currency-agnostic price. Never rounded when stored.
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Raw form input for a new menu item.
///
/// Every field is the string exactly as typed; trimming, course lookup and
/// price parsing happen in the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMenuItemInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub course: String,
    pub price: String,
}

impl CreateMenuItemInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }
}
