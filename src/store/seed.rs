use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Course, MenuItem};

/// The collection a store starts with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SeedSet {
    /// No dishes.
    Empty,
    /// Five sample dishes covering every course.
    #[default]
    Sample,
}

const SAMPLE: [(&str, &str, Course, f64); 5] = [
    (
        "Garlic Bread",
        "Toasted ciabatta with garlic butter",
        Course::Starters,
        35.0,
    ),
    (
        "Grilled Chicken",
        "Flame-grilled chicken breast with herbs",
        Course::Mains,
        85.0,
    ),
    (
        "Beef Burger",
        "Beef patty, cheddar and caramelised onion",
        Course::Mains,
        95.0,
    ),
    (
        "Chocolate Cake",
        "Rich dark chocolate sponge",
        Course::Dessert,
        55.0,
    ),
    (
        "Greek Salad",
        "Feta, olives, cucumber and tomato",
        Course::Starters,
        45.0,
    ),
];

impl SeedSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Sample => "sample",
        }
    }

    /// Builds fresh items for this set. Each call yields new ids.
    pub fn items(&self) -> Vec<MenuItem> {
        match self {
            Self::Empty => Vec::new(),
            Self::Sample => {
                let now = Utc::now();
                SAMPLE
                    .iter()
                    .map(|&(name, description, course, price)| MenuItem {
                        id: Uuid::new_v4(),
                        name: name.to_string(),
                        description: description.to_string(),
                        course,
                        price,
                        created_at: now,
                    })
                    .collect()
            }
        }
    }
}
