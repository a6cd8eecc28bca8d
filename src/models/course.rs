use std::fmt;

use serde::{Deserialize, Serialize};

/// The section of the menu a dish belongs to.
///
/// The set is fixed. Ordering follows the order dishes are served, which is
/// also the order courses are listed in averages and on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Starters,
    Mains,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::Mains => "Mains",
            Self::Dessert => "Dessert",
        }
    }

    /// Parses user input, ignoring case and surrounding whitespace.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starters" => Some(Self::Starters),
            "mains" => Some(Self::Mains),
            "dessert" => Some(Self::Dessert),
            _ => None,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector for [`MenuStore::filter_by_course`](crate::store::MenuStore::filter_by_course).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CourseFilter {
    #[default]
    All,
    Course(Course),
}

impl CourseFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Course::from_str(s).map(Self::Course)
    }

    pub fn matches(&self, course: Course) -> bool {
        match self {
            Self::All => true,
            Self::Course(c) => *c == course,
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        Self::Course(course)
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Course(c) => c.fmt(f),
        }
    }
}
