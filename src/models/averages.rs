use serde::{Deserialize, Serialize};

use super::{Course, MenuItem};

/// Mean price per course.
///
/// A course with no dishes reports `0.0`. Values are plain floating-point
/// means; rounding is left to whoever displays them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CourseAverages {
    pub starters: f64,
    pub mains: f64,
    pub dessert: f64,
}

impl CourseAverages {
    pub fn from_items(items: &[MenuItem]) -> Self {
        let mut totals = [0.0_f64; 3];
        let mut counts = [0_usize; 3];

        for item in items {
            let slot = slot(item.course);
            totals[slot] += item.price;
            counts[slot] += 1;
        }

        let mean = |slot: usize| {
            if counts[slot] == 0 {
                0.0
            } else {
                totals[slot] / counts[slot] as f64
            }
        };

        Self {
            starters: mean(0),
            mains: mean(1),
            dessert: mean(2),
        }
    }

    pub fn get(&self, course: Course) -> f64 {
        match course {
            Course::Starters => self.starters,
            Course::Mains => self.mains,
            Course::Dessert => self.dessert,
        }
    }

    /// Averages in course order.
    pub fn iter(&self) -> impl Iterator<Item = (Course, f64)> + '_ {
        Course::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

fn slot(course: Course) -> usize {
    match course {
        Course::Starters => 0,
        Course::Mains => 1,
        Course::Dessert => 2,
    }
}
