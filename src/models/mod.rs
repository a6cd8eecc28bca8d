//! Domain models for Christopher's Kitchen.
//!
//! - [`MenuItem`]: a dish with a name, description, course and price.
//! - [`Course`]: the fixed menu sections (Starters, Mains, Dessert).
//! - [`CourseFilter`]: either every course or a single one, used by list views.
//! - [`CourseAverages`]: mean price per course, derived on demand.

mod averages;
mod course;
mod menu_item;

pub use averages::*;
pub use course::*;
pub use menu_item::*;
