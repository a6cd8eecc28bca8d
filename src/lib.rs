//! Christopher's Kitchen: a small menu builder.
//!
//! [`store::MenuStore`] owns the dishes and computes the derived views,
//! [`app::AppState`] wraps it with the selected screen and any pending
//! confirmation, and [`shell::Shell`] is the text front end on top.

pub mod app;
pub mod config;
pub mod confirm;
pub mod error;
pub mod models;
pub mod shell;
pub mod store;
