// src/validation/mod.rs

pub mod theme;

pub use theme::{ThemeError, validate_theme};
