//! Presentation layer: help screens, reply formatting and colour.

pub mod help;
pub mod output;
pub mod style;
