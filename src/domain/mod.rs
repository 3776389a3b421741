//! Domain layer: command parsing, input sources and the service registry.

pub mod command;
pub mod error;
pub mod input;
pub mod registry;
pub mod services;
