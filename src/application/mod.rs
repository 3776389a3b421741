//! Application layer: action resolution and request construction.

pub mod request;
pub mod resolve;
