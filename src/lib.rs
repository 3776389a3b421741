//! Dispatch engine behind the `bmobot` command-line client.
//!
//! A compiled-in registry maps `<service> <action>` pairs onto HTTP calls
//! against `https://<service>.bmobot.ai`. The binary in `src/bin/bmobot`
//! parses the command line, resolves the action, builds the request through
//! this crate and renders the reply.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

/// Version string printed by `bmobot --version` and sent in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
