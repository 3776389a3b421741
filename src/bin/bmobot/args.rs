//! Process-level argument capture for `bmobot`.
//!
//! Everything after the program name is handed to the dispatcher untouched;
//! `--help` and `--version` are interpreted there, not by clap.

#![deny(clippy::all, clippy::pedantic)]

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bmobot",
    about = "30+ free developer APIs from your terminal",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// `<service> <action> [args...] [--flags]`
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<String>,
}
