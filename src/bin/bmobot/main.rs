//! bmobot: free developer APIs from the terminal.
//! Maps `<service> <action> [args] [--flags]` onto one HTTP call and prints
//! the reply.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod print;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, trace};

use bmobot::VERSION;
use bmobot::application::request::{Origin, build_request};
use bmobot::application::resolve::{Resolution, resolve};
use bmobot::config;
use bmobot::domain::command::ParsedCommand;
use bmobot::domain::input::StdinCapture;
use bmobot::domain::registry::{Call, Registry, ServiceDef};
use bmobot::infra::telemetry;
use bmobot::presentation::help;
use bmobot::presentation::output::OutputMode;
use bmobot::presentation::style::Style;

use args::Cli;
use client::{CliError, Ctx};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), CliError> {
    let settings = config::load()?;
    telemetry::init(&settings.logging)?;

    let stdin = StdinCapture::capture().await.map_err(CliError::Stdin)?;
    debug!(bytes = stdin.len(), "captured stdin");

    let parsed = ParsedCommand::parse(args);
    let registry = Registry::builtin();
    let style = Style::for_stdout();
    let origin = &settings.api.origin;

    if parsed.flags.is_set("version") {
        return print::line(VERSION);
    }

    let Some(name) = parsed.service() else {
        return print::line(&help::global_help(registry, style));
    };
    let service = registry.lookup(name)?;

    if parsed.flags.is_set("help") {
        return show_service_help(service, origin, style);
    }

    let resolved = match resolve(service, parsed.after_service())? {
        Resolution::Action(resolved) => resolved,
        Resolution::ShowHelp => return show_service_help(service, origin, style),
    };
    trace!(service = service.name, action = resolved.name, args = ?resolved.args, "resolved action");

    let call = Call::new(&resolved.args, &parsed.flags, &stdin);
    let request = build_request(origin, service, resolved.action, &call)?;

    let ctx = Ctx::new()?;
    let reply = ctx.send(&request).await?;
    print::reply(&reply, OutputMode::from_flags(&parsed.flags), style)
}

fn show_service_help(service: &ServiceDef, origin: &Origin, style: Style) -> Result<(), CliError> {
    let docs = origin.docs_url(service.host)?;
    print::line(&help::service_help(service, docs.as_str(), style))
}

#[cfg(test)]
mod tests;
