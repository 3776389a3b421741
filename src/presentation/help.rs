//! Global and per-service help screens.

use crate::VERSION;
use crate::domain::registry::{Registry, ServiceDef};

use super::style::Style;

const SERVICE_COLUMN: usize = 10;
const ACTION_COLUMN: usize = 14;

const EXAMPLES: &[&str] = &[
    "bmobot hash sha256 \"hello world\"",
    "bmobot uuid v4",
    "bmobot json format @data.json",
    "bmobot password generate --length=20",
    "bmobot cron \"*/5 * * * *\"",
    "bmobot color palette \"#ff6600\" --type=analogous",
    "bmobot ascii \"Hello World\" --font=banner",
    "cat file.json | bmobot json validate -",
];

const GLOBAL_FLAGS: &[(&str, &str)] = &[
    ("--json", "Output raw JSON response"),
    ("--raw", "Output minified JSON (for piping)"),
    ("--help", "Show help for a service"),
    ("--version", "Show version"),
];

/// Overview of every service, shown for `bmobot`, `bmobot --help`.
pub fn global_help(registry: &Registry, style: Style) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "{} {} \u{2014} 30+ free developer APIs from your terminal",
            style.title("bmobot"),
            style.dim(&format!("v{VERSION}"))
        ),
        style.dim("https://bmobot.ai"),
        String::new(),
        style.heading("Usage:"),
        "  bmobot <service> <action> [args...] [--flags]".to_string(),
        "  bmobot <service> --help".to_string(),
        String::new(),
        style.heading("Services:"),
    ];
    lines.extend(registry.services().iter().map(|service| {
        format!(
            "  {} {}",
            style.name(&format!("{:<SERVICE_COLUMN$}", service.name)),
            style.dim(service.description)
        )
    }));

    lines.push(String::new());
    lines.push(style.heading("Examples:"));
    lines.extend(
        EXAMPLES
            .iter()
            .map(|example| format!("  {} {example}", style.dim("$"))),
    );

    lines.push(String::new());
    lines.push(style.heading("Global Flags:"));
    lines.extend(
        GLOBAL_FLAGS
            .iter()
            .map(|(flag, about)| format!("  {flag:<11} {about}")),
    );

    lines.push(String::new());
    lines.push(style.dim(
        "All APIs are free, no auth required. Docs: https://bmobot.ai/apis",
    ));
    lines.push(String::new());
    lines.join("\n")
}

/// Action list for one service; `docs` is the service's documentation URL.
pub fn service_help(service: &ServiceDef, docs: &str, style: Style) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "{} \u{2014} {}",
            style.title(&format!("bmobot {}", service.name)),
            service.description
        ),
        String::new(),
        style.heading("Actions:"),
    ];
    lines.extend(service.actions.iter().map(|action| {
        let mut line = format!(
            "  {} {}",
            style.name(&format!("{:<ACTION_COLUMN$}", action.name)),
            action.description
        );
        if service.default_action == Some(action.name) {
            line.push_str(&style.dim(" (default)"));
        }
        line
    }));

    lines.push(String::new());
    lines.push(style.heading("Usage:"));
    lines.push(format!(
        "  bmobot {} <action> [args...] [--flags]",
        service.name
    ));
    lines.push(String::new());
    lines.push(style.dim(&format!("API docs: {docs}")));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_help_lists_services_and_flags() {
        let text = global_help(Registry::builtin(), Style::plain());
        assert!(text.contains(&format!("bmobot v{VERSION}")));
        assert!(text.contains("  hash       Hashing, HMAC, encoding, UUIDs, random strings"));
        assert!(text.contains("  ua         Parse user agent strings"));
        assert!(text.contains("  --version   Show version"));
        assert!(text.contains("$ cat file.json | bmobot json validate -"));
    }

    #[test]
    fn service_help_pads_actions_and_links_docs() {
        let service = Registry::builtin().service("cron").expect("cron");
        let text = service_help(service, "https://cron.bmobot.ai/docs", Style::plain());
        assert!(text.contains("bmobot cron \u{2014} Parse cron expressions, show next runs, presets"));
        assert!(text.contains("  next           Next N run times"));
        assert!(text.contains("  parse          Parse cron expression (default)"));
        assert!(text.contains("  bmobot cron <action> [args...] [--flags]"));
        assert!(text.contains("API docs: https://cron.bmobot.ai/docs"));
    }
}
