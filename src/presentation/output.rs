//! Rendering decoded JSON replies for the terminal.

use serde_json::Value;

use crate::domain::command::Flags;

use super::style::Style;

/// How a JSON reply is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pick the most useful field of the reply.
    Smart,
    /// `--json`: the whole reply, indented.
    Pretty,
    /// `--raw`: the whole reply on one line.
    Minified,
}

impl OutputMode {
    pub fn from_flags(flags: &Flags) -> Self {
        if flags.is_set("raw") {
            Self::Minified
        } else if flags.is_set("json") {
            Self::Pretty
        } else {
            Self::Smart
        }
    }
}

/// One entry of the field-priority list.
#[derive(Debug, Clone, Copy)]
enum Pick {
    /// Key present, whatever its value.
    Defined(&'static str),
    /// Key holding a truthy value.
    Truthy(&'static str),
    /// `valid` verdict with an optional `reason`.
    Verdict,
}

const PRIORITY: &[Pick] = &[
    Pick::Defined("result"),
    Pick::Defined("output"),
    Pick::Truthy("hash"),
    Pick::Truthy("hmac"),
    Pick::Truthy("uuid"),
    Pick::Truthy("ulid"),
    Pick::Truthy("password"),
    Pick::Truthy("passphrase"),
    Pick::Truthy("pin"),
    Pick::Truthy("qr"),
    Pick::Truthy("encoded"),
    Pick::Truthy("decoded"),
    Pick::Truthy("formatted"),
    Pick::Truthy("minified"),
    Pick::Truthy("html"),
    Pick::Truthy("csv"),
    Pick::Truthy("yaml"),
    Pick::Truthy("json"),
    Pick::Truthy("art"),
    Pick::Truthy("text"),
    Pick::Truthy("slug"),
    Pick::Truthy("description"),
    Pick::Verdict,
];

impl Pick {
    fn extract(self, value: &Value, style: Style) -> Result<Option<String>, serde_json::Error> {
        match self {
            Self::Defined(key) => value.get(key).map(render_field).transpose(),
            Self::Truthy(key) => value
                .get(key)
                .filter(|field| truthy(field))
                .map(render_field)
                .transpose(),
            Self::Verdict => {
                let Some(valid) = value.get("valid") else {
                    return Ok(None);
                };
                let mut line = if truthy(valid) {
                    style.success("Valid")
                } else {
                    style.failure("Invalid")
                };
                if let Some(reason) = value.get("reason").filter(|r| truthy(r)) {
                    line.push_str(" \u{2014} ");
                    line.push_str(&render_field(reason)?);
                }
                Ok(Some(line))
            }
        }
    }
}

/// Text to print for a JSON reply.
pub fn format_output(value: &Value, mode: OutputMode, style: Style) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Minified => return serde_json::to_string(value),
        OutputMode::Pretty => return serde_json::to_string_pretty(value),
        OutputMode::Smart => {}
    }

    if let Value::String(text) = value {
        return Ok(text.clone());
    }
    if value.is_object() {
        for pick in PRIORITY {
            if let Some(text) = pick.extract(value, style)? {
                return Ok(text);
            }
        }
    }
    serde_json::to_string_pretty(value)
}

fn render_field(field: &Value) -> Result<String, serde_json::Error> {
    match field {
        Value::String(text) => Ok(text.clone()),
        other => serde_json::to_string_pretty(other),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
