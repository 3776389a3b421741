//! Splitting raw arguments into positional tokens and `--flag` values.

use std::collections::BTreeMap;

/// Value stored for a flag given without `=value`.
pub const PRESENCE_VALUE: &str = "true";

/// `--name[=value]` flags collected from the command line.
///
/// Names are not checked against any schema; builders read what they need
/// and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeMap<String, String>);

impl Flags {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// A flag is set when present with a non-empty value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Flags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut flags = Self::default();
        for (name, value) in iter {
            flags.insert(name, value);
        }
        flags
    }
}

/// Command line after flag extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub positionals: Vec<String>,
    pub flags: Flags,
}

impl ParsedCommand {
    /// Tokens starting with `--` become flags, split at the first `=`.
    /// Everything else is positional and keeps its relative order. A repeated
    /// flag keeps its last value.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg.strip_prefix("--") {
                Some(flag) => match flag.split_once('=') {
                    Some((name, value)) => parsed.flags.insert(name, value),
                    None => parsed.flags.insert(flag, PRESENCE_VALUE),
                },
                None => parsed.positionals.push(arg.to_string()),
            }
        }
        parsed
    }

    pub fn service(&self) -> Option<&str> {
        self.positionals.first().map(String::as_str)
    }

    /// Positional tokens after the service name.
    pub fn after_service(&self) -> &[String] {
        self.positionals.get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_flags_and_positionals() {
        let parsed = ParsedCommand::parse(&["--x=1", "--y", "pos"]);
        assert_eq!(parsed.flags.get("x"), Some("1"));
        assert_eq!(parsed.flags.get("y"), Some("true"));
        assert_eq!(parsed.positionals, vec!["pos".to_string()]);
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let parsed = ParsedCommand::parse(&["--query=a=b=c"]);
        assert_eq!(parsed.flags.get("query"), Some("a=b=c"));
    }

    #[test]
    fn positionals_keep_order_around_flags() {
        let parsed = ParsedCommand::parse(&["hash", "--json", "sha256", "-", "x"]);
        assert_eq!(parsed.positionals, ["hash", "sha256", "-", "x"]);
        assert_eq!(parsed.service(), Some("hash"));
        assert_eq!(parsed.after_service(), ["sha256", "-", "x"]);
    }

    #[test]
    fn single_dash_tokens_are_positional() {
        let parsed = ParsedCommand::parse(&["-v", "-"]);
        assert!(parsed.flags.is_empty());
        assert_eq!(parsed.positionals, ["-v", "-"]);
    }

    #[test]
    fn empty_flag_value_is_present_but_not_set() {
        let parsed = ParsedCommand::parse(&["--decode="]);
        assert_eq!(parsed.flags.get("decode"), Some(""));
        assert!(!parsed.flags.is_set("decode"));
        assert!(!parsed.flags.is_set("missing"));
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let parsed = ParsedCommand::parse(&["--length=8", "--length=12"]);
        assert_eq!(parsed.flags.get("length"), Some("12"));
        assert_eq!(parsed.flags.len(), 1);
    }

    #[test]
    fn no_service_when_only_flags() {
        let parsed = ParsedCommand::parse(&["--help"]);
        assert_eq!(parsed.service(), None);
        assert!(parsed.after_service().is_empty());
    }
}
