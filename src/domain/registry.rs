//! Declarative service registry: which HTTP call each `<service> <action>`
//! pair turns into.

use once_cell::sync::Lazy;
use serde_json::{Map, Number, Value};

use super::command::Flags;
use super::error::DispatchError;
use super::input::{StdinCapture, read_input};
use super::services;

pub type PathFn = fn(&Call<'_>) -> String;
pub type QueryFn = fn(&Call<'_>) -> Query;
pub type BodyFn = fn(&Call<'_>) -> Result<Value, DispatchError>;

/// Arguments handed to an action's builder functions.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    args: &'a [String],
    flags: &'a Flags,
    stdin: &'a StdinCapture,
}

impl<'a> Call<'a> {
    pub fn new(args: &'a [String], flags: &'a Flags, stdin: &'a StdinCapture) -> Self {
        Self { args, flags, stdin }
    }

    pub fn args(&self) -> &'a [String] {
        self.args
    }

    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    /// Positional argument, falling back to `default` when missing or empty.
    pub fn arg_or(&self, index: usize, default: &'a str) -> &'a str {
        self.arg(index).filter(|v| !v.is_empty()).unwrap_or(default)
    }

    pub fn rest(&self, from: usize) -> &'a [String] {
        self.args.get(from..).unwrap_or_default()
    }

    /// All positional arguments joined by single spaces.
    pub fn joined(&self) -> String {
        self.args.join(" ")
    }

    pub fn flag(&self, name: &str) -> Option<&'a str> {
        self.flags.get(name)
    }

    /// Flag value, falling back to `default` when missing or empty.
    pub fn flag_or(&self, name: &str, default: &'a str) -> &'a str {
        self.flag(name).filter(|v| !v.is_empty()).unwrap_or(default)
    }

    pub fn switch(&self, name: &str) -> bool {
        self.flags.is_set(name)
    }

    /// Resolve positional argument `index` through the input sources.
    pub fn input(&self, index: usize) -> Result<String, DispatchError> {
        read_input(self.arg(index).unwrap_or_default(), self.stdin)
    }

    pub fn inputs(&self) -> Result<Vec<String>, DispatchError> {
        self.args
            .iter()
            .map(|raw| read_input(raw, self.stdin))
            .collect()
    }

    /// Resolve argument `index` and parse it as JSON.
    pub fn json_input(&self, index: usize) -> Result<Value, DispatchError> {
        let text = self.input(index)?;
        parse_json(&text)
    }
}

pub fn parse_json(text: &str) -> Result<Value, DispatchError> {
    serde_json::from_str(text).map_err(|err| DispatchError::invalid_input(err.to_string()))
}

/// Ordered query parameters. Absent values never reach the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(self, key: &'static str, value: impl Into<String>) -> Self {
        self.opt(key, Some(value))
    }

    #[must_use]
    pub fn opt(mut self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            let value = value.into();
            match self.0.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => self.0.push((key, value)),
            }
        }
        self
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// JSON object builder where absent fields are left out, as in a serialized
/// object with undefined members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body(Map<String, Value>);

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Convenience for builders returning `Result<Value, _>`.
    #[allow(clippy::unnecessary_wraps)]
    pub fn done(self) -> Result<Value, DispatchError> {
        Ok(self.into_value())
    }
}

impl From<Body> for Value {
    fn from(body: Body) -> Self {
        body.into_value()
    }
}

/// Integer from the leading digits of `text`; `null` when there are none.
/// A `0x`/`0X` prefix reads the digits as hexadecimal.
pub fn int(text: &str) -> Value {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return Value::Null;
    }

    match i64::from_str_radix(digits, radix) {
        Ok(n) => Value::from(if negative { -n } else { n }),
        Err(_) => {
            let magnitude = digits.chars().fold(0.0_f64, |acc, c| {
                acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or_default())
            });
            finite(Some(if negative { -magnitude } else { magnitude }))
        }
    }
}

/// Float from the longest numeric prefix of `text`; `null` when there is none.
pub fn float(text: &str) -> Value {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return Value::Null;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    finite(trimmed[..end].parse::<f64>().ok())
}

fn finite(value: Option<f64>) -> Value {
    value
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Clone, Copy)]
pub enum PathSpec {
    Fixed(&'static str),
    Dynamic(PathFn),
}

impl PathSpec {
    pub fn resolve(&self, call: &Call<'_>) -> String {
        match self {
            Self::Fixed(path) => (*path).to_string(),
            Self::Dynamic(build) => build(call),
        }
    }
}

impl std::fmt::Debug for PathSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(path) => f.debug_tuple("Fixed").field(path).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Endpoint {
    Get {
        path: PathSpec,
        query: Option<QueryFn>,
    },
    Post {
        path: PathSpec,
        body: Option<BodyFn>,
    },
}

/// One operation of a service.
#[derive(Debug, Clone, Copy)]
pub struct ActionDef {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: Endpoint,
}

impl ActionDef {
    /// GET without parameters.
    pub const fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            endpoint: Endpoint::Get {
                path: PathSpec::Fixed(path),
                query: None,
            },
        }
    }

    pub const fn query(
        name: &'static str,
        path: &'static str,
        description: &'static str,
        query: QueryFn,
    ) -> Self {
        Self {
            name,
            description,
            endpoint: Endpoint::Get {
                path: PathSpec::Fixed(path),
                query: Some(query),
            },
        }
    }

    /// GET whose path embeds positional arguments.
    pub const fn dynamic(name: &'static str, path: PathFn, description: &'static str) -> Self {
        Self {
            name,
            description,
            endpoint: Endpoint::Get {
                path: PathSpec::Dynamic(path),
                query: None,
            },
        }
    }

    /// POST with an empty JSON object as body.
    pub const fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            endpoint: Endpoint::Post {
                path: PathSpec::Fixed(path),
                body: None,
            },
        }
    }

    pub const fn body(
        name: &'static str,
        path: &'static str,
        description: &'static str,
        body: BodyFn,
    ) -> Self {
        Self {
            name,
            description,
            endpoint: Endpoint::Post {
                path: PathSpec::Fixed(path),
                body: Some(body),
            },
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self.endpoint {
            Endpoint::Get { .. } => HttpMethod::Get,
            Endpoint::Post { .. } => HttpMethod::Post,
        }
    }
}

/// A remote API grouping served from its own sub-origin.
#[derive(Debug, Clone)]
pub struct ServiceDef {
    pub name: &'static str,
    pub host: &'static str,
    pub description: &'static str,
    pub actions: Vec<ActionDef>,
    pub default_action: Option<&'static str>,
}

impl ServiceDef {
    pub fn new(name: &'static str, description: &'static str, actions: Vec<ActionDef>) -> Self {
        Self {
            name,
            host: name,
            description,
            actions,
            default_action: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, action: &'static str) -> Self {
        self.default_action = Some(action);
        self
    }

    pub fn action(&self, name: &str) -> Option<&ActionDef> {
        self.actions.iter().find(|action| action.name == name)
    }

    pub fn default(&self) -> Option<&ActionDef> {
        self.default_action.and_then(|name| self.action(name))
    }
}

/// Immutable lookup table of every known service, in display order.
#[derive(Debug, Clone)]
pub struct Registry {
    services: Vec<ServiceDef>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| Registry::new(services::catalog()));

impl Registry {
    pub fn new(services: Vec<ServiceDef>) -> Self {
        Self { services }
    }

    /// The compiled-in catalog.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn service(&self, name: &str) -> Option<&ServiceDef> {
        self.services.iter().find(|service| service.name == name)
    }

    pub fn lookup(&self, name: &str) -> Result<&ServiceDef, DispatchError> {
        self.service(name)
            .ok_or_else(|| DispatchError::unknown_service(name))
    }

    pub fn services(&self) -> &[ServiceDef] {
        &self.services
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.services.iter().map(|service| service.name)
    }

    /// Check catalog invariants: unique names and defaults that exist.
    pub fn validate(&self) -> Result<(), DispatchError> {
        for (idx, service) in self.services.iter().enumerate() {
            if self.services[..idx].iter().any(|s| s.name == service.name) {
                return Err(DispatchError::catalog(service.name, "duplicate service name"));
            }
            for (pos, action) in service.actions.iter().enumerate() {
                if service.actions[..pos].iter().any(|a| a.name == action.name) {
                    return Err(DispatchError::catalog(
                        service.name,
                        format!("duplicate action `{}`", action.name),
                    ));
                }
            }
            if let Some(default) = service.default_action
                && service.action(default).is_none()
            {
                return Err(DispatchError::catalog(
                    service.name,
                    format!("default action `{default}` is not defined"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn call_with<'a>(args: &'a [String], flags: &'a Flags, stdin: &'a StdinCapture) -> Call<'a> {
        Call::new(args, flags, stdin)
    }

    #[test]
    fn int_parses_leading_digits() {
        assert_eq!(int("42"), json!(42));
        assert_eq!(int("  -7px"), json!(-7));
        assert_eq!(int("+3"), json!(3));
        assert_eq!(int("12.9"), json!(12));
    }

    #[test]
    fn int_reads_hex_prefix() {
        assert_eq!(int("0x10"), json!(16));
        assert_eq!(int("0XfFz"), json!(255));
        assert_eq!(int(" -0x1A"), json!(-26));
        assert_eq!(int("0x"), Value::Null);
        assert_eq!(int("0"), json!(0));
        assert_eq!(int("016"), json!(16));
    }

    #[test]
    fn int_without_digits_is_null() {
        assert_eq!(int(""), Value::Null);
        assert_eq!(int("abc"), Value::Null);
        assert_eq!(int("-"), Value::Null);
    }

    #[test]
    fn float_parses_numeric_prefix() {
        assert_eq!(float("1.5GB"), json!(1.5));
        assert_eq!(float(".25"), json!(0.25));
        assert_eq!(float("-2e3x"), json!(-2000.0));
        assert_eq!(float("7e"), json!(7.0));
        assert_eq!(float("3."), json!(3.0));
    }

    #[test]
    fn float_without_digits_is_null() {
        assert_eq!(float(""), Value::Null);
        assert_eq!(float("."), Value::Null);
        assert_eq!(float("kg"), Value::Null);
    }

    #[test]
    fn query_omits_absent_values() {
        let query = Query::new()
            .set("length", "20")
            .opt("symbols", None::<&str>)
            .opt("upper", Some(""));
        let pairs: Vec<_> = query.pairs().collect();
        assert_eq!(pairs, vec![("length", "20"), ("upper", "")]);
    }

    #[test]
    fn query_set_replaces_existing_key() {
        let query = Query::new().set("q", "a").set("q", "b");
        assert_eq!(query.pairs().collect::<Vec<_>>(), vec![("q", "b")]);
    }

    #[test]
    fn body_omits_absent_fields() {
        let body = Body::new()
            .opt("input", Some("abc"))
            .opt("key", None::<&str>)
            .set("count", int("x"))
            .into_value();
        assert_eq!(body, json!({"input": "abc", "count": null}));
    }

    #[test]
    fn call_fallbacks_treat_empty_as_missing() {
        let args = vec![String::new(), "b".to_string()];
        let flags: Flags = [("length", ""), ("sep", "_")].into_iter().collect();
        let stdin = StdinCapture::default();
        let call = call_with(&args, &flags, &stdin);

        assert_eq!(call.arg_or(0, "a"), "a");
        assert_eq!(call.arg_or(1, "z"), "b");
        assert_eq!(call.arg_or(5, "z"), "z");
        assert_eq!(call.flag_or("length", "20"), "20");
        assert_eq!(call.flag_or("sep", "-"), "_");
        assert_eq!(call.flag("length"), Some(""));
        assert!(!call.switch("length"));
    }

    #[test]
    fn call_inputs_resolve_each_argument() {
        let args = vec!["-".to_string(), "literal".to_string()];
        let flags = Flags::default();
        let stdin = StdinCapture::from_text("piped");
        let call = call_with(&args, &flags, &stdin);

        assert_eq!(call.inputs().expect("inputs"), vec!["piped", "literal"]);
        assert_eq!(call.input(7).expect("missing input"), "");
        assert_eq!(call.rest(1), ["literal".to_string()]);
        assert!(call.rest(9).is_empty());
        assert_eq!(call.joined(), "- literal");
    }

    #[test]
    fn json_input_rejects_malformed_text() {
        let args = vec!["{not json".to_string()];
        let flags = Flags::default();
        let stdin = StdinCapture::default();
        let call = call_with(&args, &flags, &stdin);

        let err = call.json_input(0).expect_err("malformed json");
        assert!(matches!(err, DispatchError::InvalidInput { .. }));
    }

    #[test]
    fn validate_rejects_unknown_default() {
        let registry = Registry::new(vec![
            ServiceDef::new("demo", "Demo", vec![ActionDef::get("a", "/a", "A")]).with_default("b"),
        ]);
        let err = registry.validate().expect_err("dangling default");
        assert!(err.to_string().contains("default action `b`"));
    }

    #[test]
    fn validate_rejects_duplicate_actions() {
        let registry = Registry::new(vec![ServiceDef::new(
            "demo",
            "Demo",
            vec![ActionDef::get("a", "/a", "A"), ActionDef::post("a", "/b", "B")],
        )]);
        assert!(registry.validate().is_err());
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        Registry::builtin().validate().expect("builtin catalog");
        assert!(Registry::builtin().service("hash").is_some());
        assert!(Registry::builtin().lookup("nope").is_err());
    }
}
