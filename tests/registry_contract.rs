#![deny(clippy::all, clippy::pedantic)]

use std::collections::HashSet;

use serde_json::Value;

use bmobot::application::request::{Origin, build_request};
use bmobot::domain::command::Flags;
use bmobot::domain::input::StdinCapture;
use bmobot::domain::registry::{Call, Endpoint, HttpMethod, Registry};

#[test]
fn builtin_registry_is_consistent() {
    let registry = Registry::builtin();
    registry.validate().expect("builtin registry validates");

    let mut seen = HashSet::new();
    for name in registry.names() {
        assert!(seen.insert(name), "duplicate service {name}");
    }
    assert_eq!(seen.len(), 28);
}

#[test]
fn every_default_action_exists() {
    for service in Registry::builtin().services() {
        if let Some(name) = service.default_action {
            assert!(
                service.action(name).is_some(),
                "{}: default action {name} is not declared",
                service.name
            );
        }
    }
}

#[test]
fn action_names_are_unique_within_a_service() {
    for service in Registry::builtin().services() {
        let mut seen = HashSet::new();
        for action in &service.actions {
            assert!(
                seen.insert(action.name),
                "{}: duplicate action {}",
                service.name,
                action.name
            );
        }
    }
}

#[test]
fn every_action_builds_a_well_formed_request() {
    let args: Vec<String> = ["1", "2", "3"].iter().map(ToString::to_string).collect();
    let flags = Flags::default();
    let stdin = StdinCapture::from_text("{}");
    let call = Call::new(&args, &flags, &stdin);
    let origin = Origin::default();

    for service in Registry::builtin().services() {
        for action in &service.actions {
            let label = format!("{} {}", service.name, action.name);
            let request = build_request(&origin, service, action, &call)
                .unwrap_or_else(|err| panic!("{label}: {err}"));

            assert_eq!(request.method, action.method(), "{label}");
            assert_eq!(
                request.url.host_str(),
                Some(format!("{}.bmobot.ai", service.host).as_str()),
                "{label}"
            );
            assert_eq!(request.url.scheme(), "https", "{label}");

            match request.method {
                HttpMethod::Get => {
                    assert!(request.body.is_none(), "{label}: GET carries a body");
                    for (key, value) in request.url.query_pairs() {
                        assert!(!key.is_empty(), "{label}: empty query key");
                        assert_ne!(value, "undefined", "{label}: {key}");
                        assert_ne!(value, "null", "{label}: {key}");
                    }
                }
                HttpMethod::Post => {
                    let body = request.body.as_deref().expect("POST body");
                    let value: Value = serde_json::from_str(body)
                        .unwrap_or_else(|err| panic!("{label}: body is not JSON: {err}"));
                    assert!(value.is_object(), "{label}: body is not an object");
                    let built = match action.endpoint {
                        Endpoint::Post { body: Some(build), .. } => {
                            build(&call).unwrap_or_else(|err| panic!("{label}: {err}"))
                        }
                        _ => Value::Object(serde_json::Map::new()),
                    };
                    assert_eq!(value, built, "{label}: body changed on the wire");
                    assert!(
                        request.headers.contains(&("content-type", "application/json")),
                        "{label}"
                    );
                }
            }
        }
    }
}

#[test]
fn no_arguments_never_produce_placeholder_values() {
    let args: Vec<String> = Vec::new();
    let flags = Flags::default();
    let stdin = StdinCapture::default();
    let call = Call::new(&args, &flags, &stdin);
    let origin = Origin::default();

    for service in Registry::builtin().services() {
        for action in &service.actions {
            let Ok(request) = build_request(&origin, service, action, &call) else {
                continue;
            };
            if let Some(body) = request.body.as_deref() {
                let value: Value = serde_json::from_str(body).expect("body is JSON");
                let object = value.as_object().expect("body is an object");
                for (key, field) in object {
                    assert_ne!(
                        field.as_str(),
                        Some("undefined"),
                        "{} {}: {key}",
                        service.name,
                        action.name
                    );
                }
            }
        }
    }
}
