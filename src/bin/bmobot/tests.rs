#![deny(clippy::all, clippy::pedantic)]

use httpmock::MockServer;
use serde_json::json;

use bmobot::application::request::{Origin, RequestDescriptor, build_request};
use bmobot::domain::command::Flags;
use bmobot::domain::input::StdinCapture;
use bmobot::domain::registry::{Call, Registry};

use crate::client::{CliError, Ctx, Reply};

fn request(
    server: &MockServer,
    service: &str,
    action: &str,
    args: &[&str],
    flags: &[(&str, &str)],
) -> RequestDescriptor {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    let flags: Flags = flags.iter().copied().collect();
    let stdin = StdinCapture::default();
    let call = Call::new(&args, &flags, &stdin);
    let service = Registry::builtin().service(service).expect("service");
    let action = service.action(action).expect("action");
    build_request(&Origin::new(server.base_url()), service, action, &call).expect("request")
}

#[test]
fn user_agent_carries_version() {
    assert_eq!(
        Ctx::user_agent(),
        format!("bmobot-cli/{}", env!("CARGO_PKG_VERSION"))
    );
}

#[tokio::test]
async fn post_sends_json_body() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/hash")
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json_body_includes(r#"{"input":"hello","algorithm":"sha256"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"hash":"abc123"}"#);
    });

    let ctx = Ctx::new()?;
    let reply = ctx
        .send(&request(&server, "hash", "sha256", &["hello"], &[]))
        .await?;

    mock.assert();
    assert_eq!(reply, Reply::Json(json!({"hash": "abc123"})));
    Ok(())
}

#[tokio::test]
async fn get_sends_query_parameters() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/password")
            .query_param("length", "32")
            .query_param("symbols", "true");
        then.status(200)
            .header("content-type", "application/json; charset=utf-8")
            .body(r#"{"password":"s3cret"}"#);
    });

    let ctx = Ctx::new()?;
    let reply = ctx
        .send(&request(
            &server,
            "password",
            "generate",
            &[],
            &[("length", "32"), ("symbols", "true")],
        ))
        .await?;

    mock.assert();
    assert_eq!(reply, Reply::Json(json!({"password": "s3cret"})));
    Ok(())
}

#[tokio::test]
async fn non_json_reply_is_passed_through() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/generate");
        then.status(200)
            .header("content-type", "image/png")
            .body([0x89_u8, b'P', b'N', b'G', 0x00, 0xff]);
    });

    let ctx = Ctx::new()?;
    let reply = ctx
        .send(&request(&server, "qr", "generate", &["hi"], &[("format", "png")]))
        .await?;

    mock.assert();
    match reply {
        Reply::Raw(bytes) => assert_eq!(&bytes[..], &[0x89_u8, b'P', b'N', b'G', 0x00, 0xff][..]),
        Reply::Json(other) => panic!("expected raw bytes, got {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn error_status_surfaces_pretty_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/status/999");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"error":"Unknown status code"}"#);
    });

    let ctx = Ctx::new().expect("ctx");
    let err = ctx
        .send(&request(&server, "status", "lookup", &["999"], &[]))
        .await
        .expect_err("404 should fail");

    match &err {
        CliError::Api { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "{\n  \"error\": \"Unknown status code\"\n}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("API error (404): "));
}

#[tokio::test]
async fn error_status_with_text_body_is_kept_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/strength");
        then.status(500)
            .header("content-type", "text/plain")
            .body("upstream exploded");
    });

    let ctx = Ctx::new().expect("ctx");
    let err = ctx
        .send(&request(&server, "password", "strength", &["pw"], &[]))
        .await
        .expect_err("500 should fail");

    assert_eq!(err.to_string(), "API error (500): upstream exploded");
}

#[tokio::test]
async fn malformed_json_reply_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/uuid");
        then.status(200)
            .header("content-type", "application/json")
            .body("{not json");
    });

    let ctx = Ctx::new().expect("ctx");
    let err = ctx
        .send(&request(&server, "hash", "uuid", &[], &[]))
        .await
        .expect_err("decode should fail");

    assert!(matches!(err, CliError::Decode(_)));
}

#[tokio::test]
async fn closed_port_is_reported_as_unreachable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let args: Vec<String> = vec!["x".to_string()];
    let flags = Flags::default();
    let stdin = StdinCapture::default();
    let call = Call::new(&args, &flags, &stdin);
    let service = Registry::builtin().service("hash").expect("hash");
    let action = service.action("sha256").expect("sha256");
    let origin = Origin::new(format!("http://127.0.0.1:{port}"));
    let req = build_request(&origin, service, action, &call).expect("request");

    let ctx = Ctx::new().expect("ctx");
    let err = ctx.send(&req).await.expect_err("nothing listens");

    match &err {
        CliError::Unreachable { host, .. } => assert_eq!(host, "127.0.0.1"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("check your internet connection"));
}
