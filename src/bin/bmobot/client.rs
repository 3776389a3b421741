#![deny(clippy::all, clippy::pedantic)]

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use bmobot::application::request::RequestDescriptor;
use bmobot::config::LoadError;
use bmobot::domain::error::DispatchError;
use bmobot::domain::registry::HttpMethod;
use bmobot::infra::error::InfraError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] InfraError),
    #[error("Cannot reach {host} \u{2014} check your internet connection")]
    Unreachable {
        host: String,
        source: reqwest::Error,
    },
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(serde_json::Error),
    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),
    #[error("failed to write output: {0}")]
    Output(std::io::Error),
}

/// Successful reply, split by declared content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    /// Anything not announced as JSON, passed through untouched.
    Raw(Bytes),
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
}

impl Ctx {
    pub fn new() -> Result<Self, CliError> {
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client })
    }

    pub fn user_agent() -> &'static str {
        concat!("bmobot-cli/", env!("CARGO_PKG_VERSION"))
    }

    pub async fn send(&self, request: &RequestDescriptor) -> Result<Reply, CliError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");

        let mut req = self.client.request(method, request.url.clone());
        for (name, value) in &request.headers {
            req = req.header(*name, *value);
        }
        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        let resp = req
            .send()
            .await
            .map_err(|err| Self::transport(err, &request.url))?;
        Self::handle(resp).await
    }

    fn transport(err: reqwest::Error, url: &Url) -> CliError {
        if err.is_connect() {
            CliError::Unreachable {
                host: url.host_str().unwrap_or_default().to_string(),
                source: err,
            }
        } else {
            CliError::Http(err)
        }
    }

    async fn handle(resp: Response) -> Result<Reply, CliError> {
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let is_json = content_type.contains("json");
        let bytes = resp.bytes().await?;
        debug!(status = status.as_u16(), content_type = %content_type, len = bytes.len(), "reply received");

        if !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                body: error_body(&bytes, is_json),
            });
        }
        if !is_json {
            return Ok(Reply::Raw(bytes));
        }
        let value = serde_json::from_slice(&bytes).map_err(CliError::Decode)?;
        Ok(Reply::Json(value))
    }
}

/// JSON error bodies are re-indented; anything else is shown as text.
fn error_body(bytes: &[u8], is_json: bool) -> String {
    if is_json
        && let Ok(value) = serde_json::from_slice::<Value>(bytes)
        && let Ok(pretty) = serde_json::to_string_pretty(&value)
    {
        return pretty;
    }
    String::from_utf8_lossy(bytes).into_owned()
}
