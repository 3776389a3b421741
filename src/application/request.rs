//! Turning a resolved action into a concrete HTTP request.

use url::Url;

use crate::domain::error::DispatchError;
use crate::domain::registry::{ActionDef, Call, Endpoint, HttpMethod, ServiceDef};

/// Placeholder replaced by a service's host identifier.
pub const SERVICE_PLACEHOLDER: &str = "{service}";
pub const DEFAULT_ORIGIN: &str = "https://{service}.bmobot.ai";

const JSON: &str = "application/json";

/// Origin template from which every service's base URL is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    template: String,
}

impl Default for Origin {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

impl Origin {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn for_host(&self, host: &str) -> Result<Url, DispatchError> {
        let origin = self.template.replace(SERVICE_PLACEHOLDER, host);
        Url::parse(&origin).map_err(|source| DispatchError::Origin { origin, source })
    }

    /// Where a service documents its API.
    pub fn docs_url(&self, host: &str) -> Result<Url, DispatchError> {
        let base = self.for_host(host)?;
        base.join("/docs").map_err(|source| DispatchError::Origin {
            origin: base.to_string(),
            source,
        })
    }
}

/// A fully-formed request, built once and consumed once by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

pub fn build_request(
    origin: &Origin,
    service: &ServiceDef,
    action: &ActionDef,
    call: &Call<'_>,
) -> Result<RequestDescriptor, DispatchError> {
    let base = origin.for_host(service.host)?;

    match action.endpoint {
        Endpoint::Get { path, query } => {
            let mut url = join(&base, &path.resolve(call))?;
            if let Some(build) = query {
                let query = build(call);
                if !query.is_empty() {
                    url.query_pairs_mut().extend_pairs(query.pairs());
                }
            }
            Ok(RequestDescriptor {
                method: HttpMethod::Get,
                url,
                headers: vec![("accept", JSON)],
                body: None,
            })
        }
        Endpoint::Post { path, body } => {
            let url = join(&base, &path.resolve(call))?;
            let value = match body {
                Some(build) => build(call)?,
                None => serde_json::Value::Object(serde_json::Map::new()),
            };
            Ok(RequestDescriptor {
                method: HttpMethod::Post,
                url,
                headers: vec![("content-type", JSON), ("accept", JSON)],
                body: Some(serde_json::to_string(&value)?),
            })
        }
    }
}

fn join(base: &Url, path: &str) -> Result<Url, DispatchError> {
    base.join(path).map_err(|source| DispatchError::Origin {
        origin: base.to_string(),
        source,
    })
}
