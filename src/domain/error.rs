use thiserror::Error;

/// Failures raised while turning a command line into a request.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown service: {name}\nRun 'bmobot --help' to see available services.")]
    UnknownService { name: String },
    #[error(
        "Unknown action: {action}\nRun 'bmobot {service} --help' to see available actions."
    )]
    UnknownAction { service: String, action: String },
    #[error("Cannot read file: {path}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("invalid API origin `{origin}`: {source}")]
    Origin {
        origin: String,
        source: url::ParseError,
    },
    #[error("service catalog entry `{service}` is inconsistent: {reason}")]
    Catalog {
        service: &'static str,
        reason: String,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DispatchError {
    pub fn unknown_service(name: impl Into<String>) -> Self {
        Self::UnknownService { name: name.into() }
    }

    pub fn unknown_action(service: impl Into<String>, action: impl Into<String>) -> Self {
        Self::UnknownAction {
            service: service.into(),
            action: action.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn catalog(service: &'static str, reason: impl Into<String>) -> Self {
        Self::Catalog {
            service,
            reason: reason.into(),
        }
    }
}
