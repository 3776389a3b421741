//! Input sourcing: literal text, `@file` contents or captured stdin (`-`).

use std::io::IsTerminal;

use tokio::io::AsyncReadExt;

use super::error::DispatchError;

/// Standard input drained once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StdinCapture(String);

impl StdinCapture {
    /// Drain stdin to the end. An interactive terminal yields empty text
    /// without blocking.
    pub async fn capture() -> std::io::Result<Self> {
        if std::io::stdin().is_terminal() {
            return Ok(Self::default());
        }
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where an argument's text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    Empty,
    File(&'a str),
    Stdin,
    Literal(&'a str),
}

impl<'a> InputSource<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if raw.is_empty() {
            Self::Empty
        } else if let Some(path) = raw.strip_prefix('@') {
            Self::File(path)
        } else if raw == "-" {
            Self::Stdin
        } else {
            Self::Literal(raw)
        }
    }

    pub fn read(self, stdin: &StdinCapture) -> Result<String, DispatchError> {
        match self {
            Self::Empty => Ok(String::new()),
            Self::File(path) => std::fs::read(path)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|source| DispatchError::FileRead {
                    path: path.to_string(),
                    source,
                }),
            Self::Stdin => Ok(stdin.as_str().to_string()),
            Self::Literal(text) => Ok(text.to_string()),
        }
    }
}

/// Resolve an argument to the text it denotes.
pub fn read_input(raw: &str, stdin: &StdinCapture) -> Result<String, DispatchError> {
    InputSource::classify(raw).read(stdin)
}
