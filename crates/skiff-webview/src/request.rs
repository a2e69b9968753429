//! Load Requests
//!
//! A navigation request as entered by the user or supplied by the program:
//! raw target text plus the HTTP-style operation carrying it.

/// HTTP-style operation for a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Get,
    Post,
}

/// A requested navigation destination
///
/// The target is kept as raw text; classification decides what it means.
/// Immutable once classified, consumed exactly once by dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    target: String,
    operation: Operation,
    body: Option<Vec<u8>>,
}

impl LoadRequest {
    /// Create a GET request for a target string
    pub fn get(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            operation: Operation::Get,
            body: None,
        }
    }

    /// Create a POST request carrying a urlencoded body
    pub fn post(target: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            target: target.into(),
            operation: Operation::Post,
            body: Some(body),
        }
    }

    /// Raw target text
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Requested operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Request body, if any
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl From<&str> for LoadRequest {
    fn from(target: &str) -> Self {
        Self::get(target)
    }
}

impl From<url::Url> for LoadRequest {
    fn from(url: url::Url) -> Self {
        Self::get(String::from(url))
    }
}
