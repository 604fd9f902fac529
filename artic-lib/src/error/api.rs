//! API error types

use std::time::Duration;

use super::ArticErrorDetail;

/// Errors that can occur while talking to the catalog API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The catalog answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        /// The catalog's `detail` text, or the raw body if it sent no error object.
        message: String,
        detail: Option<Box<ArticErrorDetail>>,
    },

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The body was not a page of artworks.
    #[error("Malformed catalog response: {message}")]
    Malformed {
        message: String,
        /// Raw body, kept for logging.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates an HTTP error with a plain message.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// Builds the error for a non-success response.
    ///
    /// Uses the catalog's `{ status, error, detail }` object when the body is
    /// one, otherwise keeps the body verbatim as the message.
    pub fn from_response(status: u16, body: String) -> Self {
        match ArticErrorDetail::from_body(&body) {
            Some(detail) => Self::Http {
                status,
                message: detail.detail.clone(),
                detail: Some(Box::new(detail)),
            },
            None => Self::http(status, body),
        }
    }

    /// Creates an error for a body that could not be read as a page.
    pub fn malformed(message: impl Into<String>, body: Option<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            body,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the catalog's error object, if the response carried one.
    pub fn artic_detail(&self) -> Option<&ArticErrorDetail> {
        match self {
            Self::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::malformed(err.to_string(), None);
        }
        Self::Network(err)
    }
}
