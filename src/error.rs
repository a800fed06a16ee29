//! Error Types
//!
//! Failures the UI can run into: catalog loading and login.

use serde::{Deserialize, Serialize};

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogError {
    /// Request could not be sent or the connection failed
    Request(String),
    /// Upstream answered with a non-success status
    Status(u16, String),
    /// Response body was not the expected JSON
    Decode(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Request(msg) => write!(f, "Request failed: {}", msg),
            CatalogError::Status(code, url) => write!(f, "HTTP {} from {}", code, url),
            CatalogError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let url = err.url().map(|u| u.to_string()).unwrap_or_default();
            CatalogError::Status(status.as_u16(), url)
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Login errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Usuario o contraseña incorrectos"),
        }
    }
}

impl std::error::Error for LoginError {}
