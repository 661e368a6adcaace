//! Error types for the catalog client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server has no product with this id
    #[error("Product with ID {0} not found.")]
    NotFound(String),

    /// The server rejected the request (HTTP 400)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Any other non-success response
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Connection or protocol failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL cannot carry request paths
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
