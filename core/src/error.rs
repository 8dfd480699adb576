//! Error types for the todo client and store.
//!
//! # Design
//! `ApiError` covers everything that can go wrong for one remote call.
//! `NotFound` gets a dedicated variant because callers distinguish "the
//! resource does not exist" from "the server returned an unexpected status."
//! `StoreError` is what store operations hand back: a remote failure, a local
//! lookup miss, or a rejected input.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by a single remote todo operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, read failure).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The remote call failed. The store has recorded the message in
    /// `StoreState::last_error`.
    #[error(transparent)]
    Network(#[from] ApiError),

    /// No record with this id is present locally; nothing was sent.
    #[error("todo {id} not found")]
    NotFound { id: TodoId },

    /// The title was empty after trimming; nothing was sent.
    #[error("todo title must not be empty")]
    InvalidTitle,
}

/// Errors raised while reading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    EmptyBaseUrl { var: &'static str },

    #[error("{var}={value:?} is not a valid user id")]
    InvalidOwner { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_shows_the_remote_message() {
        let err = StoreError::from(ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn not_found_names_the_id() {
        let err = StoreError::NotFound { id: TodoId(5) };
        assert_eq!(err.to_string(), "todo 5 not found");
    }
}
