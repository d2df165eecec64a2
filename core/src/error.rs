//! Error types for RPC stubs and the transports that carry them.
//!
//! # Design
//! A stub has no recovery of its own, so `RpcError` only says which step of
//! the call failed. Transport failures are carried verbatim in
//! `RpcError::Transport` so callers see exactly what the transport reported.

use thiserror::Error;

/// Errors returned by `RpcStub` operations.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The input value could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The transport failed before a response body was available.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON for the declared output type.
    #[error("deserialization failed (HTTP {status}): {message}")]
    Deserialization { status: u16, message: String },
}

/// Errors raised by a `Transport` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors raised while deriving an endpoint path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("app name is empty")]
    EmptyApp,

    #[error("procedure name is empty")]
    EmptyProcedure,

    /// App names are used verbatim and must already be kebab case.
    #[error("'{app}' expected to be kebab-case ('{expected}')")]
    AppNotKebabCase { app: String, expected: String },
}
