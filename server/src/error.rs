use rpc_core::PathError;
use thiserror::Error;

/// Errors raised while assembling an `RpcRouter`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error(transparent)]
    Path(#[from] PathError),

    /// Two procedures kebab-case to the same endpoint path.
    #[error("procedure already registered at {0}")]
    DuplicateProcedure(String),
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("invalid {name}: {value:?}")]
    InvalidConfig { name: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
