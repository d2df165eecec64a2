//! Typed client stubs for JSON-over-HTTP remote procedures.
//!
//! # Overview
//! Each remote procedure is an [`RpcStub`] bound to a fixed endpoint path.
//! Calling it serializes the input to JSON, issues exactly one `POST`, and
//! decodes the JSON response into the declared output type.
//!
//! # Design
//! - `RpcStub<I, O>` is stateless; it holds only its path.
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`),
//!   so a stub can be driven by the async [`Transport`] seam or by any host
//!   that performs the round-trip itself.
//! - [`endpoints`] is generated by `rpc_server::codegen` from the server's
//!   procedures.
//! - Paths follow `/rpc/{app}/{procedure}` with kebab-cased names; see
//!   [`EndpointPath::derive`].
//! - No validation, retry, caching or timeout is added on top of the
//!   transport.

pub mod casing;
#[rustfmt::skip]
pub mod endpoints;
pub mod error;
pub mod http;
pub mod path;
pub mod stub;
pub mod transport;
pub mod types;

pub use error::{PathError, RpcError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use path::EndpointPath;
pub use stub::RpcStub;
pub use transport::{ReqwestTransport, Transport};
pub use types::{GetOutputInput, GetOutputOutput, MyInterface};
