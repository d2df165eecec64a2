//! Generic typed RPC stub.
//!
//! # Design
//! `RpcStub<I, O>` holds only its endpoint path and carries no state between
//! calls. A call is split into `build_request`, which serializes the input
//! into a `POST` request, and `parse_response`, which decodes the body into
//! the output type. `call` joins the two around a single `Transport::send`.
//!
//! The response status is not inspected: whatever body comes back is decoded
//! as `O`, and a body that does not fit surfaces as `Deserialization`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RpcError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::path::EndpointPath;
use crate::transport::Transport;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Client-side stub for one remote procedure taking `I` and returning `O`.
pub struct RpcStub<I, O> {
    path: EndpointPath,
    _shape: PhantomData<fn(&I) -> O>,
}

impl<I, O> RpcStub<I, O> {
    /// Stub for a path derived ahead of time, usable in `const` and `static` items.
    pub const fn new(path: &'static str) -> Self {
        Self {
            path: EndpointPath::from_static(path),
            _shape: PhantomData,
        }
    }

    /// Stub for a path derived at runtime.
    pub fn at(path: EndpointPath) -> Self {
        Self {
            path,
            _shape: PhantomData,
        }
    }

    pub fn path(&self) -> &EndpointPath {
        &self.path
    }
}

impl<I, O> RpcStub<I, O>
where
    I: Serialize,
    O: DeserializeOwned,
{
    pub fn build_request(&self, input: &I) -> Result<HttpRequest, RpcError> {
        let body = serde_json::to_string(input).map_err(|e| RpcError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.path.to_string(),
            headers: vec![("content-type".to_string(), CONTENT_TYPE_JSON.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_response(&self, response: HttpResponse) -> Result<O, RpcError> {
        serde_json::from_str(&response.body).map_err(|e| RpcError::Deserialization {
            status: response.status,
            message: e.to_string(),
        })
    }

    /// Issue exactly one request through `transport` and decode the reply.
    pub async fn call<T>(&self, transport: &T, input: &I) -> Result<O, RpcError>
    where
        T: Transport + ?Sized,
    {
        let request = self.build_request(input)?;
        tracing::debug!(path = %self.path, "rpc call");
        let response = transport.send(request).await?;
        self.parse_response(response)
    }
}

impl<I, O> Clone for RpcStub<I, O> {
    fn clone(&self) -> Self {
        Self::at(self.path.clone())
    }
}

impl<I, O> fmt::Debug for RpcStub<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcStub").field("path", &self.path).finish()
    }
}
