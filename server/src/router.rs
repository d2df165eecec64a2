//! Server side of the RPC convention.
//!
//! # Design
//! `RpcRouter` mounts each procedure as a `POST` route at the same
//! `/rpc/{app}/{procedure}` path the client stubs derive, so one naming rule
//! governs both ends. Procedures are plain async functions from
//! `(AuthContext, Input)` to `Output`; decoding and encoding live here.

use std::future::Future;

use axum::{
    body::Bytes,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use rpc_core::path::check_app_name;
use rpc_core::EndpointPath;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthContext;
use crate::error::RouterError;
use crate::shape::Shape;

/// What the stub generator needs to know about one mounted procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Procedure {
    /// Name as registered, before kebab-casing.
    pub name: String,
    pub path: EndpointPath,
    pub input: Shape,
    pub output: Shape,
}

/// Collects the procedures of one app under `/rpc/{app}`.
#[derive(Debug)]
pub struct RpcRouter {
    app_name: String,
    procedures: Vec<Procedure>,
    router: Router,
}

impl RpcRouter {
    pub fn new(app_name: &str) -> Result<Self, RouterError> {
        check_app_name(app_name)?;
        Ok(Self {
            app_name: app_name.to_string(),
            procedures: Vec::new(),
            router: Router::new(),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Mount `handler` as procedure `name`.
    pub fn procedure<I, O, F, Fut>(mut self, name: &str, handler: F) -> Result<Self, RouterError>
    where
        I: DeserializeOwned + JsonSchema + Send + 'static,
        O: Serialize + JsonSchema + Send + 'static,
        F: Fn(AuthContext, I) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = O> + Send + 'static,
    {
        let path = EndpointPath::derive(&self.app_name, name)?;
        if self.procedures.iter().any(|p| p.path == path) {
            return Err(RouterError::DuplicateProcedure(path.to_string()));
        }

        let endpoint = move |uri: Uri, body: Bytes| {
            let handler = handler.clone();
            async move { dispatch::<I, O, F, Fut>(handler, uri, body).await }
        };
        self.router = self.router.route(path.as_str(), post(endpoint));
        tracing::debug!(%path, "mounted rpc procedure");
        self.procedures.push(Procedure {
            name: name.to_string(),
            path,
            input: Shape::of::<I>(),
            output: Shape::of::<O>(),
        });
        Ok(self)
    }

    /// Every mounted procedure, in registration order.
    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// Paths of every mounted procedure, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &EndpointPath> + '_ {
        self.procedures.iter().map(|p| &p.path)
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn dispatch<I, O, F, Fut>(handler: F, uri: Uri, body: Bytes) -> Response
where
    I: DeserializeOwned,
    O: Serialize,
    F: Fn(AuthContext, I) -> Fut,
    Fut: Future<Output = O>,
{
    if body.is_empty() {
        return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
    }

    let input: I = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(%uri, error = %e, "rejected rpc input");
            return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response();
        }
    };

    let output = handler(AuthContext::new(uri), input).await;
    Json(output).into_response()
}
