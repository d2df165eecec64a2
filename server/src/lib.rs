//! RPC server counterpart to the `rpc-core` stubs.

pub mod auth;
pub mod codegen;
pub mod config;
pub mod error;
pub mod procedures;
pub mod router;
pub mod shape;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use auth::AuthContext;
pub use config::ServerConfig;
pub use error::{RouterError, ServerError};
pub use router::RpcRouter;

/// The `example-test` app.
pub fn example_test_router() -> Result<RpcRouter, RouterError> {
    RpcRouter::new("example-test")?.procedure("get_output", procedures::get_output)
}

/// The `app` app.
pub fn app_router() -> Result<RpcRouter, RouterError> {
    RpcRouter::new("app")?.procedure("test", procedures::test)
}

/// Every app served by this binary, in the order their stubs are generated.
pub fn routers() -> Result<Vec<RpcRouter>, RouterError> {
    Ok(vec![app_router()?, example_test_router()?])
}

pub fn app() -> Result<Router, RouterError> {
    let app = routers()?
        .into_iter()
        .fold(Router::new().route("/", get(homepage)), |app, rpc| {
            app.merge(rpc.into_router())
        });
    Ok(app)
}

pub async fn run(listener: TcpListener) -> Result<(), ServerError> {
    let app = app()?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn homepage() -> Json<Value> {
    Json(json!({"hello": "world"}))
}
