//! Generated endpoint stubs.
//!
//! Rendered by `rpc_server::codegen::render_rust` from the server's mounted
//! procedures; regenerate instead of editing. Paths were derived when the
//! stubs were generated and are not recomputed at call time.

use crate::error::RpcError;
use crate::stub::RpcStub;
use crate::transport::Transport;
use crate::types::GetOutputInput;
use crate::types::GetOutputOutput;
use serde_json::value::Value;

/// `POST /rpc/app/test`
pub static TEST: RpcStub<Value, Value> = RpcStub::new("/rpc/app/test");

pub async fn test<T>(transport: &T, input: &Value) -> Result<Value, RpcError>
where
    T: Transport + ?Sized,
{
    TEST.call(transport, input).await
}

/// `POST /rpc/example-test/get-output`
pub static GET_OUTPUT: RpcStub<GetOutputInput, GetOutputOutput> = RpcStub::new("/rpc/example-test/get-output");

pub async fn get_output<T>(transport: &T, input: &GetOutputInput) -> Result<GetOutputOutput, RpcError>
where
    T: Transport + ?Sized,
{
    GET_OUTPUT.call(transport, input).await
}
