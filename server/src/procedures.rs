//! Procedures served by the demo application.

use rpc_core::{GetOutputInput, GetOutputOutput};
use serde_json::Value;

use crate::auth::AuthContext;

/// `example-test/get-output`: echoes `foo` and `bar` back as `hello` and `world`.
pub async fn get_output(auth: AuthContext, input: GetOutputInput) -> GetOutputOutput {
    tracing::info!(uri = %auth.uri(), my_option = input.my_option, "get_output");
    GetOutputOutput {
        hello: input.foo,
        world: input.bar,
    }
}

/// `app/test`: returns its input unchanged.
pub async fn test(_auth: AuthContext, input: Value) -> Value {
    input
}
