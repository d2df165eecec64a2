//! Shapes exchanged by the generated endpoints.
//!
//! # Design
//! The server crate decodes into these same types, so a field rename shows up
//! on both sides at once. Nothing beyond serde's own decoding checks the
//! values. `JsonSchema` exposes the field layout to the stub generator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input of `example-test/get-output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GetOutputInput {
    pub foo: i64,
    pub bar: String,
    #[serde(rename = "myOption", default)]
    pub my_option: bool,
}

/// Output of `example-test/get-output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GetOutputOutput {
    pub hello: i64,
    pub world: String,
}

/// Placeholder interface emitted alongside the generated stubs. Its members
/// have no declared types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MyInterface {
    pub foo: Value,
    pub hello: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn my_option_defaults_to_false() {
        let input: GetOutputInput = serde_json::from_str(r#"{"foo":1,"bar":"b"}"#).unwrap();
        assert!(!input.my_option);
    }

    #[test]
    fn my_option_uses_camel_case_on_the_wire() {
        let input = GetOutputInput {
            foo: 1,
            bar: "b".to_string(),
            my_option: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["myOption"], true);
        assert!(json.get("my_option").is_none());
    }

    #[test]
    fn get_output_input_requires_bar() {
        let result: Result<GetOutputInput, _> = serde_json::from_str(r#"{"foo":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn my_interface_accepts_any_member_values() {
        let value: MyInterface =
            serde_json::from_str(r#"{"foo":"bar","hello":{"world":[1,2]}}"#).unwrap();
        assert_eq!(value.foo, "bar");
        assert_eq!(value.hello["world"][1], 2);
    }
}
