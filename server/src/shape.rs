//! Field layout of procedure inputs and outputs, read from their JSON schema.

use std::any::type_name;

use schemars::schema::{InstanceType, Schema, SingleOrVec};
use schemars::JsonSchema;

/// Name and fields of one input or output type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Rust path of the type, with this workspace's core crate spelled `crate`.
    pub rust_path: String,
    /// `None` when the schema declares no object layout (`serde_json::Value`).
    pub fields: Option<Vec<Field>>,
}

/// One member of an object shape, in schema (alphabetical) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// TypeScript spelling of the member's type.
    pub ts_type: String,
    pub required: bool,
}

impl Shape {
    pub fn of<T: JsonSchema>() -> Self {
        let root = schemars::schema_for!(T);
        let fields = root.schema.object.as_ref().map(|object| {
            object
                .properties
                .iter()
                .map(|(name, schema)| Field {
                    name: name.clone(),
                    ts_type: ts_type(schema),
                    required: object.required.contains(name),
                })
                .collect()
        });

        let rust_path = type_name::<T>();
        let rust_path = match rust_path.strip_prefix("rpc_core::") {
            Some(rest) => format!("crate::{rest}"),
            None => rust_path.to_string(),
        };

        Self { rust_path, fields }
    }

    /// Last segment of the Rust path.
    pub fn name(&self) -> &str {
        self.rust_path.rsplit("::").next().unwrap_or(&self.rust_path)
    }

    /// Type to name in TypeScript: the interface name, or `unknown`.
    pub fn ts_name(&self) -> &str {
        match self.fields {
            Some(_) => self.name(),
            None => "unknown",
        }
    }
}

fn ts_type(schema: &Schema) -> String {
    let object = match schema {
        Schema::Bool(_) => return "unknown".to_string(),
        Schema::Object(object) => object,
    };

    if let Some(reference) = &object.reference {
        if let Some(name) = reference.rsplit('/').next() {
            return name.to_string();
        }
    }

    let instance = match &object.instance_type {
        Some(SingleOrVec::Single(instance)) => Some(**instance),
        // `Option<T>` shows up as `[T, null]`.
        Some(SingleOrVec::Vec(instances)) => instances
            .iter()
            .copied()
            .find(|instance| *instance != InstanceType::Null),
        None => None,
    };

    match instance {
        Some(InstanceType::Integer | InstanceType::Number) => "number",
        Some(InstanceType::String) => "string",
        Some(InstanceType::Boolean) => "boolean",
        Some(InstanceType::Array) => "unknown[]",
        Some(InstanceType::Null) => "null",
        Some(InstanceType::Object) | None => "unknown",
    }
    .to_string()
}
