//! Client stub generation.
//!
//! # Design
//! Every procedure mounted on an `RpcRouter` already knows its endpoint path
//! and the shapes it exchanges, so the client side is rendered from the same
//! registry instead of being written by hand:
//!
//! - `render_rust` emits the `rpc_core::endpoints` module: one `RpcStub`
//!   static plus a typed wrapper per procedure.
//! - `render_typescript` emits one `fetch` stub per procedure with `export
//!   interface` declarations for its object shapes.
//!
//! Output is plain text with a fixed layout so a checked-in copy can be
//! compared byte for byte.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rpc_core::casing::to_snake_case;

use crate::router::{Procedure, RpcRouter};
use crate::shape::Shape;

const RUST_HEADER: &str = "\
//! Generated endpoint stubs.
//!
//! Rendered by `rpc_server::codegen::render_rust` from the server's mounted
//! procedures; regenerate instead of editing. Paths were derived when the
//! stubs were generated and are not recomputed at call time.
";

const RUST_IMPORTS: [&str; 3] = [
    "crate::error::RpcError",
    "crate::stub::RpcStub",
    "crate::transport::Transport",
];

/// One generated TypeScript file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Render the Rust endpoints module for every procedure of `routers`, in order.
pub fn render_rust(routers: &[RpcRouter]) -> String {
    let procedures: Vec<&Procedure> = routers.iter().flat_map(RpcRouter::procedures).collect();

    let mut imports: BTreeSet<&str> = RUST_IMPORTS.into_iter().collect();
    for procedure in &procedures {
        imports.insert(&procedure.input.rust_path);
        imports.insert(&procedure.output.rust_path);
    }

    let mut out = String::from(RUST_HEADER);
    out.push('\n');
    for import in imports {
        let _ = writeln!(out, "use {import};");
    }

    for procedure in procedures {
        let func = to_snake_case(&procedure.name);
        let stub = func.to_uppercase();
        let path = &procedure.path;
        let input = procedure.input.name();
        let output = procedure.output.name();

        out.push('\n');
        let _ = write!(
            out,
            "\
/// `POST {path}`
pub static {stub}: RpcStub<{input}, {output}> = RpcStub::new(\"{path}\");

pub async fn {func}<T>(transport: &T, input: &{input}) -> Result<{output}, RpcError>
where
    T: Transport + ?Sized,
{{
    {stub}.call(transport, input).await
}}
"
        );
    }

    out
}

/// Render one TypeScript client file per procedure of `router`.
pub fn render_typescript(router: &RpcRouter) -> Vec<TsFile> {
    router
        .procedures()
        .iter()
        .map(|procedure| {
            let func = to_snake_case(&procedure.name);
            let mut contents = String::new();
            let _ = write!(
                contents,
                "\
export function {func}(input: {input}): Promise<{output}> {{
  return fetch(\"{path}\", {{
    method: \"POST\",
    headers: {{ \"Content-Type\": \"application/json\" }},
    body: JSON.stringify(input),
  }}).then((res) => res.json());
}}
",
                input = procedure.input.ts_name(),
                output = procedure.output.ts_name(),
                path = procedure.path,
            );

            let mut declared = BTreeSet::new();
            for shape in [&procedure.input, &procedure.output] {
                if declared.insert(shape.name()) {
                    render_interface(&mut contents, shape);
                }
            }

            TsFile {
                path: Path::new(router.app_name()).join(format!("{func}.ts")),
                contents,
            }
        })
        .collect()
}

fn render_interface(out: &mut String, shape: &Shape) {
    let Some(fields) = &shape.fields else {
        return;
    };

    let _ = write!(out, "\nexport interface {} {{\n", shape.name());
    for field in fields {
        let optional = if field.required { "" } else { "?" };
        let _ = writeln!(out, "  {}{optional}: {};", field.name, field.ts_type);
    }
    out.push_str("}\n");
}

/// Write the TypeScript stubs of every router under `dir`, returning the paths written.
pub fn write_typescript(routers: &[RpcRouter], dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for router in routers {
        for file in render_typescript(router) {
            let path = dir.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, file.contents)?;
            tracing::info!(path = %path.display(), "wrote client stub");
            written.push(path);
        }
    }
    Ok(written)
}
