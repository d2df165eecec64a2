//! Endpoint path derivation.
//!
//! Every remote procedure lives at `/rpc/{app}/{procedure}`. The app name is
//! used verbatim and must already be kebab case; the procedure name is
//! kebab-cased, so `get_output`, `get-output` and `getOutput` all name the
//! same endpoint.

use std::borrow::Cow;
use std::fmt;

use crate::casing::to_kebab_case;
use crate::error::PathError;

/// Prefix shared by all RPC endpoints.
pub const RPC_PREFIX: &str = "/rpc";

/// The fixed path of one remote procedure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointPath(Cow<'static, str>);

impl EndpointPath {
    /// Derive the path for `procedure` inside `app`.
    pub fn derive(app: &str, procedure: &str) -> Result<Self, PathError> {
        check_app_name(app)?;

        if procedure.is_empty() {
            return Err(PathError::EmptyProcedure);
        }
        let procedure = to_kebab_case(procedure);

        Ok(Self(Cow::Owned(format!("{RPC_PREFIX}/{app}/{procedure}"))))
    }

    /// Wrap a path that was derived ahead of time.
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ensure `app` can be used verbatim as the app segment of a path.
pub fn check_app_name(app: &str) -> Result<(), PathError> {
    if app.is_empty() {
        return Err(PathError::EmptyApp);
    }
    let expected = to_kebab_case(app);
    if expected != app {
        return Err(PathError::AppNotKebabCase {
            app: app.to_string(),
            expected,
        });
    }
    Ok(())
}

impl fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EndpointPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
