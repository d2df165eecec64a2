use axum::http::Uri;

/// Per-request context handed to every procedure.
#[derive(Debug, Clone)]
pub struct AuthContext {
    uri: Uri,
}

impl AuthContext {
    pub fn new(uri: Uri) -> Self {
        Self { uri }
    }

    /// The URI the procedure was invoked at.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }
}
