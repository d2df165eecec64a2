use std::path::PathBuf;

use crate::error::ServerError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Listen address, read from `HOST` and `PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory to write TypeScript client stubs into at startup (`RPC_TS_OUT`).
    pub ts_out: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ts_out: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|_| ServerError::InvalidConfig {
                name: "PORT",
                value: port,
            })?;
        }
        config.ts_out = lookup("RPC_TS_OUT")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_host_and_port() {
        let config = ServerConfig::from_lookup(lookup(&[("HOST", "0.0.0.0"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_stub_output_dir() {
        let config = ServerConfig::from_lookup(lookup(&[("RPC_TS_OUT", "web/rpc")])).unwrap();
        assert_eq!(config.ts_out, Some(PathBuf::from("web/rpc")));

        let config = ServerConfig::from_lookup(lookup(&[("RPC_TS_OUT", "")])).unwrap();
        assert_eq!(config.ts_out, None);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(
            err,
            ServerError::InvalidConfig { name: "PORT", .. }
        ));
    }
}
