use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime settings, read from `MURMUR_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `:memory:` selects a throwaway in-memory database.
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("MURMUR_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("MURMUR_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MURMUR_PORT is not a port number: {raw}"))?,
            None => 8080,
        };
        let db_path = lookup("MURMUR_DB_PATH")
            .unwrap_or_else(|| "murmur.db".into())
            .into();

        Ok(Self { host, port, db_path })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("invalid bind address {addr}"))
    }

    pub fn in_memory(&self) -> bool {
        self.db_path.as_os_str() == ":memory:"
    }
}
