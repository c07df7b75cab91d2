//! Server configuration: an optional TOML file, then environment overrides.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "jobly.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_size: default_pool_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_pool_size() -> usize {
    16
}

fn default_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load `.env`, then the config file (`JOBLY_CONFIG` or `jobly.toml`, if
    /// present), then apply environment overrides and validate.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let path = std::env::var("JOBLY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let explicit = std::env::var_os("JOBLY_CONFIG").is_some();

        let mut cfg = if explicit || path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("failed to read config file {}: {e}", path.display())
        })?;
        let mut cfg = Self::from_toml(&raw).map_err(|e| {
            anyhow::anyhow!("failed to parse config file {}: {e}", path.display())
        })?;
        cfg.expand_env()?;
        Ok(cfg)
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn expand_env(&mut self) -> anyhow::Result<()> {
        self.server.addr = expand_env_vars(&self.server.addr)?;
        self.database.url = expand_env_vars(&self.database.url)?;
        self.log.level = expand_env_vars(&self.log.level)?;
        Ok(())
    }

    fn apply_env(&mut self) -> anyhow::Result<()> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(addr) = std::env::var("JOBLY_ADDR") {
            self.server.addr = addr;
        }
        if let Ok(size) = std::env::var("JOBLY_POOL_SIZE") {
            self.database.pool_size = size
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid JOBLY_POOL_SIZE {size:?}: {e}"))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.database.url.trim().is_empty() {
            anyhow::bail!("database.url must not be empty (or set DATABASE_URL)");
        }
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be at least 1");
        }
        self.addr()?;
        Ok(())
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.addr {:?}: {e}", self.server.addr))
    }
}

/// Replace `${VAR}` references with the variable's value.
fn expand_env_vars(input: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'

            let mut key = String::new();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '}' {
                    closed = true;
                    break;
                }
                key.push(ch);
            }

            if !closed {
                anyhow::bail!("unterminated env var reference: ${{{key}}}");
            }
            if key.is_empty() {
                anyhow::bail!("invalid env var reference: ${{}}");
            }

            let v = std::env::var(&key)
                .map_err(|_| anyhow::anyhow!("missing env var for config expansion: {key}"))?;
            out.push_str(&v);
            continue;
        }

        out.push(c);
    }

    Ok(out)
}
