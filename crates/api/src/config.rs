//! Process configuration, read from the environment (and `.env`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

use depot_observability::LogFormat;

const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `BIND_ADDR`, default `0.0.0.0:8080`.
    pub bind_addr: SocketAddr,
    /// `JWT_SECRET`; falls back to an insecure dev secret.
    pub jwt_secret: String,
    /// True when `JWT_SECRET` was not set.
    pub insecure_jwt_secret: bool,
    /// `DATABASE_URL`; in-memory storage when absent.
    pub database_url: Option<String>,
    /// `AUDIT_DIR`, default `./audit`.
    pub audit_dir: PathBuf,
    /// `LOG_FORMAT` (`json` or `pretty`), default `json`.
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in
    /// production, a map in tests). Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:8080")?;

        let (jwt_secret, insecure_jwt_secret) = match get("JWT_SECRET") {
            Some(secret) => (secret, false),
            None => (DEV_JWT_SECRET.to_string(), true),
        };

        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>().map_err(anyhow::Error::msg)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            insecure_jwt_secret,
            database_url: get("DATABASE_URL"),
            audit_dir: get("AUDIT_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("./audit")),
            log_format,
        })
    }
}
