use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub jwt_secret: Vec<u8>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `SB_*` variables, after loading `.env` if one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SB_LISTEN_ADDR")?;
        let db_path = std::env::var("SB_DB_PATH").unwrap_or_else(|_| "./db/stakebook.db".into());
        let jwt_secret = std::env::var("SB_JWT_SECRET").context("SB_JWT_SECRET must be set")?;
        let jwt_secret = decode_secret_key(&jwt_secret).context("Invalid SB_JWT_SECRET")?;
        let cors_allow = std::env::var("SB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("Invalid SB_REQUEST_TIMEOUT_MS")?;
        Ok(Self {
            listen_addr,
            db_path,
            jwt_secret,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
