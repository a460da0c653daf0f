use std::time::Duration;

use serde::Deserialize;

use crate::types::TimestampZone;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Host the API server binds to (default: 0.0.0.0)
    pub bind_host: String,

    /// Port the API server listens on (default: 8080)
    pub port: u16,

    /// Base URL of the block explorer, without the `/api/...` suffix
    pub explorer_base_url: String,

    /// Timeout applied to each explorer request, in seconds (default: 30)
    pub upstream_timeout_secs: u64,

    /// Upper bound for a whole address resolution, in seconds (default: 60)
    pub resolve_timeout_secs: u64,

    /// Zone used to render `last_active_timestamp`
    pub timestamp_zone: TimestampZone,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            bind_host: var("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16"))?,
            explorer_base_url: var("EXPLORER_BASE_URL")
                .unwrap_or_else(|| "https://vayu.hornet.technology".to_string()),
            upstream_timeout_secs: var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a valid u64"))?,
            resolve_timeout_secs: var("RESOLVE_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RESOLVE_TIMEOUT_SECS must be a valid u64"))?,
            timestamp_zone: var("TIMESTAMP_ZONE")
                .map(|zone| zone.parse::<TimestampZone>())
                .transpose()
                .map_err(|e: String| anyhow::anyhow!("TIMESTAMP_ZONE: {e}"))?
                .unwrap_or_default(),
        };

        if config.upstream_timeout_secs == 0 || config.resolve_timeout_secs == 0 {
            anyhow::bail!("timeouts must be greater than zero");
        }

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }
}
