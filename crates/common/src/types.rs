use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message carried by every successful [`ActivityResult`].
pub const SUCCESS_MESSAGE: &str = "success";

/// Response body of `GET /api/address/{address}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResult {
    pub message: String,
    /// `YYYY-MM-DD HH:MM:SS` in the configured [`TimestampZone`].
    pub last_active_timestamp: String,
}

impl ActivityResult {
    pub fn success(last_active_timestamp: String) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            last_active_timestamp,
        }
    }
}

/// Time zone used when rendering transaction timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampZone {
    /// Zone of the host running the service.
    #[default]
    Local,
    Utc,
}

impl std::fmt::Display for TimestampZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampZone::Local => write!(f, "local"),
            TimestampZone::Utc => write!(f, "utc"),
        }
    }
}

impl FromStr for TimestampZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(TimestampZone::Local),
            "utc" => Ok(TimestampZone::Utc),
            other => Err(format!("unknown timestamp zone: {other}")),
        }
    }
}
