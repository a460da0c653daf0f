//! Resolves the last on-chain activity of an address.
//!
//! Pipeline per call:
//! 1. Fetch the address's txids from the explorer
//! 2. Take the first one, which the explorer lists as the most recent
//! 3. Fetch that transaction's time and render it as `YYYY-MM-DD HH:MM:SS`

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};

use lastactive_common::config::AppConfig;
use lastactive_common::error::{AppError, UpstreamError};
use lastactive_common::types::{ActivityResult, TimestampZone};

use crate::client::ExplorerClient;

/// Format of `last_active_timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Address activity resolver service.
#[derive(Clone)]
pub struct AddressActivityResolver {
    client: ExplorerClient,
    zone: TimestampZone,
    deadline: Duration,
}

impl AddressActivityResolver {
    pub fn new(client: ExplorerClient, zone: TimestampZone, deadline: Duration) -> Self {
        Self {
            client,
            zone,
            deadline,
        }
    }

    pub fn explorer(&self) -> &ExplorerClient {
        &self.client
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let client = ExplorerClient::new(&config.explorer_base_url, config.upstream_timeout())?;
        Ok(Self::new(
            client,
            config.timestamp_zone,
            config.resolve_timeout(),
        ))
    }

    /// Resolve the timestamp of the most recent transaction of `address`.
    ///
    /// The whole pipeline is bounded by the resolver deadline; exceeding it
    /// yields [`AppError::Timeout`].
    pub async fn resolve_last_active(&self, address: &str) -> Result<ActivityResult, AppError> {
        match tokio::time::timeout(self.deadline, self.resolve(address)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(address, deadline = ?self.deadline, "Address resolution timed out");
                Err(AppError::Timeout(address.to_string()))
            }
        }
    }

    async fn resolve(&self, address: &str) -> Result<ActivityResult, AppError> {
        let txids = self
            .client
            .fetch_txids(address)
            .await
            .map_err(|source| {
                tracing::error!(address, error = %source, "Failed to fetch txids");
                AppError::AddressLookup {
                    address: address.to_string(),
                    source,
                }
            })?;

        // Explorer order is trusted; no re-sorting by block time
        let Some(txid) = txids.into_iter().next() else {
            tracing::info!(address, "No transactions found");
            return Err(AppError::NoTransactions(address.to_string()));
        };

        let lookup_error = |source: UpstreamError| {
            tracing::error!(address, %txid, error = %source, "Failed to fetch transaction time");
            AppError::TransactionLookup {
                txid: txid.clone(),
                source,
            }
        };

        let epoch = self.client.fetch_tx_time(&txid).await.map_err(lookup_error)?;
        let timestamp = format_timestamp(epoch, self.zone).ok_or_else(|| {
            lookup_error(UpstreamError::Shape(format!(
                "time field out of range: {epoch}"
            )))
        })?;

        tracing::info!(address, %txid, epoch, %timestamp, "Resolved last activity");
        Ok(ActivityResult::success(timestamp))
    }
}

/// Render epoch seconds in `zone`. `None` when outside chrono's range.
pub fn format_timestamp(epoch: i64, zone: TimestampZone) -> Option<String> {
    match zone {
        TimestampZone::Local => format_in(epoch, &Local),
        TimestampZone::Utc => format_in(epoch, &Utc),
    }
}

/// Render epoch seconds in an arbitrary zone.
pub fn format_in<Tz>(epoch: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc: DateTime<Utc> = DateTime::from_timestamp(epoch, 0)?;
    Some(utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string())
}
