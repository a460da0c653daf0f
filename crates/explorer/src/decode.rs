//! Typed shapes of the block explorer responses.
//!
//! Bodies are parsed in two steps so that malformed JSON (`UpstreamError::Parse`)
//! stays distinguishable from well-formed JSON of the wrong shape
//! (`UpstreamError::Shape`).

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use lastactive_common::error::UpstreamError;

/// `GET /api/address/{address}`
#[derive(Debug, Deserialize)]
pub struct AddressResponse {
    #[serde(rename = "txHistory")]
    pub tx_history: TxHistory,
}

#[derive(Debug, Deserialize)]
pub struct TxHistory {
    /// Kept loosely typed: non-string entries are dropped, not rejected.
    pub txids: Vec<Value>,
}

impl TxHistory {
    /// String txids in upstream order.
    pub fn into_txids(self) -> Vec<String> {
        self.txids
            .into_iter()
            .filter_map(|txid| match txid {
                Value::String(txid) => Some(txid),
                _ => None,
            })
            .collect()
    }
}

/// `GET /api/tx/{txid}`
#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    /// Unix epoch seconds. Some explorers send it as a float.
    pub time: f64,
}

impl TransactionResponse {
    /// Epoch seconds truncated toward zero.
    pub fn epoch_seconds(&self) -> Result<i64, UpstreamError> {
        let time = self.time.trunc();
        if !time.is_finite() || time < i64::MIN as f64 || time >= i64::MAX as f64 {
            return Err(UpstreamError::Shape(format!(
                "time field out of range: {}",
                self.time
            )));
        }
        Ok(time as i64)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, UpstreamError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| UpstreamError::Parse(e.to_string()))?;

    if !value.is_object() {
        return Err(UpstreamError::Shape(
            "expected a JSON object at the top level".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| UpstreamError::Shape(e.to_string()))
}

/// Decode an address lookup body into its string txids.
pub fn decode_txids(body: &[u8]) -> Result<Vec<String>, UpstreamError> {
    decode::<AddressResponse>(body).map(|resp| resp.tx_history.into_txids())
}

/// Decode a transaction lookup body into its epoch seconds.
pub fn decode_time(body: &[u8]) -> Result<i64, UpstreamError> {
    decode::<TransactionResponse>(body)?.epoch_seconds()
}
