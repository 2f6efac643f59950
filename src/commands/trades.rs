//! Trade Commands
//!
//! Submits finished trade rows to the backend.

use crate::config::ApiConfig;
use crate::models::{SaveTradesResponse, TradeSubmission};
use super::post_json;

/// Post all trades in one request; returns the server's message on success
pub async fn save_trades(api: &ApiConfig, trades: &[TradeSubmission]) -> Result<Option<String>, String> {
    let body = serde_json::to_string(trades).map_err(|e| format!("Serialization error: {}", e))?;
    let response = post_json::<SaveTradesResponse>(&api.endpoint("save_trades"), &body).await?;
    let message = response.body.and_then(|b| b.message);

    if response.ok {
        Ok(message)
    } else {
        Err(message.unwrap_or_else(|| "Failed to save trades.".to_string()))
    }
}
