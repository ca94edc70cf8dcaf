use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HandlerError;

pub const PROCESSED_BY: &str = "Rust闘魂エンジン";
pub const VICTORY_STATUS: &str = "VICTORY!";
pub const TOUKON_POWER: &str = "MAX";
pub const ERROR_DESCRIPTION: &str = "闘魂処理でエラーが発生しました";
pub const ERROR_STATUS: &str = "ERROR";

pub fn greeting(input_message: &str) -> String {
    format!("🔥 闘魂Rust Lambda 成功だ！ - {input_message}")
}

/// Body of a 200 response. Field order is the order on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuccessPayload {
    pub message: String,
    pub timestamp: String,
    pub request_id: String,
    pub rust_version: String,
    pub input_event: Value,
    pub processed_by: String,
    pub status: String,
    pub toukon_power: String,
    pub test_param: Value,
}

/// Body of a 500 response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
    pub timestamp: String,
    pub status: String,
}

impl ErrorPayload {
    pub fn new(failure: &HandlerError, timestamp: String) -> Self {
        Self {
            error: ERROR_DESCRIPTION.to_string(),
            message: failure.to_string(),
            timestamp,
            status: ERROR_STATUS.to_string(),
        }
    }
}

/// Pretty JSON with two-space indentation. serde_json never escapes
/// non-ASCII, so Japanese text and emoji stay literal.
pub fn render<T: Serialize>(payload: &T) -> Result<String, HandlerError> {
    Ok(serde_json::to_string_pretty(payload)?)
}
