use chrono::{DateTime, Utc};
use lambda_http::{lambda_runtime::LambdaEvent, tracing, Error};
use serde_json::{json, Value};

use crate::{
    context::{resolve_request_id, InvocationContext},
    envelope::Envelope,
    error::HandlerError,
    event,
    payload::{self, ErrorPayload, SuccessPayload},
    runtime::{iso_timestamp, rust_version},
};

/// Lambda service function. Always answers with an envelope; failures are
/// reported as 500 responses rather than runtime errors.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Envelope, Error> {
    let (payload, context) = event.into_parts();
    Ok(handle(&payload, Some(&context)))
}

/// Handle one invocation. `context` is `None` for local runs.
pub fn handle<C>(event: &Value, context: Option<&C>) -> Envelope
where
    C: InvocationContext + ?Sized,
{
    handle_at(event, context, Utc::now)
}

/// [`handle`] with an explicit clock.
pub fn handle_at<C, F>(event: &Value, context: Option<&C>, clock: F) -> Envelope
where
    C: InvocationContext + ?Sized,
    F: Fn() -> DateTime<Utc>,
{
    let outcome = build_success(event, context, clock()).and_then(|p| payload::render(&p));

    match outcome {
        Ok(body) => {
            tracing::info!("🔥 闘魂Rust Lambda 完了!");
            Envelope::success(body)
        }
        Err(failure) => failure_envelope(&failure, clock()),
    }
}

/// The fallible part of an invocation: everything up to a finished success
/// payload.
pub fn build_success<C>(
    event: &Value,
    context: Option<&C>,
    now: DateTime<Utc>,
) -> Result<SuccessPayload, HandlerError>
where
    C: InvocationContext + ?Sized,
{
    tracing::info!("🔥 闘魂Rust Lambda 開始!");
    let raw_event = serde_json::to_string(event)?;
    tracing::info!(event = %raw_event, "受信イベント");

    let request_id = resolve_request_id(context);
    let timestamp = iso_timestamp(now);

    let mapping = event::as_mapping(event)?;
    let input_message = event::message(mapping);
    let test_param = event::test_param(mapping);

    Ok(SuccessPayload {
        message: payload::greeting(&input_message),
        timestamp,
        request_id,
        rust_version: rust_version().to_string(),
        input_event: event.clone(),
        processed_by: payload::PROCESSED_BY.to_string(),
        status: payload::VICTORY_STATUS.to_string(),
        toukon_power: payload::TOUKON_POWER.to_string(),
        test_param,
    })
}

fn failure_envelope(failure: &HandlerError, now: DateTime<Utc>) -> Envelope {
    tracing::error!(error = %failure, details = ?failure, "💥 闘魂エラー発生");

    let error_payload = ErrorPayload::new(failure, iso_timestamp(now));
    let body = payload::render(&error_payload).unwrap_or_else(|_| {
        let fallback = json!({
            "error": &error_payload.error,
            "message": &error_payload.message,
            "timestamp": &error_payload.timestamp,
            "status": &error_payload.status,
        });
        format!("{fallback:#}")
    });

    Envelope::failure(body)
}
