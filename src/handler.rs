use anyhow::{bail, Context, Result};
use aws_lambda_events::s3::S3Event;
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use tracing::{info, warn};

/// API-Gateway-style response the invoker sees.
#[derive(Debug, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Handles an S3 upload notification. The object key's pre-extension segment
/// is read as an integer `n`; a non-numeric stem yields a 400, otherwise one
/// log line is emitted for every `i` in `0..=n` (none when `n` is negative).
pub async fn function_handler(event: LambdaEvent<S3Event>) -> Result<HandlerResponse> {
    let Some(record) = event.payload.records.first() else {
        bail!("S3 event contained no records");
    };

    let bucket = record.s3.bucket.name.as_deref().unwrap_or("unknown");
    let key = record
        .s3
        .object
        .key
        .as_deref()
        .context("S3 record is missing an object key")?;

    info!(bucket, key, "Received upload notification");

    let n: i64 = match filename_stem(key).trim().parse() {
        Ok(n) => n,
        Err(_) => {
            let message = format!("Filename {} is not a valid number.", key);
            warn!("{}", message);
            return Ok(HandlerResponse {
                status_code: 400,
                body: message,
            });
        }
    };

    for i in 0..=n {
        info!("{}: Hello World", i);
    }

    Ok(HandlerResponse {
        status_code: 200,
        body: serde_json::to_string(&format!("Looped from 0 to {}", n))?,
    })
}

/// Everything before the first `.` of the key, or the whole key when there is
/// no extension.
fn filename_stem(key: &str) -> &str {
    key.split('.').next().unwrap_or(key)
}
