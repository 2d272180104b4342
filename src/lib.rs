pub mod config;
pub mod error;
pub mod payload;
pub mod signing;
pub mod submit;

use crate::config::Config;
use crate::error::SubmitError;
use crate::payload::SubmissionPayload;
use crate::submit::{Receipt, Submitter};

/// Run one complete submission: stamp the payload, canonicalize, sign, POST.
/// Diagnostics (including the canonical payload and the computed tag) are
/// logged along the way; the secret itself only ever appears as its length
/// and a four-character prefix.
pub async fn run(config: &Config) -> Result<Receipt, SubmitError> {
    let prefix: String = config.secret.chars().take(4).collect();
    tracing::info!(
        "Secret loaded ({} characters, starts with {prefix}...)",
        config.secret.chars().count()
    );

    let payload = SubmissionPayload::from_config(config);
    tracing::info!("Timestamp: {}", payload.timestamp);

    let canonical = payload.canonical_json()?;
    tracing::info!("Canonical payload: {canonical}");

    let tag = signing::sign(canonical.as_bytes(), &config.secret)?;
    tracing::info!("HMAC-SHA256 signature: {tag}");

    let submitter = Submitter::new(config.endpoint.clone());
    tracing::info!("Submitting application to {}", submitter.endpoint());
    let receipt = submitter.submit(canonical, &tag).await?;

    tracing::info!("Response status: {}", receipt.status);
    for (name, value) in &receipt.headers {
        tracing::info!("Response header {name}: {value}");
    }

    Ok(receipt)
}
