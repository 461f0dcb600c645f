//! Blocking client for the contact endpoint. Callers run it off the UI loop.

use anyhow::{Context, Result};
use folio_core::{ContactReceipt, ContactRequest, ErrorBody};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent(ContactReceipt),
    /// The endpoint answered with an error status.
    Rejected { status: u16, error: String },
}

pub fn submit(endpoint: &str, timeout: Duration, request: &ContactRequest) -> Result<ContactOutcome> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Building HTTP client")?;
    let response = client
        .post(endpoint)
        .json(request)
        .send()
        .with_context(|| format!("Sending contact form to {endpoint}"))?;

    let status = response.status();
    if status.is_success() {
        let receipt: ContactReceipt = response.json().context("Decoding contact receipt")?;
        info!(timestamp = %receipt.timestamp, "Contact form delivered");
        return Ok(ContactOutcome::Sent(receipt));
    }

    let error = response
        .json::<ErrorBody>()
        .map(|body| body.error)
        .unwrap_or_else(|_| fallback_error(status.as_u16()));
    warn!(status = status.as_u16(), %error, "Contact form rejected");
    Ok(ContactOutcome::Rejected {
        status: status.as_u16(),
        error,
    })
}

fn fallback_error(status: u16) -> String {
    format!("Request failed with status {status}.")
}
