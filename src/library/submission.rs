//! Content submission intake.
//!
//! Submissions are acknowledged but never written into the catalog; the
//! catalog stays exactly as it was loaded.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ContentId;

/// Errors that can occur submitting content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Submission URL is empty")]
    EmptyUrl,
}

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    /// Provisional identifier (SHA256(url)[0:16])
    pub provisional_id: ContentId,

    /// The submitted URL, trimmed
    pub url: String,

    /// When the submission was received
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Message shown to the submitter
    pub fn message(&self) -> &'static str {
        "Content submitted successfully! Your content will be processed and added to the library."
    }
}

/// Accept a URL for later processing
pub fn submit(url: &str) -> Result<SubmissionReceipt, SubmissionError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(SubmissionError::EmptyUrl);
    }

    let receipt = SubmissionReceipt {
        provisional_id: ContentId::from_url(url),
        url: url.to_string(),
        received_at: Utc::now(),
    };
    info!(url = %receipt.url, id = %receipt.provisional_id, "Content submission received");
    Ok(receipt)
}
