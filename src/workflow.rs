//! Client-side lead submission workflow.
//!
//! The landing page's conversion form is a tiny state machine:
//! `Idle -> Loading -> {Success, Error}`, with editing the email field
//! re-arming a terminal state back to `Idle`. At most one request is in
//! flight per form instance; independent forms share nothing.

use crate::errors::AppError;
use regex::Regex;
use serde_json::{json, Value};
use std::time::Duration;

/// Request lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Loading,
    /// Submission accepted; the email field has been cleared.
    Success,
    /// Submission failed (network, timeout, or any non-2xx status — the form
    /// does not distinguish). The email field keeps its text for retry.
    Error,
}

/// Cheap syntactic plausibility check for an email address.
///
/// This is a client-side nicety, not validation: the service itself only
/// requires non-emptiness. Enough to catch obvious typos before spending a
/// round trip.
pub fn is_plausible_email(email: &str) -> bool {
    if email.len() < 5 || !email.contains('@') || !email.contains('.') {
        return false;
    }

    // RFC 5322 simplified email regex
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();

    email_regex.is_match(email)
}

/// Client for the lead validation endpoint.
#[derive(Clone)]
pub struct LeadApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl LeadApiClient {
    /// Creates a new `LeadApiClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin serving `/api/validate`.
    pub fn new(base_url: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create lead client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits one email/niche pair to the validation endpoint.
    ///
    /// Network failure and non-success status are the same error to the
    /// caller; the workflow collapses them into a single `Error` state.
    pub async fn submit(&self, email: &str, niche_id: &str) -> Result<Value, AppError> {
        let url = format!("{}/api/validate", self.base_url);

        let body = json!({
            "email": email,
            "nicheId": niche_id,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Lead submission failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Validation endpoint returned {}: {}",
                status, error_text
            )));
        }

        let data = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse validation response: {}", e))
        })?;

        Ok(data)
    }
}

/// One conversion form instance: the email field text, its niche, and the
/// submission state the UI renders from.
pub struct LeadCaptureForm {
    niche_id: String,
    email: String,
    state: SubmissionState,
    client: LeadApiClient,
}

impl LeadCaptureForm {
    pub fn new(niche_id: impl Into<String>, client: LeadApiClient) -> Self {
        Self {
            niche_id: niche_id.into(),
            email: String::new(),
            state: SubmissionState::Idle,
            client,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the input field and submit control should be disabled.
    pub fn input_locked(&self) -> bool {
        self.state == SubmissionState::Loading
    }

    /// Updates the email field text. Editing after a finished attempt
    /// re-arms the form for a fresh submission.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.state == SubmissionState::Loading {
            // UI disables the field while loading; ignore stray edits.
            return;
        }
        self.email = email.into();
        if matches!(
            self.state,
            SubmissionState::Success | SubmissionState::Error
        ) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Runs one submission attempt and returns the resulting state.
    ///
    /// A call while a request is already in flight is a no-op. A blank or
    /// implausible email never leaves the client: the state is unchanged and
    /// no request is issued.
    pub async fn submit(&mut self) -> SubmissionState {
        if self.state == SubmissionState::Loading {
            return self.state;
        }

        let email = self.email.trim().to_string();
        if email.is_empty() || !is_plausible_email(&email) {
            tracing::debug!("Skipping submission: email not plausible");
            return self.state;
        }

        self.state = SubmissionState::Loading;

        match self.client.submit(&email, &self.niche_id).await {
            Ok(_) => {
                self.email.clear();
                self.state = SubmissionState::Success;
            }
            Err(e) => {
                tracing::warn!("Lead submission failed: {}", e);
                // Email text kept so the user can retry.
                self.state = SubmissionState::Error;
            }
        }

        self.state
    }
}
