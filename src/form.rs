//! Interaction state of the summarize form and its submission lifecycle.
//!
//! A submission is split into [`FormController::begin`] and
//! [`FormController::finish`] around the single network call, which
//! [`FormController::submit`] drives end to end.

use tracing::{info, warn};

use crate::client::Summarizer;
use crate::error::{AppError, Result};
use crate::video_id::{embed_url, extract_video_id};

/// Everything the form displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub url: String,
    pub video_id: Option<String>,
    pub summary: String,
    pub error: String,
    pub is_loading: bool,
}

impl SubmissionState {
    /// The player is only shown once both a summary and a video id exist.
    pub fn player_url(&self) -> Option<String> {
        match &self.video_id {
            Some(id) if !self.summary.is_empty() => Some(embed_url(id)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FormOptions {
    /// Keep an already fetched summary when the URL turns out not to carry
    /// a recognizable video id. When set, a failed submission can show both
    /// a summary and an error, as the original form did.
    pub keep_summary_on_invalid_url: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            keep_summary_on_invalid_url: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty URL or a request already in flight; nothing changed.
    Ignored,
    Summarized,
    Failed,
}

pub struct FormController<S> {
    summarizer: S,
    options: FormOptions,
    state: SubmissionState,
}

impl<S: Summarizer> FormController<S> {
    pub fn new(summarizer: S) -> Self {
        Self::with_options(summarizer, FormOptions::default())
    }

    pub fn with_options(summarizer: S, options: FormOptions) -> Self {
        Self {
            summarizer,
            options,
            state: SubmissionState::default(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn update_url(&mut self, text: impl Into<String>) {
        self.state.url = text.into();
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.url.is_empty() && !self.state.is_loading
    }

    /// Start a submission. Returns the URL to summarize, or `None` if the
    /// form cannot be submitted right now.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.state.is_loading = true;
        self.state.error.clear();
        self.state.summary.clear();
        self.state.video_id = None;

        Some(self.state.url.clone())
    }

    /// Apply the result of the summarize call started by [`begin`](Self::begin).
    pub fn finish(&mut self, result: Result<String>) -> SubmitOutcome {
        let outcome = match result.and_then(|summary| self.accept_summary(summary)) {
            Ok(video_id) => {
                info!(%video_id, "Summary ready");
                self.state.video_id = Some(video_id);
                SubmitOutcome::Summarized
            }
            Err(err) => {
                warn!(error = %err, url = %self.state.url, "Submission failed");
                if matches!(err, AppError::InvalidVideoUrl) && !self.options.keep_summary_on_invalid_url {
                    self.state.summary.clear();
                }
                self.state.error = err.user_message();
                SubmitOutcome::Failed
            }
        };

        self.state.is_loading = false;
        outcome
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(url) = self.begin() else {
            return SubmitOutcome::Ignored;
        };

        let result = self.summarizer.summarize(&url).await;
        self.finish(result)
    }

    /// Back to a blank form ("new summary").
    pub fn reset(&mut self) {
        self.state = SubmissionState::default();
    }

    fn accept_summary(&mut self, summary: String) -> Result<String> {
        self.state.summary = summary;
        extract_video_id(&self.state.url).ok_or(AppError::InvalidVideoUrl)
    }
}
