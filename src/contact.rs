//! Contact form submission flow.
//!
//! The form collects a name, email, service type and message, hands them to
//! an injected [`SubmitPort`], and reflects the outcome:
//!
//! ```text
//!            submit                 resolve(Ok)
//!   Idle ───────────▶ Submitting ─────────────▶ Succeeded   (fields cleared)
//!    ▲                    │
//!    │                    └─────────────────────▶ Failed    (fields kept)
//!    │                          resolve(Err)
//!    └── Succeeded / Failed ──submit──▶ Submitting
//! ```
//!
//! At most one submission is in flight per form. [`ContactForm::begin_submit`]
//! refuses to start a second one, and the rendered submit button is disabled
//! while the status is [`SubmitStatus::Submitting`]. Failures are never
//! retried automatically; the user resubmits.
//!
//! Field validation (required fields, email syntax) is left to the browser.
//! There is no timeout here either: a transport that needs one enforces it
//! inside its own `submit`.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// The service-type dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceChoice {
    #[default]
    Unselected,
    Ltl,
    Tl,
    Both,
}

impl ServiceChoice {
    pub const OPTIONS: [ServiceChoice; 4] = [
        ServiceChoice::Unselected,
        ServiceChoice::Ltl,
        ServiceChoice::Tl,
        ServiceChoice::Both,
    ];

    /// Form value posted to the endpoint.
    pub fn value(self) -> &'static str {
        match self {
            ServiceChoice::Unselected => "",
            ServiceChoice::Ltl => "ltl",
            ServiceChoice::Tl => "tl",
            ServiceChoice::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceChoice::Unselected => "Select a service...",
            ServiceChoice::Ltl => "LTL Shipping",
            ServiceChoice::Tl => "TL Shipping",
            ServiceChoice::Both => "Both Services",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub service: ServiceChoice,
    pub message: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        *self == ContactFields::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why the transport could not deliver a submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("contact endpoint rejected the submission: {0}")]
    Rejected(String),
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Delivers a contact submission somewhere: an HTTP endpoint, a mailer, or
/// a test double. Either the whole submission succeeds or it fails.
#[async_trait]
pub trait SubmitPort: Send + Sync {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

/// Waits for a fixed delay and reports success. Stands in for a real
/// endpoint until one is configured.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitPort {
    pub delay: Duration,
}

impl Default for SimulatedSubmitPort {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

#[async_trait]
impl SubmitPort for SimulatedSubmitPort {
    async fn submit(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Proof that a submission was started. Only [`ContactForm::begin_submit`]
/// creates one, and [`ContactForm::resolve`] consumes it.
#[derive(Debug)]
pub struct Submission {
    fields: ContactFields,
}

impl Submission {
    /// Snapshot of the fields taken when the submission started.
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }
}

/// One contact form instance: its field values and submission status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Editing stays possible while a submission is in flight; only the
    /// submit control is locked.
    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn submit_enabled(&self) -> bool {
        self.status != SubmitStatus::Submitting
    }

    /// Enter `Submitting`, snapshotting the current fields.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.status == SubmitStatus::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.status = SubmitStatus::Submitting;
        Ok(Submission {
            fields: self.fields.clone(),
        })
    }

    /// Record the transport's answer for `submission`.
    pub fn resolve(&mut self, _submission: Submission, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                self.status = SubmitStatus::Failed;
            }
        }
    }

    /// Run one full submission through `port` and return the final status.
    pub async fn submit(&mut self, port: &dyn SubmitPort) -> Result<SubmitStatus, FormError> {
        let submission = self.begin_submit()?;
        let outcome = port.submit(submission.fields()).await;
        self.resolve(submission, outcome);
        Ok(self.status)
    }
}
