// ABOUTME: Contact form handler — validates a submission and drives the two-state form.
// ABOUTME: Accepted submissions produce a confirmation and exactly one contact record.

use std::fmt;

use chrono::Local;

use crate::outreach::log::{ContactRecord, ContactSink};

/// A field the form refuses to submit without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "Name"),
            RequiredField::Email => write!(f, "Email"),
        }
    }
}

/// Reasons a submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please provide your Name and Email (required fields) to submit.")]
    MissingRequiredField { missing: Vec<RequiredField> },
}

/// One attempt at the contact form, as entered by the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub follow_up_requested: bool,
    pub updates_opt_in: bool,
    pub question: Option<String>,
}

impl ContactSubmission {
    /// A submission with the form's default checkbox states.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            follow_up_requested: false,
            updates_opt_in: true,
            question: None,
        }
    }

    pub fn with_follow_up(mut self, requested: bool) -> Self {
        self.follow_up_requested = requested;
        self
    }

    pub fn with_opt_in(mut self, opt_in: bool) -> Self {
        self.updates_opt_in = opt_in;
        self
    }

    /// An empty question is stored as absent.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        let question = question.into();
        self.question = if question.is_empty() {
            None
        } else {
            Some(question)
        };
        self
    }

    /// Both required fields must be non-empty. The email shape is not checked.
    pub fn validate(&self) -> Result<(), SubmitError> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.email.is_empty() {
            missing.push(RequiredField::Email);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::MissingRequiredField { missing })
        }
    }
}

/// What the visitor sees after an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub name: String,
    pub follow_up_requested: bool,
    pub updates_opt_in: bool,
}

impl Confirmation {
    pub fn message(&self) -> String {
        format!(
            "Thank you, {}! Your connection request has been sent to the DevRel team.",
            self.name
        )
    }

    pub fn details(&self) -> String {
        format!(
            "Follow-up requested: {}. Opt-in for updates: {}.",
            yes_no(self.follow_up_requested),
            yes_no(self.updates_opt_in)
        )
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// Not yet accepted; holds the error from the last rejected attempt, if any.
    Unsubmitted { error: Option<SubmitError> },
    Submitted(Confirmation),
}

/// The contact form's submission state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Unsubmitted { error: None },
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted(_))
    }

    /// Validate and, if accepted, log the submission to `sink`.
    ///
    /// A rejected attempt leaves the form unsubmitted and logs nothing. A sink
    /// failure is logged but does not change the outcome.
    pub fn submit(
        &mut self,
        submission: ContactSubmission,
        sink: &mut dyn ContactSink,
    ) -> Result<Confirmation, SubmitError> {
        if let Err(err) = submission.validate() {
            tracing::debug!(?err, "contact submission rejected");
            self.state = FormState::Unsubmitted {
                error: Some(err.clone()),
            };
            return Err(err);
        }

        let confirmation = Confirmation {
            name: submission.name.clone(),
            follow_up_requested: submission.follow_up_requested,
            updates_opt_in: submission.updates_opt_in,
        };

        let record = ContactRecord::from_submission(submission, Local::now());
        if let Err(e) = sink.record(&record) {
            tracing::warn!("failed to write contact record: {:#}", e);
        }

        self.state = FormState::Submitted(confirmation.clone());
        Ok(confirmation)
    }

    /// A field changed: any earlier outcome no longer applies.
    pub fn edited(&mut self) {
        self.state = FormState::Unsubmitted { error: None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl ContactSink for FailingSink {
        fn record(&mut self, _record: &ContactRecord) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    #[test]
    fn new_submission_has_form_defaults() {
        let submission = ContactSubmission::new("Jo", "a@b.com");
        assert!(!submission.follow_up_requested);
        assert!(submission.updates_opt_in);
        assert_eq!(submission.question, None);
    }

    #[test]
    fn validate_lists_every_missing_field() {
        let err = ContactSubmission::new("", "").validate().unwrap_err();
        assert_eq!(
            err,
            SubmitError::MissingRequiredField {
                missing: vec![RequiredField::Name, RequiredField::Email]
            }
        );
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(ContactSubmission::new(" ", "a@b.com").validate().is_ok());
    }

    #[test]
    fn error_message_names_required_fields() {
        let err = ContactSubmission::new("Jo", "").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide your Name and Email (required fields) to submit."
        );
    }

    #[test]
    fn rejected_submit_stays_unsubmitted() {
        let mut form = ContactForm::new();
        let mut sink: Vec<ContactRecord> = Vec::new();

        let result = form.submit(ContactSubmission::new("", "a@b.com"), &mut sink);
        assert!(result.is_err());
        assert!(!form.is_submitted());
        assert!(matches!(
            form.state(),
            FormState::Unsubmitted { error: Some(_) }
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn accepted_submit_moves_to_submitted() {
        let mut form = ContactForm::new();
        let mut sink: Vec<ContactRecord> = Vec::new();

        let confirmation = form
            .submit(ContactSubmission::new("Jo", "a@b.com"), &mut sink)
            .unwrap();
        assert_eq!(
            confirmation.message(),
            "Thank you, Jo! Your connection request has been sent to the DevRel team."
        );
        assert_eq!(
            confirmation.details(),
            "Follow-up requested: No. Opt-in for updates: Yes."
        );
        assert_eq!(form.state(), &FormState::Submitted(confirmation));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn sink_failure_still_confirms() {
        let mut form = ContactForm::new();
        let result = form.submit(ContactSubmission::new("Jo", "a@b.com"), &mut FailingSink);
        assert!(result.is_ok());
        assert!(form.is_submitted());
    }

    #[test]
    fn editing_after_submit_resets_state() {
        let mut form = ContactForm::new();
        let mut sink: Vec<ContactRecord> = Vec::new();
        form.submit(ContactSubmission::new("Jo", "a@b.com"), &mut sink)
            .unwrap();
        form.edited();
        assert_eq!(form.state(), &FormState::Unsubmitted { error: None });
    }

    #[test]
    fn resubmitting_after_error_succeeds() {
        let mut form = ContactForm::new();
        let mut sink: Vec<ContactRecord> = Vec::new();
        assert!(form
            .submit(ContactSubmission::new("Jo", ""), &mut sink)
            .is_err());
        assert!(form
            .submit(ContactSubmission::new("Jo", "a@b.com"), &mut sink)
            .is_ok());
        assert_eq!(sink.len(), 1);
    }
}
