// ABOUTME: Outreach module — the contact form and its log side channel.
// ABOUTME: Validation and state live in form.rs; record sinks in log.rs.

pub mod form;
pub mod log;

pub use form::{
    Confirmation, ContactForm, ContactSubmission, FormState, RequiredField, SubmitError,
};
pub use log::{ContactLogger, ContactRecord, ContactSink};
