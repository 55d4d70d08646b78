//! Client-side contact form workflow: field state, validation, and the
//! submission phase machine.

use atelier_client_contracts::SubmissionClient;
use atelier_models::form::{FieldErrors, FormField, FormFields, SubmissionPhase};
use tracing::debug;

mod validate;

pub use validate::validate;

/// Owns the form's state and enforces its lifecycle. All mutation goes
/// through [`edit`](Self::edit), [`submit`](Self::submit), and
/// [`restart`](Self::restart); at most one submission is in flight because
/// `submit` holds the exclusive borrow until the client answers.
#[derive(Debug)]
pub struct ContactForm<Client> {
    client: Client,
    fields: FormFields,
    errors: FieldErrors,
    phase: SubmissionPhase,
}

impl<Client: SubmissionClient> ContactForm<Client> {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            phase: SubmissionPhase::Editing,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Updates a field value and optimistically clears that field's error,
    /// independent of whether the new value is actually valid. A failed form
    /// returns to `Editing` on its first edit.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        if !self.phase.is_editable() {
            debug!(%field, "Ignoring edit outside an editable phase");
            return;
        }
        if matches!(self.phase, SubmissionPhase::Failed { .. }) {
            self.phase = SubmissionPhase::Editing;
        }

        self.fields.set(field, value.into());
        self.errors.clear(field);
    }

    /// Validates and, on a clean pass, sends the fields to the submission
    /// client. Returns the resulting phase; the form itself stays the source
    /// of truth.
    pub async fn submit(&mut self) -> SubmissionPhase {
        if !self.phase.is_editable() {
            debug!("Ignoring submit outside an editable phase");
            return self.phase.clone();
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            self.phase = SubmissionPhase::Editing;
            return self.phase.clone();
        }

        self.errors = FieldErrors::default();
        self.phase = SubmissionPhase::Submitting;

        match self.client.submit(self.fields.clone()).await {
            Ok(ack) => {
                self.fields = FormFields::default();
                self.phase = SubmissionPhase::Succeeded { ack: ack.message };
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failed {
                    message: err.to_string(),
                };
            }
        }

        self.phase.clone()
    }

    /// "Send another message": resets the form after a successful submission.
    pub fn restart(&mut self) {
        if !matches!(self.phase, SubmissionPhase::Succeeded { .. }) {
            debug!("Ignoring restart outside the succeeded phase");
            return;
        }

        self.fields = FormFields::default();
        self.errors = FieldErrors::default();
        self.phase = SubmissionPhase::Editing;
    }
}
