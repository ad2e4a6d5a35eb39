//! Contact submission slice.
//!
//! Accepts the contact form as `application/x-www-form-urlencoded`, persists
//! the submission verbatim in the `pending` state, then invalidates the
//! cached contact page so revisiting it reflects fresh state. Visitors only
//! ever see a generic failure message; the specific cause is logged with a
//! stable error code for operators.

use axum::Form;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::post;
use campus_database::DatabaseError;
use campus_domain::contact::ContactSubmission;
use campus_domain::registry::{FeatureSlice, InitializedSlice};
use campus_kernel::server::ApiState;
use serde::Deserialize;
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("submission storage failed: {0}")]
    Storage(#[from] DatabaseError),
}

impl ContactError {
    /// Stable code for log correlation. Response bodies stay generic.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "CONTACT_STORAGE",
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), "contact submission failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to submit form").into_response()
    }
}

/// Incoming form payload. Every field is optional on the wire; absent fields
/// become empty strings and are stored as such.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "first-name", default)]
    pub first_name: String,
    #[serde(rename = "last-name", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactForm> for ContactSubmission {
    fn from(form: ContactForm) -> Self {
        Self::new(form.first_name, form.last_name, form.email, form.message)
    }
}

/// Feature state for the contact slice.
#[derive(Debug)]
pub struct ContactSlice;

impl FeatureSlice for ContactSlice {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[must_use]
pub fn init() -> InitializedSlice {
    InitializedSlice::new(ContactSlice)
}

pub fn router() -> Router<ApiState> {
    Router::new().route("/contact", post(submit_handler))
}

async fn submit_handler(
    State(state): State<ApiState>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, ContactError> {
    let submission = ContactSubmission::from(form);
    state.database.insert_contact_submission(&submission).await?;
    tracing::info!(email = %submission.email, "contact submission stored");

    // Submission is already durable; a cache invalidation failure only means
    // one stale page view, so log it and carry on.
    if let Err(error) = state.cache.revalidate("/contact") {
        tracing::warn!("contact page revalidation failed: {error}");
    }

    Ok(Redirect::to("/contact"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::contact::SubmissionStatus;

    #[test]
    fn form_maps_onto_a_pending_submission() {
        let form = ContactForm {
            first_name: "  Ada ".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "line one\nline two".to_owned(),
        };

        let submission = ContactSubmission::from(form);
        assert_eq!(submission.first_name, "  Ada ");
        assert_eq!(submission.message, "line one\nline two");
        assert_eq!(submission.status, SubmissionStatus::Pending);
    }

    #[test]
    fn absent_form_fields_default_to_empty() {
        let form: ContactForm = serde_urlencoded::from_str("first-name=Ada").unwrap();
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.last_name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }
}
