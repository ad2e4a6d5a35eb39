//! Wire representation of the `contact_submissions` row.
//!
//! The domain type stays serde-only; this module owns the `SurrealValue`
//! mapping so the engine dependency does not leak into `campus-domain`.

use campus_domain::contact::{ContactSubmission, SubmissionStatus};
use surrealdb::types::SurrealValue;

#[derive(Debug, Clone, SurrealValue)]
pub(crate) struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub status: String,
}

impl From<&ContactSubmission> for SubmissionRecord {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            status: submission.status.as_str().to_owned(),
        }
    }
}

impl From<SubmissionRecord> for ContactSubmission {
    fn from(record: SubmissionRecord) -> Self {
        let status = match record.status.as_str() {
            "reviewed" => SubmissionStatus::Reviewed,
            "archived" => SubmissionStatus::Archived,
            // Rows written by this codebase are always "pending"; anything
            // else came from outside and is treated as still pending.
            _ => SubmissionStatus::Pending,
        };

        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            message: record.message,
            status,
        }
    }
}
