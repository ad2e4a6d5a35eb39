use serde::{Deserialize, Serialize};

/// A single contact-form submission, written once into the
/// `contact_submissions` table and owned by the storage layer afterwards.
///
/// Field values are stored exactly as submitted: no trimming, no
/// normalization, and absent form fields arrive as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub status: SubmissionStatus,
}

impl ContactSubmission {
    /// Builds a fresh submission in the [`SubmissionStatus::Pending`] state.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
            status: SubmissionStatus::Pending,
        }
    }
}

/// Review lifecycle of a submission. This codebase only ever creates
/// `Pending` rows; the later states belong to the back-office tooling that
/// reads the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Reviewed,
    Archived,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Archived => "archived",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_submission_is_pending() {
        let sub = ContactSubmission::new("Ada", "Lovelace", "ada@example.org", "hello");
        assert_eq!(sub.status, SubmissionStatus::Pending);
        assert_eq!(sub.first_name, "Ada");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Pending).expect("serialize");
        assert_eq!(json, "\"pending\"");
    }
}
