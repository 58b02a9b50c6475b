//! Inbound contact submissions
//!
//! Flat, non-localized, append-only records. Validation happens before
//! insert; admins can list, read and delete submissions.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;
use crate::types::{Result, VitrineError};

/// Collection name for contact submissions
pub const CONTACT_COLLECTION: &str = "contacts";

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub metadata: Metadata,

    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,

    /// Origin details captured at the boundary
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
}

impl ContactDoc {
    /// Validate a submission; a failure here means nothing is inserted.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.subject.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(VitrineError::Validation(
                "Please provide all required fields: name, email, subject, and message".into(),
            ));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(VitrineError::Validation(format!(
                "Name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        if self.phone.chars().count() > MAX_PHONE_LEN {
            return Err(VitrineError::Validation(format!(
                "Phone number cannot exceed {MAX_PHONE_LEN} characters"
            )));
        }
        if self.subject.chars().count() > MAX_SUBJECT_LEN {
            return Err(VitrineError::Validation(format!(
                "Subject cannot exceed {MAX_SUBJECT_LEN} characters"
            )));
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(VitrineError::Validation(format!(
                "Message cannot exceed {MAX_MESSAGE_LEN} characters"
            )));
        }
        if !is_plausible_email(&self.email) {
            return Err(VitrineError::Validation("Please enter a valid email".into()));
        }
        Ok(())
    }
}

/// Shape check only: one '@', non-empty local part, dotted domain
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

impl IntoIndexes for ContactDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            (
                doc! { "metadata.created_at": -1 },
                Some(IndexOptions::builder().name("created_at_index".to_string()).build()),
            ),
            (
                doc! { "email": 1 },
                Some(IndexOptions::builder().name("email_index".to_string()).build()),
            ),
        ]
    }
}

impl MutMetadata for ContactDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactDoc {
        ContactDoc {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+971500000000".into(),
            subject: "Viewing request".into(),
            message: "I would like to view Tower A.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn test_missing_subject_is_rejected() {
        let mut submission = valid_submission();
        submission.subject = String::new();
        let err = submission.validate().unwrap_err();
        assert!(matches!(err, VitrineError::Validation(_)));
    }

    #[test]
    fn test_overlong_message_is_rejected() {
        let mut submission = valid_submission();
        submission.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_email_shape_check() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@b@c.co"));
    }
}
