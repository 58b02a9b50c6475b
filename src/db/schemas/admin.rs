//! Admin account schema
//!
//! Stores admin credentials. Content entities reference admins only as
//! opaque author/editor ids.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;

/// Collection name for admins
pub const ADMIN_COLLECTION: &str = "admins";

/// Admin document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub metadata: Metadata,

    /// Login email (unique)
    pub email: String,

    /// Argon2 password hash (PHC format)
    pub password_hash: String,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Token version for invalidation (incremented on password change)
    #[serde(default)]
    pub token_version: i32,
}

fn default_role() -> String {
    "admin".to_string()
}

fn default_true() -> bool {
    true
}

impl AdminDoc {
    /// Create a new admin document
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: None,
            metadata: Metadata::new(),
            email,
            password_hash,
            role: default_role(),
            is_active: true,
            token_version: 1,
        }
    }
}

impl IntoIndexes for AdminDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "email": 1 },
            Some(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            ),
        )]
    }
}

impl MutMetadata for AdminDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
