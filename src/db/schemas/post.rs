//! Blog and news posts
//!
//! Both collections share one shape; the service layer picks the
//! collection name and upload folder.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;
use crate::locale::{Locale, LocalizedText};
use crate::media::MediaRef;

/// Collection name for blog posts
pub const BLOG_COLLECTION: &str = "blogs";

/// Collection name for news posts
pub const NEWS_COLLECTION: &str = "news";

/// A localized post with an optional cover image
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub title: LocalizedText,

    #[serde(default)]
    pub content: LocalizedText,

    #[serde(default)]
    pub image: MediaRef,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Admin who authored the post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<ObjectId>,
}

fn default_true() -> bool {
    true
}

impl PostDoc {
    pub fn new(title: LocalizedText, content: LocalizedText, author: ObjectId) -> Self {
        Self {
            id: None,
            metadata: Metadata::new(),
            title,
            content,
            image: MediaRef::default(),
            is_active: true,
            author: Some(author),
        }
    }
}

impl IntoIndexes for PostDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            (
                doc! { "isActive": 1 },
                Some(IndexOptions::builder().name("is_active_index".to_string()).build()),
            ),
            (
                doc! { "metadata.created_at": -1 },
                Some(IndexOptions::builder().name("created_at_index".to_string()).build()),
            ),
        ]
    }
}

impl MutMetadata for PostDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

/// Post flattened for one locale (public reads)
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: MediaRef,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PostDoc {
    pub fn resolve(&self, locale: Locale) -> PostView {
        PostView {
            id: self.id.map(|o| o.to_hex()).unwrap_or_default(),
            title: self.title.resolve(locale),
            content: self.content.resolve(locale),
            image: self.image.clone(),
            is_active: self.is_active,
            created_at: self.metadata.created_at.map(|d| d.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_flattens_localized_fields() {
        let mut post = PostDoc::new(
            LocalizedText::new("Launch", "إطلاق"),
            LocalizedText::english("Body"),
            ObjectId::new(),
        );
        post.id = Some(ObjectId::new());

        let view = post.resolve(Locale::Ar);
        assert_eq!(view.title, "إطلاق");
        // Arabic body is empty, English wins
        assert_eq!(view.content, "Body");
    }
}
