//! Leadership bios

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;
use crate::locale::{Locale, LocalizedText};
use crate::media::MediaRef;

/// Collection name for leadership records
pub const LEADER_COLLECTION: &str = "leaders";

/// A leadership bio with a required portrait
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaderDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub name: LocalizedText,

    #[serde(default)]
    pub designation: LocalizedText,

    /// Portrait; required at creation, never absent on a stored record
    #[serde(default)]
    pub image: MediaRef,

    #[serde(default)]
    pub social_media: LeaderSocialMedia,

    /// Display sort key, ascending
    #[serde(default)]
    pub order: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderSocialMedia {
    pub linkedin: String,
    pub instagram: String,
    pub email: String,
}

impl IntoIndexes for LeaderDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "order": 1 },
            Some(IndexOptions::builder().name("order_index".to_string()).build()),
        )]
    }
}

impl MutMetadata for LeaderDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

/// Leader flattened for one locale
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeaderView {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub image: MediaRef,
    pub social_media: LeaderSocialMedia,
    pub order: i32,
}

impl LeaderDoc {
    pub fn resolve(&self, locale: Locale) -> LeaderView {
        LeaderView {
            id: self.id.map(|o| o.to_hex()).unwrap_or_default(),
            name: self.name.resolve(locale),
            designation: self.designation.resolve(locale),
            image: self.image.clone(),
            social_media: self.social_media.clone(),
            order: self.order,
        }
    }
}
