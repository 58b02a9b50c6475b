//! Leadership bio service

use bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use tracing::info;

use crate::db::schemas::{LeaderDoc, LeaderSocialMedia, LEADER_COLLECTION};
use crate::db::{MongoClient, MongoCollection};
use crate::locale::LocalizedPatch;
use crate::media::{self, folders, FilePayload, MediaStore};
use crate::types::{Result, VitrineError};

#[derive(Debug)]
pub struct NewLeader {
    pub name: LocalizedPatch,
    pub designation: LocalizedPatch,
    /// Portrait is required on create
    pub image: Option<FilePayload>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub email: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Default)]
pub struct LeaderPatch {
    pub name: Option<LocalizedPatch>,
    pub designation: Option<LocalizedPatch>,
    pub image: Option<FilePayload>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub email: Option<String>,
    pub order: Option<i32>,
}

/// MongoDB-backed leadership service
#[derive(Clone)]
pub struct LeaderService {
    mongo: MongoClient,
}

impl LeaderService {
    pub fn new(mongo: MongoClient) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Result<MongoCollection<LeaderDoc>> {
        self.mongo.collection::<LeaderDoc>(LEADER_COLLECTION).await
    }

    /// All leaders ordered by display sort key ascending. Leadership has
    /// no active flag; public and admin reads see the same set.
    pub async fn list(&self) -> Result<Vec<LeaderDoc>> {
        let collection = self.collection().await?;
        let options = FindOptions::builder().sort(doc! { "order": 1 }).build();
        collection.find_many(doc! {}, Some(options)).await
    }

    pub async fn get(&self, id: &ObjectId) -> Result<Option<LeaderDoc>> {
        let collection = self.collection().await?;
        collection.find_one(doc! { "_id": id }).await
    }

    pub async fn create(&self, input: NewLeader, media: &dyn MediaStore) -> Result<LeaderDoc> {
        let name = input.name.into_text();
        let designation = input.designation.into_text();
        if name.is_empty() || designation.is_empty() {
            return Err(VitrineError::Validation(
                "Please provide name and designation".into(),
            ));
        }
        let file = input.image.ok_or_else(|| {
            VitrineError::Validation("Leader image is required".into())
        })?;

        // Upload only after validation so a bad request costs nothing
        let portrait = media.upload(&file, folders::LEADERS).await?;

        let mut leader = LeaderDoc {
            name,
            designation,
            image: portrait,
            social_media: LeaderSocialMedia {
                linkedin: input.linkedin.unwrap_or_default(),
                instagram: input.instagram.unwrap_or_default(),
                email: input.email.unwrap_or_default(),
            },
            order: input.order.unwrap_or(0),
            ..Default::default()
        };
        leader.metadata = crate::db::schemas::Metadata::new();

        let collection = self.collection().await?;
        let id = collection.insert_one(leader.clone()).await?;
        leader.id = Some(id);

        info!(id = %id, "Leader created");
        Ok(leader)
    }

    pub async fn update(
        &self,
        id: &ObjectId,
        patch: LeaderPatch,
        media: Option<&dyn MediaStore>,
    ) -> Result<LeaderDoc> {
        let collection = self.collection().await?;
        let mut leader = collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| VitrineError::NotFound("Leader not found".into()))?;

        let uploaded = match patch.image {
            Some(ref file) => {
                let store = media.ok_or_else(|| {
                    VitrineError::Config("Media store is not configured".into())
                })?;
                Some(store.upload(file, folders::LEADERS).await?)
            }
            None => None,
        };

        if let Some(ref p) = patch.name {
            leader.name.merge_update(p);
        }
        if let Some(ref p) = patch.designation {
            leader.designation.merge_update(p);
        }
        if let Some(linkedin) = patch.linkedin {
            leader.social_media.linkedin = linkedin;
        }
        if let Some(instagram) = patch.instagram {
            leader.social_media.instagram = instagram;
        }
        if let Some(email) = patch.email {
            leader.social_media.email = email;
        }
        if let Some(order) = patch.order {
            leader.order = order;
        }
        let mut previous_portrait = None;
        if let Some(uploaded) = uploaded {
            previous_portrait = Some(std::mem::replace(&mut leader.image, uploaded));
        }

        collection.replace_one(doc! { "_id": id }, leader.clone()).await?;

        // Old portrait goes only after the write commits
        if let (Some(old), Some(store)) = (previous_portrait, media) {
            media::release(store, &old).await;
        }

        info!(id = %id, "Leader updated");
        Ok(leader)
    }

    /// Delete a leader, releasing the portrait once the record is gone
    pub async fn delete(&self, id: &ObjectId, media: &dyn MediaStore) -> Result<()> {
        let collection = self.collection().await?;
        let leader = collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| VitrineError::NotFound("Leader not found".into()))?;

        let result = collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(VitrineError::NotFound("Leader not found".into()));
        }

        media::release(media, &leader.image).await;

        info!(id = %id, "Leader deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::testing::RecordingStore;
    use crate::media::MediaRef;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_portrait_replacement_is_one_delete_one_upload() {
        let store = RecordingStore::new();
        let mut leader = LeaderDoc {
            image: MediaRef::new("https://m/old.jpg", "old-portrait"),
            ..Default::default()
        };

        let file = FilePayload {
            filename: "new.jpg".to_string(),
            data: vec![1, 2, 3],
        };
        let uploaded = store.upload(&file, folders::LEADERS).await.unwrap();
        let previous = std::mem::replace(&mut leader.image, uploaded.clone());
        // Release happens after the new ref is installed and persisted
        media::release(&store, &previous).await;

        assert_eq!(store.uploads.load(Ordering::SeqCst), 1);
        assert_eq!(store.deletes.lock().unwrap().as_slice(), ["old-portrait"]);
        // The old handle is no longer referenced anywhere
        assert_eq!(leader.image, uploaded);
        assert_ne!(leader.image.file_id, "old-portrait");
    }
}
