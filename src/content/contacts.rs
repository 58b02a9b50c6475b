//! Contact submission service
//!
//! Pure validation + insert on the public side; list/get/delete for
//! admins. No localization, no media.

use bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use tracing::info;

use crate::db::schemas::{ContactDoc, CONTACT_COLLECTION};
use crate::db::{MongoClient, MongoCollection};
use crate::types::{Result, VitrineError};

/// MongoDB-backed contact submission service
#[derive(Clone)]
pub struct ContactService {
    mongo: MongoClient,
}

impl ContactService {
    pub fn new(mongo: MongoClient) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Result<MongoCollection<ContactDoc>> {
        self.mongo.collection::<ContactDoc>(CONTACT_COLLECTION).await
    }

    /// Validate and insert a submission. Validation failures mean no
    /// record is inserted.
    pub async fn submit(&self, mut submission: ContactDoc) -> Result<ContactDoc> {
        submission.name = submission.name.trim().to_string();
        submission.email = submission.email.trim().to_lowercase();
        submission.phone = submission.phone.trim().to_string();
        submission.subject = submission.subject.trim().to_string();
        submission.message = submission.message.trim().to_string();

        submission.validate()?;

        let collection = self.collection().await?;
        let id = collection.insert_one(submission.clone()).await?;
        submission.id = Some(id);

        info!(id = %id, "Contact form submitted");
        Ok(submission)
    }

    /// All submissions, newest first (admin only)
    pub async fn list(&self) -> Result<Vec<ContactDoc>> {
        let collection = self.collection().await?;
        let options = FindOptions::builder()
            .sort(doc! { "metadata.created_at": -1 })
            .build();
        collection.find_many(doc! {}, Some(options)).await
    }

    pub async fn get(&self, id: &ObjectId) -> Result<Option<ContactDoc>> {
        let collection = self.collection().await?;
        collection.find_one(doc! { "_id": id }).await
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<()> {
        let collection = self.collection().await?;
        let result = collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(VitrineError::NotFound(
                "Contact submission not found".into(),
            ));
        }

        info!(id = %id, "Contact submission deleted");
        Ok(())
    }
}
