//! Blog and news post service
//!
//! One service for both collections: blogs and news share a document
//! shape, so the service is parameterized by collection name and upload
//! folder.

use bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use tracing::info;

use crate::db::schemas::{PostDoc, BLOG_COLLECTION, NEWS_COLLECTION};
use crate::db::{MongoClient, MongoCollection};
use crate::locale::LocalizedPatch;
use crate::media::{self, folders, FilePayload, MediaStore};
use crate::types::{Result, VitrineError};

/// Which post collection a service instance targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Blog,
    News,
}

impl PostKind {
    pub fn collection_name(&self) -> &'static str {
        match self {
            PostKind::Blog => BLOG_COLLECTION,
            PostKind::News => NEWS_COLLECTION,
        }
    }

    pub fn upload_folder(&self) -> &'static str {
        match self {
            PostKind::Blog => folders::BLOGS,
            PostKind::News => folders::NEWS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostKind::Blog => "Blog",
            PostKind::News => "News",
        }
    }
}

#[derive(Debug)]
pub struct NewPost {
    pub title: LocalizedPatch,
    pub content: LocalizedPatch,
    pub image: Option<FilePayload>,
}

#[derive(Debug, Default)]
pub struct PostPatch {
    pub title: Option<LocalizedPatch>,
    pub content: Option<LocalizedPatch>,
    pub is_active: Option<bool>,
    pub image: Option<FilePayload>,
}

/// MongoDB-backed post service
#[derive(Clone)]
pub struct PostService {
    mongo: MongoClient,
    kind: PostKind,
}

impl PostService {
    pub fn new(mongo: MongoClient, kind: PostKind) -> Self {
        Self { mongo, kind }
    }

    async fn collection(&self) -> Result<MongoCollection<PostDoc>> {
        self.mongo
            .collection::<PostDoc>(self.kind.collection_name())
            .await
    }

    fn not_found(&self) -> VitrineError {
        VitrineError::NotFound(format!("{} not found", self.kind.label()))
    }

    /// Active posts, newest first (public reads)
    pub async fn list_active(&self) -> Result<Vec<PostDoc>> {
        let collection = self.collection().await?;
        let options = FindOptions::builder()
            .sort(doc! { "metadata.created_at": -1 })
            .build();
        collection
            .find_many(doc! { "isActive": true }, Some(options))
            .await
    }

    /// All posts, newest first (admin reads see inactive posts too)
    pub async fn list_all(&self) -> Result<Vec<PostDoc>> {
        let collection = self.collection().await?;
        let options = FindOptions::builder()
            .sort(doc! { "metadata.created_at": -1 })
            .build();
        collection.find_many(doc! {}, Some(options)).await
    }

    pub async fn get(&self, id: &ObjectId) -> Result<Option<PostDoc>> {
        let collection = self.collection().await?;
        collection.find_one(doc! { "_id": id }).await
    }

    pub async fn create(
        &self,
        input: NewPost,
        media: Option<&dyn MediaStore>,
        author: ObjectId,
    ) -> Result<PostDoc> {
        let title = input.title.into_text();
        let content = input.content.into_text();
        if title.is_empty() || content.is_empty() {
            return Err(VitrineError::Validation(
                "Please provide title and content".into(),
            ));
        }

        let mut post = PostDoc::new(title, content, author);

        if let Some(ref file) = input.image {
            let store = media.ok_or_else(|| {
                VitrineError::Config("Media store is not configured".into())
            })?;
            post.image = store.upload(file, self.kind.upload_folder()).await?;
        }

        let collection = self.collection().await?;
        let id = collection.insert_one(post.clone()).await?;
        post.id = Some(id);

        info!(kind = self.kind.label(), id = %id, author = %author, "Post created");
        Ok(post)
    }

    pub async fn update(
        &self,
        id: &ObjectId,
        patch: PostPatch,
        media: Option<&dyn MediaStore>,
    ) -> Result<PostDoc> {
        let collection = self.collection().await?;
        let mut post = collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| self.not_found())?;

        // Upload first so a failed upload leaves the stored document alone
        let uploaded = match patch.image {
            Some(ref file) => {
                let store = media.ok_or_else(|| {
                    VitrineError::Config("Media store is not configured".into())
                })?;
                Some(store.upload(file, self.kind.upload_folder()).await?)
            }
            None => None,
        };

        if let Some(ref p) = patch.title {
            post.title.merge_update(p);
        }
        if let Some(ref p) = patch.content {
            post.content.merge_update(p);
        }
        if let Some(is_active) = patch.is_active {
            post.is_active = is_active;
        }
        let mut previous_image = None;
        if let Some(uploaded) = uploaded {
            previous_image = Some(std::mem::replace(&mut post.image, uploaded));
        }

        collection.replace_one(doc! { "_id": id }, post.clone()).await?;

        // Old image goes only after the write commits, so a failed save
        // never leaves the stored post pointing at a deleted asset
        if let (Some(old), Some(store)) = (previous_image, media) {
            media::release(store, &old).await;
        }

        info!(kind = self.kind.label(), id = %id, "Post updated");
        Ok(post)
    }

    /// Delete a post, releasing its image once the record is gone
    pub async fn delete(&self, id: &ObjectId, media: &dyn MediaStore) -> Result<()> {
        let collection = self.collection().await?;
        let post = collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| self.not_found())?;

        let result = collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(self.not_found());
        }

        media::release(media, &post.image).await;

        info!(kind = self.kind.label(), id = %id, "Post and associated media deleted");
        Ok(())
    }
}
