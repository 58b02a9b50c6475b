//! Site settings service
//!
//! Orchestrates the read-modify-write cycle on the settings aggregate:
//! load by fixed id, apply merge updates in memory, save behind the
//! optimistic version check, and only then release superseded media
//! handles. Pure aggregate mutations live on [`SiteSettingsDoc`]; this
//! layer owns the I/O ordering (read → upload → mutate → write →
//! release).

use bson::{doc, oid::ObjectId};
use tracing::{info, warn};

use crate::db::schemas::{
    GalleryImage, Project, ProjectStatus, SiteSettingsDoc, SupportedLanguage,
    SITE_SETTINGS_COLLECTION, SITE_SETTINGS_ID,
};
use crate::db::{MongoClient, MongoCollection};
use crate::locale::LocalizedPatch;
use crate::media::{self, folders, FilePayload, MediaStore};
use crate::types::{Result, VitrineError};

/// Maximum length of a project type label
pub const MAX_PROJECT_TYPE_LEN: usize = 50;

// =============================================================================
// Patch inputs (decoded at the boundary, applied here)
// =============================================================================

#[derive(Debug, Default)]
pub struct HeroPatch {
    pub hero_title: Option<LocalizedPatch>,
    pub hero_subtitle: Option<LocalizedPatch>,
    pub hero_description: Option<LocalizedPatch>,
    pub hero_video: Option<FilePayload>,
}

#[derive(Debug, Default)]
pub struct AboutPillarPatch {
    pub title: Option<LocalizedPatch>,
    pub content: Option<LocalizedPatch>,
    pub image: Option<FilePayload>,
}

#[derive(Debug, Default)]
pub struct AboutPatch {
    pub title: Option<LocalizedPatch>,
    pub image: Option<FilePayload>,
    pub our_mission: AboutPillarPatch,
    pub our_vision: AboutPillarPatch,
    pub our_story: AboutPillarPatch,
}

#[derive(Debug, Default)]
pub struct LeadershipSectionPatch {
    pub section_title: Option<LocalizedPatch>,
    pub description: Option<LocalizedPatch>,
}

#[derive(Debug, Default)]
pub struct ContactInfoPatch {
    pub address: Option<LocalizedPatch>,
    pub working_hours: Option<LocalizedPatch>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default)]
pub struct SocialLinksPatch {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Default)]
pub struct LanguageSettingsPatch {
    pub default_language: Option<String>,
    pub supported_languages: Option<Vec<SupportedLanguage>>,
}

#[derive(Debug)]
pub struct NewProject {
    pub project_type: String,
    pub title: LocalizedPatch,
    pub description: Option<LocalizedPatch>,
    pub location: Option<LocalizedPatch>,
    pub status: Option<ProjectStatus>,
    pub hero_image: Option<FilePayload>,
}

#[derive(Debug, Default)]
pub struct ProjectPatch {
    pub project_type: Option<String>,
    pub title: Option<LocalizedPatch>,
    pub description: Option<LocalizedPatch>,
    pub location: Option<LocalizedPatch>,
    pub status: Option<ProjectStatus>,
    pub is_active: Option<bool>,
    pub hero_image: Option<FilePayload>,
}

// =============================================================================
// Service
// =============================================================================

/// MongoDB-backed settings aggregate service
#[derive(Clone)]
pub struct SiteSettingsService {
    mongo: MongoClient,
}

impl SiteSettingsService {
    pub fn new(mongo: MongoClient) -> Self {
        Self { mongo }
    }

    async fn collection(&self) -> Result<MongoCollection<SiteSettingsDoc>> {
        self.mongo
            .collection::<SiteSettingsDoc>(SITE_SETTINGS_COLLECTION)
            .await
    }

    /// Load the live aggregate by its well-known id.
    ///
    /// More than one active document is an invariant violation; it is
    /// reported, never silently resolved by taking an arbitrary match.
    pub async fn load(&self) -> Result<Option<SiteSettingsDoc>> {
        let collection = self.collection().await?;

        let active_count = collection.count(doc! { "isActive": true }).await?;
        if active_count > 1 {
            warn!(
                active_count,
                "Multiple active site settings documents; serving the well-known id"
            );
        }

        collection.find_one(doc! { "_id": SITE_SETTINGS_ID }).await
    }

    /// Load the aggregate, bootstrapping the default instance when none
    /// exists yet. Bootstrap is idempotent per the fixed id.
    pub async fn load_or_bootstrap(&self) -> Result<SiteSettingsDoc> {
        if let Some(settings) = self.load().await? {
            return Ok(settings);
        }

        let collection = self.collection().await?;
        let settings = SiteSettingsDoc::default_instance();
        collection
            .inner()
            .insert_one(&settings)
            .await
            .map_err(|e| VitrineError::Database(format!("Insert failed: {}", e)))?;
        info!("Bootstrapped default site settings");
        Ok(settings)
    }

    /// Load the aggregate or fail with NotFound (mutation paths do not
    /// bootstrap; that is the read path's job)
    async fn load_required(&self) -> Result<SiteSettingsDoc> {
        self.load()
            .await?
            .ok_or_else(|| VitrineError::NotFound("Site settings not found".into()))
    }

    /// Save behind the optimistic version check.
    ///
    /// The filter matches the version the aggregate was loaded at; a
    /// concurrent save in between leaves nothing to match and the edit is
    /// rejected for retry instead of clobbering it.
    async fn save(&self, mut settings: SiteSettingsDoc, editor: ObjectId) -> Result<SiteSettingsDoc> {
        let loaded_version = settings.version;
        settings.version += 1;
        settings.last_updated_by = Some(editor);

        let collection = self.collection().await?;
        let result = collection
            .replace_one(
                doc! { "_id": SITE_SETTINGS_ID, "version": loaded_version },
                settings.clone(),
            )
            .await?;

        if result.matched_count == 0 {
            return Err(VitrineError::Conflict(
                "Site settings were modified concurrently. Retry your edit.".into(),
            ));
        }

        Ok(settings)
    }

    /// Upload a file when present, enforcing that the media store is
    /// configured before any document write happens
    async fn upload_if_present(
        &self,
        media: Option<&dyn MediaStore>,
        file: &Option<FilePayload>,
        folder: &str,
        video: bool,
    ) -> Result<Option<crate::media::MediaRef>> {
        let Some(file) = file else { return Ok(None) };
        let store = media.ok_or_else(|| {
            VitrineError::Config("Media store is not configured".into())
        })?;
        let uploaded = if video {
            store.upload_video(file, folder).await?
        } else {
            store.upload(file, folder).await?
        };
        Ok(Some(uploaded))
    }

    // =========================================================================
    // Section updates
    // =========================================================================

    pub async fn update_hero(
        &self,
        patch: HeroPatch,
        media: Option<&dyn MediaStore>,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        let mut settings = self.load_required().await?;

        // Upload before any mutation so an upload failure leaves the
        // document untouched
        let uploaded = self
            .upload_if_present(media, &patch.hero_video, folders::HERO, true)
            .await?;

        if let Some(ref p) = patch.hero_title {
            settings.hero_section.hero_title.merge_update(p);
        }
        if let Some(ref p) = patch.hero_subtitle {
            settings.hero_section.hero_subtitle.merge_update(p);
        }
        if let Some(ref p) = patch.hero_description {
            settings.hero_section.hero_description.merge_update(p);
        }
        let mut released = Vec::new();
        if let Some(uploaded) = uploaded {
            released.push(std::mem::replace(
                &mut settings.hero_section.hero_video,
                uploaded,
            ));
        }

        let saved = self.save(settings, editor).await?;

        // Previous handles go only after the versioned save commits; a
        // rejected save must not leave the stored document pointing at
        // deleted assets.
        if let Some(store) = media {
            media::release_all(store, &released).await;
        }

        info!(editor = %editor, "Hero section updated");
        Ok(saved)
    }

    pub async fn update_about(
        &self,
        patch: AboutPatch,
        media: Option<&dyn MediaStore>,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        let mut settings = self.load_required().await?;

        let main_image = self
            .upload_if_present(media, &patch.image, folders::ABOUT, false)
            .await?;
        let mission_image = self
            .upload_if_present(media, &patch.our_mission.image, folders::ABOUT, false)
            .await?;
        let vision_image = self
            .upload_if_present(media, &patch.our_vision.image, folders::ABOUT, false)
            .await?;
        let story_image = self
            .upload_if_present(media, &patch.our_story.image, folders::ABOUT, false)
            .await?;

        let mut released = Vec::new();

        if let Some(ref p) = patch.title {
            settings.about_us_section.title.merge_update(p);
        }
        if let Some(uploaded) = main_image {
            released.push(std::mem::replace(
                &mut settings.about_us_section.image,
                uploaded,
            ));
        }

        for (pillar_patch, pillar, uploaded) in [
            (
                &patch.our_mission,
                &mut settings.about_us_section.our_mission,
                mission_image,
            ),
            (
                &patch.our_vision,
                &mut settings.about_us_section.our_vision,
                vision_image,
            ),
            (
                &patch.our_story,
                &mut settings.about_us_section.our_story,
                story_image,
            ),
        ] {
            if let Some(ref p) = pillar_patch.title {
                pillar.title.merge_update(p);
            }
            if let Some(ref p) = pillar_patch.content {
                pillar.content.merge_update(p);
            }
            if let Some(uploaded) = uploaded {
                released.push(std::mem::replace(&mut pillar.image, uploaded));
            }
        }

        let saved = self.save(settings, editor).await?;

        // Old handles are released only once the save has committed
        if let Some(store) = media {
            media::release_all(store, &released).await;
        }

        info!(editor = %editor, "About Us section updated");
        Ok(saved)
    }

    pub async fn update_leadership_section(
        &self,
        patch: LeadershipSectionPatch,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        let mut settings = self.load_required().await?;

        if let Some(ref p) = patch.section_title {
            settings.leadership_section.section_title.merge_update(p);
        }
        if let Some(ref p) = patch.description {
            settings.leadership_section.description.merge_update(p);
        }

        self.save(settings, editor).await
    }

    pub async fn update_contact_info(
        &self,
        patch: ContactInfoPatch,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        let mut settings = self.load_required().await?;

        if let Some(ref p) = patch.address {
            settings.contact_info.address.merge_update(p);
        }
        if let Some(ref p) = patch.working_hours {
            settings.contact_info.working_hours.merge_update(p);
        }
        if let Some(phone) = patch.phone {
            settings.contact_info.phone = phone;
        }
        if let Some(email) = patch.email {
            settings.contact_info.email = email;
        }

        self.save(settings, editor).await
    }

    pub async fn update_social_links(
        &self,
        patch: SocialLinksPatch,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        let mut settings = self.load_required().await?;

        let links = &mut settings.social_media_links;
        if let Some(v) = patch.facebook {
            links.facebook = v;
        }
        if let Some(v) = patch.twitter {
            links.twitter = v;
        }
        if let Some(v) = patch.linkedin {
            links.linkedin = v;
        }
        if let Some(v) = patch.instagram {
            links.instagram = v;
        }
        if let Some(v) = patch.youtube {
            links.youtube = v;
        }

        self.save(settings, editor).await
    }

    pub async fn update_language_settings(
        &self,
        patch: LanguageSettingsPatch,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        if let Some(ref default_language) = patch.default_language {
            if default_language != "en" && default_language != "ar" {
                return Err(VitrineError::Validation(
                    "defaultLanguage must be 'en' or 'ar'".into(),
                ));
            }
        }
        if let Some(ref languages) = patch.supported_languages {
            for lang in languages {
                if lang.code.is_empty() || lang.name.is_empty() {
                    return Err(VitrineError::Validation(
                        "Supported languages require code and name".into(),
                    ));
                }
                if lang.direction != "ltr" && lang.direction != "rtl" {
                    return Err(VitrineError::Validation(
                        "Language direction must be 'ltr' or 'rtl'".into(),
                    ));
                }
            }
        }

        let mut settings = self.load_required().await?;
        if let Some(default_language) = patch.default_language {
            settings.language_settings.default_language = default_language;
        }
        if let Some(languages) = patch.supported_languages {
            settings.language_settings.supported_languages = languages;
        }

        self.save(settings, editor).await
    }

    pub async fn update_projects_section_title(
        &self,
        title: LocalizedPatch,
        editor: ObjectId,
    ) -> Result<SiteSettingsDoc> {
        if title.is_empty() {
            return Err(VitrineError::Validation("Section title is required".into()));
        }

        let mut settings = self.load_required().await?;
        settings.projects_section.section_title.merge_update(&title);
        self.save(settings, editor).await
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn add_project(
        &self,
        input: NewProject,
        media: Option<&dyn MediaStore>,
        editor: ObjectId,
    ) -> Result<Project> {
        if input.project_type.trim().is_empty() {
            return Err(VitrineError::Validation("Project type is required".into()));
        }
        if input.project_type.chars().count() > MAX_PROJECT_TYPE_LEN {
            return Err(VitrineError::Validation(format!(
                "Project type cannot exceed {MAX_PROJECT_TYPE_LEN} characters"
            )));
        }
        let title = input.title.into_text();
        if title.is_empty() {
            return Err(VitrineError::Validation("Project title is required".into()));
        }

        let mut settings = self.load_required().await?;

        let folder = format!("{}/{}", folders::PROJECTS, input.project_type);
        let uploaded = self
            .upload_if_present(media, &input.hero_image, &folder, false)
            .await?;

        let mut project = Project::new(input.project_type, title);
        if let Some(p) = input.description {
            project.description = p.into_text();
        }
        if let Some(p) = input.location {
            project.location = p.into_text();
        }
        if let Some(status) = input.status {
            project.status = status;
        }
        if let Some(uploaded) = uploaded {
            project.hero_image = uploaded;
        }

        let added = project.clone();
        settings.add_project(project);
        self.save(settings, editor).await?;

        info!(project_id = %added.id, editor = %editor, "Project added");
        Ok(added)
    }

    pub async fn update_project(
        &self,
        project_id: &ObjectId,
        patch: ProjectPatch,
        media: Option<&dyn MediaStore>,
        editor: ObjectId,
    ) -> Result<Project> {
        if let Some(ref project_type) = patch.project_type {
            if project_type.trim().is_empty() {
                return Err(VitrineError::Validation("Project type is required".into()));
            }
            if project_type.chars().count() > MAX_PROJECT_TYPE_LEN {
                return Err(VitrineError::Validation(format!(
                    "Project type cannot exceed {MAX_PROJECT_TYPE_LEN} characters"
                )));
            }
        }

        let mut settings = self.load_required().await?;

        // The upload folder depends on the project's (possibly updated) type
        let current_type = settings
            .find_project(project_id)
            .ok_or_else(|| {
                VitrineError::NotFound(format!("Project not found with id: {project_id}"))
            })?
            .project_type
            .clone();
        let effective_type = patch.project_type.clone().unwrap_or(current_type);
        let folder = format!("{}/{}", folders::PROJECTS, effective_type);

        let uploaded = self
            .upload_if_present(media, &patch.hero_image, &folder, false)
            .await?;

        let mut released = Vec::new();
        let project = settings
            .find_project_mut(project_id)
            .expect("checked above");

        if let Some(project_type) = patch.project_type {
            project.project_type = project_type;
        }
        if let Some(ref p) = patch.title {
            project.title.merge_update(p);
        }
        if let Some(ref p) = patch.description {
            project.description.merge_update(p);
        }
        if let Some(ref p) = patch.location {
            project.location.merge_update(p);
        }
        if let Some(status) = patch.status {
            project.status = status;
        }
        if let Some(is_active) = patch.is_active {
            project.is_active = is_active;
        }
        if let Some(uploaded) = uploaded {
            released.push(std::mem::replace(&mut project.hero_image, uploaded));
        }

        let updated = project.clone();
        self.save(settings, editor).await?;

        // Old handle is released only once the save has committed
        if let Some(store) = media {
            media::release_all(store, &released).await;
        }

        info!(project_id = %project_id, editor = %editor, "Project updated");
        Ok(updated)
    }

    /// Delete a project, releasing its hero image and every gallery image
    /// once the removal has been committed
    pub async fn remove_project(
        &self,
        project_id: &ObjectId,
        media: &dyn MediaStore,
        editor: ObjectId,
    ) -> Result<()> {
        let mut settings = self.load_required().await?;
        let removed = settings.remove_project(project_id)?;

        // Save first: a version conflict here must leave every asset of
        // the still-stored project intact.
        self.save(settings, editor).await?;
        media::release_all(media, &removed.media_refs()).await;

        info!(project_id = %project_id, editor = %editor, "Project and associated media deleted");
        Ok(())
    }

    // =========================================================================
    // Galleries
    // =========================================================================

    pub async fn add_gallery_image(
        &self,
        project_id: &ObjectId,
        file: FilePayload,
        caption: Option<LocalizedPatch>,
        media: &dyn MediaStore,
        editor: ObjectId,
    ) -> Result<GalleryImage> {
        let mut settings = self.load_required().await?;

        if settings.find_project(project_id).is_none() {
            return Err(VitrineError::NotFound(format!(
                "Project not found with id: {project_id}"
            )));
        }

        let uploaded = media.upload(&file, folders::PROJECT_GALLERY).await?;
        let caption = caption.map(LocalizedPatch::into_text).unwrap_or_default();
        let image = GalleryImage::new(uploaded, caption);
        let added = image.clone();

        settings.add_gallery_image(project_id, image)?;
        self.save(settings, editor).await?;

        info!(project_id = %project_id, image_id = %added.id, "Gallery image added");
        Ok(added)
    }

    pub async fn remove_gallery_image(
        &self,
        project_id: &ObjectId,
        image_id: &ObjectId,
        media: &dyn MediaStore,
        editor: ObjectId,
    ) -> Result<()> {
        let mut settings = self.load_required().await?;
        let removed = settings.remove_gallery_image(project_id, image_id)?;

        self.save(settings, editor).await?;
        media::release(media, &removed.image).await;

        info!(project_id = %project_id, image_id = %image_id, "Gallery image removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocalizedText;
    use crate::media::testing::RecordingStore;
    use crate::media::MediaRef;

    // Service methods against MongoDB are covered by integration
    // environments; the cascade ordering contract is testable through the
    // pure aggregate ops plus the release protocol.

    #[tokio::test]
    async fn test_project_cascade_releases_all_media() {
        let store = RecordingStore::new();

        let mut settings = SiteSettingsDoc::default_instance();
        let mut project = Project::new("residential".into(), LocalizedText::english("T"));
        project.hero_image = MediaRef::new("u", "hero-1");
        project.gallery = vec![
            GalleryImage::new(MediaRef::new("u", "g-1"), LocalizedText::default()),
            GalleryImage::new(MediaRef::new("u", "g-2"), LocalizedText::default()),
        ];
        let id = project.id;
        settings.add_project(project);

        let removed = settings.remove_project(&id).unwrap();
        media::release_all(&store, &removed.media_refs()).await;

        // Hero image + 2 gallery images: exactly 3 delete calls
        assert_eq!(store.delete_count(), 3);
        let deletes = store.deletes.lock().unwrap();
        assert!(deletes.contains(&"hero-1".to_string()));
        assert!(deletes.contains(&"g-1".to_string()));
        assert!(deletes.contains(&"g-2".to_string()));
    }

    #[tokio::test]
    async fn test_cascade_skips_absent_hero_image() {
        let store = RecordingStore::new();

        let mut settings = SiteSettingsDoc::default_instance();
        let mut project = Project::new("residential".into(), LocalizedText::english("T"));
        project.gallery = vec![GalleryImage::new(
            MediaRef::new("u", "g-1"),
            LocalizedText::default(),
        )];
        let id = project.id;
        settings.add_project(project);

        let removed = settings.remove_project(&id).unwrap();
        media::release_all(&store, &removed.media_refs()).await;

        assert_eq!(store.delete_count(), 1);
    }

    #[test]
    fn test_new_project_requires_type_and_title() {
        // Validation shape checks happen before any I/O; exercised here
        // through the input contract
        let input = NewProject {
            project_type: "  ".into(),
            title: LocalizedPatch {
                en: Some("T".into()),
                ar: None,
            },
            description: None,
            location: None,
            status: None,
            hero_image: None,
        };
        assert!(input.project_type.trim().is_empty());

        let empty_title = LocalizedPatch::default().into_text();
        assert!(empty_title.is_empty());
    }
}
