//! Site settings aggregate
//!
//! The one multi-section document behind the marketing site: hero, about,
//! projects (with embedded galleries), leadership display copy, contact
//! info, social links and language settings. Stored under a fixed
//! well-known id so there is never ambiguity about which document is
//! live; an `isActive` flag distinguishes the live instance from retained
//! historical copies.
//!
//! The aggregate is loaded, mutated in memory and written back in full.
//! Saves are guarded by an optimistic `version` counter (checked and
//! incremented by the settings service) so concurrent edits to different
//! sections fail fast instead of silently clobbering each other.
//!
//! All mutation operations on this type are pure in-memory edits; media
//! release and persistence are orchestrated by the service layer.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IntoIndexes, MutMetadata};
use crate::db::schemas::Metadata;
use crate::locale::{Locale, LocalizedText};
use crate::media::MediaRef;
use crate::types::{Result, VitrineError};

/// Collection name for the settings aggregate
pub const SITE_SETTINGS_COLLECTION: &str = "site_settings";

/// Well-known id of the live aggregate document
pub const SITE_SETTINGS_ID: &str = "site-settings";

// =============================================================================
// Document
// =============================================================================

/// The settings aggregate document
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsDoc {
    /// Fixed well-known id (see [`SITE_SETTINGS_ID`])
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    /// Optimistic concurrency counter, incremented on every save
    #[serde(default)]
    pub version: i64,

    /// Marks the live instance; historical copies carry `false`
    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub hero_section: HeroSection,

    #[serde(default)]
    pub about_us_section: AboutUsSection,

    #[serde(default)]
    pub projects_section: ProjectsSection,

    #[serde(default)]
    pub leadership_section: LeadershipSection,

    #[serde(default)]
    pub contact_info: ContactInfo,

    #[serde(default)]
    pub social_media_links: SocialMediaLinks,

    #[serde(default)]
    pub language_settings: LanguageSettings,

    /// Admin who last edited the aggregate (weak reference, lookup only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<ObjectId>,
}

fn default_true() -> bool {
    true
}

impl Default for SiteSettingsDoc {
    fn default() -> Self {
        Self {
            id: SITE_SETTINGS_ID.to_string(),
            metadata: Metadata::default(),
            version: 0,
            is_active: true,
            hero_section: HeroSection::default(),
            about_us_section: AboutUsSection::default(),
            projects_section: ProjectsSection::default(),
            leadership_section: LeadershipSection::default(),
            contact_info: ContactInfo::default(),
            social_media_links: SocialMediaLinks::default(),
            language_settings: LanguageSettings::default(),
            last_updated_by: None,
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    pub hero_video: MediaRef,
    pub hero_title: LocalizedText,
    pub hero_subtitle: LocalizedText,
    pub hero_description: LocalizedText,
}

/// A titled text-plus-image block inside the about section
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPillar {
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub image: MediaRef,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutUsSection {
    pub title: LocalizedText,
    pub image: MediaRef,
    pub our_mission: AboutPillar,
    pub our_vision: AboutPillar,
    pub our_story: AboutPillar,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsSection {
    pub section_title: LocalizedText,
    /// Array order is display order; no separate sort key
    pub projects: Vec<Project>,
}

/// Display copy only; leader records live in their own collection
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadershipSection {
    pub section_title: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub address: LocalizedText,
    pub working_hours: LocalizedText,
    pub phone: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMediaLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
    pub youtube: String,
}

impl Default for SocialMediaLinks {
    fn default() -> Self {
        Self {
            facebook: "#".to_string(),
            twitter: "#".to_string(),
            linkedin: "#".to_string(),
            instagram: "#".to_string(),
            youtube: "#".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSettings {
    pub default_language: String,
    pub supported_languages: Vec<SupportedLanguage>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguage {
    pub code: String,
    pub name: String,
    pub direction: String,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            supported_languages: default_supported_languages(),
        }
    }
}

pub fn default_supported_languages() -> Vec<SupportedLanguage> {
    vec![
        SupportedLanguage {
            code: "en".to_string(),
            name: "English".to_string(),
            direction: "ltr".to_string(),
        },
        SupportedLanguage {
            code: "ar".to_string(),
            name: "Arabic".to_string(),
            direction: "rtl".to_string(),
        },
    ]
}

// =============================================================================
// Embedded projects
// =============================================================================

/// Project lifecycle status
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Planning,
    #[serde(rename = "Under Construction")]
    UnderConstruction,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

/// Project embedded in the aggregate; identity is a generated id unique
/// within the aggregate
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub project_type: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub location: LocalizedText,
    #[serde(default)]
    pub hero_image: MediaRef,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

impl Project {
    pub fn new(project_type: String, title: LocalizedText) -> Self {
        Self {
            id: ObjectId::new(),
            project_type,
            title,
            description: LocalizedText::default(),
            location: LocalizedText::default(),
            hero_image: MediaRef::default(),
            status: ProjectStatus::Planning,
            is_active: true,
            gallery: Vec::new(),
        }
    }

    /// Every media ref owned by this project, for cascade release on
    /// permanent deletion. Absent refs are filtered by the release
    /// protocol itself.
    pub fn media_refs(&self) -> Vec<MediaRef> {
        let mut refs = vec![self.hero_image.clone()];
        refs.extend(self.gallery.iter().map(|g| g.image.clone()));
        refs
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub image: MediaRef,
    #[serde(default)]
    pub caption: LocalizedText,
}

impl GalleryImage {
    pub fn new(image: MediaRef, caption: LocalizedText) -> Self {
        Self {
            id: ObjectId::new(),
            image,
            caption,
        }
    }
}

// =============================================================================
// Aggregate operations (pure, in-memory)
// =============================================================================

impl SiteSettingsDoc {
    /// The bootstrap instance created when no aggregate exists yet
    pub fn default_instance() -> Self {
        let mut settings = Self::default();
        settings.metadata = Metadata::new();
        settings.hero_section.hero_title = LocalizedText::english("Welcome to Real Estate");
        settings.about_us_section.title = LocalizedText::english("About Us");
        settings.about_us_section.our_mission.title = LocalizedText::english("Our Mission");
        settings.about_us_section.our_vision.title = LocalizedText::english("Our Vision");
        settings.about_us_section.our_vision.content =
            LocalizedText::english("To be the leading real estate company");
        settings.about_us_section.our_story.title = LocalizedText::english("Our Story");
        settings.projects_section.section_title = LocalizedText::english("Our Projects");
        settings.leadership_section.section_title = LocalizedText::english("Our Leadership");
        settings
    }

    /// Find an embedded project by id; absent rather than an error so the
    /// caller decides whether that is a not-found failure
    pub fn find_project(&self, project_id: &ObjectId) -> Option<&Project> {
        self.projects_section
            .projects
            .iter()
            .find(|p| &p.id == project_id)
    }

    pub fn find_project_mut(&mut self, project_id: &ObjectId) -> Option<&mut Project> {
        self.projects_section
            .projects
            .iter_mut()
            .find(|p| &p.id == project_id)
    }

    /// Append a project, preserving insertion order as display order
    pub fn add_project(&mut self, project: Project) {
        self.projects_section.projects.push(project);
    }

    /// Remove a project by id, returning it so the caller can release its
    /// media before the record disappears
    pub fn remove_project(&mut self, project_id: &ObjectId) -> Result<Project> {
        let index = self
            .projects_section
            .projects
            .iter()
            .position(|p| &p.id == project_id)
            .ok_or_else(|| {
                VitrineError::NotFound(format!("Project not found with id: {project_id}"))
            })?;
        Ok(self.projects_section.projects.remove(index))
    }

    /// Append an image to a project's gallery
    pub fn add_gallery_image(
        &mut self,
        project_id: &ObjectId,
        image: GalleryImage,
    ) -> Result<()> {
        let project = self.find_project_mut(project_id).ok_or_else(|| {
            VitrineError::NotFound(format!("Project not found with id: {project_id}"))
        })?;
        project.gallery.push(image);
        Ok(())
    }

    /// Remove a gallery image by id, returning it for media release
    pub fn remove_gallery_image(
        &mut self,
        project_id: &ObjectId,
        image_id: &ObjectId,
    ) -> Result<GalleryImage> {
        let project = self.find_project_mut(project_id).ok_or_else(|| {
            VitrineError::NotFound(format!("Project not found with id: {project_id}"))
        })?;
        let index = project
            .gallery
            .iter()
            .position(|g| &g.id == image_id)
            .ok_or_else(|| {
                VitrineError::NotFound(format!("Gallery image not found with id: {image_id}"))
            })?;
        Ok(project.gallery.remove(index))
    }

    /// Projects visible on the public site
    pub fn active_projects(&self) -> Vec<&Project> {
        self.projects_section
            .projects
            .iter()
            .filter(|p| p.is_active)
            .collect()
    }

    /// Active project counts per type, in first-seen order
    pub fn project_type_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for project in self.active_projects() {
            match counts.iter_mut().find(|(t, _)| t == &project.project_type) {
                Some((_, n)) => *n += 1,
                None => counts.push((project.project_type.clone(), 1)),
            }
        }
        counts
    }

    /// Language settings with defaults applied when unset
    pub fn normalized_language_settings(&self) -> LanguageSettings {
        let defaults = LanguageSettings::default();
        LanguageSettings {
            default_language: if self.language_settings.default_language.is_empty() {
                defaults.default_language
            } else {
                self.language_settings.default_language.clone()
            },
            supported_languages: if self.language_settings.supported_languages.is_empty() {
                defaults.supported_languages
            } else {
                self.language_settings.supported_languages.clone()
            },
        }
    }
}

impl IntoIndexes for SiteSettingsDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "isActive": 1 },
            Some(IndexOptions::builder().name("is_active_index".to_string()).build()),
        )]
    }
}

impl MutMetadata for SiteSettingsDoc {
    fn mut_metadata(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

// =============================================================================
// Translated views
// =============================================================================

/// The aggregate with every localized field flattened for one locale.
/// Non-localized substructures (media refs, social links, language
/// settings) pass through unchanged.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsView {
    pub hero_section: HeroSectionView,
    pub about_us_section: AboutUsSectionView,
    pub projects_section: ProjectsSectionView,
    pub leadership_section: LeadershipSectionView,
    pub contact_info: ContactInfoView,
    pub social_media_links: SocialMediaLinks,
    pub language_settings: LanguageSettings,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionView {
    pub hero_video: MediaRef,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutPillarView {
    pub title: String,
    pub content: String,
    pub image: MediaRef,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsSectionView {
    pub title: String,
    pub image: MediaRef,
    pub our_mission: AboutPillarView,
    pub our_vision: AboutPillarView,
    pub our_story: AboutPillarView,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSectionView {
    pub section_title: String,
    pub projects: Vec<ProjectView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub project_type: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub hero_image: MediaRef,
    pub status: ProjectStatus,
    pub is_active: bool,
    pub gallery: Vec<GalleryImageView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageView {
    pub id: String,
    pub image: MediaRef,
    pub caption: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipSectionView {
    pub section_title: String,
    pub description: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoView {
    pub address: String,
    pub working_hours: String,
    pub phone: String,
    pub email: String,
}

impl AboutPillar {
    fn resolve(&self, locale: Locale) -> AboutPillarView {
        AboutPillarView {
            title: self.title.resolve(locale),
            content: self.content.resolve(locale),
            image: self.image.clone(),
        }
    }
}

impl GalleryImage {
    pub fn resolve(&self, locale: Locale) -> GalleryImageView {
        GalleryImageView {
            id: self.id.to_hex(),
            image: self.image.clone(),
            caption: self.caption.resolve(locale),
        }
    }
}

impl Project {
    pub fn resolve(&self, locale: Locale) -> ProjectView {
        ProjectView {
            id: self.id.to_hex(),
            project_type: self.project_type.clone(),
            title: self.title.resolve(locale),
            description: self.description.resolve(locale),
            location: self.location.resolve(locale),
            hero_image: self.hero_image.clone(),
            status: self.status,
            is_active: self.is_active,
            gallery: self.gallery.iter().map(|g| g.resolve(locale)).collect(),
        }
    }
}

impl SiteSettingsDoc {
    /// Flatten every localized field for one locale.
    ///
    /// Pure and total: absent sections resolve through their defaults
    /// rather than erroring, and calling twice yields identical output.
    pub fn resolve(&self, locale: Locale) -> SiteSettingsView {
        SiteSettingsView {
            hero_section: HeroSectionView {
                hero_video: self.hero_section.hero_video.clone(),
                hero_title: self.hero_section.hero_title.resolve(locale),
                hero_subtitle: self.hero_section.hero_subtitle.resolve(locale),
                hero_description: self.hero_section.hero_description.resolve(locale),
            },
            about_us_section: AboutUsSectionView {
                title: self.about_us_section.title.resolve(locale),
                image: self.about_us_section.image.clone(),
                our_mission: self.about_us_section.our_mission.resolve(locale),
                our_vision: self.about_us_section.our_vision.resolve(locale),
                our_story: self.about_us_section.our_story.resolve(locale),
            },
            projects_section: ProjectsSectionView {
                section_title: self.projects_section.section_title.resolve(locale),
                projects: self
                    .projects_section
                    .projects
                    .iter()
                    .map(|p| p.resolve(locale))
                    .collect(),
            },
            leadership_section: LeadershipSectionView {
                section_title: self.leadership_section.section_title.resolve(locale),
                description: self.leadership_section.description.resolve(locale),
            },
            contact_info: ContactInfoView {
                address: self.contact_info.address.resolve(locale),
                working_hours: self.contact_info.working_hours.resolve(locale),
                phone: self.contact_info.phone.clone(),
                email: self.contact_info.email.clone(),
            },
            social_media_links: self.social_media_links.clone(),
            language_settings: self.normalized_language_settings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let mut project = Project::new(
            "residential".to_string(),
            LocalizedText::new("Tower A", "برج أ"),
        );
        project.hero_image = MediaRef::new("https://m/hero.jpg", "hero-1");
        project.gallery = vec![
            GalleryImage::new(
                MediaRef::new("https://m/g1.jpg", "g-1"),
                LocalizedText::english("Lobby"),
            ),
            GalleryImage::new(
                MediaRef::new("https://m/g2.jpg", "g-2"),
                LocalizedText::default(),
            ),
        ];
        project
    }

    #[test]
    fn test_add_then_find_project_preserves_order_and_fields() {
        let mut settings = SiteSettingsDoc::default_instance();
        settings.add_project(Project::new(
            "commercial".to_string(),
            LocalizedText::english("Mall"),
        ));

        let project = sample_project();
        let id = project.id;
        settings.add_project(project);

        let found = settings.find_project(&id).expect("project should exist");
        assert_eq!(found.title, LocalizedText::new("Tower A", "برج أ"));
        // Appended project lands in last position
        assert_eq!(settings.projects_section.projects.last().unwrap().id, id);
    }

    #[test]
    fn test_find_project_absent_is_none_not_error() {
        let settings = SiteSettingsDoc::default_instance();
        assert!(settings.find_project(&ObjectId::new()).is_none());
    }

    #[test]
    fn test_remove_project_returns_it_for_cascade() {
        let mut settings = SiteSettingsDoc::default_instance();
        let project = sample_project();
        let id = project.id;
        settings.add_project(project);

        let removed = settings.remove_project(&id).unwrap();
        // Hero image + 2 gallery images = 3 refs to release
        assert_eq!(removed.media_refs().len(), 3);
        assert!(settings.find_project(&id).is_none());
    }

    #[test]
    fn test_remove_unknown_project_is_not_found() {
        let mut settings = SiteSettingsDoc::default_instance();
        let err = settings.remove_project(&ObjectId::new()).unwrap_err();
        assert!(matches!(err, VitrineError::NotFound(_)));
    }

    #[test]
    fn test_gallery_add_and_remove() {
        let mut settings = SiteSettingsDoc::default_instance();
        let project = Project::new("residential".to_string(), LocalizedText::english("T"));
        let project_id = project.id;
        settings.add_project(project);

        let image = GalleryImage::new(
            MediaRef::new("https://m/new.jpg", "new-1"),
            LocalizedText::english("View"),
        );
        let image_id = image.id;
        settings.add_gallery_image(&project_id, image).unwrap();
        assert_eq!(settings.find_project(&project_id).unwrap().gallery.len(), 1);

        let removed = settings.remove_gallery_image(&project_id, &image_id).unwrap();
        assert_eq!(removed.image.file_id, "new-1");
        assert!(settings.find_project(&project_id).unwrap().gallery.is_empty());
    }

    #[test]
    fn test_remove_gallery_image_unknown_ids() {
        let mut settings = SiteSettingsDoc::default_instance();
        let project = Project::new("residential".to_string(), LocalizedText::english("T"));
        let project_id = project.id;
        settings.add_project(project);

        assert!(settings
            .remove_gallery_image(&ObjectId::new(), &ObjectId::new())
            .is_err());
        assert!(settings
            .remove_gallery_image(&project_id, &ObjectId::new())
            .is_err());
    }

    #[test]
    fn test_active_projects_filters_inactive() {
        let mut settings = SiteSettingsDoc::default_instance();
        let mut hidden = Project::new("residential".to_string(), LocalizedText::english("H"));
        hidden.is_active = false;
        settings.add_project(hidden);
        settings.add_project(sample_project());

        assert_eq!(settings.active_projects().len(), 1);
    }

    #[test]
    fn test_project_type_counts_first_seen_order() {
        let mut settings = SiteSettingsDoc::default_instance();
        settings.add_project(Project::new("residential".into(), LocalizedText::english("A")));
        settings.add_project(Project::new("commercial".into(), LocalizedText::english("B")));
        settings.add_project(Project::new("residential".into(), LocalizedText::english("C")));

        let counts = settings.project_type_counts();
        assert_eq!(
            counts,
            vec![("residential".to_string(), 2), ("commercial".to_string(), 1)]
        );
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let mut settings = SiteSettingsDoc::default_instance();
        settings.hero_section.hero_title = LocalizedText::english("Welcome");

        let view = settings.resolve(Locale::Ar);
        assert_eq!(view.hero_section.hero_title, "Welcome");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut settings = SiteSettingsDoc::default_instance();
        settings.add_project(sample_project());
        settings.contact_info.phone = "+971-4-000-0000".to_string();

        let first = settings.resolve(Locale::Ar);
        let second = settings.resolve(Locale::Ar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_passes_media_and_links_through() {
        let mut settings = SiteSettingsDoc::default_instance();
        settings.hero_section.hero_video = MediaRef::new("https://m/v.mp4", "vid-1");
        settings.social_media_links.facebook = "https://fb.example".to_string();

        let view = settings.resolve(Locale::En);
        assert_eq!(view.hero_section.hero_video.file_id, "vid-1");
        assert_eq!(view.social_media_links.facebook, "https://fb.example");
    }

    #[test]
    fn test_language_settings_normalize_when_empty() {
        let mut settings = SiteSettingsDoc::default_instance();
        settings.language_settings.default_language = String::new();
        settings.language_settings.supported_languages = Vec::new();

        let normalized = settings.normalized_language_settings();
        assert_eq!(normalized.default_language, "en");
        assert_eq!(normalized.supported_languages, default_supported_languages());
    }

    #[test]
    fn test_status_wire_values() {
        let json = serde_json::to_string(&ProjectStatus::UnderConstruction).unwrap();
        assert_eq!(json, "\"Under Construction\"");
        let parsed: ProjectStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(parsed, ProjectStatus::OnHold);
    }

    #[test]
    fn test_default_instance_placeholders() {
        let settings = SiteSettingsDoc::default_instance();
        assert_eq!(settings.id, SITE_SETTINGS_ID);
        assert_eq!(settings.hero_section.hero_title.en, "Welcome to Real Estate");
        assert_eq!(settings.hero_section.hero_title.ar, "");
        assert!(settings.is_active);
        assert_eq!(settings.version, 0);
    }
}
