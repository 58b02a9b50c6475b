//! Database schemas for Vitrine
//!
//! Defines the MongoDB document structures for the settings aggregate,
//! posts, leadership bios, contact submissions and admin accounts.

mod admin;
mod contact;
mod leader;
mod metadata;
mod post;
mod site_settings;

pub use admin::{AdminDoc, ADMIN_COLLECTION};
pub use contact::{ContactDoc, CONTACT_COLLECTION};
pub use leader::{LeaderDoc, LeaderSocialMedia, LeaderView, LEADER_COLLECTION};
pub use metadata::Metadata;
pub use post::{PostDoc, PostView, BLOG_COLLECTION, NEWS_COLLECTION};
pub use site_settings::{
    default_supported_languages, AboutPillar, AboutUsSection, ContactInfo, GalleryImage,
    HeroSection, LanguageSettings, LeadershipSection, Project, ProjectStatus, ProjectView,
    ProjectsSection, SiteSettingsDoc, SiteSettingsView, SocialMediaLinks, SupportedLanguage,
    SITE_SETTINGS_COLLECTION, SITE_SETTINGS_ID,
};
