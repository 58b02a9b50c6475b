//! Content services
//!
//! The domain core: each service owns the read-modify-write cycle for one
//! collection, with media replacement and cascade release folded into the
//! mutation ordering (read → validate → upload → mutate → write).

pub mod contacts;
pub mod leaders;
pub mod posts;
pub mod settings;

pub use contacts::ContactService;
pub use leaders::{LeaderPatch, LeaderService, NewLeader};
pub use posts::{NewPost, PostKind, PostPatch, PostService};
pub use settings::{
    AboutPatch, AboutPillarPatch, ContactInfoPatch, HeroPatch, LanguageSettingsPatch,
    LeadershipSectionPatch, NewProject, ProjectPatch, SiteSettingsService, SocialLinksPatch,
};
