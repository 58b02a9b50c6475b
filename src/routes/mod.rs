//! HTTP routes for Vitrine

pub mod admin_auth;
pub mod contacts;
pub mod health;
pub mod leaders;
pub mod posts;
pub mod respond;
pub mod site_settings;

pub use admin_auth::handle_admin_request;
pub use contacts::handle_contact_request;
pub use health::{health_check, readiness_check, version_info};
pub use leaders::handle_leaders_request;
pub use posts::handle_posts_request;
pub use respond::{require_admin, AdminContext};
pub use site_settings::handle_site_settings_request;
