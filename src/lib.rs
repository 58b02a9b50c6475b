//! Vitrine - multilingual content backend for a real-estate marketing site
//!
//! Admin-authenticated CRUD over English/Arabic content: the site
//! settings aggregate (hero, about, projects with galleries, leadership
//! copy, contact info, social links, languages), blog and news posts,
//! leadership bios and inbound contact submissions. Content documents
//! live in MongoDB; binary assets live in an external media store and
//! are referenced by `{url, fileId}` pairs with cascade release on
//! deletion.
//!
//! ## Modules
//!
//! - **locale**: The `LocalizedText` primitive and its boundary decoding
//! - **media**: `MediaRef` lifecycle and the media-store client
//! - **db**: Mongo wrapper and document schemas
//! - **content**: Domain services (settings aggregate, posts, leaders, contacts)
//! - **auth**: Admin JWT + Argon2 credentials
//! - **routes / server**: HTTP surface

pub mod auth;
pub mod config;
pub mod content;
pub mod db;
pub mod locale;
pub mod media;
pub mod routes;
pub mod server;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{Result, VitrineError};
