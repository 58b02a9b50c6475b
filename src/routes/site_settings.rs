//! Site settings endpoints
//!
//! ## Endpoints
//!
//! - `GET  /api/v1/site-settings?lang=` - Public translated view (bootstraps defaults)
//! - `GET  /api/v1/site-settings/raw` - Raw `{en, ar}` view for admin edit forms
//! - `PUT  /api/v1/site-settings/hero-section` - Update hero copy / hero video
//! - `PUT  /api/v1/site-settings/about-us` - Update about section and its pillars
//! - `PUT  /api/v1/site-settings/leadership-section` - Update leadership display copy
//! - `PUT  /api/v1/site-settings/contact-info` - Update contact details
//! - `PUT  /api/v1/site-settings/social-links` - Update social links
//! - `PUT  /api/v1/site-settings/language-settings` - Update language table
//! - `GET  /api/v1/site-settings/projects?lang=` - Active projects, translated
//! - `GET  /api/v1/site-settings/project-types` - Active project counts per type
//! - `POST /api/v1/site-settings/projects` - Add a project
//! - `PUT  /api/v1/site-settings/projects/section-title` - Rename the section
//! - `GET/PUT/DELETE /api/v1/site-settings/projects/{id}` - One project
//! - `POST /api/v1/site-settings/projects/{id}/gallery` - Add a gallery image
//! - `DELETE /api/v1/site-settings/projects/{id}/gallery/{imageId}` - Remove one
//!
//! Localized fields accept a flat string, an `{en, ar}` object, or a
//! JSON-encoded string of the same; files are base64 payloads. All of
//! that is decoded here; the services only see normalized values.

use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

use crate::content::settings::{
    AboutPatch, AboutPillarPatch, ContactInfoPatch, HeroPatch, LanguageSettingsPatch,
    LeadershipSectionPatch, NewProject, ProjectPatch, SiteSettingsService,
};
use crate::db::schemas::{ProjectStatus, SupportedLanguage};
use crate::locale::decode_localized_opt;
use crate::media::FilePayload;
use crate::routes::respond::{
    error_response, fail, json_response, locale_from_query, media_store, parse_object_id,
    read_json_body, require_admin, require_media, require_mongo, FullBody,
};
use crate::server::AppState;
use crate::types::{Result, VitrineError};

/// Main handler for /api/v1/site-settings/* routes
pub async fn handle_site_settings_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    path: &str,
) -> Response<FullBody> {
    let method = req.method().clone();
    let subpath = path
        .strip_prefix("/api/v1/site-settings")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string();

    match (method, subpath.as_str()) {
        (Method::GET, "") => handle_get_view(req, state).await,
        (Method::GET, "/raw") => handle_get_raw(req, state).await,

        (Method::PUT, "/hero-section") => handle_update_hero(req, state).await,
        (Method::PUT, "/about-us") => handle_update_about(req, state).await,
        (Method::PUT, "/leadership-section") => handle_update_leadership(req, state).await,
        (Method::PUT, "/contact-info") => handle_update_contact_info(req, state).await,
        (Method::PUT, "/social-links") => handle_update_social_links(req, state).await,
        (Method::PUT, "/language-settings") => handle_update_languages(req, state).await,

        (Method::GET, "/projects") => handle_list_projects(req, state).await,
        (Method::GET, "/project-types") => handle_project_types(state).await,
        (Method::POST, "/projects") => handle_add_project(req, state).await,
        (Method::PUT, "/projects/section-title") => {
            handle_update_section_title(req, state).await
        }

        (Method::POST, p) if p.starts_with("/projects/") && p.ends_with("/gallery") => {
            let id = p
                .strip_prefix("/projects/")
                .and_then(|s| s.strip_suffix("/gallery"))
                .unwrap_or("");
            handle_add_gallery_image(req, state, id).await
        }
        (Method::DELETE, p) if p.starts_with("/projects/") && p.contains("/gallery/") => {
            let rest = p.strip_prefix("/projects/").unwrap_or("");
            match rest.split_once("/gallery/") {
                Some((project_id, image_id)) => {
                    handle_remove_gallery_image(req, state, project_id, image_id).await
                }
                None => error_response(StatusCode::NOT_FOUND, "Not found", None),
            }
        }

        (Method::GET, p) if p.starts_with("/projects/") => {
            let id = p.trim_start_matches("/projects/");
            handle_get_project(req, state, id).await
        }
        (Method::PUT, p) if p.starts_with("/projects/") => {
            let id = p.trim_start_matches("/projects/");
            handle_update_project(req, state, id).await
        }
        (Method::DELETE, p) if p.starts_with("/projects/") => {
            let id = p.trim_start_matches("/projects/");
            handle_delete_project(req, state, id).await
        }

        _ => error_response(StatusCode::NOT_FOUND, "Not found", None),
    }
}

fn service(state: &AppState) -> std::result::Result<SiteSettingsService, Response<FullBody>> {
    let mongo = require_mongo(state)?;
    Ok(SiteSettingsService::new(mongo.clone()))
}

// =============================================================================
// Boundary decoding
// =============================================================================

fn decode_file_opt(body: &JsonValue, field: &str) -> Result<Option<FilePayload>> {
    match body.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => FilePayload::from_json(field, value).map(Some),
    }
}

fn decode_status_opt(body: &JsonValue) -> Result<Option<ProjectStatus>> {
    match body.get("status") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|_| {
            VitrineError::Validation(
                "Invalid status. Must be Planning, Under Construction, Completed, or On Hold"
                    .into(),
            )
        }),
    }
}

fn decode_string_opt(body: &JsonValue, field: &str) -> Result<Option<String>> {
    match body.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(VitrineError::Validation(format!(
            "Invalid {field}: expected a string, got {other}"
        ))),
    }
}

fn decode_bool_opt(body: &JsonValue, field: &str) -> Result<Option<bool>> {
    match body.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(VitrineError::Validation(format!(
            "Invalid {field}: expected a boolean, got {other}"
        ))),
    }
}

fn decode_hero_patch(body: &JsonValue) -> Result<HeroPatch> {
    Ok(HeroPatch {
        hero_title: decode_localized_opt(body, "heroTitle")?,
        hero_subtitle: decode_localized_opt(body, "heroSubtitle")?,
        hero_description: decode_localized_opt(body, "heroDescription")?,
        hero_video: decode_file_opt(body, "heroVideo")?,
    })
}

fn decode_pillar_patch(body: &JsonValue, field: &str) -> Result<AboutPillarPatch> {
    let Some(section) = body.get(field) else {
        return Ok(AboutPillarPatch::default());
    };
    Ok(AboutPillarPatch {
        title: decode_localized_opt(section, "title")?,
        content: decode_localized_opt(section, "content")?,
        image: decode_file_opt(section, "image")?,
    })
}

fn decode_about_patch(body: &JsonValue) -> Result<AboutPatch> {
    Ok(AboutPatch {
        title: decode_localized_opt(body, "title")?,
        image: decode_file_opt(body, "image")?,
        our_mission: decode_pillar_patch(body, "ourMission")?,
        our_vision: decode_pillar_patch(body, "ourVision")?,
        our_story: decode_pillar_patch(body, "ourStory")?,
    })
}

fn decode_new_project(body: &JsonValue) -> Result<NewProject> {
    let project_type = decode_string_opt(body, "projectType")?
        .ok_or_else(|| VitrineError::Validation("Project type is required".into()))?;
    let title = decode_localized_opt(body, "title")?
        .ok_or_else(|| VitrineError::Validation("Project title is required".into()))?;

    Ok(NewProject {
        project_type,
        title,
        description: decode_localized_opt(body, "description")?,
        location: decode_localized_opt(body, "location")?,
        status: decode_status_opt(body)?,
        hero_image: decode_file_opt(body, "heroImage")?,
    })
}

fn decode_project_patch(body: &JsonValue) -> Result<ProjectPatch> {
    Ok(ProjectPatch {
        project_type: decode_string_opt(body, "projectType")?,
        title: decode_localized_opt(body, "title")?,
        description: decode_localized_opt(body, "description")?,
        location: decode_localized_opt(body, "location")?,
        status: decode_status_opt(body)?,
        is_active: decode_bool_opt(body, "isActive")?,
        hero_image: decode_file_opt(body, "heroImage")?,
    })
}

// =============================================================================
// Reads
// =============================================================================

/// GET /api/v1/site-settings - public translated view
async fn handle_get_view(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let locale = locale_from_query(req.uri().query());
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.load_or_bootstrap().await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({ "success": true, "siteSettings": settings.resolve(locale) }),
        ),
        Err(e) => fail(&e),
    }
}

/// GET /api/v1/site-settings/raw - raw {en, ar} pairs for edit forms
async fn handle_get_raw(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.load_or_bootstrap().await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({ "success": true, "siteSettings": settings }),
        ),
        Err(e) => fail(&e),
    }
}

/// GET /api/v1/site-settings/projects - active projects, translated
async fn handle_list_projects(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let locale = locale_from_query(req.uri().query());
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.load_or_bootstrap().await {
        Ok(settings) => {
            let projects: Vec<_> = settings
                .active_projects()
                .iter()
                .map(|p| p.resolve(locale))
                .collect();
            json_response(
                StatusCode::OK,
                &json!({ "success": true, "projects": projects }),
            )
        }
        Err(e) => fail(&e),
    }
}

/// GET /api/v1/site-settings/project-types - active counts per type
async fn handle_project_types(state: Arc<AppState>) -> Response<FullBody> {
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.load_or_bootstrap().await {
        Ok(settings) => {
            let types: Vec<_> = settings
                .project_type_counts()
                .into_iter()
                .map(|(project_type, count)| json!({ "projectType": project_type, "count": count }))
                .collect();
            json_response(
                StatusCode::OK,
                &json!({ "success": true, "projectTypes": types }),
            )
        }
        Err(e) => fail(&e),
    }
}

/// GET /api/v1/site-settings/projects/{id} - one active project
async fn handle_get_project(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    let locale = locale_from_query(req.uri().query());
    let project_id = match parse_object_id(raw_id, "project") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let settings = match service.load().await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                "Site settings not found",
                Some("NOT_FOUND"),
            )
        }
        Err(e) => return fail(&e),
    };

    match settings.find_project(&project_id) {
        Some(project) if project.is_active => json_response(
            StatusCode::OK,
            &json!({ "success": true, "project": project.resolve(locale) }),
        ),
        // Inactive projects are hidden from public reads
        _ => error_response(StatusCode::NOT_FOUND, "Project not found", Some("NOT_FOUND")),
    }
}

// =============================================================================
// Section updates
// =============================================================================

/// PUT /api/v1/site-settings/hero-section
async fn handle_update_hero(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let patch = match decode_hero_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_hero(patch, media_store(&state), admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Hero section updated successfully",
                "heroSection": settings.hero_section,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// PUT /api/v1/site-settings/about-us
async fn handle_update_about(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let patch = match decode_about_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_about(patch, media_store(&state), admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "About Us section updated successfully",
                "aboutUsSection": settings.about_us_section,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// PUT /api/v1/site-settings/leadership-section
async fn handle_update_leadership(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let patch = match (
        decode_localized_opt(&body, "sectionTitle"),
        decode_localized_opt(&body, "description"),
    ) {
        (Ok(section_title), Ok(description)) => LeadershipSectionPatch {
            section_title,
            description,
        },
        (Err(e), _) | (_, Err(e)) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_leadership_section(patch, admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Leadership section updated successfully",
                "leadershipSection": settings.leadership_section,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// PUT /api/v1/site-settings/contact-info
async fn handle_update_contact_info(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let patch = match decode_contact_info_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_contact_info(patch, admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Contact info updated successfully",
                "contactInfo": settings.contact_info,
            }),
        ),
        Err(e) => fail(&e),
    }
}

fn decode_contact_info_patch(body: &JsonValue) -> Result<ContactInfoPatch> {
    Ok(ContactInfoPatch {
        address: decode_localized_opt(body, "address")?,
        working_hours: decode_localized_opt(body, "workingHours")?,
        phone: decode_string_opt(body, "phone")?,
        email: decode_string_opt(body, "email")?,
    })
}

/// PUT /api/v1/site-settings/social-links
async fn handle_update_social_links(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let patch = match decode_social_links_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_social_links(patch, admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Social media links updated successfully",
                "socialMediaLinks": settings.social_media_links,
            }),
        ),
        Err(e) => fail(&e),
    }
}

fn decode_social_links_patch(body: &JsonValue) -> Result<crate::content::SocialLinksPatch> {
    Ok(crate::content::SocialLinksPatch {
        facebook: decode_string_opt(body, "facebook")?,
        twitter: decode_string_opt(body, "twitter")?,
        linkedin: decode_string_opt(body, "linkedin")?,
        instagram: decode_string_opt(body, "instagram")?,
        youtube: decode_string_opt(body, "youtube")?,
    })
}

/// PUT /api/v1/site-settings/language-settings
async fn handle_update_languages(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let supported_languages = match body.get("supportedLanguages") {
        None | Some(JsonValue::Null) => None,
        Some(value) => match serde_json::from_value::<Vec<SupportedLanguage>>(value.clone()) {
            Ok(languages) => Some(languages),
            Err(_) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Invalid supportedLanguages: expected [{code, name, direction}]",
                    Some("VALIDATION"),
                )
            }
        },
    };
    let patch = LanguageSettingsPatch {
        default_language: match decode_string_opt(&body, "defaultLanguage") {
            Ok(v) => v,
            Err(e) => return fail(&e),
        },
        supported_languages,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_language_settings(patch, admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Language settings updated successfully",
                "languageSettings": settings.language_settings,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// PUT /api/v1/site-settings/projects/section-title
async fn handle_update_section_title(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let title = match decode_localized_opt(&body, "sectionTitle") {
        Ok(Some(t)) => t,
        Ok(None) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Section title is required",
                Some("VALIDATION"),
            )
        }
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update_projects_section_title(title, admin.id).await {
        Ok(settings) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Projects section title updated successfully",
                "sectionTitle": settings.projects_section.section_title,
            }),
        ),
        Err(e) => fail(&e),
    }
}

// =============================================================================
// Projects
// =============================================================================

/// POST /api/v1/site-settings/projects
async fn handle_add_project(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let input = match decode_new_project(&body) {
        Ok(i) => i,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.add_project(input, media_store(&state), admin.id).await {
        Ok(project) => json_response(
            StatusCode::CREATED,
            &json!({
                "success": true,
                "message": "Project added successfully",
                "project": project,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// PUT /api/v1/site-settings/projects/{id}
async fn handle_update_project(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let project_id = match parse_object_id(raw_id, "project") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let patch = match decode_project_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service
        .update_project(&project_id, patch, media_store(&state), admin.id)
        .await
    {
        Ok(project) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Project updated successfully",
                "project": project,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// DELETE /api/v1/site-settings/projects/{id}
async fn handle_delete_project(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let project_id = match parse_object_id(raw_id, "project") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let media = match require_media(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.remove_project(&project_id, media, admin.id).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Project and associated files deleted successfully",
            }),
        ),
        Err(e) => fail(&e),
    }
}

// =============================================================================
// Galleries
// =============================================================================

/// POST /api/v1/site-settings/projects/{id}/gallery
async fn handle_add_gallery_image(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let project_id = match parse_object_id(raw_id, "project") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let media = match require_media(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let file = match body.get("image") {
        Some(value) => match FilePayload::from_json("image", value) {
            Ok(f) => f,
            Err(e) => return fail(&e),
        },
        None => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Image file is required",
                Some("VALIDATION"),
            )
        }
    };
    let caption = match decode_localized_opt(&body, "caption") {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service
        .add_gallery_image(&project_id, file, caption, media, admin.id)
        .await
    {
        Ok(image) => json_response(
            StatusCode::CREATED,
            &json!({
                "success": true,
                "message": "Image added to gallery successfully",
                "imageData": image,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// DELETE /api/v1/site-settings/projects/{id}/gallery/{imageId}
async fn handle_remove_gallery_image(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_project_id: &str,
    raw_image_id: &str,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let project_id = match parse_object_id(raw_project_id, "project") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let image_id = match parse_object_id(raw_image_id, "image") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let media = match require_media(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service
        .remove_gallery_image(&project_id, &image_id, media, admin.id)
        .await
    {
        Ok(()) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Image removed from gallery successfully",
            }),
        ),
        Err(e) => fail(&e),
    }
}
