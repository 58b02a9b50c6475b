//! Blog and news endpoints
//!
//! One handler serves both collections; the dispatcher passes the
//! [`PostKind`]. Public reads are translated (`?lang=`); admins can ask
//! for raw `{en, ar}` pairs with `?raw=true` (and then also see inactive
//! posts).
//!
//! - `GET    /api/v1/{blogs|news}?lang=` - Active posts, newest first
//! - `GET    /api/v1/{blogs|news}/{id}?lang=` - One active post
//! - `POST   /api/v1/{blogs|news}` - Create (admin)
//! - `PUT    /api/v1/{blogs|news}/{id}` - Merge update (admin)
//! - `DELETE /api/v1/{blogs|news}/{id}` - Delete with media release (admin)

use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

use crate::content::posts::{NewPost, PostKind, PostPatch, PostService};
use crate::locale::decode_localized_opt;
use crate::media::FilePayload;
use crate::routes::respond::{
    error_response, fail, json_response, locale_from_query, media_store, parse_object_id,
    query_param, read_json_body, require_admin, require_media, require_mongo, FullBody,
};
use crate::server::AppState;
use crate::types::{Result, VitrineError};

/// Main handler for /api/v1/blogs/* and /api/v1/news/* routes
pub async fn handle_posts_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    path: &str,
    kind: PostKind,
) -> Response<FullBody> {
    let method = req.method().clone();
    let prefix = match kind {
        PostKind::Blog => "/api/v1/blogs",
        PostKind::News => "/api/v1/news",
    };
    let subpath = path
        .strip_prefix(prefix)
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string();

    match (method, subpath.as_str()) {
        (Method::GET, "") => handle_list(req, state, kind).await,
        (Method::POST, "") => handle_create(req, state, kind).await,
        (Method::GET, p) => {
            let id = p.trim_start_matches('/');
            handle_get(req, state, kind, id).await
        }
        (Method::PUT, p) => {
            let id = p.trim_start_matches('/');
            handle_update(req, state, kind, id).await
        }
        (Method::DELETE, p) => {
            let id = p.trim_start_matches('/');
            handle_delete(req, state, kind, id).await
        }
        _ => error_response(StatusCode::NOT_FOUND, "Not found", None),
    }
}

fn service(
    state: &AppState,
    kind: PostKind,
) -> std::result::Result<PostService, Response<FullBody>> {
    let mongo = require_mongo(state)?;
    Ok(PostService::new(mongo.clone(), kind))
}

fn collection_key(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Blog => "blogs",
        PostKind::News => "news",
    }
}

fn entity_key(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Blog => "blog",
        PostKind::News => "news",
    }
}

fn decode_patch(body: &JsonValue) -> Result<PostPatch> {
    let is_active = match body.get("isActive") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Bool(b)) => Some(*b),
        Some(other) => {
            return Err(VitrineError::Validation(format!(
                "Invalid isActive: expected a boolean, got {other}"
            )))
        }
    };
    let image = match body.get("image") {
        None | Some(JsonValue::Null) => None,
        Some(value) => Some(FilePayload::from_json("image", value)?),
    };
    Ok(PostPatch {
        title: decode_localized_opt(body, "title")?,
        content: decode_localized_opt(body, "content")?,
        is_active,
        image,
    })
}

/// GET / - active posts, translated; admins may request raw
async fn handle_list(
    req: Request<Incoming>,
    state: Arc<AppState>,
    kind: PostKind,
) -> Response<FullBody> {
    let query = req.uri().query().map(|q| q.to_string());
    let raw = query_param(query.as_deref(), "raw").as_deref() == Some("true");
    let locale = locale_from_query(query.as_deref());

    let service = match service(&state, kind) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    if raw {
        // Raw edit-form reads see inactive posts too
        if let Err(resp) = require_admin(&req, &state).await {
            return resp;
        }
        return match service.list_all().await {
            Ok(posts) => json_response(
                StatusCode::OK,
                &json!({ "success": true, (collection_key(kind)): posts }),
            ),
            Err(e) => fail(&e),
        };
    }

    match service.list_active().await {
        Ok(posts) => {
            let views: Vec<_> = posts.iter().map(|p| p.resolve(locale)).collect();
            json_response(
                StatusCode::OK,
                &json!({ "success": true, (collection_key(kind)): views }),
            )
        }
        Err(e) => fail(&e),
    }
}

/// GET /{id} - one active post
async fn handle_get(
    req: Request<Incoming>,
    state: Arc<AppState>,
    kind: PostKind,
    raw_id: &str,
) -> Response<FullBody> {
    let query = req.uri().query().map(|q| q.to_string());
    let raw = query_param(query.as_deref(), "raw").as_deref() == Some("true");
    let locale = locale_from_query(query.as_deref());

    let id = match parse_object_id(raw_id, entity_key(kind)) {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let service = match service(&state, kind) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let post = match service.get(&id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                &format!("{} not found", kind.label()),
                Some("NOT_FOUND"),
            )
        }
        Err(e) => return fail(&e),
    };

    if raw {
        if let Err(resp) = require_admin(&req, &state).await {
            return resp;
        }
        return json_response(
            StatusCode::OK,
            &json!({ "success": true, (entity_key(kind)): post }),
        );
    }

    // Inactive posts are hidden from public reads
    if !post.is_active {
        return error_response(
            StatusCode::NOT_FOUND,
            &format!("{} is not active", kind.label()),
            Some("NOT_FOUND"),
        );
    }

    json_response(
        StatusCode::OK,
        &json!({ "success": true, (entity_key(kind)): post.resolve(locale) }),
    )
}

/// POST / - create a post
async fn handle_create(
    req: Request<Incoming>,
    state: Arc<AppState>,
    kind: PostKind,
) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let title = match decode_localized_opt(&body, "title") {
        Ok(t) => t.unwrap_or_default(),
        Err(e) => return fail(&e),
    };
    let content = match decode_localized_opt(&body, "content") {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => return fail(&e),
    };
    let image = match body.get("image") {
        None | Some(JsonValue::Null) => None,
        Some(value) => match FilePayload::from_json("image", value) {
            Ok(f) => Some(f),
            Err(e) => return fail(&e),
        },
    };
    let input = NewPost {
        title,
        content,
        image,
    };

    let service = match service(&state, kind) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.create(input, media_store(&state), admin.id).await {
        Ok(post) => json_response(
            StatusCode::CREATED,
            &json!({
                "success": true,
                "message": format!("{} created successfully", kind.label()),
                (entity_key(kind)): post,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// PUT /{id} - merge update
async fn handle_update(
    req: Request<Incoming>,
    state: Arc<AppState>,
    kind: PostKind,
    raw_id: &str,
) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let id = match parse_object_id(raw_id, entity_key(kind)) {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let patch = match decode_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state, kind) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update(&id, patch, media_store(&state)).await {
        Ok(post) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": format!("{} updated successfully", kind.label()),
                (entity_key(kind)): post,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// DELETE /{id} - delete with media release
async fn handle_delete(
    req: Request<Incoming>,
    state: Arc<AppState>,
    kind: PostKind,
    raw_id: &str,
) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let id = match parse_object_id(raw_id, entity_key(kind)) {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let media = match require_media(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let service = match service(&state, kind) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.delete(&id, media).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": format!("{} and associated files deleted successfully", kind.label()),
            }),
        ),
        Err(e) => fail(&e),
    }
}
