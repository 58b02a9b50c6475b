//! Leadership endpoints
//!
//! - `GET    /api/v1/leaders?lang=` - All leaders, order ascending, translated
//! - `GET    /api/v1/leaders/{id}?lang=` - One leader
//! - `POST   /api/v1/leaders` - Create (admin; portrait required)
//! - `PUT    /api/v1/leaders/{id}` - Merge update (admin)
//! - `DELETE /api/v1/leaders/{id}` - Delete with portrait release (admin)
//!
//! Leadership has no active flag: public and admin reads see the same
//! set, and `?raw=true` (admin) returns the `{en, ar}` pairs.

use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

use crate::content::leaders::{LeaderPatch, LeaderService, NewLeader};
use crate::locale::decode_localized_opt;
use crate::media::FilePayload;
use crate::routes::respond::{
    error_response, fail, json_response, locale_from_query, media_store, parse_object_id,
    query_param, read_json_body, require_admin, require_media, require_mongo, FullBody,
};
use crate::server::AppState;
use crate::types::{Result, VitrineError};

/// Main handler for /api/v1/leaders/* routes
pub async fn handle_leaders_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    path: &str,
) -> Response<FullBody> {
    let method = req.method().clone();
    let subpath = path
        .strip_prefix("/api/v1/leaders")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string();

    match (method, subpath.as_str()) {
        (Method::GET, "") => handle_list(req, state).await,
        (Method::POST, "") => handle_create(req, state).await,
        (Method::GET, p) => handle_get(req, state, p.trim_start_matches('/')).await,
        (Method::PUT, p) => handle_update(req, state, p.trim_start_matches('/')).await,
        (Method::DELETE, p) => handle_delete(req, state, p.trim_start_matches('/')).await,
        _ => error_response(StatusCode::NOT_FOUND, "Not found", None),
    }
}

fn service(state: &AppState) -> std::result::Result<LeaderService, Response<FullBody>> {
    let mongo = require_mongo(state)?;
    Ok(LeaderService::new(mongo.clone()))
}

fn decode_order_opt(body: &JsonValue) -> Result<Option<i32>> {
    match body.get("order") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => Ok(n.as_i64().map(|v| v as i32)),
        // Form clients send order as a string
        Some(JsonValue::String(s)) => Ok(Some(s.parse().unwrap_or(0))),
        Some(other) => Err(VitrineError::Validation(format!(
            "Invalid order: expected a number, got {other}"
        ))),
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

fn decode_file_opt(body: &JsonValue, field: &str) -> Result<Option<FilePayload>> {
    match body.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => FilePayload::from_json(field, value).map(Some),
    }
}

/// GET / - all leaders, order ascending
async fn handle_list(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let query = req.uri().query().map(|q| q.to_string());
    let raw = query_param(query.as_deref(), "raw").as_deref() == Some("true");
    let locale = locale_from_query(query.as_deref());

    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    if raw {
        if let Err(resp) = require_admin(&req, &state).await {
            return resp;
        }
        return match service.list().await {
            Ok(leaders) => {
                json_response(StatusCode::OK, &json!({ "success": true, "leaders": leaders }))
            }
            Err(e) => fail(&e),
        };
    }

    match service.list().await {
        Ok(leaders) => {
            let views: Vec<_> = leaders.iter().map(|l| l.resolve(locale)).collect();
            json_response(StatusCode::OK, &json!({ "success": true, "leaders": views }))
        }
        Err(e) => fail(&e),
    }
}

/// GET /{id} - one leader
async fn handle_get(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    let locale = locale_from_query(req.uri().query());
    let id = match parse_object_id(raw_id, "leader") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.get(&id).await {
        Ok(Some(leader)) => json_response(
            StatusCode::OK,
            &json!({ "success": true, "leader": leader.resolve(locale) }),
        ),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Leader not found", Some("NOT_FOUND")),
        Err(e) => fail(&e),
    }
}

/// POST / - create a leader
async fn handle_create(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let media = match require_media(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let input = match decode_new_leader(&body) {
        Ok(i) => i,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.create(input, media).await {
        Ok(leader) => json_response(
            StatusCode::CREATED,
            &json!({
                "success": true,
                "message": "Leader created successfully",
                "leader": leader,
            }),
        ),
        Err(e) => fail(&e),
    }
}

fn decode_new_leader(body: &JsonValue) -> Result<NewLeader> {
    Ok(NewLeader {
        name: decode_localized_opt(body, "name")?.unwrap_or_default(),
        designation: decode_localized_opt(body, "designation")?.unwrap_or_default(),
        image: decode_file_opt(body, "image")?,
        linkedin: decode_string_opt(body, "linkedin")?,
        instagram: decode_string_opt(body, "instagram")?,
        email: decode_string_opt(body, "email")?,
        order: decode_order_opt(body)?,
    })
}

/// PUT /{id} - merge update
async fn handle_update(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let id = match parse_object_id(raw_id, "leader") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let patch = match decode_leader_patch(&body) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.update(&id, patch, media_store(&state)).await {
        Ok(leader) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Leader updated successfully",
                "leader": leader,
            }),
        ),
        Err(e) => fail(&e),
    }
}

fn decode_leader_patch(body: &JsonValue) -> Result<LeaderPatch> {
    Ok(LeaderPatch {
        name: decode_localized_opt(body, "name")?,
        designation: decode_localized_opt(body, "designation")?,
        image: decode_file_opt(body, "image")?,
        linkedin: decode_string_opt(body, "linkedin")?,
        instagram: decode_string_opt(body, "instagram")?,
        email: decode_string_opt(body, "email")?,
        order: decode_order_opt(body)?,
    })
}

/// DELETE /{id} - delete with portrait release
async fn handle_delete(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let id = match parse_object_id(raw_id, "leader") {
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

    match service.delete(&id, media).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &json!({ "success": true, "message": "Leader deleted successfully" }),
        ),
        Err(e) => fail(&e),
    }
}
