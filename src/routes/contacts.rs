//! Contact form endpoints
//!
//! - `POST   /api/v1/contact` - Public submission (validated before insert)
//! - `GET    /api/v1/contact` - All submissions (admin)
//! - `GET    /api/v1/contact/{id}` - One submission (admin)
//! - `DELETE /api/v1/contact/{id}` - Delete a submission (admin)

use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::content::ContactService;
use crate::db::schemas::ContactDoc;
use crate::routes::respond::{
    error_response, fail, json_response, parse_object_id, read_json_body, require_admin,
    require_mongo, FullBody,
};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
struct SubmitRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
}

/// Main handler for /api/v1/contact/* routes
pub async fn handle_contact_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    path: &str,
) -> Response<FullBody> {
    let method = req.method().clone();
    let subpath = path
        .strip_prefix("/api/v1/contact")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string();

    match (method, subpath.as_str()) {
        (Method::POST, "") => handle_submit(req, state).await,
        (Method::GET, "") => handle_list(req, state).await,
        (Method::GET, p) => handle_get(req, state, p.trim_start_matches('/')).await,
        (Method::DELETE, p) => handle_delete(req, state, p.trim_start_matches('/')).await,
        _ => error_response(StatusCode::NOT_FOUND, "Not found", None),
    }
}

fn service(state: &AppState) -> std::result::Result<ContactService, Response<FullBody>> {
    let mongo = require_mongo(state)?;
    Ok(ContactService::new(mongo.clone()))
}

/// POST /api/v1/contact - public submission
async fn handle_submit(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    // Origin details come off the request before the body is consumed
    let user_agent = req
        .headers()
        .get(hyper::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let ip_address = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or("").trim().to_string())
        .unwrap_or_default();

    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let request: SubmitRequest = match serde_json::from_value(body) {
        Ok(r) => r,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON", None),
    };

    let submission = ContactDoc {
        name: request.name,
        email: request.email,
        phone: request.phone,
        subject: request.subject,
        message: request.message,
        ip_address,
        user_agent,
        ..Default::default()
    };

    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.submit(submission).await {
        Ok(contact) => json_response(
            StatusCode::CREATED,
            &json!({
                "success": true,
                "message": "Contact form submitted successfully",
                "contact": contact,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// GET /api/v1/contact - all submissions (admin)
async fn handle_list(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.list().await {
        Ok(contacts) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "count": contacts.len(),
                "contacts": contacts,
            }),
        ),
        Err(e) => fail(&e),
    }
}

/// GET /api/v1/contact/{id} - one submission (admin)
async fn handle_get(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let id = match parse_object_id(raw_id, "contact") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.get(&id).await {
        Ok(Some(contact)) => {
            json_response(StatusCode::OK, &json!({ "success": true, "contact": contact }))
        }
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "Contact submission not found",
            Some("NOT_FOUND"),
        ),
        Err(e) => fail(&e),
    }
}

/// DELETE /api/v1/contact/{id} - delete a submission (admin)
async fn handle_delete(
    req: Request<Incoming>,
    state: Arc<AppState>,
    raw_id: &str,
) -> Response<FullBody> {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    let id = match parse_object_id(raw_id, "contact") {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let service = match service(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match service.delete(&id).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Contact submission deleted successfully",
            }),
        ),
        Err(e) => fail(&e),
    }
}
