//! Admin account endpoints
//!
//! ## Endpoints
//!
//! - `POST /api/v1/admin/setup` - Create the first admin (fails once any exists)
//! - `POST /api/v1/admin/register` - Create an admin (gated by registration key)
//! - `POST /api/v1/admin/login` - Authenticate and get a JWT
//! - `POST /api/v1/admin/logout` - Client-side token drop acknowledgement
//! - `GET  /api/v1/admin/me` - Current admin profile
//! - `PUT  /api/v1/admin/password` - Change password (invalidates tokens)

use bson::{doc, DateTime};
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::auth::{hash_password, verify_password};
use crate::db::schemas::{AdminDoc, ADMIN_COLLECTION};
use crate::routes::respond::{
    error_response, fail, json_response, read_json_body, require_admin, require_mongo, FullBody,
};
use crate::server::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    email: String,
    password: String,
    #[serde(default)]
    admin_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

/// Main handler for /api/v1/admin/* routes
pub async fn handle_admin_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    path: &str,
) -> Response<FullBody> {
    let method = req.method().clone();
    let subpath = path.strip_prefix("/api/v1/admin").unwrap_or("");

    match (method, subpath) {
        (Method::POST, "/setup") => handle_setup(req, state).await,
        (Method::POST, "/register") => handle_register(req, state).await,
        (Method::POST, "/login") => handle_login(req, state).await,
        (Method::POST, "/logout") => handle_logout().await,
        (Method::GET, "/me") => handle_me(req, state).await,
        (Method::PUT, "/password") => handle_change_password(req, state).await,
        _ => error_response(StatusCode::NOT_FOUND, "Not found", None),
    }
}

fn validate_credentials(email: &str, password: &str) -> Option<Response<FullBody>> {
    if email.trim().is_empty() || password.is_empty() {
        return Some(error_response(
            StatusCode::BAD_REQUEST,
            "Please provide email and password",
            Some("VALIDATION"),
        ));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Some(error_response(
            StatusCode::BAD_REQUEST,
            "Password must be at least 6 characters",
            Some("WEAK_PASSWORD"),
        ));
    }
    None
}

async fn create_admin_and_token(
    state: &AppState,
    email: String,
    password: &str,
    status: StatusCode,
) -> Response<FullBody> {
    let mongo = match require_mongo(state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let collection = match mongo.collection::<AdminDoc>(ADMIN_COLLECTION).await {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };

    let email = email.trim().to_lowercase();

    match collection.find_one(doc! { "email": &email }).await {
        Ok(Some(_)) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Admin with this email already exists",
                Some("DUPLICATE_EMAIL"),
            )
        }
        Ok(None) => {}
        Err(e) => return fail(&e),
    }

    let password_hash = match hash_password(password) {
        Ok(h) => h,
        Err(e) => return fail(&e),
    };

    let admin = AdminDoc::new(email.clone(), password_hash);
    let token_version = admin.token_version;
    let id = match collection.insert_one(admin).await {
        Ok(id) => id,
        Err(e) => return fail(&e),
    };

    let (token, expires_at) =
        match state.jwt.issue_token(&id.to_hex(), &email, "admin", token_version) {
            Ok(t) => t,
            Err(e) => return fail(&e),
        };

    info!(admin = %email, "Admin account created");
    json_response(
        status,
        &json!({
            "success": true,
            "token": token,
            "expiresAt": expires_at,
            "admin": { "id": id.to_hex(), "email": email, "role": "admin" },
        }),
    )
}

/// POST /api/v1/admin/setup - first admin only
async fn handle_setup(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let request: RegisterRequest = match serde_json::from_value(body) {
        Ok(r) => r,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON", None),
    };

    if let Some(resp) = validate_credentials(&request.email, &request.password) {
        return resp;
    }

    let mongo = match require_mongo(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let collection = match mongo.collection::<AdminDoc>(ADMIN_COLLECTION).await {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };
    match collection.count(doc! {}).await {
        Ok(0) => {}
        Ok(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Admin setup already completed",
                Some("SETUP_DONE"),
            )
        }
        Err(e) => return fail(&e),
    }

    create_admin_and_token(&state, request.email, &request.password, StatusCode::CREATED).await
}

/// POST /api/v1/admin/register - gated by registration key
async fn handle_register(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let request: RegisterRequest = match serde_json::from_value(body) {
        Ok(r) => r,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON", None),
    };

    if let Some(ref required_key) = state.args.admin_registration_key {
        if request.admin_key.as_deref() != Some(required_key.as_str()) {
            return error_response(
                StatusCode::FORBIDDEN,
                "Invalid admin registration key",
                Some("INVALID_ADMIN_KEY"),
            );
        }
    }

    if let Some(resp) = validate_credentials(&request.email, &request.password) {
        return resp;
    }

    create_admin_and_token(&state, request.email, &request.password, StatusCode::CREATED).await
}

/// POST /api/v1/admin/login
async fn handle_login(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let request: LoginRequest = match serde_json::from_value(body) {
        Ok(r) => r,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON", None),
    };

    if request.email.trim().is_empty() || request.password.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Please provide both email and password",
            Some("VALIDATION"),
        );
    }

    let mongo = match require_mongo(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let collection = match mongo.collection::<AdminDoc>(ADMIN_COLLECTION).await {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };

    let email = request.email.trim().to_lowercase();
    let admin = match collection.find_one(doc! { "email": &email }).await {
        Ok(Some(a)) => a,
        // Same answer for unknown email and wrong password
        Ok(None) => {
            return error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid email or password",
                Some("INVALID_CREDENTIALS"),
            )
        }
        Err(e) => return fail(&e),
    };

    if !admin.is_active {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "Admin account is deactivated",
            Some("ACCOUNT_DEACTIVATED"),
        );
    }

    match verify_password(&request.password, &admin.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            return error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid email or password",
                Some("INVALID_CREDENTIALS"),
            )
        }
        Err(e) => return fail(&e),
    }

    let admin_id = admin.id.map(|o| o.to_hex()).unwrap_or_default();
    let (token, expires_at) = match state.jwt.issue_token(
        &admin_id,
        &admin.email,
        &admin.role,
        admin.token_version,
    ) {
        Ok(t) => t,
        Err(e) => return fail(&e),
    };

    info!(admin = %admin.email, "Admin logged in");
    json_response(
        StatusCode::OK,
        &json!({
            "success": true,
            "token": token,
            "expiresAt": expires_at,
            "admin": { "id": admin_id, "email": admin.email, "role": admin.role },
        }),
    )
}

/// POST /api/v1/admin/logout - tokens are dropped client-side
async fn handle_logout() -> Response<FullBody> {
    json_response(
        StatusCode::OK,
        &json!({ "success": true, "message": "Admin logged out successfully" }),
    )
}

/// GET /api/v1/admin/me
async fn handle_me(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    let mongo = match require_mongo(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let collection = match mongo.collection::<AdminDoc>(ADMIN_COLLECTION).await {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };

    let record = match collection.find_one(doc! { "_id": admin.id }).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "Admin not found", Some("NOT_FOUND"))
        }
        Err(e) => return fail(&e),
    };

    json_response(
        StatusCode::OK,
        &json!({
            "success": true,
            "admin": {
                "id": admin.id.to_hex(),
                "email": record.email,
                "role": record.role,
                "isActive": record.is_active,
                "createdAt": record.metadata.created_at.map(|d| d.to_string()),
                "updatedAt": record.metadata.updated_at.map(|d| d.to_string()),
            },
        }),
    )
}

/// PUT /api/v1/admin/password - change password, revoking old tokens
async fn handle_change_password(req: Request<Incoming>, state: Arc<AppState>) -> Response<FullBody> {
    let admin = match require_admin(&req, &state).await {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    let body = match read_json_body(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let request: ChangePasswordRequest = match serde_json::from_value(body) {
        Ok(r) => r,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Please provide both current and new password",
                Some("VALIDATION"),
            )
        }
    };

    if request.new_password.len() < MIN_PASSWORD_LEN {
        return error_response(
            StatusCode::BAD_REQUEST,
            "New password must be at least 6 characters",
            Some("WEAK_PASSWORD"),
        );
    }

    let mongo = match require_mongo(&state) {
        Ok(m) => m,
        Err(resp) => return resp,
    };
    let collection = match mongo.collection::<AdminDoc>(ADMIN_COLLECTION).await {
        Ok(c) => c,
        Err(e) => return fail(&e),
    };

    let record = match collection.find_one(doc! { "_id": admin.id }).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "Admin not found", Some("NOT_FOUND"))
        }
        Err(e) => return fail(&e),
    };

    match verify_password(&request.current_password, &record.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Current password is incorrect",
                Some("INVALID_CREDENTIALS"),
            )
        }
        Err(e) => return fail(&e),
    }

    let password_hash = match hash_password(&request.new_password) {
        Ok(h) => h,
        Err(e) => return fail(&e),
    };

    let result = collection
        .update_one(
            doc! { "_id": admin.id },
            doc! {
                "$set": {
                    "passwordHash": password_hash,
                    "metadata.updated_at": DateTime::now(),
                },
                "$inc": { "tokenVersion": 1 },
            },
        )
        .await;

    match result {
        Ok(r) if r.modified_count > 0 => {
            info!(admin = %admin.email, "Admin password changed");
            json_response(
                StatusCode::OK,
                &json!({ "success": true, "message": "Password updated successfully" }),
            )
        }
        Ok(_) => error_response(StatusCode::NOT_FOUND, "Admin not found", Some("NOT_FOUND")),
        Err(e) => fail(&e),
    }
}
