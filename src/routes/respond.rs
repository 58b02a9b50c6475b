//! Shared route plumbing: JSON responses, body parsing, auth guards

use bson::{doc, oid::ObjectId};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::auth::extract_token_from_header;
use crate::db::schemas::{AdminDoc, ADMIN_COLLECTION};
use crate::locale::Locale;
use crate::media::MediaStore;
use crate::server::AppState;
use crate::types::VitrineError;

pub type FullBody = Full<Bytes>;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<FullBody> {
    let json = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(json)))
        .unwrap()
}

pub fn error_response(status: StatusCode, error: &str, code: Option<&str>) -> Response<FullBody> {
    json_response(
        status,
        &ErrorResponse {
            success: false,
            error: error.to_string(),
            code: code.map(|c| c.to_string()),
        },
    )
}

/// Map a domain error onto its stable status + code
pub fn fail(err: &VitrineError) -> Response<FullBody> {
    if matches!(err, VitrineError::Database(_)) {
        warn!("{err}");
    }
    error_response(err.status_code(), &err.to_string(), Some(err.code()))
}

/// Read and parse a JSON body into a raw value for boundary decoding
pub async fn read_json_body(req: Request<Incoming>) -> Result<JsonValue, Response<FullBody>> {
    let body_bytes = match req.into_body().collect().await {
        Ok(b) => b.to_bytes(),
        Err(_) => return Err(error_response(StatusCode::BAD_REQUEST, "Invalid body", None)),
    };

    if body_bytes.is_empty() {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }

    serde_json::from_slice(&body_bytes)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid JSON", None))
}

/// Get a single query-string parameter, URL-decoded
pub fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    for pair in query.split('&') {
        if let Some((k, v)) = pair.split_once('=') {
            if k == key {
                return Some(urlencoding::decode(v).unwrap_or_default().to_string());
            }
        }
    }
    None
}

/// Requested locale from the `lang` query parameter, defaulting to English
pub fn locale_from_query(query: Option<&str>) -> Locale {
    Locale::parse(query_param(query, "lang").as_deref())
}

/// Parse a path segment as an ObjectId
pub fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, Response<FullBody>> {
    ObjectId::parse_str(raw).map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid {what} ID"),
            Some("INVALID_ID"),
        )
    })
}

/// Require a configured database, as some collaborators are optional in
/// dev mode
pub fn require_mongo(state: &AppState) -> Result<&crate::db::MongoClient, Response<FullBody>> {
    state.mongo.as_ref().ok_or_else(|| {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Database not available",
            Some("DB_UNAVAILABLE"),
        )
    })
}

/// The media store when configured
pub fn media_store(state: &AppState) -> Option<&dyn MediaStore> {
    state.media.as_deref().map(|m| m as &dyn MediaStore)
}

/// Require a configured media store (routes that always touch assets)
pub fn require_media(state: &AppState) -> Result<&dyn MediaStore, Response<FullBody>> {
    media_store(state).ok_or_else(|| {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Media store not available",
            Some("MEDIA_UNAVAILABLE"),
        )
    })
}

/// Authenticated admin context attached to mutations
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub id: ObjectId,
    pub email: String,
    pub role: String,
}

/// Validate admin access from the request.
///
/// Verifies the Bearer token, loads the admin record, and checks the
/// account is active with an unrevoked token version.
pub async fn require_admin<B>(
    req: &Request<B>,
    state: &AppState,
) -> Result<AdminContext, Response<FullBody>> {
    let auth_header = req
        .headers()
        .get(hyper::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = match extract_token_from_header(auth_header) {
        Some(t) => t,
        None => {
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Admin access required. Please login as admin.",
                Some("NO_TOKEN"),
            ))
        }
    };

    let claims = match state.jwt.verify_token(token) {
        Ok(c) => c,
        Err(e) => {
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                &e.to_string(),
                Some("INVALID_TOKEN"),
            ))
        }
    };

    let mongo = require_mongo(state)?;
    let collection = match mongo.collection::<AdminDoc>(ADMIN_COLLECTION).await {
        Ok(c) => c,
        Err(e) => return Err(fail(&e)),
    };

    let admin_id = match ObjectId::parse_str(&claims.sub) {
        Ok(o) => o,
        Err(_) => {
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid token. Please log in again.",
                Some("INVALID_TOKEN"),
            ))
        }
    };

    let admin = match collection.find_one(doc! { "_id": admin_id }).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Admin not found. Please login again.",
                Some("ADMIN_NOT_FOUND"),
            ))
        }
        Err(e) => return Err(fail(&e)),
    };

    if !admin.is_active {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Admin account is deactivated.",
            Some("ACCOUNT_DEACTIVATED"),
        ));
    }
    if admin.role != "admin" {
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "Admin access required.",
            Some("FORBIDDEN"),
        ));
    }
    if admin.token_version != claims.token_version {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Token has been revoked. Please log in again.",
            Some("TOKEN_REVOKED"),
        ));
    }

    Ok(AdminContext {
        id: admin_id,
        email: admin.email,
        role: admin.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_decodes() {
        let q = Some("lang=ar&search=tower%20a");
        assert_eq!(query_param(q, "lang").as_deref(), Some("ar"));
        assert_eq!(query_param(q, "search").as_deref(), Some("tower a"));
        assert_eq!(query_param(q, "missing"), None);
        assert_eq!(query_param(None, "lang"), None);
    }

    #[test]
    fn test_locale_from_query() {
        assert_eq!(locale_from_query(Some("lang=ar")), Locale::Ar);
        assert_eq!(locale_from_query(Some("lang=xx")), Locale::En);
        assert_eq!(locale_from_query(None), Locale::En);
    }
}
