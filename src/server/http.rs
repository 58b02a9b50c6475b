//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo for async handling. One hand-rolled
//! dispatch over `(method, path)`; handler modules own their subpaths.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::auth::JwtValidator;
use crate::config::Args;
use crate::content::PostKind;
use crate::db::MongoClient;
use crate::media::CloudinaryClient;
use crate::routes;
use crate::types::{Result, VitrineError};

type FullBody = Full<Bytes>;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Document store (optional in dev mode)
    pub mongo: Option<MongoClient>,
    /// Media store (optional in dev mode)
    pub media: Option<Arc<CloudinaryClient>>,
    /// Token issuer/validator for admin sessions
    pub jwt: JwtValidator,
}

impl AppState {
    pub fn new(args: Args, mongo: Option<MongoClient>) -> Self {
        let jwt = JwtValidator::new(&args.jwt_secret(), args.jwt_expiry_seconds);

        let media = match (
            &args.cloudinary_cloud_name,
            &args.cloudinary_api_key,
            &args.cloudinary_api_secret,
        ) {
            (Some(cloud), Some(key), Some(secret)) => Some(Arc::new(CloudinaryClient::new(
                cloud.clone(),
                key.clone(),
                secret.clone(),
            ))),
            _ => None,
        };

        Self {
            args,
            mongo,
            media,
            jwt,
        }
    }
}

/// Run the HTTP server until failure
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(state.args.listen)
        .await
        .map_err(|e| VitrineError::Config(format!("Failed to bind {}: {e}", state.args.listen)))?;

    info!("Listening on {}", state.args.listen);

    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };

        let io = TokioIo::new(stream);
        let state = Arc::clone(&state);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handle_request(state, req).await }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                debug!(client = %addr, "Connection error: {}", e);
            }
        });
    }
}

async fn handle_request(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> std::result::Result<Response<FullBody>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match (method, path.as_str()) {
        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        // Service banner
        (Method::GET, "/") => json_banner(),

        // Probes
        (Method::GET, "/health") | (Method::GET, "/healthz") => {
            routes::health_check(Arc::clone(&state))
        }
        (Method::GET, "/ready") | (Method::GET, "/readyz") => {
            routes::readiness_check(Arc::clone(&state))
        }
        (Method::GET, "/version") => routes::version_info(),

        // Admin accounts
        (_, p) if p.starts_with("/api/v1/admin") => {
            routes::handle_admin_request(req, Arc::clone(&state), &path).await
        }

        // Settings aggregate
        (_, p) if p.starts_with("/api/v1/site-settings") => {
            routes::handle_site_settings_request(req, Arc::clone(&state), &path).await
        }

        // Simple collections
        (_, p) if p.starts_with("/api/v1/blogs") => {
            routes::handle_posts_request(req, Arc::clone(&state), &path, PostKind::Blog).await
        }
        (_, p) if p.starts_with("/api/v1/news") => {
            routes::handle_posts_request(req, Arc::clone(&state), &path, PostKind::News).await
        }
        (_, p) if p.starts_with("/api/v1/leaders") => {
            routes::handle_leaders_request(req, Arc::clone(&state), &path).await
        }
        (_, p) if p.starts_with("/api/v1/contact") => {
            routes::handle_contact_request(req, Arc::clone(&state), &path).await
        }

        _ => not_found(&path),
    };

    Ok(response)
}

fn json_banner() -> Response<FullBody> {
    let body = json!({
        "success": true,
        "message": "Vitrine content API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

fn not_found(path: &str) -> Response<FullBody> {
    let body = json!({
        "success": false,
        "message": format!("Route {path} not found"),
    });
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

fn preflight_response() -> Response<FullBody> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap()
}
