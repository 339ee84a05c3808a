//! HTTP server for the avatar endpoint
//!
//! Provides `GET /`, `POST /` and `/health`.

use crate::error::ApiError;
use crate::types::{AvatarRequest, HealthResponse, SuccessResponse};
use avatar_providers::AvatarResolver;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

const INDEX_TEXT: &str = "Avatar fetcher: POST { account_type, identifier } to this URL";

/// Shared state for the HTTP server
pub struct ServerState {
    pub resolver: AvatarResolver,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(resolver: AvatarResolver) -> Self {
        Self {
            resolver,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(index).post(fetch_avatar))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

async fn index() -> &'static str {
    INDEX_TEXT
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
    })
}

/// Resolve an avatar for `{ account_type, identifier }`
async fn fetch_avatar(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    // An unreadable body carries no fields
    let request = match payload {
        Ok(Json(body)) => AvatarRequest::from_body(&body),
        Err(rejection) => {
            debug!(error = %rejection, "Rejected avatar request body");
            AvatarRequest::default()
        }
    };

    let result = state
        .resolver
        .resolve_raw(
            request.account_type.as_deref(),
            request.identifier.as_deref(),
        )
        .await?;

    result
        .into_photo()
        .map(|photo| Json(SuccessResponse::new(photo)))
        .ok_or(ApiError::CouldNotFetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatar_providers::gravatar;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;
    use std::time::Duration;
    use tower::ServiceExt;

    fn create_test_state(server: &ServerGuard) -> SharedState {
        let resolver =
            AvatarResolver::with_base_urls(&server.url(), &server.url(), Duration::from_secs(5))
                .unwrap();
        Arc::new(ServerState::new(resolver))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = Server::new_async().await;
        let router = create_router(create_test_state(&server));

        let (status, json) = send(
            router,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        let server = Server::new_async().await;
        let router = create_router(create_test_state(&server));

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), INDEX_TEXT);
    }

    #[tokio::test]
    async fn test_security_headers() {
        let server = Server::new_async().await;
        let router = create_router(create_test_state(&server));

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["referrer-policy"], "no-referrer");
        assert!(headers.get("x-powered-by").is_none());
    }

    #[tokio::test]
    async fn test_gravatar_scenario() {
        let server = Server::new_async().await;
        let router = create_router(create_test_state(&server));

        let (status, json) = send(
            router,
            post_json(r#"{"account_type":"gravatar","identifier":"Test@Example.com "}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "success": true,
                "photo": format!(
                    "https://gravatar.com/avatar/{}?s=400",
                    gravatar::email_hash("test@example.com")
                )
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_account_type() {
        let server = Server::new_async().await;
        let router = create_router(create_test_state(&server));

        let (status, json) = send(
            router,
            post_json(r#"{"account_type":"bluesky","identifier":"x"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({ "success": false, "message": "Invalid account_type" })
        );
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let server = Server::new_async().await;

        for body in [
            r#"{}"#,
            r#"{"account_type":"github"}"#,
            r#"{"identifier":"octocat"}"#,
            r#"{"account_type":"","identifier":"octocat"}"#,
            r#"{"account_type":"github","identifier":""}"#,
            r#"{"account_type":"github","identifier":null}"#,
        ] {
            let router = create_router(create_test_state(&server));
            let (status, json) = send(router, post_json(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                json,
                json!({ "success": false, "message": "Missing account_type or identifier" }),
                "body: {}",
                body
            );
        }
    }

    #[tokio::test]
    async fn test_non_string_account_type_is_invalid() {
        let server = Server::new_async().await;

        for body in [
            r#"{"account_type":7,"identifier":"x"}"#,
            r#"{"account_type":"bluesky","identifier":5}"#,
            r#"{"account_type":["github"],"identifier":"octocat"}"#,
        ] {
            let router = create_router(create_test_state(&server));
            let (status, json) = send(router, post_json(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                json,
                json!({ "success": false, "message": "Invalid account_type" }),
                "body: {}",
                body
            );
        }
    }

    #[tokio::test]
    async fn test_numeric_identifier_is_looked_up() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/12345")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "avatar_url": "https://gh.example/12345.png" }).to_string())
            .expect(1)
            .create_async()
            .await;

        let router = create_router(create_test_state(&server));
        let (status, json) = send(
            router,
            post_json(r#"{"account_type":"github","identifier":12345}"#),
        )
        .await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["photo"], "https://gh.example/12345.png");
    }

    #[tokio::test]
    async fn test_malformed_body_is_missing() {
        let server = Server::new_async().await;

        let router = create_router(create_test_state(&server));
        let (status, json) = send(router, post_json("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Missing account_type or identifier");

        // No content-type header
        let router = create_router(create_test_state(&server));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"account_type":"gravatar","identifier":"a@b.com"}"#))
            .unwrap();
        let (status, json) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Missing account_type or identifier");
    }

    #[tokio::test]
    async fn test_github_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/octocat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "avatar_url": "https://gh.example/octocat.png" }).to_string())
            .expect(1)
            .create_async()
            .await;

        let router = create_router(create_test_state(&server));
        let (status, json) = send(
            router,
            post_json(r#"{"account_type":"github","identifier":"octocat"}"#),
        )
        .await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "success": true, "photo": "https://gh.example/octocat.png" })
        );
    }

    #[tokio::test]
    async fn test_github_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/ghost")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let router = create_router(create_test_state(&server));
        let (status, json) = send(
            router,
            post_json(r#"{"account_type":"github","identifier":"ghost"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({ "success": false, "message": "Could not fetch the profile image" })
        );
    }

    #[tokio::test]
    async fn test_mastodon_missing_avatar() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/accounts/lookup")
            .match_query(Matcher::UrlEncoded("acct".into(), "Gargron".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"1","acct":"Gargron"}"#)
            .create_async()
            .await;

        let router = create_router(create_test_state(&server));
        let (status, json) = send(
            router,
            post_json(r#"{"account_type":"mastodon","identifier":"Gargron"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Could not fetch the profile image");
    }

    #[test]
    fn test_server_state_new() {
        let resolver = AvatarResolver::with_defaults().unwrap();
        let state = ServerState::new(resolver);

        let diff = (Utc::now() - state.started_at).num_seconds();
        assert!((0..5).contains(&diff));
    }
}
