use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::{livez, readyz},
        logs::{create_log, delete_log, get_log, list_logs, update_log},
        root::welcome,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // Log routes with CORS; the collection answers with and without the trailing slash
    let log_routes = Router::new()
        .route("/logs/", get(list_logs).post(create_log))
        .route("/logs", get(list_logs).post(create_log))
        .route("/logs/{id}", get(get_log).put(update_log).delete(delete_log))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(welcome))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(log_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_app(AppState::default(), &Config::default())
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: impl AsRef<str>) -> Request<Body> {
        Request::builder()
            .uri(uri.as_ref())
            .body(Body::empty())
            .unwrap()
    }

    fn json_request(method: &str, uri: impl AsRef<str>, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri.as_ref())
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_request(uri: impl AsRef<str>) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri.as_ref())
            .body(Body::empty())
            .unwrap()
    }

    async fn create(app: &Router, body: Value) -> Value {
        let response = send(app, json_request("POST", "/logs/", &body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_welcome() {
        let response = send(&app(), get_request("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Hello, World! Welcome to the LogIt backend." })
        );
    }

    #[tokio::test]
    async fn test_create_and_get_log() {
        let app = app();
        let input = json!({
            "section_number": 3,
            "contractor_type": "EL",
            "objective": "Wire panel"
        });

        let created = create(&app, input.clone()).await;

        let id = created["id"].as_i64().unwrap();
        let mut expected = input;
        expected["id"] = json!(id);
        assert_eq!(created, expected);

        let response = send(&app, get_request(format!("/logs/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let response = send(&app(), get_request("/logs/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_default_limit_is_100() {
        let app = app();
        for i in 0..105 {
            create(
                &app,
                json!({ "section_number": i, "contractor_type": "EL", "objective": "bulk" }),
            )
            .await;
        }

        let response = send(&app, get_request("/logs/")).await;
        let logs = body_json(response).await;

        assert_eq!(logs.as_array().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_list_skip_and_limit_window() {
        let app = app();
        let mut created = Vec::new();
        for i in 0..5 {
            created.push(
                create(
                    &app,
                    json!({
                        "section_number": i,
                        "contractor_type": "EL",
                        "objective": format!("task {i}")
                    }),
                )
                .await,
            );
        }

        let response = send(&app, get_request("/logs/?skip=1&limit=2")).await;
        assert_eq!(body_json(response).await, json!(created[1..3]));

        let response = send(&app, get_request("/logs?skip=3&limit=10")).await;
        assert_eq!(body_json(response).await, json!(created[3..]));

        let response = send(&app, get_request("/logs/?skip=50")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_negative_skip_and_limit_follow_sqlite() {
        let app = app();
        let mut created = Vec::new();
        for i in 0..105 {
            created.push(
                create(
                    &app,
                    json!({ "section_number": i, "contractor_type": "EL", "objective": "bulk" }),
                )
                .await,
            );
        }

        let response = send(&app, get_request("/logs/?skip=-1&limit=2")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(created[..2]));

        let response = send(&app, get_request("/logs/?limit=-1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(created));

        let response = send(&app, get_request("/logs/?skip=100&limit=-5")).await;
        assert_eq!(body_json(response).await, json!(created[100..]));
    }

    #[tokio::test]
    async fn test_list_accepts_limit_beyond_u32() {
        let app = app();
        let log = create(
            &app,
            json!({ "section_number": 1, "contractor_type": "EL", "objective": "only" }),
        )
        .await;

        let response = send(&app, get_request("/logs/?limit=5000000000")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([log]));
    }

    #[tokio::test]
    async fn test_list_non_integer_skip_is_422() {
        let response = send(&app(), get_request("/logs/?skip=abc")).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_missing_is_404_and_idempotent() {
        let app = app();

        for _ in 0..2 {
            let response = send(&app, get_request("/logs/12345")).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(
                body_json(response).await,
                json!({ "detail": "Log not found" })
            );
        }
    }

    #[tokio::test]
    async fn test_get_non_integer_id_is_422() {
        let response = send(&app(), get_request("/logs/abc")).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let app = app();
        let created = create(
            &app,
            json!({ "section_number": 3, "contractor_type": "EL", "objective": "Wire panel" }),
        )
        .await;
        let id = created["id"].as_i64().unwrap();
        let update = json!({
            "section_number": 8,
            "contractor_type": "PL",
            "objective": "Fit valve"
        });

        let response = send(&app, json_request("PUT", format!("/logs/{id}"), &update)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;

        let mut expected = update;
        expected["id"] = json!(id);
        assert_eq!(updated, expected);

        let response = send(&app, get_request(format!("/logs/{id}"))).await;
        assert_eq!(body_json(response).await, expected);
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let update = json!({ "section_number": 1, "contractor_type": "EL", "objective": "x" });

        let response = send(&app(), json_request("PUT", "/logs/999", &update)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Log not found" })
        );
    }

    #[tokio::test]
    async fn test_update_with_malformed_body_is_422() {
        let app = app();
        let created = create(
            &app,
            json!({ "section_number": 3, "contractor_type": "EL", "objective": "Wire panel" }),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = send(
            &app,
            json_request("PUT", format!("/logs/{id}"), &json!({ "section_number": "three" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = send(&app, get_request(format!("/logs/{id}"))).await;
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = app();
        let keep = create(
            &app,
            json!({ "section_number": 1, "contractor_type": "EL", "objective": "Keep" }),
        )
        .await;
        let remove = create(
            &app,
            json!({ "section_number": 2, "contractor_type": "PL", "objective": "Remove" }),
        )
        .await;
        let remove_id = remove["id"].as_i64().unwrap();

        let response = send(&app, delete_request(format!("/logs/{remove_id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Log deleted successfully" })
        );

        let response = send(&app, get_request(format!("/logs/{remove_id}"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, get_request("/logs/")).await;
        assert_eq!(body_json(response).await, json!([keep]));
    }

    #[tokio::test]
    async fn test_delete_missing_is_404_without_side_effects() {
        let app = app();
        let keep = create(
            &app,
            json!({ "section_number": 1, "contractor_type": "EL", "objective": "Keep" }),
        )
        .await;

        let response = send(&app, delete_request("/logs/999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Log not found" })
        );

        let response = send(&app, get_request("/logs/")).await;
        assert_eq!(body_json(response).await, json!([keep]));
    }

    #[tokio::test]
    async fn test_create_missing_field_is_rejected_before_storage() {
        let app = app();

        let response = send(
            &app,
            json_request(
                "POST",
                "/logs/",
                &json!({ "section_number": 3, "contractor_type": "EL" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("objective"));

        let response = send(&app, get_request("/logs/")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_wrong_type_is_422() {
        let response = send(
            &app(),
            json_request(
                "POST",
                "/logs/",
                &json!({ "section_number": "3", "contractor_type": "EL", "objective": "x" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_without_json_content_type_is_422() {
        let request = Request::builder()
            .method("POST")
            .uri("/logs/")
            .body(Body::from("section_number=3"))
            .unwrap();

        let response = send(&app(), request).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_strings() {
        let created = create(
            &app(),
            json!({ "section_number": 0, "contractor_type": "", "objective": "" }),
        )
        .await;

        assert_eq!(created["contractor_type"], "");
        assert_eq!(created["objective"], "");
    }

    #[tokio::test]
    async fn test_health_probes() {
        let app = app();

        let response = send(&app, get_request("/livez")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get_request("/readyz")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "healthy": true, "logs": 0 })
        );
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_crud_against_sqlite() {
        use std::sync::Arc;

        use crate::storage::SqliteRepository;

        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let app = create_app(
            AppState::with_repository(Arc::new(repo)),
            &Config::default(),
        );

        let created = create(
            &app,
            json!({ "section_number": 3, "contractor_type": "EL", "objective": "Wire panel" }),
        )
        .await;
        let id = created["id"].as_i64().unwrap();
        assert!(id >= 1);

        let response = send(&app, get_request(format!("/logs/{id}"))).await;
        assert_eq!(body_json(response).await, created);

        let response = send(&app, delete_request(format!("/logs/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get_request(format!("/logs/{id}"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let objective = "x".repeat(3 * 1024 * 1024);
        let body = json!({ "section_number": 1, "contractor_type": "EL", "objective": objective });

        let response = send(&app(), json_request("POST", "/logs/", &body)).await;

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    mod timeout {
        use std::{sync::Arc, time::Duration};

        use async_trait::async_trait;
        use logit_core::log::{LogEntry, NewLogEntry};
        use logit_core::storage::{LogRepository, Page, Result};

        use super::*;

        /// A repository that never answers within the request timeout.
        struct StalledRepository;

        impl StalledRepository {
            async fn stall<T>() -> Result<T> {
                tokio::time::sleep(Duration::from_secs(30)).await;
                unreachable!("request should have timed out")
            }
        }

        #[async_trait]
        impl LogRepository for StalledRepository {
            async fn get_log(&self, _id: i64) -> Result<Option<LogEntry>> {
                Self::stall().await
            }

            async fn list_logs(&self, _page: Page) -> Result<Vec<LogEntry>> {
                Self::stall().await
            }

            async fn create_log(&self, _log: &NewLogEntry) -> Result<LogEntry> {
                Self::stall().await
            }

            async fn update_log(&self, _id: i64, _log: &NewLogEntry) -> Result<LogEntry> {
                Self::stall().await
            }

            async fn delete_log(&self, _id: i64) -> Result<()> {
                Self::stall().await
            }

            async fn count_logs(&self) -> Result<u64> {
                Self::stall().await
            }
        }

        #[tokio::test]
        async fn test_slow_request_times_out_with_408() {
            let config = Config {
                request_timeout_seconds: 1,
                ..Config::default()
            };
            let state = AppState::with_repository(Arc::new(StalledRepository));
            let app = create_app(state, &config);

            let response = send(&app, get_request("/logs/1")).await;

            assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        }
    }
}
