pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route("/api/v1/match/screen", post(handlers::handle_screen))
        .route("/api/v1/match/catalog", get(handlers::handle_catalog))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn make_router() -> Router {
        build_router(AppState::from_config(Config::default()))
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = make_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_endpoint_returns_breakdown() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/match/score",
            Some(json!({
                "resume": {
                    "skills": ["python", "docker"],
                    "experience": [{"duration": "3 years"}]
                },
                "job_title": "Senior Developer",
                "job_description": "Looking for a Python developer with Docker and AWS experience"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_result"]["score"], 55.7);
        assert_eq!(body["match_result"]["experience_match"], 30.0);
        assert_eq!(body["match_result"]["missing_skills"], json!(["aws"]));
        assert_eq!(body["seniority"]["level"], 3);
        assert_eq!(body["seniority"]["keyword"], "senior");
        assert_eq!(body["skill_categories"]["programming"], 1);
        assert_eq!(body["scorer_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_score_endpoint_tolerates_missing_resume_and_description() {
        let (status, body) = send(Method::POST, "/api/v1/match/score", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_result"]["score"], 0.0);
        assert_eq!(body["match_result"]["matched_skills"], json!([]));
        assert_eq!(body["seniority"]["level"], 2);
        assert_eq!(body["seniority"]["keyword"], Value::Null);
    }

    #[tokio::test]
    async fn test_score_endpoint_treats_null_fields_as_empty() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/match/score",
            Some(json!({
                "resume": {"skills": null, "experience": null},
                "job_description": null
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_result"]["score"], 0.0);
        assert_eq!(body["match_result"]["matched_skills"], json!([]));
        assert_eq!(body["match_result"]["missing_skills"], json!([]));
        assert_eq!(body["match_result"]["experience_match"], 0.0);
    }

    #[tokio::test]
    async fn test_score_endpoint_null_skills_miss_every_job_skill() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/match/score",
            Some(json!({
                "resume": {"skills": null, "experience": [{"duration": "3 years"}]},
                "job_title": null,
                "job_description": "Python"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_result"]["missing_skills"], json!(["python"]));
        assert_eq!(body["match_result"]["score"], 9.0);
    }

    #[tokio::test]
    async fn test_screen_endpoint_ranks_by_score() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/match/screen",
            Some(json!({
                "job_description": "Rust and Kubernetes on Linux",
                "candidates": [
                    {
                        "candidate_id": "00000000-0000-0000-0000-000000000001",
                        "name": "Low",
                        "resume": {"skills": []}
                    },
                    {
                        "candidate_id": "00000000-0000-0000-0000-000000000002",
                        "name": "High",
                        "resume": {"skills": ["Rust", "Kubernetes", "Linux"]}
                    },
                    {
                        "candidate_id": "00000000-0000-0000-0000-000000000003",
                        "name": "NoResume"
                    }
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let ranked = body["ranked"].as_array().unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0]["name"], "High");
        assert_eq!(ranked[0]["rank"], 1);
        assert_eq!(ranked[0]["match_result"]["score"], 70.0);
        // Tied at zero: submission order is kept.
        assert_eq!(ranked[1]["name"], "Low");
        assert_eq!(ranked[2]["name"], "NoResume");
    }

    #[tokio::test]
    async fn test_screen_endpoint_rejects_empty_batch() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/match/screen",
            Some(json!({"job_description": "Rust", "candidates": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_catalog_endpoint() {
        let (status, body) = send(Method::GET, "/api/v1/match/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"][0], "python");
        assert_eq!(body["seniority"][0]["keyword"], "junior");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = send(Method::GET, "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
