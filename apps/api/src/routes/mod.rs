pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

/// Parses a path identifier. Anything that is not a UUID cannot resolve to a
/// stored record, so it is reported as not found.
pub fn parse_id(raw: &str, kind: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{kind} {raw} not found")))
}

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/jobs/search/:query", get(jobs::handle_search_jobs))
        .route(
            "/api/jobs/advanced-search",
            get(jobs::handle_advanced_search),
        )
        .route(
            "/api/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Resumes API
        .route(
            "/api/resumes/upload",
            post(resumes::handle_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/resumes", get(resumes::handle_list_resumes))
        .route(
            "/api/resumes/search/:query",
            get(resumes::handle_search_resumes),
        )
        .route(
            "/api/resumes/match/:job_id",
            get(matching::handle_match_resumes),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_delete_resume),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::extraction::{FeatureExtractor, PdfTextExtractor, SkillVocabulary};
    use crate::store::files::memory::MemoryFileStore;
    use crate::store::MemoryStore;

    fn app_with_limit(max_upload_bytes: usize) -> Router {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            files: Arc::new(MemoryFileStore::default()),
            text_extractor: Arc::new(PdfTextExtractor),
            extractor: Arc::new(FeatureExtractor::new(SkillVocabulary::default()).unwrap()),
        };
        build_router(state, max_upload_bytes)
    }

    fn app() -> Router {
        app_with_limit(1024 * 1024)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn create_job(app: &Router, body: Value) -> Value {
        let (status, job) = send(app, post_json("/api/jobs", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        job
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_job_requires_title_and_company() {
        let (status, body) = send(&app(), post_json("/api/jobs", json!({"title": "SRE"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "company");
    }

    #[tokio::test]
    async fn test_job_crud_round() {
        let app = app();
        let job = create_job(
            &app,
            json!({"title": "Backend Engineer", "company": "Acme", "skills": ["Go"]}),
        )
        .await;
        assert_eq!(job["jobType"], "Full-time");
        let id = job["id"].as_str().unwrap().to_string();

        let (status, fetched) = send(&app, get(&format!("/api/jobs/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], "Backend Engineer");

        let update = Request::builder()
            .method("PUT")
            .uri(format!("/api/jobs/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(json!({"salary": 120000.0}).to_string()))
            .unwrap();
        let (status, updated) = send(&app, update).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["salary"], 120000.0);
        assert_eq!(updated["createdAt"], job["createdAt"]);

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/jobs/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, get(&format!("/api/jobs/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let (status, body) = send(&app(), get("/api/jobs/not-a-uuid")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_advanced_search_rejects_non_numeric_salary() {
        let (status, body) = send(&app(), get("/api/jobs/advanced-search?minSalary=abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "minSalary");
    }

    #[tokio::test]
    async fn test_advanced_search_filters() {
        let app = app();
        create_job(
            &app,
            json!({"title": "Go Dev", "company": "A", "salary": 50000, "skills": ["Go"]}),
        )
        .await;
        create_job(
            &app,
            json!({"title": "Rust Dev", "company": "B", "salary": 90000, "skills": ["Rust"]}),
        )
        .await;

        let (status, body) =
            send(&app, get("/api/jobs/advanced-search?minSalary=60000&skills=Rust,%20Go")).await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["title"], "Rust Dev");
    }

    #[tokio::test]
    async fn test_job_search_by_path_query() {
        let app = app();
        create_job(&app, json!({"title": "Rust Dev", "company": "B"})).await;
        create_job(&app, json!({"title": "Chef", "company": "C"})).await;

        let (status, body) = send(&app, get("/api/jobs/search/rust%20developer")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_match_unknown_job_is_not_found() {
        let uri = format!("/api/resumes/match/{}", Uuid::new_v4());
        let (status, _) = send(&app(), get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_match_with_empty_pool_is_empty_list() {
        let app = app();
        let job = create_job(&app, json!({"title": "Rust Dev", "company": "B"})).await;
        let uri = format!("/api/resumes/match/{}", job["id"].as_str().unwrap());
        let (status, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_upload_without_file_is_validation_error() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAda\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/resumes/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, body) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "resume");
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_413() {
        let app = app_with_limit(64);
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"big.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             {}\r\n\
             --{boundary}--\r\n",
            "x".repeat(4096)
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/resumes/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");

        let (_, list) = send(&app, get("/api/resumes")).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_upload_docx_then_list_and_match() {
        let app = app();
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"name\"\r\n\r\n\
             Rust Ada\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"email\"\r\n\r\n\
             ada@example.com\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"ada.docx\"\r\n\
             Content-Type: application/vnd.openxmlformats-officedocument.wordprocessingml.document\r\n\r\n\
             binary-bytes\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/resumes/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, record) = send(&app, request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["name"], "Rust Ada");
        assert_eq!(record["email"], "ada@example.com");
        assert_eq!(record["parsedText"], "");
        assert_eq!(record["skills"], json!([]));

        let (_, list) = send(&app, get("/api/resumes")).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let job = create_job(
            &app,
            json!({"title": "Rust Engineer", "company": "B", "skills": ["Rust"]}),
        )
        .await;
        let uri = format!("/api/resumes/match/{}", job["id"].as_str().unwrap());
        let (status, matches) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        let matches = matches.as_array().unwrap();
        // Selected by the name token "Rust"; no extracted skills, so 0%.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["matchPercentage"], 0);
    }
}
