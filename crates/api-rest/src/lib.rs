//! # API REST
//!
//! REST API implementation for Oheng.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for request/response bodies and `oheng-core` for the assessment pipeline.

#![warn(rust_2018_idioms)]

use api_shared::{
    AssessReq, AssessRes, ConditionRes, ConditionsRes, ErrorRes, HealthRes, HealthService,
    NutrientRes, ReportSectionRes, SurveyItemRes, SurveyItemsRes,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use oheng_core::{AssessmentService, CoreError};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<AssessmentService>,
}

impl AppState {
    pub fn new(service: Arc<AssessmentService>) -> Self {
        Self { service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_survey_items, list_conditions, create_assessment),
    components(schemas(
        HealthRes,
        ErrorRes,
        SurveyItemRes,
        SurveyItemsRes,
        ConditionRes,
        ConditionsRes,
        AssessReq,
        AssessRes,
        NutrientRes,
        ReportSectionRes,
    ))
)]
pub struct ApiDoc;

/// Build the full router, including Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/survey-items", get(list_survey_items))
        .route("/conditions", get(list_conditions))
        .route("/assessments", post(create_assessment))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorRes>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorRes {
            error: message.into(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/survey-items",
    responses(
        (status = 200, description = "Survey schema in declaration order", body = SurveyItemsRes)
    )
)]
#[axum::debug_handler]
async fn list_survey_items(State(_state): State<AppState>) -> Json<SurveyItemsRes> {
    Json(api_shared::survey_items())
}

#[utoipa::path(
    get,
    path = "/conditions",
    responses(
        (status = 200, description = "Condition catalog with nutrient lists", body = ConditionsRes)
    )
)]
#[axum::debug_handler]
async fn list_conditions(State(_state): State<AppState>) -> Json<ConditionsRes> {
    Json(api_shared::conditions())
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = AssessReq,
    responses(
        (status = 200, description = "Assessment and report", body = AssessRes),
        (status = 400, description = "Invalid input", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Run one submission through the assessment pipeline.
///
/// # Errors
/// Returns `400 Bad Request` if the body is not a well-formed `AssessReq` or any submitted
/// value fails validation, and `500 Internal Server Error` for configuration failures.
#[axum::debug_handler]
async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<AssessReq>, JsonRejection>,
) -> Result<Json<AssessRes>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("rejected assessment body: {}", rejection.body_text());
        api_error(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let result = req
        .into_subject()
        .and_then(|subject| state.service.assess(&subject));

    match result {
        Ok(assessment) => {
            tracing::info!(
                category = %assessment.category,
                nutrients = assessment.recommendations.len(),
                "assessment served"
            );
            Ok(Json(AssessRes::from(&assessment)))
        }
        Err(CoreError::InvalidInput(msg)) => {
            tracing::debug!("rejected assessment: {}", msg);
            Err(api_error(StatusCode::BAD_REQUEST, msg))
        }
        Err(e) => {
            tracing::error!("Assessment error: {:?}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use oheng_core::{BalanceState, CoreConfig, KnowledgeBase};
    use serde_json::Value;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let kb = KnowledgeBase::bundled().expect("bundled knowledge base parses");
        let cfg = CoreConfig::new(
            PathBuf::from("knowledge_base.json"),
            2025,
            BalanceState::Deficient,
        )
        .expect("valid config");
        let service = AssessmentService::new(Arc::new(kb), cfg);
        router(AppState::new(Arc::new(service)))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json body")
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn survey_items_are_listed_in_order() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/survey-items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let items = body["items"].as_array().expect("items array");
        assert_eq!(items.len(), 20);
        assert_eq!(items[0]["key"], "fatigue");
        assert_eq!(items[19]["key"], "lethargy");
    }

    #[tokio::test]
    async fn conditions_are_listed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/conditions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["conditions"].as_array().map(Vec::len), Some(8));
    }

    #[tokio::test]
    async fn assessment_returns_report() {
        let response = test_app()
            .oneshot(post_json(
                "/assessments",
                r#"{"name":"Hong","gender":"male","birth_date":"1993-03-29",
                    "height_cm":170,"weight_kg":70,"flags":["fatigue","stress"],
                    "conditions":["hypertension"]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["category"], "Water");
        assert_eq!(body["season"], "Spring");
        assert_eq!(body["bmi"], 24.2);
        assert_eq!(body["bmi_band"], "Normal");

        let names: Vec<&str> = body["recommendations"]
            .as_array()
            .expect("recommendations")
            .iter()
            .filter_map(|entry| entry["name"].as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Coenzyme Q10",
                "Magnesium",
                "Omega-3",
                "Potassium",
                "Selenium",
                "Vitamin E"
            ]
        );
        assert!(body["report_text"]
            .as_str()
            .expect("report text")
            .starts_with("Profile\nHong (male) was born under the Water element in Spring."));
    }

    #[tokio::test]
    async fn invalid_input_is_bad_request() {
        let response = test_app()
            .oneshot(post_json(
                "/assessments",
                r#"{"name":"Hong","gender":"male","birth_date":"1930-01-01",
                    "height_cm":170,"weight_kg":70}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().expect("error message").contains("1940"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request_with_error_body() {
        for body in [
            r#"{"name":"Hong","gender":"male","birth_date":"1993-03-29",
                "height_cm":-1,"weight_kg":70}"#,
            r#"{"name":"Hong","gender":"male","birth_date":"1993-03-29",
                "height_cm":70000,"weight_kg":70}"#,
            r#"{"name":"Hong""#,
        ] {
            let response = test_app()
                .oneshot(post_json("/assessments", body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = json_body(response).await;
            assert!(!body["error"].as_str().expect("error message").is_empty());
        }
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["paths"]["/assessments"].is_object());
    }
}
