use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use diabeat::assessment::{steps_for, total_steps, Branch, RiskResult, RiskScore, StepDefinition};
use diabeat::content::ContentPage;
use diabeat::error::AppError;
use diabeat::newsletter::{self, SubscriptionAck, SubscriptionRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsQuery {
    pub(crate) score: u16,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StepsQuery {
    #[serde(default)]
    pub(crate) has_records: Option<Branch>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StepsResponse {
    pub(crate) has_records: Option<Branch>,
    pub(crate) total_steps: u8,
    pub(crate) steps: &'static [StepDefinition],
}

/// Every route the site exposes. None of them accepts an answer set.
pub(crate) fn site_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/results", get(results_endpoint))
        .route("/api/v1/assessment/steps", get(steps_endpoint))
        .route("/api/v1/content/:page", get(content_endpoint))
        .route("/api/v1/newsletter", post(newsletter_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn results_endpoint(
    Query(query): Query<ResultsQuery>,
) -> Result<Json<RiskResult>, AppError> {
    let score = RiskScore::new(query.score)?;
    let result = RiskResult::from_score(score);
    info!(score = score.value(), tier = %result.tier, "results view rendered");
    Ok(Json(result))
}

pub(crate) async fn steps_endpoint(Query(query): Query<StepsQuery>) -> Json<StepsResponse> {
    Json(StepsResponse {
        has_records: query.has_records,
        total_steps: total_steps(query.has_records),
        steps: steps_for(query.has_records),
    })
}

pub(crate) async fn content_endpoint(Path(page): Path<String>) -> Response {
    match ContentPage::from_slug(&page) {
        Some(content) => (StatusCode::OK, Json(content.to_json())).into_response(),
        None => {
            let payload = json!({ "error": format!("no content page named '{page}'") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn newsletter_endpoint(
    Json(request): Json<SubscriptionRequest>,
) -> Result<Json<SubscriptionAck>, AppError> {
    let ack = newsletter::acknowledge(&request)?;
    Ok(Json(ack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use diabeat::assessment::{Field, RiskTier};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn results_endpoint_rebuilds_view_from_score() {
        let Json(body) = results_endpoint(Query(ResultsQuery { score: 72 }))
            .await
            .expect("score in range");

        assert_eq!(body.tier, RiskTier::High);
        assert_eq!(body.recommendations.len(), 9);
    }

    #[tokio::test]
    async fn results_endpoint_rejects_scores_above_one_hundred() {
        let err = results_endpoint(Query(ResultsQuery { score: 155 }))
            .await
            .expect_err("out of range");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn results_route_requires_a_numeric_score() {
        let (status, _) = get_json(site_routes(), "/api/v1/results").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(site_routes(), "/api/v1/results?score=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_json(site_routes(), "/api/v1/results?score=30").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], "moderate");
        assert_eq!(body["label"], "Moderate");
    }

    #[tokio::test]
    async fn steps_route_describes_each_branch() {
        let (status, body) =
            get_json(site_routes(), "/api/v1/assessment/steps?has_records=yes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_steps"], 6);
        assert_eq!(body["steps"][3]["title"], "Medical Metrics");

        let (_, body) = get_json(site_routes(), "/api/v1/assessment/steps").await;
        assert_eq!(body["total_steps"], 5);
        assert_eq!(body["steps"][3]["required"], json!(["smoking", "activity"]));
    }

    #[tokio::test]
    async fn steps_endpoint_lists_required_fields() {
        let Json(body) = steps_endpoint(Query(StepsQuery {
            has_records: Some(Branch::Records),
        }))
        .await;

        assert_eq!(
            body.steps[4].required,
            &[Field::Cholesterol, Field::Triglycerides]
        );
    }

    #[tokio::test]
    async fn content_route_serves_known_pages_only() {
        let (status, body) = get_json(site_routes(), "/api/v1/content/faq").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entries"].as_array().map(Vec::len), Some(10));

        let (status, _) = get_json(site_routes(), "/api/v1/content/pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn newsletter_endpoint_acknowledges_without_storing() {
        let Json(ack) = newsletter_endpoint(Json(SubscriptionRequest {
            email: "reader@example.org".to_string(),
        }))
        .await
        .expect("accepted");
        assert!(ack.subscribed);

        let err = newsletter_endpoint(Json(SubscriptionRequest {
            email: "reader".to_string(),
        }))
        .await
        .expect_err("rejected");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let app = site_routes().layer(Extension(state));

        let (status, body) = get_json(app.clone(), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        readiness.store(true, std::sync::atomic::Ordering::Release);
        let (status, _) = get_json(app, "/ready").await;
        assert_eq!(status, StatusCode::OK);
    }
}
