use crate::assessment::{FlowError, ScoreRangeError};
use crate::config::ConfigError;
use crate::newsletter::NewsletterError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Score(ScoreRangeError),
    Flow(FlowError),
    Newsletter(NewsletterError),
    Answers(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Score(err) => write!(f, "invalid score: {}", err),
            AppError::Flow(err) => write!(f, "assessment error: {}", err),
            AppError::Newsletter(err) => write!(f, "newsletter error: {}", err),
            AppError::Answers(err) => write!(f, "unreadable answers: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Score(err) => Some(err),
            AppError::Flow(err) => Some(err),
            AppError::Newsletter(err) => Some(err),
            AppError::Answers(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Score(_) | AppError::Answers(_) => StatusCode::BAD_REQUEST,
            AppError::Flow(_) => StatusCode::CONFLICT,
            AppError::Newsletter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ScoreRangeError> for AppError {
    fn from(value: ScoreRangeError) -> Self {
        Self::Score(value)
    }
}

impl From<FlowError> for AppError {
    fn from(value: FlowError) -> Self {
        Self::Flow(value)
    }
}

impl From<NewsletterError> for AppError {
    fn from(value: NewsletterError) -> Self {
        Self::Newsletter(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Answers(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskScore;

    #[test]
    fn client_errors_map_to_4xx() {
        let score = AppError::from(ScoreRangeError(140)).into_response();
        assert_eq!(score.status(), StatusCode::BAD_REQUEST);

        let flow = AppError::from(FlowError::AlreadySubmitted(RiskScore::saturating(40)))
            .into_response();
        assert_eq!(flow.status(), StatusCode::CONFLICT);

        let newsletter = AppError::from(NewsletterError::MissingEmail).into_response();
        assert_eq!(newsletter.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn error_body_carries_the_message() {
        let response = AppError::from(ScoreRangeError(140)).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

        assert_eq!(
            body["error"],
            "invalid score: risk score 140 is outside 0..=100"
        );
    }

    #[test]
    fn io_errors_are_internal() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
