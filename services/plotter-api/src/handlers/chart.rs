//! Chart rendering handler.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use difficulty_chart::Profile;
use serde::Deserialize;
use tracing::{debug, error, warn};

use super::error_response;
use crate::metrics::{record_render_duration, record_request, Outcome};
use crate::state::AppState;
use crate::validation::parse_chart_request;

#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Chart profile; compact when omitted.
    #[serde(default)]
    pub layout: Option<String>,
}

/// POST /chart - Render a vote histogram as a WebP image
pub async fn chart_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ChartParams>,
    body: Bytes,
) -> Response {
    let profile = match params.layout.as_deref().map(str::parse::<Profile>) {
        None => Profile::default(),
        Some(Ok(profile)) => profile,
        Some(Err(e)) => {
            record_request(Outcome::Rejected);
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let votes = match parse_chart_request(&body) {
        Ok(votes) => votes,
        Err(e) => {
            debug!(error = %e, "Rejected chart request");
            record_request(Outcome::Rejected);
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let start = Instant::now();
    let render_state = Arc::clone(&state);
    let result =
        tokio::task::spawn_blocking(move || render_state.renderer(profile).render(&votes)).await;
    record_render_duration(profile.as_str(), start.elapsed());

    match result {
        Ok(Ok(image)) => {
            record_request(Outcome::Rendered);
            debug!(layout = %profile, bytes = image.len(), "Chart rendered");
            ([(header::CONTENT_TYPE, "image/webp")], image).into_response()
        }
        Ok(Err(e)) => {
            error!(layout = %profile, error = %e, "Chart rendering failed");
            record_request(Outcome::Failed);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => {
            warn!(error = %e, "Render task did not complete");
            record_request(Outcome::Failed);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "render task failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use difficulty_chart::{ChartProfiles, TextRenderer};

    fn test_state() -> Arc<AppState> {
        let state =
            AppState::from_profiles(ChartProfiles::default(), Arc::new(TextRenderer::builtin()))
                .unwrap();
        Arc::new(state)
    }

    async fn post(layout: Option<&str>, body: &'static str) -> Response {
        let params = ChartParams {
            layout: layout.map(str::to_string),
        };
        chart_handler(Extension(test_state()), Query(params), Bytes::from(body)).await
    }

    async fn error_message(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["error"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_chart_handler_returns_webp() {
        let response = post(None, r#"{"votes":{"Medium":10,"Medium +":5}}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/webp");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[0..4], b"RIFF");
        assert_eq!(&body[8..12], b"WEBP");
    }

    #[tokio::test]
    async fn test_wide_layout() {
        let response = post(Some("wide"), r#"{"votes":{"Hell":3}}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_largest_counts_render() {
        let body = r#"{"votes":{"Easy":9223372036854775807,"Hell":9223372036854775807}}"#;
        let response = post(None, body).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/webp");
    }

    #[tokio::test]
    async fn test_unknown_layout_rejected() {
        let response = post(Some("huge"), r#"{"votes":{"Hell":3}}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validation_errors_are_json() {
        let cases = [
            ("{not json}", "invalid JSON"),
            ("{}", "missing votes field"),
            (r#"{"votes":{"NotReal":5}}"#, "invalid difficulty: NotReal"),
            (r#"{"votes":{"Easy":-1}}"#, "invalid vote count for Easy"),
            (r#"{"votes":{}}"#, "no votes provided"),
        ];

        for (body, message) in cases {
            let response = post(None, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(error_message(response).await, message);
        }
    }
}
