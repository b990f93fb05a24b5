//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{info, Span};

use crate::config::Config;

/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Hello from CI/CD Pipeline!";

/// Status reported by the health endpoint.
pub const HEALTHY: &str = "healthy";

/// Application state shared with handlers.
///
/// Holds an immutable snapshot of the deployment metadata and the service
/// span that handlers log through.
#[derive(Debug, Clone)]
pub struct AppState {
    info: Arc<DeploymentInfo>,
    span: Span,
}

#[derive(Debug)]
struct DeploymentInfo {
    version: String,
    environment: String,
    debug: bool,
}

impl AppState {
    /// Create app state from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        let span = tracing::info_span!(
            "service",
            version = %config.app_version,
            environment = %config.environment
        );

        Self {
            info: Arc::new(DeploymentInfo {
                version: config.app_version.clone(),
                environment: config.environment.clone(),
                debug: config.debug,
            }),
            span,
        }
    }

    /// Whether debug mode is on.
    pub fn debug(&self) -> bool {
        self.info.debug
    }

    /// Span handlers emit their log lines under.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Build the root endpoint payload.
    pub fn root_response(&self) -> RootResponse {
        RootResponse {
            message: GREETING,
            version: self.info.version.clone(),
            environment: self.info.environment.clone(),
        }
    }
}

/// Root endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    /// Constant greeting.
    pub message: &'static str,
    /// Application version.
    pub version: String,
    /// Deployment environment.
    pub environment: String,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Root handler - greeting plus version and environment.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    info!(parent: state.span(), "Root endpoint accessed");
    Json(state.root_response())
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    info!(parent: state.span(), "Health endpoint accessed");
    Json(HealthResponse { status: HEALTHY })
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_response_reflects_config() {
        let config = Config {
            app_version: "2.3.1".to_string(),
            environment: "production".to_string(),
            ..Config::default()
        };
        let state = AppState::new(&config);

        assert_eq!(
            state.root_response(),
            RootResponse {
                message: GREETING,
                version: "2.3.1".to_string(),
                environment: "production".to_string(),
            }
        );
    }

    #[test]
    fn root_response_serializes_in_field_order() {
        let state = AppState::new(&Config::default());
        let body = serde_json::to_string(&state.root_response()).unwrap();

        assert_eq!(
            body,
            r#"{"message":"Hello from CI/CD Pipeline!","version":"1.0.0","environment":"development"}"#
        );
    }

    #[test]
    fn app_state_debug_follows_config() {
        assert!(!AppState::new(&Config::default()).debug());

        let config = Config {
            debug: true,
            ..Config::default()
        };
        assert!(AppState::new(&config).debug());
    }

    #[tokio::test]
    async fn health_handler_reports_healthy() {
        let state = AppState::new(&Config::default());
        let Json(body) = health(State(state)).await;

        assert_eq!(body, HealthResponse { status: "healthy" });
    }

    #[tokio::test]
    async fn handlers_log_one_line_per_request() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();
        let state = AppState::new(&Config::default());

        root(State(state.clone())).await;
        health(State(state.clone())).await;

        assert_eq!(logs.count("Root endpoint accessed"), 1);
        assert_eq!(logs.count("Health endpoint accessed"), 1);

        health(State(state)).await;
        assert_eq!(logs.count("Health endpoint accessed"), 2);
        assert!(logs.contents().contains("INFO"));
    }

    #[tokio::test]
    async fn not_found_handler_returns_404() {
        assert_eq!(not_found().await, StatusCode::NOT_FOUND);
    }
}
