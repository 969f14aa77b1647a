// src/analysis/client.rs
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ServiceError;
use crate::model::{AnalysisResult, ScenarioRequest};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/analyze-scenario";

/// Anything that can turn a scenario request into an analysis.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &ScenarioRequest) -> Result<AnalysisResult, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    endpoint: String,
    client: Client,
}

impl HttpAnalysisService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAnalysisService {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &ScenarioRequest) -> Result<AnalysisResult, ServiceError> {
        debug!(endpoint = %self.endpoint, constraints = request.constraints.len(), "posting scenario");

        // .json() sets Content-Type: application/json
        let response = self.client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "analysis service returned an error status");
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let result = serde_json::from_str::<AnalysisResult>(&body)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ScenarioRequest {
        ScenarioRequest::new(
            "Launching a new product".to_string(),
            vec!["Budget: $10,000".to_string(), "Timeline: 3 months".to_string()],
        )
    }

    fn result_body() -> serde_json::Value {
        json!({
            "scenarioSummary": "Launching a product on a tight budget.",
            "potentialPitfalls": ["Underestimating marketing costs", "Slipping timeline"],
            "proposedStrategies": ["Phase the launch"],
            "recommendedResources": ["Lean Startup"],
            "disclaimer": "This is not professional advice."
        })
    }

    fn service_for(server: &MockServer) -> HttpAnalysisService {
        HttpAnalysisService::new(format!("{}/api/analyze-scenario", server.uri()))
    }

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(HttpAnalysisService::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn posts_json_and_parses_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-scenario"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "scenario": "Launching a new product",
                "constraints": ["Budget: $10,000", "Timeline: 3 months"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(result_body()))
            .expect(1)
            .mount(&server)
            .await;

        let result = service_for(&server).analyze(&request()).await.unwrap();
        assert_eq!(result.scenario_summary, "Launching a product on a tight budget.");
        assert_eq!(
            result.potential_pitfalls,
            vec!["Underestimating marketing costs", "Slipping timeline"]
        );
        assert_eq!(result.disclaimer, "This is not professional advice.");
    }

    #[tokio::test]
    async fn server_error_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = service_for(&server).analyze(&request()).await.unwrap_err();
        assert_eq!(err, ServiceError::Status(500));
        assert_eq!(err.to_string(), "HTTP error! Status: 500");
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = service_for(&server).analyze(&request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn wrong_shape_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "nope" })))
            .mount(&server)
            .await;

        let err = service_for(&server).analyze(&request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Bind then drop so nothing is listening on the port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api/analyze-scenario", listener.local_addr().unwrap());
        drop(listener);

        let err = HttpAnalysisService::new(endpoint).analyze(&request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)), "got {:?}", err);
    }
}
