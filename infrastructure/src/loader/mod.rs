//! Spec loader adapter
//!
//! Implements [`SpecLoaderPort`] for local files and HTTP URLs. Format
//! detection lives in [`format`], transport in [`http`].

pub mod format;
pub mod http;

pub use format::{is_yaml_content, parse_spec};
pub use http::HttpSettings;

use agent_tools_application::{LoadError, SpecLoaderPort, SpecSource};
use agent_tools_domain::OpenApiDocument;
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, warn};

/// Loads OpenAPI documents from files or URLs
pub struct SpecLoader {
    client: Client,
}

impl SpecLoader {
    pub fn new(settings: &HttpSettings) -> Result<Self, LoadError> {
        Ok(Self {
            client: http::build_client(settings)?,
        })
    }

    async fn load_file(&self, path: &Path) -> Result<OpenApiDocument, LoadError> {
        let content = tokio::fs::read_to_string(path).await?;
        parse_spec(&content, path.to_str())
    }

    async fn load_url(&self, url: &str) -> Result<OpenApiDocument, LoadError> {
        let content = http::fetch_text(&self.client, url).await?;

        if format::has_yaml_preamble(&content) {
            debug!("Content appears to be YAML format");
            match format::parse_yaml(&content) {
                Ok(value) => return Ok(OpenApiDocument::new(value)),
                Err(e) => warn!("YAML parsing error: {}", e),
            }
        }

        let filename = url.rsplit('/').next();
        parse_spec(&content, filename)
    }
}

#[async_trait]
impl SpecLoaderPort for SpecLoader {
    async fn load(&self, source: &SpecSource) -> Result<OpenApiDocument, LoadError> {
        match source {
            SpecSource::File(path) => self.load_file(path).await,
            SpecSource::Url(url) => self.load_url(url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn loader() -> SpecLoader {
        SpecLoader::new(&HttpSettings {
            user_agent: "agent-tools-test".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "openapi: 3.0.0\npaths:\n  /pets:\n    get: {{}}").unwrap();

        let spec = loader()
            .load(&SpecSource::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(spec.as_value()["paths"]["/pets"]["get"], json!({}));
    }

    #[tokio::test]
    async fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"openapi": "3.0.0", "paths": {{}}}}"#).unwrap();

        let spec = loader()
            .load(&SpecSource::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(spec.as_value()["openapi"], "3.0.0");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = loader()
            .load(&SpecSource::File("/nonexistent/spec.json".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_url_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/openapi.json"))
            .and(header("user-agent", "agent-tools-test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"openapi": "3.0.0", "paths": {}}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/v1/openapi.json", server.uri());
        let spec = loader().load(&SpecSource::Url(url)).await.unwrap();
        assert_eq!(spec.as_value()["openapi"], "3.0.0");
    }

    #[tokio::test]
    async fn test_load_url_yaml_without_extension() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/spec"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("---\nopenapi: 3.1.0\npaths: {}\n", "text/plain"),
            )
            .mount(&server)
            .await;

        let spec = loader()
            .load(&SpecSource::Url(format!("{}/spec", server.uri())))
            .await
            .unwrap();
        assert_eq!(spec.as_value()["openapi"], "3.1.0");
    }

    #[tokio::test]
    async fn test_load_url_latin1_charset() {
        let server = MockServer::start().await;
        // "Café" in ISO-8859-1
        let body = b"{\"info\": {\"title\": \"Caf\xe9\"}}".to_vec();
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body, "application/json; charset=iso-8859-1"),
            )
            .mount(&server)
            .await;

        let spec = loader()
            .load(&SpecSource::Url(format!("{}/spec.json", server.uri())))
            .await
            .unwrap();
        assert_eq!(spec.title(), Some("Café"));
    }

    #[tokio::test]
    async fn test_load_url_non_200_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = loader()
            .load(&SpecSource::Url(format!("{}/missing.json", server.uri())))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::HttpStatus(404)));
    }
}
