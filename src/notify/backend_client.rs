use crate::clerk_error::ClerkError;
use crate::default_config::{BUILDS_ENDPOINT, USER_AGENT};
use crate::model::build_report::BuildReport;
use crate::report::normalize_base_url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::collections::HashMap;

/// Client of the Build Clerk backend api.
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Creates a backend client.
    ///
    /// # Arguments
    ///
    /// * `server_url` - Base URL of the backend, a trailing slash is added when missing.
    /// * `headers` - Extra headers sent with every request.
    pub fn new(server_url: &str, headers: &HashMap<String, String>) -> Result<Self, ClerkError> {
        Ok(Self {
            base_url: normalize_base_url(Some(server_url)),
            client: Client::builder()
                .default_headers(to_header_map(headers)?)
                .user_agent(USER_AGENT)
                .build()?,
        })
    }

    pub fn builds_url(&self) -> String {
        format!("{}{}", self.base_url, BUILDS_ENDPOINT)
    }

    /// # notify build
    ///
    /// POST the report once. Any non-2xx answer is an error.
    pub async fn notify_build(&self, report: &BuildReport) -> Result<(), ClerkError> {
        let url = self.builds_url();
        let body = serde_json::to_vec(report)?;

        let resp = self
            .client
            .post(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        Err(ClerkError::DeliveryRejected {
            url,
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        })
    }
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ClerkError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ClerkError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ClerkError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_details::BuildDetails;
    use crate::model::build_status::BuildStatus;
    use crate::model::scm::Scm;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample() -> BuildReport {
        BuildReport::new(
            "demo".to_string(),
            "job/demo/".to_string(),
            BuildDetails::new(
                42,
                BuildStatus::Success,
                Scm::new("main", "abc123"),
                "http://ci.example.com/job/demo/42/".to_string(),
            ),
        )
    }

    #[test]
    fn test_builds_url() {
        let headers = HashMap::new();
        assert_eq!(
            BackendClient::new("http://clerk:9090", &headers)
                .unwrap()
                .builds_url(),
            "http://clerk:9090/builds"
        );
        assert_eq!(
            BackendClient::new("http://clerk:9090/api/", &headers)
                .unwrap()
                .builds_url(),
            "http://clerk:9090/api/builds"
        );
    }

    #[test]
    fn test_invalid_header() {
        let headers = HashMap::from([("bad header".to_string(), "x".to_string())]);
        let err = BackendClient::new("http://clerk", &headers).err().unwrap();
        assert!(matches!(err, ClerkError::InvalidHeader { name, .. } if name == "bad header"));
    }

    #[tokio::test]
    async fn test_notify_build_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/builds"))
            .and(header("content-type", "application/json"))
            .and(header("x-clerk-token", "t0k3n"))
            .and(body_json(json!({
                "name": "demo",
                "url": "job/demo/",
                "details": {
                    "number": 42,
                    "status": "SUCCESS",
                    "scm": { "branch": "main", "commit": "abc123" },
                    "url": "http://ci.example.com/job/demo/42/"
                }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let headers = HashMap::from([("X-Clerk-Token".to_string(), "t0k3n".to_string())]);
        let client = BackendClient::new(&server.uri(), &headers).unwrap();

        client.notify_build(&sample()).await.unwrap();
    }

    #[tokio::test]
    async fn test_notify_build_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/builds"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Cannot parse build report"))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri(), &HashMap::new()).unwrap();
        let err = client.notify_build(&sample()).await.unwrap_err();

        match err {
            ClerkError::DeliveryRejected { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Cannot parse build report");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notify_build_unreachable() {
        let client = BackendClient::new("http://127.0.0.1:1", &HashMap::new()).unwrap();
        let err = client.notify_build(&sample()).await.unwrap_err();
        assert!(matches!(err, ClerkError::Transport(_)));
    }
}
