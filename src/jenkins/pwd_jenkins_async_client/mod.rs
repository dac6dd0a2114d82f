use crate::default_config::USER_AGENT;
use base64::Engine;
use jenkins_sdk::client::AsyncClient;
use jenkins_sdk::JenkinsError;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

/// Asynchronous Jenkins API client.
pub struct PwdJenkinsAsyncClient {
    url: String,
    username: String,
    pwd: String,
    client: Client,
}

impl PwdJenkinsAsyncClient {
    /// Creates a new asynchronous Jenkins API client authentic by Password.
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the Jenkins server, without trailing slash.
    /// * `username` - Username for authentication.
    /// * `pwd` - Password for authentication.
    pub fn new(url: &str, username: &str, pwd: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            url: url.into(),
            username: username.into(),
            pwd: pwd.into(),
            client: Client::builder().cookie_store(true).build()?,
        })
    }

    fn basic_auth(&self) -> String {
        format!(
            "Basic {}",
            base64::prelude::BASE64_STANDARD
                .encode(format!("{}:{}", self.username, self.pwd).as_bytes())
        )
    }
}

#[async_trait::async_trait]
impl AsyncClient for PwdJenkinsAsyncClient {
    /// Sends an asynchronous HTTP request to the Jenkins server.
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<String, JenkinsError> {
        let url = format!("{}/{}", self.url, endpoint);

        let req = self
            .client
            .request(method.parse()?, url)
            .header(AUTHORIZATION, self.basic_auth())
            .header("User-Agent", USER_AGENT);

        let resp = if let Some(p) = params {
            req.form(&p).send().await?
        } else {
            req.send().await?
        };

        let resp = resp.error_for_status()?;
        Ok(resp.text().await?)
    }
}
