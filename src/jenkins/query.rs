use crate::clerk_error::ClerkError;
use crate::jenkins::jenkins_endpoint::run_state::RunStateInfo;
use crate::jenkins::jenkins_model::run_state::RunState;
use crate::jenkins::pwd_jenkins_async_client::PwdJenkinsAsyncClient;
use crate::jenkins::util::get_jenkins_api_root;
use crate::LoginMethod;
use jenkins_sdk::client::AsyncClient;
use jenkins_sdk::{AsyncQuery, JenkinsAsyncClient, JenkinsError};

pub enum ClerkJenkinsClient {
    PwdClient(PwdJenkinsAsyncClient),
    ApiTokenClient(JenkinsAsyncClient),
}

#[async_trait::async_trait]
impl AsyncClient for ClerkJenkinsClient {
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<String, JenkinsError> {
        match self {
            ClerkJenkinsClient::PwdClient(c) => c.request(method, endpoint, params).await,
            ClerkJenkinsClient::ApiTokenClient(c) => c.request(method, endpoint, params).await,
        }
    }
}

/// Credentials used to read run state from jenkins.
#[derive(Debug, Clone)]
pub struct JenkinsCredentials {
    pub url: String,
    pub username: String,
    pub key: String,
    pub method: LoginMethod,
}

impl JenkinsCredentials {
    /// # try from parts
    ///
    /// Password wins over api token when both are given. `None` when anything required is missing.
    pub fn try_from_parts(
        url: Option<String>,
        username: Option<String>,
        pwd: Option<String>,
        api_token: Option<String>,
    ) -> Option<Self> {
        let url = url?;
        let username = username?;
        let (method, key) = match (pwd, api_token) {
            (Some(pwd), _) => (LoginMethod::Pwd, pwd),
            (None, Some(token)) => (LoginMethod::ApiToken, token),
            (None, None) => return None,
        };

        Some(Self {
            url,
            username,
            key,
            method,
        })
    }

    pub fn to_client(&self) -> Result<ClerkJenkinsClient, ClerkError> {
        let root = get_jenkins_api_root(&self.url);
        Ok(match self.method {
            LoginMethod::Pwd => ClerkJenkinsClient::PwdClient(PwdJenkinsAsyncClient::new(
                &root,
                &self.username,
                &self.key,
            )?),
            LoginMethod::ApiToken => ClerkJenkinsClient::ApiTokenClient(JenkinsAsyncClient::new(
                &root,
                &self.username,
                &self.key,
            )),
        })
    }
}

pub async fn query_run_state(
    client: &ClerkJenkinsClient,
    run_url: &str,
) -> Result<RunState, JenkinsError> {
    AsyncQuery::query(
        &RunStateInfo {
            run_url: run_url.into(),
        },
        client,
    )
    .await
}

/// # query run state with credentials
///
/// Wraps failures with the (masked) credentials that were used.
pub async fn query_run_state_with_credentials(
    credentials: &JenkinsCredentials,
    run_url: &str,
) -> Result<RunState, ClerkError> {
    let client = credentials.to_client()?;

    query_run_state(&client, run_url)
        .await
        .map_err(|e| ClerkError::JenkinsQueryError {
            method: credentials.method,
            url: credentials.url.clone(),
            username: credentials.username.clone(),
            key: credentials.key.clone(),
            e,
        })
}
