use crate::clerk_error::ClerkError;
use crate::default_config::*;
use crate::host::run_result::RunResult;
use crate::host::HostRun;
use crate::jenkins::util::{get_jenkins_job_short_url, get_relative_url};
use std::collections::HashMap;

/// # Env Run
///
/// A [`HostRun`] read from the environment Jenkins exports to a build step.
///
/// Jenkins does not export the run result, so it is supplied by the caller
/// (or queried from the Jenkins api, see [`crate::jenkins::query`]).
#[derive(Debug, Clone, PartialEq)]
pub struct EnvRun {
    job_name: String,
    job_url: String,
    number: u32,
    result: Option<RunResult>,
    building: bool,
    url: String,
}

impl EnvRun {
    /// # from env vars
    ///
    /// ### Arguments
    ///
    /// * `vars`: environment of the build step.
    /// * `jenkins_url`: web root of jenkins, used to turn `JOB_URL` and `BUILD_URL` into relative urls.
    pub fn from_env_vars(
        vars: &HashMap<String, String>,
        jenkins_url: Option<&str>,
    ) -> Result<Self, ClerkError> {
        let full_name = non_blank(vars, ENV_JOB_NAME)
            .ok_or_else(|| ClerkError::MissingField(ENV_JOB_NAME.to_string()))?;

        let number_str = non_blank(vars, ENV_BUILD_NUMBER)
            .ok_or_else(|| ClerkError::MissingField(ENV_BUILD_NUMBER.to_string()))?;
        let number = number_str
            .parse::<u32>()
            .map_err(|_| ClerkError::InvalidBuildNumber {
                name: ENV_BUILD_NUMBER.to_string(),
                value: number_str.to_string(),
            })?;

        let job_name = non_blank(vars, ENV_JOB_BASE_NAME)
            .or_else(|| full_name.rsplit('/').next())
            .unwrap_or(full_name)
            .to_string();

        let job_url = non_blank(vars, ENV_JOB_URL)
            .and_then(|abs| get_relative_url(abs, jenkins_url))
            .unwrap_or_else(|| get_jenkins_job_short_url(full_name));

        let url = non_blank(vars, ENV_BUILD_URL)
            .and_then(|abs| get_relative_url(abs, jenkins_url))
            .unwrap_or_else(|| format!("{}{}/", job_url, number));

        Ok(Self {
            job_name,
            job_url,
            number,
            result: None,
            building: true,
            url,
        })
    }

    pub fn with_result(mut self, result: Option<RunResult>) -> Self {
        self.result = result;
        self
    }

    pub fn with_building(mut self, building: bool) -> Self {
        self.building = building;
        self
    }
}

fn non_blank<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl HostRun for EnvRun {
    fn job_name(&self) -> &str {
        &self.job_name
    }

    fn job_url(&self) -> &str {
        &self.job_url
    }

    fn number(&self) -> u32 {
        self.number
    }

    fn result(&self) -> Option<&RunResult> {
        self.result.as_ref()
    }

    fn is_building(&self) -> bool {
        self.building
    }

    fn url(&self) -> &str {
        &self.url
    }
}
