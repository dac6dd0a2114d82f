use crate::clerk_error::ClerkError;
use crate::constant::log::*;
use crate::default_config::{SCM_COMMIT, SCM_LOCAL_BRANCH};
use crate::host::run_result::RunResult;
use crate::host::HostRun;
use crate::model::build_details::BuildDetails;
use crate::model::build_report::BuildReport;
use crate::model::build_status::BuildStatus;
use crate::model::scm::Scm;
use crate::pretty_log::{colored_println, ThemeColor};
use std::collections::HashMap;
use std::io::Write;

/// # Report Builder
///
/// Turns the loosely typed state of a finished run into a [`BuildReport`].
pub struct ReportBuilder {
    /// normalized jenkins web root, empty when not configured.
    jenkins_url: String,
}

impl ReportBuilder {
    pub fn new(jenkins_url: Option<&str>) -> Self {
        Self {
            jenkins_url: normalize_base_url(jenkins_url),
        }
    }

    /// # build
    ///
    /// ### Arguments
    ///
    /// * `log`: build log, receives a line when the status had to be inferred.
    /// * `run`: the run that just finished.
    /// * `scm_vars`: must hold `GIT_LOCAL_BRANCH` and `GIT_COMMIT`.
    pub fn build<W: Write>(
        &self,
        log: &mut W,
        run: &dyn HostRun,
        scm_vars: &HashMap<String, String>,
    ) -> Result<BuildReport, ClerkError> {
        let build_status = determine_build_status(log, run);
        let scm = fetch_scm_details(scm_vars)?;

        Ok(BuildReport::new(
            run.job_name().to_string(),
            run.job_url().to_string(),
            BuildDetails::new(
                run.number(),
                build_status,
                scm,
                format!("{}{}", self.jenkins_url, run.url()),
            ),
        ))
    }
}

/// # determine build status
///
/// Jenkins may fire the notification before the result is attached to the run
/// (JENKINS-46325), so a null result on a run that is still building counts as success.
pub fn determine_build_status<W: Write>(log: &mut W, run: &dyn HostRun) -> BuildStatus {
    match run.result() {
        Some(result) => convert_result(result),
        None if run.is_building() => {
            colored_println(log, ThemeColor::Warn, RESULT_NULL_BUT_BUILDING);
            BuildStatus::Success
        }
        None => {
            colored_println(log, ThemeColor::Warn, RESULT_NULL_NOT_BUILDING);
            BuildStatus::Failed
        }
    }
}

/// # convert result
///
/// Only an explicit failure or unstable result is a failure, anything else is presumed positive.
// Revisit whether unknown codes should fail 'safe' the other way.
pub fn convert_result(result: &RunResult) -> BuildStatus {
    match result {
        RunResult::Failure | RunResult::Unstable => BuildStatus::Failed,
        _ => BuildStatus::Success,
    }
}

fn fetch_scm_details(scm_vars: &HashMap<String, String>) -> Result<Scm, ClerkError> {
    let branch = scm_vars
        .get(SCM_LOCAL_BRANCH)
        .ok_or_else(|| ClerkError::MissingField(SCM_LOCAL_BRANCH.to_string()))?;
    let commit = scm_vars
        .get(SCM_COMMIT)
        .ok_or_else(|| ClerkError::MissingField(SCM_COMMIT.to_string()))?;

    Ok(Scm::new(branch.as_str(), commit.as_str()))
}

/// # normalize base url
///
/// Trimmed, with exactly one trailing slash. Blank or unset becomes the empty string.
pub fn normalize_base_url(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => {
            if url.ends_with('/') {
                url.to_string()
            } else {
                format!("{}/", url)
            }
        }
        _ => String::new(),
    }
}
