use crate::clerk_error::ClerkError;
use crate::config::ClerkConfig;
use crate::constant::log::*;
use crate::constant::util::{first_non_blank, get_hidden_sensitive_string, SensitiveMode};
use crate::default_config::*;
use crate::host::env_run::EnvRun;
use crate::host::run_result::RunResult;
use crate::host::HostRun;
use crate::jenkins::query::{query_run_state_with_credentials, JenkinsCredentials};
use crate::notify::notify_params::NotifyParams;
use crate::notify::{log_notification_failure, NotificationService};
use crate::pretty_log::{colored_println, ThemeColor};
use crate::report::ReportBuilder;
use formatx::formatx;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// # load config
///
/// A broken config file is reported and ignored.
fn load_config<W: Write>(log: &mut W, path: Option<&Path>) -> ClerkConfig {
    match ClerkConfig::get_from_path(path) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            colored_println(
                log,
                ThemeColor::Warn,
                &formatx!(HINT_CONFIG_IGNORED, e.to_string()).unwrap_or_default(),
            );
            ClerkConfig::default()
        }
    }
}

/// # cli do notify
///
/// Report the current run (read from the step environment) to the backend.
///
/// Only a missing backend url is an error, notification failures are logged.
pub async fn cli_do_notify<W: Write>(log: &mut W, params: NotifyParams) -> Result<(), ClerkError> {
    let env: HashMap<String, String> = std::env::vars().collect();
    cli_do_notify_with_env(log, params, env).await
}

pub(crate) async fn cli_do_notify_with_env<W: Write>(
    log: &mut W,
    params: NotifyParams,
    mut env: HashMap<String, String>,
) -> Result<(), ClerkError> {
    let config = load_config(log, params.config.as_deref());

    let server_url = first_non_blank([
        params.server.as_deref(),
        env.get(ENV_SERVER_URL).map(String::as_str),
        config.backend_url.as_deref(),
    ])
    .ok_or_else(|| {
        ClerkError::Custom(
            formatx!(ERR_NEED_A_SERVER_URL, ENV_SERVER_URL, CONFIG_FILE_NAME).unwrap_or_default(),
        )
    })?;

    let jenkins_url = first_non_blank([
        params.jenkins_url.as_deref(),
        env.get(ENV_JENKINS_URL).map(String::as_str),
        config.jenkins_url.as_deref(),
    ]);

    if let Some(branch) = params.branch {
        env.insert(SCM_LOCAL_BRANCH.to_string(), branch);
    }
    if let Some(commit) = params.commit {
        env.insert(SCM_COMMIT.to_string(), commit);
    }

    let result = RunResult::from_optional(params.result.as_deref());
    let has_result = result.is_some();

    let mut run = match EnvRun::from_env_vars(&env, jenkins_url.as_deref()) {
        Ok(run) => run
            .with_result(result)
            .with_building(params.building),
        Err(e) => {
            log_notification_failure(log, &e);
            return Ok(());
        }
    };

    if !has_result && params.query_jenkins {
        run = resolve_remote_run_state(log, run, jenkins_url.clone(), &config).await;
    }

    NotificationService::new(ReportBuilder::new(jenkins_url.as_deref()))
        .with_headers(config.headers)
        .with_dry_run(params.dry_run)
        .send_notification(log, &run, &server_url, &env)
        .await;

    Ok(())
}

/// # resolve remote run state
///
/// Fill result and building flag from the jenkins api. On failure the run is left untouched.
async fn resolve_remote_run_state<W: Write>(
    log: &mut W,
    run: EnvRun,
    jenkins_url: Option<String>,
    config: &ClerkConfig,
) -> EnvRun {
    let Some(credentials) = JenkinsCredentials::try_from_parts(
        jenkins_url,
        config.jenkins_username.clone(),
        config.jenkins_pwd.clone(),
        config.jenkins_api_token.clone(),
    ) else {
        colored_println(log, ThemeColor::Warn, HINT_NO_JENKINS_CREDENTIALS);
        return run;
    };

    match query_run_state_with_credentials(&credentials, run.url()).await {
        Ok(state) => {
            colored_println(
                log,
                ThemeColor::Second,
                &formatx!(
                    HINT_REMOTE_RUN_STATE,
                    state.number,
                    state
                        .result
                        .as_ref()
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "null".to_string()),
                    state.building
                )
                .unwrap_or_default(),
            );
            run.with_result(state.result).with_building(state.building)
        }
        Err(e) => {
            e.colored_println(log);
            colored_println(log, ThemeColor::Warn, HINT_JENKINS_QUERY_SKIPPED);
            run
        }
    }
}

/// # cli do debug
///
/// Print the settings `bcn notify` would resolve, secrets masked.
pub fn cli_do_debug<W: Write>(log: &mut W, config_path: Option<&Path>) {
    let config = load_config(log, config_path);
    let mask = |v: &Option<String>| {
        v.as_deref()
            .map(|v| get_hidden_sensitive_string(v, SensitiveMode::Normal(4)))
    };

    let lines = [
        format!("CONFIG_FILE_NAME: {:#?}", CONFIG_FILE_NAME),
        format!("backend_url: {:#?}", config.backend_url),
        format!("jenkins_url: {:#?}", config.jenkins_url),
        format!("jenkins_username: {:#?}", config.jenkins_username),
        format!("jenkins_api_token: {:#?}", mask(&config.jenkins_api_token)),
        format!(
            "jenkins_pwd: {:#?}",
            config
                .jenkins_pwd
                .as_deref()
                .map(|v| get_hidden_sensitive_string(v, SensitiveMode::Full))
        ),
        format!(
            "headers: {:#?}",
            config.headers.keys().collect::<Vec<_>>()
        ),
    ];

    for line in lines {
        colored_println(log, ThemeColor::Main, &line);
    }
}
