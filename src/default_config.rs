pub const CONFIG_FILE_NAME: &str = ".build-clerk.toml";

pub const ENV_SERVER_URL: &str = "BUILD_CLERK_SERVER";
pub const ENV_JENKINS_URL: &str = "JENKINS_URL";
pub const ENV_JOB_NAME: &str = "JOB_NAME";
pub const ENV_JOB_BASE_NAME: &str = "JOB_BASE_NAME";
pub const ENV_JOB_URL: &str = "JOB_URL";
pub const ENV_BUILD_NUMBER: &str = "BUILD_NUMBER";
pub const ENV_BUILD_URL: &str = "BUILD_URL";

pub const SCM_LOCAL_BRANCH: &str = "GIT_LOCAL_BRANCH";
pub const SCM_COMMIT: &str = "GIT_COMMIT";

pub const BUILDS_ENDPOINT: &str = "builds";
pub const USER_AGENT: &str = concat!("build-clerk-notifier/", env!("CARGO_PKG_VERSION"));
