pub const ERR_NEED_A_SERVER_URL: &str =
    "Need a backend server url. Pass --server, set {} or add `backend_url` to {}.";
pub const ERR_FIELD_WAS_NULL: &str = "{} variable was null";
pub const ERR_BUILD_NUMBER_INVALID: &str = "{} is not a valid build number: {}";
pub const ERR_DELIVERY_REJECTED: &str = "Backend {} rejected the build report with status {}. {}";
pub const ERR_DELIVERY_TRANSPORT: &str = "Cannot reach the backend. {}";
pub const ERR_SERIALIZE_REPORT: &str = "Cannot serialize the build report. {}";
pub const ERR_INVALID_HEADER: &str = "Invalid header `{}`. {}";
pub const ERR_CONFIG_UNREADABLE: &str = "Cannot read config file {}. {}";
pub const ERR_CONFIG_INVALID: &str = "Config file {} is invalid. {}";
pub const ERR_JENKINS_CLIENT_INVALID_SIMPLE: &str = "Cannot query jenkins.";
pub const ERR_JENKINS_QUERY_MAY_BE_API_TOKEN_INVALID: &str =
    "Url: {}.\nUsername: {}\nApi-Token: {}\nMaybe you should check your api token.\nErr: {}";
pub const ERR_JENKINS_QUERY_MAY_BE_PWD_INVALID: &str =
    "Url: {}.\nUsername: {}\nPassword: {}\nMaybe you should check your password.\nErr: {}";

pub const HINT_CONFIG_IGNORED: &str = "Ignoring config file: {}";
pub const HINT_NO_JENKINS_CREDENTIALS: &str =
    "No jenkins credentials configured, skip querying run state.";
pub const HINT_JENKINS_QUERY_SKIPPED: &str = "Cannot query run state, result stays unknown.";
pub const HINT_REMOTE_RUN_STATE: &str = "Jenkins reports run {} result {} (building: {}).";

pub const RESULT_NULL_BUT_BUILDING: &str =
    "Run result was null, but run is building - interpreting as success";
pub const RESULT_NULL_NOT_BUILDING: &str =
    "Run result was null, but run is not building - interpreting as failure";

pub const SENDING_BUILD_REPORT: &str = "Sending build report to {}:\n{}";
pub const BUILD_REPORT_DRY_RUN: &str = "Dry run, build report not sent:\n{}";
pub const BUILD_REPORT_SENT: &str = "Build report sent";
pub const BUILD_REPORT_SUMMARY: &str = "{} ({}) #{} {} on {}@{}: {}";
pub const BUILD_REPORT_FAILED: &str = "Failed to send build report: {}";
pub const BUILD_REPORT_FAILED_CAUSED_BY: &str = "Caused by: {}";
