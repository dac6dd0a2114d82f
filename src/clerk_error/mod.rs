use crate::constant::log::*;
use crate::constant::util::{get_hidden_sensitive_string, SensitiveMode};
use crate::pretty_log::{colored_println, ThemeColor};
use crate::LoginMethod;
use formatx::formatx;
use jenkins_sdk::JenkinsError;
use std::fmt::Display;
use std::io::Write;
use std::ops::Add;

#[derive(Debug)]
pub enum ClerkError {
    Custom(String),
    /// A value the report cannot be built without was absent.
    MissingField(String),
    InvalidBuildNumber {
        name: String,
        value: String,
    },
    /// The backend answered with a non-success status.
    DeliveryRejected {
        url: String,
        status: u16,
        body: String,
    },
    Transport(reqwest::Error),
    Serialize(serde_json::Error),
    InvalidHeader {
        name: String,
        reason: String,
    },
    Config {
        path: String,
        e: toml::de::Error,
    },
    JenkinsQueryError {
        method: LoginMethod,
        url: String,
        username: String,
        key: String,
        e: JenkinsError,
    },
}

impl From<reqwest::Error> for ClerkError {
    fn from(value: reqwest::Error) -> Self {
        ClerkError::Transport(value)
    }
}

impl From<serde_json::Error> for ClerkError {
    fn from(value: serde_json::Error) -> Self {
        ClerkError::Serialize(value)
    }
}

impl Display for ClerkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ClerkError::Custom(msg) => msg.clone(),
            ClerkError::MissingField(field) => {
                formatx!(ERR_FIELD_WAS_NULL, field).unwrap_or_default()
            }
            ClerkError::InvalidBuildNumber { name, value } => {
                formatx!(ERR_BUILD_NUMBER_INVALID, name, value).unwrap_or_default()
            }
            ClerkError::DeliveryRejected { url, status, body } => {
                formatx!(ERR_DELIVERY_REJECTED, url, status, body).unwrap_or_default()
            }
            ClerkError::Transport(e) => {
                formatx!(ERR_DELIVERY_TRANSPORT, e.to_string()).unwrap_or_default()
            }
            ClerkError::Serialize(e) => {
                formatx!(ERR_SERIALIZE_REPORT, e.to_string()).unwrap_or_default()
            }
            ClerkError::InvalidHeader { name, reason } => {
                formatx!(ERR_INVALID_HEADER, name, reason).unwrap_or_default()
            }
            ClerkError::Config { path, e } => {
                formatx!(ERR_CONFIG_INVALID, path, e.to_string()).unwrap_or_default()
            }
            ClerkError::JenkinsQueryError {
                method,
                url,
                username,
                key,
                e,
            } => {
                let msg = match method {
                    LoginMethod::ApiToken => formatx!(
                        ERR_JENKINS_QUERY_MAY_BE_API_TOKEN_INVALID,
                        url,
                        username,
                        get_hidden_sensitive_string(key, SensitiveMode::Normal(4)),
                        e.to_string()
                    ),
                    LoginMethod::Pwd => formatx!(
                        ERR_JENKINS_QUERY_MAY_BE_PWD_INVALID,
                        url,
                        username,
                        get_hidden_sensitive_string(key, SensitiveMode::Full),
                        e.to_string()
                    ),
                }
                .unwrap_or_default();

                ERR_JENKINS_CLIENT_INVALID_SIMPLE
                    .to_string()
                    .add("\n")
                    .add(msg.as_str())
            }
        };
        write!(f, "{}", str)
    }
}

impl ClerkError {
    pub fn colored_println<W: Write>(&self, log: &mut W) {
        colored_println(log, ThemeColor::Error, self.to_string().as_str());
    }
}

impl std::error::Error for ClerkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClerkError::Transport(e) => Some(e),
            ClerkError::Serialize(e) => Some(e),
            ClerkError::Config { e, .. } => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ClerkError::MissingField("GIT_COMMIT".to_string());
        assert_eq!(err.to_string(), "GIT_COMMIT variable was null");
    }

    #[test]
    fn test_delivery_rejected_message() {
        let err = ClerkError::DeliveryRejected {
            url: "http://clerk/builds".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Backend http://clerk/builds rejected the build report with status 500. boom"
        );
    }

    #[test]
    fn test_jenkins_query_error_hides_key() {
        let err = ClerkError::JenkinsQueryError {
            method: LoginMethod::Pwd,
            url: "http://ci".to_string(),
            username: "bot".to_string(),
            key: "hunter2".to_string(),
            e: JenkinsError::RequestError("401".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("*******"));
        assert!(!msg.contains("hunter2"));
    }
}
