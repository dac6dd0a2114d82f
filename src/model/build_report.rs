use crate::model::build_details::BuildDetails;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// # Build Report
///
/// One notification event, posted as:
///
/// ```json
/// {
///   "name": "demo",
///   "url": "job/demo/",
///   "details": {
///     "number": 42,
///     "status": "SUCCESS",
///     "scm": { "branch": "main", "commit": "abc123" },
///     "url": "http://ci.example.com/job/demo/42/"
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BuildReport {
    name: String,
    url: String,
    details: BuildDetails,
}

impl BuildReport {
    pub fn new(name: String, url: String, details: BuildDetails) -> Self {
        Self { name, url, details }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn details(&self) -> &BuildDetails {
        &self.details
    }
}

impl Display for BuildReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
