use serde::Deserialize;
use std::fmt::Display;

/// Result code as reported by Jenkins. Unknown codes are kept verbatim.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String")]
pub enum RunResult {
    Success,
    Unstable,
    Failure,
    NotBuilt,
    Aborted,
    Other(String),
}

impl From<&str> for RunResult {
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_uppercase().as_str() {
            "SUCCESS" => RunResult::Success,
            "UNSTABLE" => RunResult::Unstable,
            "FAILURE" => RunResult::Failure,
            "NOT_BUILT" => RunResult::NotBuilt,
            "ABORTED" => RunResult::Aborted,
            _ => RunResult::Other(value.to_string()),
        }
    }
}

impl RunResult {
    /// # from optional
    ///
    /// A blank value or the literal `null` means jenkins has not attached a result yet.
    pub fn from_optional(value: Option<&str>) -> Option<Self> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("null"))
            .map(RunResult::from)
    }
}

impl From<String> for RunResult {
    fn from(value: String) -> Self {
        RunResult::from(value.as_str())
    }
}

impl Display for RunResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            RunResult::Success => "SUCCESS",
            RunResult::Unstable => "UNSTABLE",
            RunResult::Failure => "FAILURE",
            RunResult::NotBuilt => "NOT_BUILT",
            RunResult::Aborted => "ABORTED",
            RunResult::Other(code) => code.as_str(),
        };
        write!(f, "{}", str)
    }
}
