use crate::host::run_result::RunResult;
use serde::Deserialize;

#[derive(Deserialize, Debug, PartialEq)]
pub struct RunState {
    pub number: u32,

    /// null until jenkins attaches the terminal result.
    #[serde(default)]
    pub result: Option<RunResult>,

    #[serde(default)]
    pub building: bool,
}
