pub mod env_run;
pub mod run_result;

use crate::host::run_result::RunResult;

/// # Host Run
///
/// Read-only view of a just finished build, exposing only what a build report needs.
/// Urls are relative to the host's web root, e.g. `job/demo/` and `job/demo/42/`.
pub trait HostRun {
    fn job_name(&self) -> &str;

    fn job_url(&self) -> &str;

    fn number(&self) -> u32;

    /// `None` while the host has not attached a terminal result yet.
    fn result(&self) -> Option<&RunResult>;

    fn is_building(&self) -> bool;

    fn url(&self) -> &str;
}
