use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct NotifyParams {
    /// backend base url, like "http://clerk.example.com:9090".
    /// falls back to BUILD_CLERK_SERVER, then `backend_url` of the config file.
    #[arg(short, long)]
    pub server: Option<String>,

    /// jenkins web root, used to build the absolute build url.
    /// falls back to JENKINS_URL, then `jenkins_url` of the config file.
    #[arg(long)]
    pub jenkins_url: Option<String>,

    /// host result code of the run, like SUCCESS, UNSTABLE, FAILURE.
    /// unset means jenkins has not attached a result yet.
    #[arg(short, long)]
    pub result: Option<String>,

    /// whether the run is still building.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub building: bool,

    /// local branch, overrides GIT_LOCAL_BRANCH.
    #[arg(long)]
    pub branch: Option<String>,

    /// commit hash, overrides GIT_COMMIT.
    #[arg(long)]
    pub commit: Option<String>,

    /// ask jenkins for the run result when --result is not given.
    #[arg(short = 'q', long)]
    pub query_jenkins: bool,

    /// build and print the report without sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// config file or the directory holding it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
