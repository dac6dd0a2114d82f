/// Endpoint for retrieving the state of a Jenkins run.
pub struct RunStateInfo {
    /// Relative url of the run, like `job/demo/42/`.
    pub run_url: String,
}

impl jenkins_sdk::Endpoint for RunStateInfo {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    /// API path for retrieving run state.
    fn endpoint(&self) -> String {
        format!(
            "{}/api/json?tree=number,result,building",
            self.run_url.trim_end_matches('/')
        )
    }
}
