pub mod backend_client;
pub mod notify_params;

use crate::clerk_error::ClerkError;
use crate::constant::log::*;
use crate::host::HostRun;
use crate::model::build_report::BuildReport;
use crate::notify::backend_client::BackendClient;
use crate::pretty_log::{colored_println, error_detail_println, ThemeColor};
use crate::report::ReportBuilder;
use formatx::formatx;
use std::collections::HashMap;
use std::io::Write;

/// # Notification Service
///
/// Sends build reports to the backend, best effort: failures end up in the build log
/// and never reach the caller.
pub struct NotificationService {
    report_builder: ReportBuilder,
    headers: HashMap<String, String>,
    dry_run: bool,
}

impl NotificationService {
    pub fn new(report_builder: ReportBuilder) -> Self {
        Self {
            report_builder,
            headers: HashMap::new(),
            dry_run: false,
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// # send notification
    ///
    /// Build the report of `run` and post it to `server_url`, exactly once.
    pub async fn send_notification<W: Write>(
        &self,
        log: &mut W,
        run: &dyn HostRun,
        server_url: &str,
        scm_vars: &HashMap<String, String>,
    ) {
        if let Err(e) = self.try_send_notification(log, run, server_url, scm_vars).await {
            log_notification_failure(log, &e);
        }
    }

    async fn try_send_notification<W: Write>(
        &self,
        log: &mut W,
        run: &dyn HostRun,
        server_url: &str,
        scm_vars: &HashMap<String, String>,
    ) -> Result<(), ClerkError> {
        let notification = self.report_builder.build(log, run, scm_vars)?;

        if self.dry_run {
            colored_println(
                log,
                ThemeColor::Main,
                &formatx!(BUILD_REPORT_DRY_RUN, notification.to_string()).unwrap_or_default(),
            );
            return Ok(());
        }

        let client = BackendClient::new(server_url, &self.headers)?;
        colored_println(
            log,
            ThemeColor::Main,
            &formatx!(
                SENDING_BUILD_REPORT,
                client.builds_url(),
                notification.to_string()
            )
            .unwrap_or_default(),
        );

        client.notify_build(&notification).await?;

        colored_println(log, ThemeColor::Success, BUILD_REPORT_SENT);
        colored_println(log, ThemeColor::Second, &summary_of(&notification));
        Ok(())
    }
}

fn summary_of(report: &BuildReport) -> String {
    let details = report.details();
    formatx!(
        BUILD_REPORT_SUMMARY,
        report.name(),
        report.url(),
        details.number(),
        details.status(),
        details.scm().branch(),
        details.scm().commit(),
        details.url()
    )
    .unwrap_or_default()
}

/// # log notification failure
///
/// Message first, then the full detail of the error.
pub fn log_notification_failure<W: Write>(log: &mut W, err: &ClerkError) {
    colored_println(
        log,
        ThemeColor::Error,
        &formatx!(BUILD_REPORT_FAILED, err.to_string()).unwrap_or_default(),
    );
    error_detail_println(log, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::run_result::RunResult;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FinishedRun {
        result: Option<RunResult>,
        building: bool,
    }

    impl HostRun for FinishedRun {
        fn job_name(&self) -> &str {
            "demo"
        }

        fn job_url(&self) -> &str {
            "job/demo/"
        }

        fn number(&self) -> u32 {
            42
        }

        fn result(&self) -> Option<&RunResult> {
            self.result.as_ref()
        }

        fn is_building(&self) -> bool {
            self.building
        }

        fn url(&self) -> &str {
            "job/demo/42/"
        }
    }

    fn scm_vars() -> HashMap<String, String> {
        HashMap::from([
            ("GIT_LOCAL_BRANCH".to_string(), "main".to_string()),
            ("GIT_COMMIT".to_string(), "abc123".to_string()),
        ])
    }

    fn service() -> NotificationService {
        NotificationService::new(ReportBuilder::new(Some("http://ci.example.com")))
    }

    async fn received_reports(server: &MockServer) -> Vec<BuildReport> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice::<BuildReport>(&req.body).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_send_notification_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/builds"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut log = Vec::new();
        let run = FinishedRun {
            result: None,
            building: true,
        };
        service()
            .send_notification(&mut log, &run, &server.uri(), &scm_vars())
            .await;

        let reports = received_reports(&server).await;
        assert_eq!(reports.len(), 1);
        let value = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(value["details"]["status"], "SUCCESS");
        assert_eq!(value["details"]["scm"]["branch"], "main");
        assert_eq!(value["details"]["scm"]["commit"], "abc123");
        assert_eq!(
            value["details"]["url"],
            "http://ci.example.com/job/demo/42/"
        );

        let content = String::from_utf8(log).unwrap();
        assert!(content.contains("Sending build report to"));
        assert!(content.contains(BUILD_REPORT_SENT));
        assert!(content.contains("demo (job/demo/) #42 SUCCESS on main@abc123"));
    }

    #[tokio::test]
    async fn test_failure_result_ignores_building_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        for building in [true, false] {
            let run = FinishedRun {
                result: Some(RunResult::Failure),
                building,
            };
            service()
                .send_notification(&mut Vec::<u8>::new(), &run, &server.uri(), &scm_vars())
                .await;
        }

        let reports = received_reports(&server).await;
        assert_eq!(reports.len(), 2);
        for report in reports {
            assert_eq!(
                serde_json::to_value(&report).unwrap()["details"]["status"],
                "FAILED"
            );
        }
    }

    #[tokio::test]
    async fn test_backend_error_is_logged_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/builds"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let mut log = Vec::new();
        let run = FinishedRun {
            result: Some(RunResult::Success),
            building: false,
        };
        service()
            .send_notification(&mut log, &run, &server.uri(), &scm_vars())
            .await;

        let content = String::from_utf8(log).unwrap();
        assert!(content.contains("Failed to send build report"));
        assert!(content.contains("DeliveryRejected"));
        assert!(!content.contains(BUILD_REPORT_SENT));
    }

    #[tokio::test]
    async fn test_missing_scm_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut log = Vec::new();
        let mut vars = scm_vars();
        vars.remove("GIT_LOCAL_BRANCH");
        let run = FinishedRun {
            result: Some(RunResult::Success),
            building: false,
        };
        service()
            .send_notification(&mut log, &run, &server.uri(), &vars)
            .await;

        let content = String::from_utf8(log).unwrap();
        assert!(content.contains("Failed to send build report: GIT_LOCAL_BRANCH variable was null"));
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut log = Vec::new();
        let run = FinishedRun {
            result: None,
            building: false,
        };
        service()
            .with_dry_run(true)
            .send_notification(&mut log, &run, &server.uri(), &scm_vars())
            .await;

        let content = String::from_utf8(log).unwrap();
        assert!(content.contains("Dry run"));
        assert!(content.contains("\"FAILED\""));
    }

    #[tokio::test]
    async fn test_dry_run_ignores_invalid_header() {
        let mut log = Vec::new();
        let run = FinishedRun {
            result: Some(RunResult::Success),
            building: false,
        };
        service()
            .with_headers(HashMap::from([("bad header".to_string(), "x".to_string())]))
            .with_dry_run(true)
            .send_notification(&mut log, &run, "http://127.0.0.1:1", &scm_vars())
            .await;

        let content = String::from_utf8(log).unwrap();
        assert!(content.contains("Dry run"));
        assert!(content.contains("\"SUCCESS\""));
        assert!(!content.contains("Failed to send build report"));
    }

    #[tokio::test]
    async fn test_invalid_header_is_logged_when_sending() {
        let mut log = Vec::new();
        let run = FinishedRun {
            result: Some(RunResult::Success),
            building: false,
        };
        service()
            .with_headers(HashMap::from([("bad header".to_string(), "x".to_string())]))
            .send_notification(&mut log, &run, "http://127.0.0.1:1", &scm_vars())
            .await;

        let content = String::from_utf8(log).unwrap();
        assert!(content.contains("Failed to send build report: Invalid header `bad header`"));
    }
}
