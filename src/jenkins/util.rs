use crate::report::normalize_base_url;
use reqwest::Url;

/// # get jenkins job short url
///
/// Relative url of a job from its full name: `team/demo` -> `job/team/job/demo/`.
/// Segments are percent-encoded the way jenkins does: `my job` -> `job/my%20job/`.
pub fn get_jenkins_job_short_url(full_job_name: &str) -> String {
    full_job_name
        .split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| format!("job/{}/", encode_path_segment(seg)))
        .collect()
}

fn encode_path_segment(segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://jenkins/") else {
        return segment.to_string();
    };

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(segment);
    }

    url.path().trim_start_matches('/').to_string()
}

/// # get relative url
///
/// Strip the jenkins web root from an absolute url. `None` when the url lives elsewhere.
pub fn get_relative_url(absolute_url: &str, jenkins_url: Option<&str>) -> Option<String> {
    let base = normalize_base_url(jenkins_url);
    if base.is_empty() {
        return None;
    }

    absolute_url.strip_prefix(base.as_str()).map(|s| s.to_string())
}

/// # get jenkins api url
///
/// `jenkins-sdk` clients join `{url}/{endpoint}`, so the root must not end with a slash.
pub fn get_jenkins_api_root(jenkins_url: &str) -> String {
    jenkins_url.trim().trim_end_matches('/').to_string()
}
