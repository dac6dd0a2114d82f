use crate::model::build_status::BuildStatus;
use crate::model::scm::Scm;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BuildDetails {
    number: u32,
    status: BuildStatus,
    scm: Scm,
    /// absolute url of the build page.
    url: String,
}

impl BuildDetails {
    pub fn new(number: u32, status: BuildStatus, scm: Scm, url: String) -> Self {
        Self {
            number,
            status,
            scm,
            url,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn status(&self) -> BuildStatus {
        self.status
    }

    pub fn scm(&self) -> &Scm {
        &self.scm
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
