//! Application entity, its status enum and its create payload

use super::company::CompanySummary;
use super::job::JobSummary;
use super::user::UserSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of an application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Reviewed,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    /// Capitalized label for select options and tables
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown application status '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub expected_salary: Option<i64>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub job: Option<JobSummary>,
    #[serde(default)]
    pub company: Option<CompanySummary>,
}

/// Body of `POST /applications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    pub user_id: i64,
    pub job_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<i64>,
    pub status: ApplicationStatus,
}
