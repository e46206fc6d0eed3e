//! Job entity, its create payload and its partial update payload

use super::company::CompanySummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    pub company_id: i64,
    #[serde(default)]
    pub company: Option<CompanySummary>,
}

impl Job {
    /// Name of the embedded company, if the server sent one
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewJob {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub company_id: i64,
}

/// Body of `PATCH /jobs/{id}`.
///
/// Absent keys are left unchanged on the server. `Some(None)` is sent as
/// `null` and clears an optional column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

impl From<NewJob> for JobPatch {
    fn from(job: NewJob) -> Self {
        Self {
            title: Some(job.title),
            location: job.location.map(Some),
            salary: job.salary.map(Some),
            description: job.description.map(Some),
            company_id: Some(job.company_id),
        }
    }
}

/// Embedded job summary on application reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_should_deserialize_with_embedded_company() {
        let job: Job = serde_json::from_value(json!({
            "id": 4,
            "title": "Engineer",
            "location": null,
            "salary": 120000,
            "company_id": 3,
            "company": {"id": 3, "name": "Acme"}
        }))
        .unwrap();

        assert_eq!(job.salary, Some(120000));
        assert_eq!(job.location, None);
        assert_eq!(job.company_name(), Some("Acme"));
    }

    #[test]
    fn new_job_should_omit_absent_salary() {
        let job = NewJob {
            title: "Engineer".to_string(),
            location: None,
            salary: None,
            description: None,
            company_id: 3,
        };
        assert_eq!(
            serde_json::to_value(&job).unwrap(),
            json!({"title": "Engineer", "company_id": 3})
        );
    }

    #[test]
    fn empty_patch_should_serialize_to_empty_object() {
        assert_eq!(serde_json::to_value(JobPatch::default()).unwrap(), json!({}));
    }

    #[test]
    fn cleared_patch_fields_should_serialize_as_null() {
        let patch = JobPatch {
            location: Some(None),
            salary: Some(Some(90000)),
            ..JobPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"location": null, "salary": 90000})
        );
    }
}
