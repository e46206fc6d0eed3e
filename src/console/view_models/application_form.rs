//! # Application Form
//!
//! Create-only controller for `POST /applications`. Users and jobs are
//! loaded on mount to fill the two selection inputs.

use super::form::{FormModel, SelectOption, SubmitOutcome};
use super::validation::{FieldSpec, Rule};
use crate::console::events::{FormEvent, FormEventHandler, FormEventHandlers, Resource};
use crate::console::models::{Application, ApplicationStatus, NewApplication, Notice};
use crate::console::services::{ApiClient, RequestError};

/// Upper bound on cover letter length, in characters
pub const COVER_LETTER_MAX: usize = 5000;

const STATUS_VALUES: &[&str] = &["submitted", "reviewed", "rejected", "hired"];

pub const APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "user_id",
        label: "User",
        initial: "",
        rules: &[Rule::Reference("User is required")],
    },
    FieldSpec {
        name: "job_id",
        label: "Job",
        initial: "",
        rules: &[Rule::Reference("Job is required")],
    },
    FieldSpec {
        name: "resume_url",
        label: "Resume URL",
        initial: "",
        rules: &[Rule::Url("Must be a valid URL")],
    },
    FieldSpec {
        name: "expected_salary",
        label: "Expected Salary",
        initial: "",
        rules: &[Rule::WholeNumber {
            not_a_number: "Expected salary must be a number",
            negative: "Salary must be positive",
            fractional: "Salary must be a whole number",
            too_large: "Expected salary is too large",
        }],
    },
    FieldSpec {
        name: "cover_letter",
        label: "Cover Letter",
        initial: "",
        rules: &[Rule::MaxLength(
            COVER_LETTER_MAX,
            "Cover letter must be less than 5000 characters",
        )],
    },
    FieldSpec {
        name: "status",
        label: "Status",
        initial: "submitted",
        rules: &[Rule::OneOf(STATUS_VALUES, "Invalid status")],
    },
];

#[derive(Debug)]
pub struct ApplicationForm {
    form: FormModel,
    events: FormEventHandlers,
    users: Vec<SelectOption>,
    jobs: Vec<SelectOption>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(APPLICATION_FIELDS),
            events: FormEventHandlers::new(),
            users: Vec::new(),
            jobs: Vec::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        "Submit Application"
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormModel {
        &mut self.form
    }

    pub fn subscribe(&mut self, handler: FormEventHandler) {
        self.events.subscribe(handler);
    }

    pub fn user_options(&self) -> &[SelectOption] {
        &self.users
    }

    pub fn job_options(&self) -> &[SelectOption] {
        &self.jobs
    }

    pub fn status_options(&self) -> Vec<SelectOption> {
        ApplicationStatus::ALL
            .iter()
            .map(|status| SelectOption::new(status.as_str(), status.label()))
            .collect()
    }

    /// Character counter shown under the cover letter
    pub fn cover_letter_counter(&self) -> String {
        format!(
            "{}/{} characters",
            self.form.value("cover_letter").chars().count(),
            COVER_LETTER_MAX
        )
    }

    /// Load users and jobs. Each failure leaves a standing error notice.
    pub async fn mount(&mut self, api: &ApiClient) {
        let users = api.users().list().await.map(|users| {
            users
                .into_iter()
                .map(|u| SelectOption::new(u.id, format!("{} ({})", u.full_name, u.email)))
                .collect()
        });
        self.apply_users(users);

        let jobs = api.jobs().list().await.map(|jobs| {
            jobs.into_iter()
                .map(|j| SelectOption::new(j.id, j.title))
                .collect()
        });
        self.apply_jobs(jobs);
    }

    pub fn apply_users(&mut self, result: Result<Vec<SelectOption>, RequestError>) {
        match result {
            Ok(options) => self.users = options,
            Err(e) => {
                tracing::warn!("Loading users failed: {}", e);
                self.form.set_notice(Notice::error("Error loading users"));
            }
        }
    }

    pub fn apply_jobs(&mut self, result: Result<Vec<SelectOption>, RequestError>) {
        match result {
            Ok(options) => self.jobs = options,
            Err(e) => {
                tracing::warn!("Loading jobs failed: {}", e);
                self.form.set_notice(Notice::error("Error loading jobs"));
            }
        }
    }

    fn payload(&self) -> Option<NewApplication> {
        let status = match self.form.optional_text("status") {
            Some(status) => status.parse().ok()?,
            None => ApplicationStatus::default(),
        };
        Some(NewApplication {
            user_id: self.form.reference("user_id")?,
            job_id: self.form.reference("job_id")?,
            resume_url: self.form.optional_text("resume_url"),
            cover_letter: self.form.optional_text("cover_letter"),
            expected_salary: self.form.optional_number("expected_salary"),
            status,
        })
    }

    pub fn prepare(&mut self) -> Option<NewApplication> {
        if !self.form.begin_submit() {
            return None;
        }
        let payload = self.payload();
        if payload.is_none() {
            self.form.abort_submit();
        }
        payload
    }

    pub fn complete(&mut self, result: Result<Application, RequestError>) -> SubmitOutcome {
        match result {
            Ok(application) => {
                tracing::info!("Created application {}", application.id);
                self.form
                    .finish_success("Application submitted successfully!", true);
                self.events.publish(FormEvent::Created {
                    resource: Resource::Application,
                    id: application.id,
                });
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                self.form.finish_failure(&e, "Error submitting application");
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        let Some(payload) = self.prepare() else {
            return SubmitOutcome::Blocked;
        };
        let result = api.applications().create(&payload).await;
        self.complete(result)
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}
