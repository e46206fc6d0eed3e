//! # Job Form
//!
//! Create/edit controller for jobs. In edit mode the form is seeded from
//! an existing job, submits a partial update, and notifies its host
//! through the completion handlers instead of resetting.

use super::form::{FormModel, SelectOption, SubmitOutcome};
use super::validation::{FieldSpec, Rule};
use crate::console::events::{FormEvent, FormEventHandler, FormEventHandlers, Resource};
use crate::console::models::{Job, JobPatch, NewJob, Notice};
use crate::console::services::{ApiClient, RequestError};

pub const JOB_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Job Title",
        initial: "",
        rules: &[
            Rule::Required("Title is required"),
            Rule::MinLength(3, "Title must be at least 3 characters"),
        ],
    },
    FieldSpec {
        name: "location",
        label: "Location",
        initial: "",
        rules: &[],
    },
    FieldSpec {
        name: "salary",
        label: "Salary",
        initial: "",
        rules: &[Rule::WholeNumber {
            not_a_number: "Salary must be a number",
            negative: "Salary must be positive",
            fractional: "Salary must be a whole number",
            too_large: "Salary is too large",
        }],
    },
    FieldSpec {
        name: "company_id",
        label: "Company",
        initial: "",
        rules: &[Rule::Reference("Company is required")],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        initial: "",
        rules: &[],
    },
];

#[derive(Debug)]
pub struct JobForm {
    form: FormModel,
    events: FormEventHandlers,
    /// Identifier of the job being edited; `None` in create mode
    editing: Option<i64>,
    companies: Vec<SelectOption>,
}

impl JobForm {
    /// Form for creating a new job
    pub fn new() -> Self {
        Self {
            form: FormModel::new(JOB_FIELDS),
            events: FormEventHandlers::new(),
            editing: None,
            companies: Vec::new(),
        }
    }

    /// Form for editing an existing job, pre-populated from it
    pub fn edit(job: &Job) -> Self {
        let values = [
            ("title", job.title.clone()),
            ("location", job.location.clone().unwrap_or_default()),
            (
                "salary",
                job.salary.map(|s| s.to_string()).unwrap_or_default(),
            ),
            ("company_id", job.company_id.to_string()),
            ("description", job.description.clone().unwrap_or_default()),
        ];
        Self {
            form: FormModel::with_values(JOB_FIELDS, values),
            events: FormEventHandlers::new(),
            editing: Some(job.id),
            companies: Vec::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit Job"
        } else {
            "Create New Job"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Update Job"
        } else {
            "Create Job"
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormModel {
        &mut self.form
    }

    /// Register a completion handler; fires with `FormEvent::Updated` after a successful edit
    pub fn on_save(&mut self, handler: FormEventHandler) {
        self.events.subscribe(handler);
    }

    /// Companies available in the company selection input
    pub fn company_options(&self) -> &[SelectOption] {
        &self.companies
    }

    /// Load the company options. A failure leaves a standing error notice
    /// but the rest of the form stays editable.
    pub async fn mount(&mut self, api: &ApiClient) {
        let result = api.companies().list().await;
        self.apply_companies(result.map(|companies| {
            companies
                .into_iter()
                .map(|c| SelectOption::new(c.id, c.name))
                .collect()
        }));
    }

    pub fn apply_companies(&mut self, result: Result<Vec<SelectOption>, RequestError>) {
        match result {
            Ok(options) => self.companies = options,
            Err(e) => {
                tracing::warn!("Loading companies failed: {}", e);
                self.form.set_notice(Notice::error("Error loading companies"));
            }
        }
    }

    fn payload(&self) -> Option<NewJob> {
        Some(NewJob {
            title: self.form.optional_text("title")?,
            location: self.form.optional_text("location"),
            salary: self.form.optional_number("salary"),
            description: self.form.optional_text("description"),
            company_id: self.form.reference("company_id")?,
        })
    }

    /// Partial update for edit mode. Optional fields that were
    /// pre-populated and are now blank are sent as `null`.
    fn patch(&self, payload: NewJob) -> JobPatch {
        let mut patch = JobPatch::from(payload);
        if self.form.is_cleared("location") {
            patch.location = Some(None);
        }
        if self.form.is_cleared("salary") {
            patch.salary = Some(None);
        }
        if self.form.is_cleared("description") {
            patch.description = Some(None);
        }
        patch
    }

    pub fn prepare(&mut self) -> Option<NewJob> {
        if !self.form.begin_submit() {
            return None;
        }
        let payload = self.payload();
        if payload.is_none() {
            self.form.abort_submit();
        }
        payload
    }

    pub fn complete(&mut self, result: Result<Job, RequestError>) -> SubmitOutcome {
        match (result, self.editing) {
            (Ok(job), Some(_)) => {
                tracing::info!("Updated job {}", job.id);
                self.form.finish_success("Job updated successfully!", false);
                self.events.publish(FormEvent::Updated {
                    resource: Resource::Job,
                    id: job.id,
                });
                SubmitOutcome::Succeeded
            }
            (Ok(job), None) => {
                tracing::info!("Created job {}", job.id);
                self.form.finish_success("Job created successfully!", true);
                self.events.publish(FormEvent::Created {
                    resource: Resource::Job,
                    id: job.id,
                });
                SubmitOutcome::Succeeded
            }
            (Err(e), Some(_)) => {
                self.form.finish_failure(&e, "Error updating job");
                SubmitOutcome::Failed
            }
            (Err(e), None) => {
                self.form.finish_failure(&e, "Error creating job");
                SubmitOutcome::Failed
            }
        }
    }

    /// Create or update depending on the mode the form was built in
    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        let Some(payload) = self.prepare() else {
            return SubmitOutcome::Blocked;
        };
        let result = match self.editing {
            Some(id) => api.jobs().update(id, &self.patch(payload)).await,
            None => api.jobs().create(&payload).await,
        };
        self.complete(result)
    }
}

impl Default for JobForm {
    fn default() -> Self {
        Self::new()
    }
}
