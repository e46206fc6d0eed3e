//! # Console Shell
//!
//! Mounts one page per invocation: builds the view model for the selected
//! command, drives it against the backend and renders the outcome.

use std::sync::{Arc, Mutex};

use crate::cmd_args::{
    ApplicationFields, ApplicationsCommand, CompaniesCommand, CompanyFields, JobFields,
    JobsCommand, Page, UserFields, UsersCommand,
};
use crate::console::events::FormEvent;
use crate::console::services::ApiClient;
use crate::console::view_models::{
    ApplicationForm, ApplicationList, CompanyForm, CompanyList, DetailState, FormError,
    FormModel, JobDetail, JobForm, JobList, SubmitOutcome, UserForm, UserList,
};
use crate::console::views::{
    render_field_errors, render_form, render_job_detail, render_list, render_notice,
    render_options,
};

/// Rendered result of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    pub text: String,
    pub success: bool,
}

impl ShellOutput {
    fn new(text: impl Into<String>, success: bool) -> Self {
        Self {
            text: text.into(),
            success,
        }
    }

    /// Process exit code for this output
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}

pub struct Shell {
    api: ApiClient,
    verbose: bool,
}

impl Shell {
    pub fn new(api: ApiClient, verbose: bool) -> Self {
        Self { api, verbose }
    }

    pub async fn run(&self, page: &Page) -> Result<ShellOutput, FormError> {
        tracing::debug!("Mounting page {:?}", page);
        match page {
            Page::Users(UsersCommand::List) => {
                let mut view = UserList::new();
                view.load(&self.api).await;
                Ok(ShellOutput::new(render_list(&view), view.items().is_some()))
            }
            Page::Users(UsersCommand::Create(fields)) => self.create_user(fields).await,
            Page::Companies(CompaniesCommand::List) => {
                let mut view = CompanyList::new();
                view.load(&self.api).await;
                Ok(ShellOutput::new(render_list(&view), view.items().is_some()))
            }
            Page::Companies(CompaniesCommand::Create(fields)) => self.create_company(fields).await,
            Page::Jobs(JobsCommand::List) => {
                let mut list = JobList::new();
                list.load(&self.api).await;
                Ok(ShellOutput::new(
                    render_list(list.view()),
                    list.view().items().is_some(),
                ))
            }
            Page::Jobs(JobsCommand::Show { id }) => Ok(self.show_job(*id).await),
            Page::Jobs(JobsCommand::Create(fields)) => self.save_job(JobForm::new(), fields).await,
            Page::Jobs(JobsCommand::Edit { id, fields }) => self.edit_job(*id, fields).await,
            Page::Jobs(JobsCommand::Delete { id }) => Ok(self.delete_job(*id).await),
            Page::Applications(ApplicationsCommand::List) => {
                let mut view = ApplicationList::new();
                view.load(&self.api).await;
                Ok(ShellOutput::new(render_list(&view), view.items().is_some()))
            }
            Page::Applications(ApplicationsCommand::Create(fields)) => {
                self.create_application(fields).await
            }
        }
    }

    async fn create_user(&self, fields: &UserFields) -> Result<ShellOutput, FormError> {
        let mut user = UserForm::new();
        fill(
            user.form_mut(),
            &[
                ("full_name", &fields.full_name),
                ("email", &fields.email),
                ("phone", &fields.phone),
            ],
        )?;
        let outcome = user.submit(&self.api).await;
        Ok(self.submit_output(user.title(), user.form(), outcome))
    }

    async fn create_company(&self, fields: &CompanyFields) -> Result<ShellOutput, FormError> {
        let mut company = CompanyForm::new();
        fill(
            company.form_mut(),
            &[
                ("name", &fields.name),
                ("website", &fields.website),
                ("description", &fields.description),
            ],
        )?;
        let outcome = company.submit(&self.api).await;
        Ok(self.submit_output(company.title(), company.form(), outcome))
    }

    async fn show_job(&self, id: i64) -> ShellOutput {
        let mut detail = JobDetail::new(id);
        detail.load(&self.api).await;
        let found = matches!(detail.state(), DetailState::Ready(_));
        ShellOutput::new(render_job_detail(&detail), found)
    }

    async fn edit_job(&self, id: i64, fields: &JobFields) -> Result<ShellOutput, FormError> {
        let mut detail = JobDetail::new(id);
        detail.load(&self.api).await;
        let Some(job) = detail.job() else {
            return Ok(ShellOutput::new(render_job_detail(&detail), false));
        };
        self.save_job(JobForm::edit(job), fields).await
    }

    async fn save_job(
        &self,
        mut job_form: JobForm,
        fields: &JobFields,
    ) -> Result<ShellOutput, FormError> {
        job_form.mount(&self.api).await;
        if self.verbose {
            println!("{}", render_options("Company", job_form.company_options()));
        }

        let saved = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&saved);
        job_form.on_save(Box::new(move |event| {
            if let FormEvent::Updated { id, .. } = event {
                if let Ok(mut saved) = sink.lock() {
                    *saved = Some(*id);
                }
            }
        }));

        fill(
            job_form.form_mut(),
            &[
                ("title", &fields.title),
                ("location", &fields.location),
                ("salary", &fields.salary),
                ("company_id", &fields.company_id),
                ("description", &fields.description),
            ],
        )?;
        let outcome = job_form.submit(&self.api).await;
        let mut output = self.submit_output(job_form.title(), job_form.form(), outcome);

        let updated = saved.lock().ok().and_then(|saved| *saved);
        if let Some(id) = updated {
            let mut detail = JobDetail::new(id);
            detail.load(&self.api).await;
            output.text = format!("{}\n\n{}", output.text, render_job_detail(&detail));
        }
        Ok(output)
    }

    async fn delete_job(&self, id: i64) -> ShellOutput {
        let mut list = JobList::new();
        list.load(&self.api).await;
        let deleted = list.delete(&self.api, id).await;

        let mut text = String::new();
        if let Some(notice) = list.notice() {
            text.push_str(&render_notice(notice));
            text.push('\n');
        }
        text.push_str(&render_list(list.view()));
        ShellOutput::new(text, deleted)
    }

    async fn create_application(
        &self,
        fields: &ApplicationFields,
    ) -> Result<ShellOutput, FormError> {
        let mut application = ApplicationForm::new();
        application.mount(&self.api).await;
        if self.verbose {
            println!("{}", render_options("Applicant", application.user_options()));
            println!("{}", render_options("Job", application.job_options()));
        }

        fill(
            application.form_mut(),
            &[
                ("user_id", &fields.user_id),
                ("job_id", &fields.job_id),
                ("resume_url", &fields.resume_url),
                ("cover_letter", &fields.cover_letter),
                ("expected_salary", &fields.expected_salary),
                ("status", &fields.status),
            ],
        )?;
        if fields.cover_letter.is_some() {
            tracing::debug!("Cover letter: {}", application.cover_letter_counter());
        }
        let outcome = application.submit(&self.api).await;
        Ok(self.submit_output(application.title(), application.form(), outcome))
    }

    fn submit_output(&self, title: &str, form: &FormModel, outcome: SubmitOutcome) -> ShellOutput {
        if self.verbose {
            println!("{}", render_form(title, form));
        }
        match outcome {
            SubmitOutcome::Blocked => ShellOutput::new(render_field_errors(form), false),
            SubmitOutcome::Succeeded | SubmitOutcome::Failed => {
                let text = form.notice().map(render_notice).unwrap_or_default();
                ShellOutput::new(text, outcome == SubmitOutcome::Succeeded)
            }
        }
    }
}

/// Type each supplied value into its field and leave the field, the way
/// a user tabbing through the form would.
fn fill(form: &mut FormModel, values: &[(&str, &Option<String>)]) -> Result<(), FormError> {
    for (name, value) in values {
        if let Some(value) = value {
            form.set_value(name, value.as_str())?;
            form.blur(name)?;
        }
    }
    Ok(())
}
