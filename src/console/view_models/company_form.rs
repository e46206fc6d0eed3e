//! # Company Form
//!
//! Create-only controller for `POST /companies`.

use super::form::{FormModel, SubmitOutcome};
use super::validation::{FieldSpec, Rule};
use crate::console::events::{FormEvent, FormEventHandler, FormEventHandlers, Resource};
use crate::console::models::{Company, NewCompany};
use crate::console::services::{ApiClient, RequestError};

pub const COMPANY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Company Name",
        initial: "",
        rules: &[Rule::Required("Company name is required")],
    },
    FieldSpec {
        name: "website",
        label: "Website",
        initial: "",
        rules: &[Rule::Url("Must be a valid URL")],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        initial: "",
        rules: &[],
    },
];

#[derive(Debug)]
pub struct CompanyForm {
    form: FormModel,
    events: FormEventHandlers,
}

impl CompanyForm {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(COMPANY_FIELDS),
            events: FormEventHandlers::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        "Create New Company"
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

    pub fn prepare(&mut self) -> Option<NewCompany> {
        if !self.form.begin_submit() {
            return None;
        }
        let Some(name) = self.form.optional_text("name") else {
            self.form.abort_submit();
            return None;
        };
        Some(NewCompany {
            name,
            website: self.form.optional_text("website"),
            description: self.form.optional_text("description"),
        })
    }

    pub fn complete(&mut self, result: Result<Company, RequestError>) -> SubmitOutcome {
        match result {
            Ok(company) => {
                tracing::info!("Created company {}", company.id);
                self.form.finish_success("Company created successfully!", true);
                self.events.publish(FormEvent::Created {
                    resource: Resource::Company,
                    id: company.id,
                });
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                self.form.finish_failure(&e, "Error creating company");
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        let Some(payload) = self.prepare() else {
            return SubmitOutcome::Blocked;
        };
        let result = api.companies().create(&payload).await;
        self.complete(result)
    }
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_must_be_a_url_when_present() {
        let mut form = CompanyForm::new();
        form.form_mut().set_value("name", "Acme").unwrap();
        form.form_mut().set_value("website", "acme dot com").unwrap();
        assert!(form.prepare().is_none());
        assert_eq!(form.form().error("website"), Some("Must be a valid URL"));

        form.form_mut().set_value("website", "").unwrap();
        let payload = form.prepare().unwrap();
        assert_eq!(payload.website, None);
        assert_eq!(payload.description, None);
    }
}
