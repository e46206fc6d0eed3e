//! # User Form
//!
//! Create-only controller for `POST /users`.

use super::form::{FormModel, SubmitOutcome};
use super::validation::{FieldSpec, Rule};
use crate::console::events::{FormEvent, FormEventHandler, FormEventHandlers, Resource};
use crate::console::models::{NewUser, User};
use crate::console::services::{ApiClient, RequestError};

pub const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "full_name",
        label: "Full Name",
        initial: "",
        rules: &[
            Rule::Required("Full name is required"),
            Rule::MinLength(2, "Name must be at least 2 characters"),
        ],
    },
    FieldSpec {
        name: "email",
        label: "Email",
        initial: "",
        rules: &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid email format"),
        ],
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        initial: "",
        rules: &[Rule::Phone("Invalid phone number format")],
    },
];

#[derive(Debug)]
pub struct UserForm {
    form: FormModel,
    events: FormEventHandlers,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(USER_FIELDS),
            events: FormEventHandlers::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        "Create New User"
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

    fn payload(&self) -> Option<NewUser> {
        Some(NewUser {
            full_name: self.form.optional_text("full_name")?,
            email: self.form.optional_text("email")?,
            phone: self.form.optional_text("phone"),
        })
    }

    /// Validate and enter `Submitting`, returning the body to send
    pub fn prepare(&mut self) -> Option<NewUser> {
        if !self.form.begin_submit() {
            return None;
        }
        let payload = self.payload();
        if payload.is_none() {
            self.form.abort_submit();
        }
        payload
    }

    /// Apply the server's answer to a prepared submit
    pub fn complete(&mut self, result: Result<User, RequestError>) -> SubmitOutcome {
        match result {
            Ok(user) => {
                tracing::info!("Created user {}", user.id);
                self.form.finish_success("User created successfully!", true);
                self.events.publish(FormEvent::Created {
                    resource: Resource::User,
                    id: user.id,
                });
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                self.form.finish_failure(&e, "Error creating user");
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        let Some(payload) = self.prepare() else {
            return SubmitOutcome::Blocked;
        };
        let result = api.users().create(&payload).await;
        self.complete(result)
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}
