//! # Form State
//!
//! Editable field state shared by every form controller: current values,
//! touched flags, validation errors, the submission phase and the notice
//! left behind by the last asynchronous action.
//!
//! ```text
//!            submit (valid)            server ok
//! Editing ─────────────────▶ Submitting ──────────▶ Succeeded
//!    ▲                           │                      │
//!    │                           │ server/transport err │
//!    │                           ▼                      │
//!    └──────── edit/dismiss ── Failed ◀─────────────────┘ (edit/dismiss)
//! ```

use super::validation::{parse_reference, parse_whole_number, validate_value, FieldSpec};
use crate::console::models::Notice;
use crate::console::services::RequestError;
use std::collections::{BTreeMap, BTreeSet};

/// Errors raised when addressing a field the form does not have
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// Lifecycle of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed (or a submit was already running); no request was sent
    Blocked,
    Succeeded,
    Failed,
}

/// One entry of a selection input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormModel {
    fields: &'static [FieldSpec],
    initial: BTreeMap<&'static str, String>,
    values: BTreeMap<&'static str, String>,
    touched: BTreeSet<&'static str>,
    errors: BTreeMap<&'static str, String>,
    phase: FormPhase,
    notice: Option<Notice>,
}

impl FormModel {
    /// Create a form whose fields start at their declared initial values
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        let initial: BTreeMap<_, _> = fields
            .iter()
            .map(|field| (field.name, field.initial.to_string()))
            .collect();
        Self {
            fields,
            values: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            phase: FormPhase::Editing,
            notice: None,
        }
    }

    /// Create a form pre-populated with existing values (edit mode)
    pub fn with_values<I>(fields: &'static [FieldSpec], values: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut form = Self::new(fields);
        for (name, value) in values {
            if form.initial.contains_key(name) {
                form.initial.insert(name, value.clone());
                form.values.insert(name, value);
            }
        }
        form
    }

    fn spec(&self, name: &str) -> Result<&'static FieldSpec, FormError> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Current raw value of a field (empty for unknown names)
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Update a field's value. Touched fields are re-validated.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let spec = self.spec(name)?;
        self.values.insert(spec.name, value.into());
        if self.touched.contains(spec.name) {
            self.validate_field(spec.name)?;
        }
        if matches!(self.phase, FormPhase::Succeeded | FormPhase::Failed) {
            self.phase = FormPhase::Editing;
        }
        Ok(())
    }

    /// Mark a field touched and validate it
    pub fn blur(&mut self, name: &str) -> Result<(), FormError> {
        let spec = self.spec(name)?;
        self.touched.insert(spec.name);
        self.validate_field(spec.name)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Run one field's rules, replacing only that field's error
    pub fn validate_field(&mut self, name: &str) -> Result<(), FormError> {
        let spec = self.spec(name)?;
        match validate_value(spec, self.value(spec.name)) {
            Some(message) => {
                self.errors.insert(spec.name, message);
            }
            None => {
                self.errors.remove(spec.name);
            }
        }
        Ok(())
    }

    /// Run every field's rules and return the resulting error set
    pub fn validate_all(&mut self) -> &BTreeMap<&'static str, String> {
        self.errors = self
            .fields
            .iter()
            .filter_map(|spec| validate_value(spec, self.value(spec.name)).map(|m| (spec.name, m)))
            .collect();
        &self.errors
    }

    /// All current validation errors, touched or not
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Error to display for a field: only once it has been touched
    pub fn error(&self, name: &str) -> Option<&str> {
        if self.touched.contains(name) {
            self.errors.get(name).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Show a standing notice, e.g. a failed reference load
    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        if matches!(self.phase, FormPhase::Succeeded | FormPhase::Failed) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Validate everything and enter `Submitting` if the form is clean.
    ///
    /// Returns `false` when the submit must not reach the network.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.touched = self.fields.iter().map(|field| field.name).collect();
        if !self.validate_all().is_empty() {
            tracing::debug!("Submit blocked by {} invalid field(s)", self.errors.len());
            self.phase = FormPhase::Editing;
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Leave `Submitting` without an outcome
    pub fn abort_submit(&mut self) {
        if self.is_submitting() {
            self.phase = FormPhase::Editing;
        }
    }

    /// Record a successful submit, optionally resetting fields to their initial values
    pub fn finish_success(&mut self, message: &str, reset: bool) {
        if reset {
            self.reset();
        }
        self.notice = Some(Notice::success(message));
        self.phase = FormPhase::Succeeded;
    }

    /// Record a failed submit; user input is kept
    pub fn finish_failure(&mut self, error: &RequestError, fallback: &str) {
        tracing::warn!("Submit failed: {}", error);
        let message = error.server_message().unwrap_or(fallback);
        self.notice = Some(Notice::error(message));
        self.phase = FormPhase::Failed;
    }

    /// Restore initial values and clear touched flags and errors
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
    }

    /// Whether a field that started with a value is now blank
    pub fn is_cleared(&self, name: &str) -> bool {
        let initial = self.initial.get(name).map_or("", String::as_str);
        !initial.trim().is_empty() && self.value(name).trim().is_empty()
    }

    /// Trimmed text, `None` when blank
    pub fn optional_text(&self, name: &str) -> Option<String> {
        let value = self.value(name).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Whole number, `None` when blank
    pub fn optional_number(&self, name: &str) -> Option<i64> {
        parse_whole_number(self.value(name))
    }

    /// Identifier chosen in a selection input
    pub fn reference(&self, name: &str) -> Option<i64> {
        parse_reference(self.value(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::services::ErrorBody;
    use crate::console::view_models::validation::Rule;
    use reqwest::StatusCode;

    const FIELDS: &[FieldSpec] = &[
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
    ];

    fn server_error(message: Option<&str>) -> RequestError {
        RequestError::Server {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: message.map(str::to_string),
            },
        }
    }

    #[test]
    fn untouched_errors_should_stay_hidden() {
        let mut form = FormModel::new(FIELDS);
        form.validate_all();
        assert_eq!(
            form.errors().get("name").map(String::as_str),
            Some("Company name is required")
        );
        assert_eq!(form.error("name"), None);

        form.blur("name").unwrap();
        assert_eq!(form.error("name"), Some("Company name is required"));
    }

    #[test]
    fn touched_field_should_revalidate_on_change() {
        let mut form = FormModel::new(FIELDS);
        form.blur("website").unwrap();
        assert_eq!(form.error("website"), None);

        form.set_value("website", "nope").unwrap();
        assert_eq!(form.error("website"), Some("Must be a valid URL"));

        form.set_value("website", "https://acme.test").unwrap();
        assert_eq!(form.error("website"), None);
    }

    #[test]
    fn unknown_field_should_be_rejected() {
        let mut form = FormModel::new(FIELDS);
        assert_eq!(
            form.set_value("salary", "1"),
            Err(FormError::UnknownField("salary".to_string()))
        );
        assert!(form.blur("salary").is_err());
    }

    #[test]
    fn validation_should_be_idempotent() {
        let mut form = FormModel::new(FIELDS);
        form.set_value("website", "bad url").unwrap();
        let first = form.validate_all().clone();
        let second = form.validate_all().clone();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn invalid_submit_should_stay_editing_and_touch_everything() {
        let mut form = FormModel::new(FIELDS);
        assert!(!form.begin_submit());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.is_touched("name"));
        assert!(form.is_touched("website"));
        assert_eq!(form.error("name"), Some("Company name is required"));
    }

    #[test]
    fn valid_submit_should_enter_submitting_once() {
        let mut form = FormModel::new(FIELDS);
        form.set_value("name", "Acme").unwrap();
        assert!(form.begin_submit());
        assert!(form.is_submitting());
        assert!(!form.begin_submit());

        form.abort_submit();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn success_should_reset_fields_and_show_notice() {
        let mut form = FormModel::new(FIELDS);
        form.set_value("name", "Acme").unwrap();
        assert!(form.begin_submit());
        form.finish_success("Company created successfully!", true);

        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert_eq!(form.value("name"), "");
        assert!(!form.is_touched("name"));
        assert_eq!(
            form.notice().map(Notice::message),
            Some("Company created successfully!")
        );

        form.dismiss_notice();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.notice().is_none());
    }

    #[test]
    fn failure_should_keep_input_and_prefer_server_message() {
        let mut form = FormModel::new(FIELDS);
        form.set_value("name", "Acme").unwrap();
        assert!(form.begin_submit());
        form.finish_failure(
            &server_error(Some("Company already exists")),
            "Error creating company",
        );

        assert_eq!(form.phase(), FormPhase::Failed);
        assert_eq!(form.value("name"), "Acme");
        let notice = form.notice().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message(), "Company already exists");

        form.set_value("name", "Acme Corp").unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn failure_without_server_message_should_use_fallback() {
        let mut form = FormModel::new(FIELDS);
        form.finish_failure(&server_error(None), "Error creating company");
        assert_eq!(
            form.notice().map(Notice::message),
            Some("Error creating company")
        );
    }

    #[test]
    fn with_values_should_seed_initial_state() {
        let mut form = FormModel::with_values(
            FIELDS,
            [("name", "Acme".to_string()), ("unknown", "x".to_string())],
        );
        assert_eq!(form.value("name"), "Acme");
        form.set_value("name", "Other").unwrap();
        form.reset();
        assert_eq!(form.value("name"), "Acme");
    }

    #[test]
    fn payload_helpers_should_skip_blank_values() {
        let mut form = FormModel::new(FIELDS);
        form.set_value("name", "  Acme ").unwrap();
        assert_eq!(form.optional_text("name"), Some("Acme".to_string()));
        assert_eq!(form.optional_text("website"), None);
        assert_eq!(form.optional_number("website"), None);
        assert_eq!(form.reference("name"), None);
    }
}
