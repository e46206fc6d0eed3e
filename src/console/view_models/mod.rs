//! # ViewModel Module
//!
//! Per-component state for the admin pages: form controllers own field
//! state and the submit lifecycle, list and detail views own their
//! loading/ready/error states. Each instance holds only its own state,
//! so siblings never share anything mutable.

mod application_form;
mod company_form;
pub mod form;
mod job_detail;
mod job_form;
mod job_list;
mod list_view;
mod load_guard;
mod user_form;
pub mod validation;

pub use application_form::{ApplicationForm, APPLICATION_FIELDS, COVER_LETTER_MAX};
pub use company_form::{CompanyForm, COMPANY_FIELDS};
pub use form::{FormError, FormModel, FormPhase, SelectOption, SubmitOutcome};
pub use job_detail::{DetailState, JobDetail};
pub use job_form::{JobForm, JOB_FIELDS};
pub use job_list::JobList;
pub use list_view::{ListState, ListView, Listed};
pub use load_guard::{LoadGuard, LoadTicket};
pub use user_form::{UserForm, USER_FIELDS};
pub use validation::{FieldSpec, Rule};

/// List view of users
pub type UserList = ListView<crate::console::models::User>;

/// List view of companies
pub type CompanyList = ListView<crate::console::models::Company>;

/// List view of applications
pub type ApplicationList = ListView<crate::console::models::Application>;
