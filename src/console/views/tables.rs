//! # Table Rendering
//!
//! Renders ready list views as text tables, one row per entity in the
//! order the server returned them.

use super::format::{money_cell, text_cell};
use crate::console::models::{Application, Company, Job, User};
use crate::console::view_models::{ListState, ListView, Listed};
use tabled::{builder::Builder, settings::Style};

/// An entity that renders as one table row
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "Full Name", "Email", "Phone"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.email.clone(),
            text_cell(self.phone.as_deref()),
        ]
    }
}

impl TableRow for Company {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Website", "Description"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            text_cell(self.website.as_deref()),
            text_cell(self.description.as_deref()),
        ]
    }
}

impl TableRow for Job {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Company", "Location", "Salary"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            text_cell(self.company_name()),
            text_cell(self.location.as_deref()),
            money_cell(self.salary),
        ]
    }
}

impl TableRow for Application {
    fn headers() -> &'static [&'static str] {
        &["ID", "Applicant", "Job", "Company", "Expected Salary", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        let applicant = self
            .user
            .as_ref()
            .map(|u| u.full_name.clone())
            .unwrap_or_else(|| format!("User #{}", self.user_id));
        let job = self
            .job
            .as_ref()
            .map(|j| j.title.clone())
            .unwrap_or_else(|| format!("Job #{}", self.job_id));
        vec![
            self.id.to_string(),
            applicant,
            job,
            text_cell(self.company.as_ref().map(|c| c.name.as_str())),
            money_cell(self.expected_salary),
            self.status.label().to_string(),
        ]
    }
}

/// Render rows as a table with a header line
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::headers().iter().copied());
    for row in rows {
        builder.push_record(row.cells());
    }
    builder.build().with(Style::modern()).to_string()
}

/// Render a list view in whichever state it is in.
///
/// Loading and error states never produce a table.
pub fn render_list<T: Listed + TableRow>(view: &ListView<T>) -> String {
    let resource = view.resource();
    match view.state() {
        ListState::Loading => format!("Loading {}...", resource.plural()),
        ListState::Error(message) => format!("[error] {message}"),
        ListState::Ready(items) if items.is_empty() => {
            format!("{} (0)\nNo {} yet.", resource.title(), resource.plural())
        }
        ListState::Ready(items) => {
            format!(
                "{} ({})\n{}",
                resource.title(),
                items.len(),
                render_table(items)
            )
        }
    }
}
