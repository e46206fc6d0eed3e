//! # Page Rendering
//!
//! Text rendering of notices, forms and the job detail view.

use super::format::money;
use crate::console::models::{Notice, NoticeKind};
use crate::console::view_models::{DetailState, FormModel, JobDetail, SelectOption};
use std::fmt::Write;

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.kind() {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    format!("[{tag}] {}", notice.message())
}

/// Render a form: title, notice, then one line per field with its
/// visible error underneath.
pub fn render_form(title: &str, form: &FormModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {title} ==");
    if let Some(notice) = form.notice() {
        let _ = writeln!(out, "{}", render_notice(notice));
    }
    for field in form.fields() {
        let marker = if field.is_required() { " *" } else { "" };
        let _ = writeln!(out, "{}{}: {}", field.label, marker, form.value(field.name));
        if let Some(error) = form.error(field.name) {
            let _ = writeln!(out, "    ! {error}");
        }
    }
    out
}

/// Only the field errors a user would currently see
pub fn render_field_errors(form: &FormModel) -> String {
    form.fields()
        .iter()
        .filter_map(|field| {
            form.error(field.name)
                .map(|error| format!("{}: {}", field.label, error))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Options of a selection input, one per line
pub fn render_options(label: &str, options: &[SelectOption]) -> String {
    let mut out = format!("{label}:");
    if options.is_empty() {
        out.push_str(" (none)");
    }
    for option in options {
        let _ = write!(out, "\n  {} - {}", option.value, option.label);
    }
    out
}

pub fn render_job_detail(detail: &JobDetail) -> String {
    match detail.state() {
        DetailState::Loading => "Loading job...".to_string(),
        DetailState::NotFound => "[warning] Job not found".to_string(),
        DetailState::Error(message) => format!("[error] {message}"),
        DetailState::Ready(job) => {
            let mut out = String::new();
            let _ = writeln!(out, "== {} ==", job.title);
            let _ = writeln!(out, "Company: {}", job.company_name().unwrap_or(""));
            let _ = writeln!(
                out,
                "Location: {}",
                job.location
                    .as_deref()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or("Not specified")
            );
            let _ = writeln!(
                out,
                "Salary: {}",
                money(job.salary).unwrap_or_else(|| "Not specified".to_string())
            );
            let _ = writeln!(out, "Description:");
            let _ = writeln!(
                out,
                "{}",
                job.description
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or("No description provided.")
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "Edit Job: {}", detail.edit_path());
            let _ = writeln!(out, "Apply for Job: {}", detail.apply_path());
            let _ = write!(out, "Back to Jobs: {}", detail.back_path());
            out
        }
    }
}
