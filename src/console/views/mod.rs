//! # Views Module
//!
//! Plain-text rendering of view model state for the terminal.

pub mod format;
pub mod pages;
pub mod tables;

pub use format::{group_digits, money, money_cell, text_cell, PLACEHOLDER};
pub use pages::{
    render_field_errors, render_form, render_job_detail, render_notice, render_options,
};
pub use tables::{render_list, render_table, TableRow};
