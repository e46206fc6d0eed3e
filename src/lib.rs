//! # Job Board Admin Console
//!
//! Terminal front-end for administering a job-board REST backend: users,
//! companies, job postings and applications.
//!
//! ## Architecture
//!
//! The console follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐   Renders    ┌──────────────┐   Requests   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────►│ Services │
//! │             │              │              │              │          │
//! │ - Tables    │              │ - Forms      │◄─────────────│ - HTTP   │
//! │ - Notices   │              │ - Lists      │   Results    │ - REST   │
//! │ - Detail    │              │ - Detail     │              │          │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      │
//!                                      │ Completion events
//!                                      ▼
//!                               ┌──────────────┐
//!                               │    Shell     │
//!                               │              │
//!                               │ - Commands   │
//!                               │ - Pages      │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod console;

// Re-export main types for easy access
pub use console::*;
