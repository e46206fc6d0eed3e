//! # Console Module
//!
//! Admin console for the job-board backend, organized as
//! Model-View-ViewModel:
//!
//! - `models`: entity shapes exchanged with the backend
//! - `services`: HTTP adapter and per-resource clients
//! - `events`: completion callbacks a form exposes to its host
//! - `view_models`: form, list and detail state machines
//! - `views`: text rendering of view model state
//! - `shell`: mounts one page per command and renders the result

pub mod events;
pub mod models;
pub mod services;
pub mod shell;
pub mod view_models;
pub mod views;

pub use events::{FormEvent, FormEventHandler, Resource};
pub use services::{ApiClient, ApiConfig, RequestError};
pub use shell::{Shell, ShellOutput};
