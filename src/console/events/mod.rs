//! # Events Module
//!
//! Events flowing from view models to the page that hosts them.

pub mod form_events;

pub use form_events::{FormEvent, FormEventHandler, FormEventHandlers, Resource};
