//! # Job Detail
//!
//! Loads a single job by identifier. Reloads whenever the identifier
//! changes; the newest identifier's result wins.

use super::load_guard::{LoadGuard, LoadTicket};
use crate::console::models::Job;
use crate::console::services::{ApiClient, RequestError};

/// Display state of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(Job),
    NotFound,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct JobDetail {
    id: i64,
    state: DetailState,
    guard: LoadGuard,
}

impl JobDetail {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: DetailState::Loading,
            guard: LoadGuard::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn job(&self) -> Option<&Job> {
        match &self.state {
            DetailState::Ready(job) => Some(job),
            _ => None,
        }
    }

    /// Point the view at another job. Returns `true` if a reload is needed.
    pub fn set_id(&mut self, id: i64) -> bool {
        if id == self.id {
            return false;
        }
        self.id = id;
        self.state = DetailState::Loading;
        true
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = DetailState::Loading;
        self.guard.issue()
    }

    /// Apply a fetch result. Returns `false` if the result was discarded.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Option<Job>, RequestError>) -> bool {
        if !self.guard.accepts(ticket) {
            tracing::debug!("Discarding stale job detail (generation {})", ticket.generation());
            return false;
        }
        self.state = match result {
            Ok(Some(job)) => DetailState::Ready(job),
            Ok(None) => DetailState::NotFound,
            Err(e) if e.is_not_found() => DetailState::NotFound,
            Err(e) => {
                tracing::warn!("Loading job {} failed: {}", self.id, e);
                DetailState::Error("Error loading job details".to_string())
            }
        };
        true
    }

    pub async fn load(&mut self, api: &ApiClient) {
        let ticket = self.begin_load();
        let result = api.jobs().get(self.id).await;
        self.apply(ticket, result);
    }

    /// Change the identifier and reload if it differs
    pub async fn navigate(&mut self, api: &ApiClient, id: i64) {
        if self.set_id(id) {
            self.load(api).await;
        }
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    pub fn edit_path(&self) -> String {
        format!("/jobs/{}/edit", self.id)
    }

    pub fn apply_path(&self) -> &'static str {
        "/applications"
    }

    pub fn back_path(&self) -> &'static str {
        "/jobs"
    }
}
