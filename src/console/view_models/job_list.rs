//! # Job List
//!
//! List view for jobs with row deletion. A row leaves local state only
//! after the server confirms the delete.

use super::list_view::{ListState, ListView};
use crate::console::models::{Job, Notice};
use crate::console::services::{ApiClient, RequestError};

#[derive(Debug, Clone, Default)]
pub struct JobList {
    view: ListView<Job>,
    notice: Option<Notice>,
}

impl JobList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ListView<Job> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListView<Job> {
        &mut self.view
    }

    pub fn state(&self) -> &ListState<Job> {
        self.view.state()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.view.load(api).await;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Apply the outcome of deleting job `id`
    pub fn apply_delete(&mut self, id: i64, result: Result<(), RequestError>) -> bool {
        match result {
            Ok(()) => {
                tracing::info!("Deleted job {}", id);
                self.view.remove(id);
                true
            }
            Err(e) => {
                tracing::warn!("Deleting job {} failed: {}", id, e);
                self.notice = Some(Notice::error("Error deleting job"));
                false
            }
        }
    }

    /// Delete a job on the server, then drop its row
    pub async fn delete(&mut self, api: &ApiClient, id: i64) -> bool {
        let result = api.jobs().delete(id).await;
        self.apply_delete(id, result)
    }
}
