//! # List View
//!
//! Read-only collection display for one resource. Loads on mount and
//! keeps the server's order.

use super::load_guard::{LoadGuard, LoadTicket};
use crate::console::events::Resource;
use crate::console::models::{Application, Company, Job, User};
use crate::console::services::{ApiClient, RequestError};
use std::future::Future;

/// An entity that can be listed
pub trait Listed: Sized {
    const RESOURCE: Resource;

    fn id(&self) -> i64;

    fn fetch_all<'a>(
        api: &'a ApiClient,
    ) -> impl Future<Output = Result<Vec<Self>, RequestError>> + 'a;
}

impl Listed for User {
    const RESOURCE: Resource = Resource::User;

    fn id(&self) -> i64 {
        self.id
    }

    fn fetch_all<'a>(
        api: &'a ApiClient,
    ) -> impl Future<Output = Result<Vec<Self>, RequestError>> + 'a {
        async move { api.users().list().await }
    }
}

impl Listed for Company {
    const RESOURCE: Resource = Resource::Company;

    fn id(&self) -> i64 {
        self.id
    }

    fn fetch_all<'a>(
        api: &'a ApiClient,
    ) -> impl Future<Output = Result<Vec<Self>, RequestError>> + 'a {
        async move { api.companies().list().await }
    }
}

impl Listed for Job {
    const RESOURCE: Resource = Resource::Job;

    fn id(&self) -> i64 {
        self.id
    }

    fn fetch_all<'a>(
        api: &'a ApiClient,
    ) -> impl Future<Output = Result<Vec<Self>, RequestError>> + 'a {
        async move { api.jobs().list().await }
    }
}

impl Listed for Application {
    const RESOURCE: Resource = Resource::Application;

    fn id(&self) -> i64 {
        self.id
    }

    fn fetch_all<'a>(
        api: &'a ApiClient,
    ) -> impl Future<Output = Result<Vec<Self>, RequestError>> + 'a {
        async move { api.applications().list().await }
    }
}

/// Display state of a list
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Vec<T>),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    state: ListState<T>,
    guard: LoadGuard,
}

impl<T: Listed> ListView<T> {
    /// A freshly mounted view starts in `Loading`
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            guard: LoadGuard::new(),
        }
    }

    pub fn resource(&self) -> Resource {
        T::RESOURCE
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Rows, once the view is ready
    pub fn items(&self) -> Option<&[T]> {
        match &self.state {
            ListState::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Enter `Loading` and issue a ticket for the fetch about to start
    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = ListState::Loading;
        self.guard.issue()
    }

    /// Apply a fetch result. Returns `false` if the result was discarded.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Vec<T>, RequestError>) -> bool {
        if !self.guard.accepts(ticket) {
            tracing::debug!(
                "Discarding stale {} load (generation {})",
                T::RESOURCE.plural(),
                ticket.generation()
            );
            return false;
        }
        self.state = match result {
            Ok(items) => {
                tracing::debug!("Loaded {} {}", items.len(), T::RESOURCE.plural());
                ListState::Ready(items)
            }
            Err(e) => {
                tracing::warn!("Loading {} failed: {}", T::RESOURCE.plural(), e);
                ListState::Error(format!("Error loading {}", T::RESOURCE.plural()))
            }
        };
        true
    }

    /// Fetch the collection and apply it
    pub async fn load(&mut self, api: &ApiClient) {
        let ticket = self.begin_load();
        let result = T::fetch_all(api).await;
        self.apply(ticket, result);
    }

    /// Stop accepting results; in-flight loads are discarded when they land
    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Drop one row from a ready list
    pub(crate) fn remove(&mut self, id: i64) -> bool {
        match &mut self.state {
            ListState::Ready(items) => {
                let before = items.len();
                items.retain(|item| item.id() != id);
                items.len() != before
            }
            _ => false,
        }
    }
}

impl<T: Listed> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}
