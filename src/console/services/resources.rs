//! # Resource Clients
//!
//! Per-entity facades over [`ApiClient`]. Each is a pass-through with a
//! fixed resource path and no business logic of its own.

use super::http::{ApiClient, RequestError};
use crate::console::models::{
    Application, Company, Job, JobPatch, NewApplication, NewCompany, NewJob, NewUser, User,
};

pub const USERS_PATH: &str = "/users";
pub const COMPANIES_PATH: &str = "/companies";
pub const JOBS_PATH: &str = "/jobs";
pub const APPLICATIONS_PATH: &str = "/applications";

/// `GET/POST /users`
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl UsersApi<'_> {
    pub async fn list(&self) -> Result<Vec<User>, RequestError> {
        Ok(self.client.get(USERS_PATH).await?.data)
    }

    pub async fn create(&self, payload: &NewUser) -> Result<User, RequestError> {
        Ok(self.client.post(USERS_PATH, payload).await?.data)
    }
}

/// `GET/POST /companies`
#[derive(Debug, Clone, Copy)]
pub struct CompaniesApi<'a> {
    client: &'a ApiClient,
}

impl CompaniesApi<'_> {
    pub async fn list(&self) -> Result<Vec<Company>, RequestError> {
        Ok(self.client.get(COMPANIES_PATH).await?.data)
    }

    pub async fn create(&self, payload: &NewCompany) -> Result<Company, RequestError> {
        Ok(self.client.post(COMPANIES_PATH, payload).await?.data)
    }
}

/// `GET/POST /jobs` and `GET/PATCH/DELETE /jobs/{id}`
#[derive(Debug, Clone, Copy)]
pub struct JobsApi<'a> {
    client: &'a ApiClient,
}

impl JobsApi<'_> {
    fn item_path(id: i64) -> String {
        format!("{JOBS_PATH}/{id}")
    }

    pub async fn list(&self) -> Result<Vec<Job>, RequestError> {
        Ok(self.client.get(JOBS_PATH).await?.data)
    }

    /// Fetch one job. A 2xx response without a body yields `None`.
    pub async fn get(&self, id: i64) -> Result<Option<Job>, RequestError> {
        Ok(self.client.get(&Self::item_path(id)).await?.data)
    }

    pub async fn create(&self, payload: &NewJob) -> Result<Job, RequestError> {
        Ok(self.client.post(JOBS_PATH, payload).await?.data)
    }

    pub async fn update(&self, id: i64, payload: &JobPatch) -> Result<Job, RequestError> {
        Ok(self.client.patch(&Self::item_path(id), payload).await?.data)
    }

    pub async fn delete(&self, id: i64) -> Result<(), RequestError> {
        self.client.delete(&Self::item_path(id)).await
    }
}

/// `GET/POST /applications`
#[derive(Debug, Clone, Copy)]
pub struct ApplicationsApi<'a> {
    client: &'a ApiClient,
}

impl ApplicationsApi<'_> {
    pub async fn list(&self) -> Result<Vec<Application>, RequestError> {
        Ok(self.client.get(APPLICATIONS_PATH).await?.data)
    }

    pub async fn create(&self, payload: &NewApplication) -> Result<Application, RequestError> {
        Ok(self.client.post(APPLICATIONS_PATH, payload).await?.data)
    }
}

impl ApiClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }

    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi { client: self }
    }

    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi { client: self }
    }

    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi { client: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_item_path_should_embed_identifier() {
        assert_eq!(JobsApi::item_path(42), "/jobs/42");
    }
}
