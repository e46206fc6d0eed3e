//! Shared fixtures for integration tests against a mocked backend

#![allow(dead_code)]

use jobboard::{ApiClient, ApiConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Start a mock backend and a client pointed at its `/api` prefix
pub async fn start_backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(ApiConfig::new(format!("{}/api", server.uri())))
        .expect("client should build");
    (server, client)
}

pub fn job_json(id: i64, title: &str, salary: Option<i64>) -> Value {
    json!({
        "id": id,
        "title": title,
        "location": "Remote",
        "salary": salary,
        "description": "Build the platform",
        "company_id": 3,
        "company": {"id": 3, "name": "Acme"}
    })
}

pub fn user_json(id: i64, full_name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "full_name": full_name,
        "email": email,
        "phone": null
    })
}

pub fn company_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "website": "https://acme.example",
        "description": null
    })
}
