mod common;

use common::{job_json, start_backend};
use jobboard::console::models::{Job, NewCompany};
use jobboard::{ApiClient, ApiConfig, RequestError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn get_should_decode_success_body() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            job_json(1, "Engineer", Some(85000)),
            job_json(2, "Designer", None)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get::<Vec<Job>>("/jobs").await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].company_name(), Some("Acme"));
    assert_eq!(response.data[1].salary, None);
}

#[tokio::test]
async fn server_error_should_carry_message_from_body() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/api/companies"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Company already exists"})),
        )
        .mount(&server)
        .await;

    let payload = NewCompany {
        name: "Acme".to_string(),
        website: None,
        description: None,
    };
    let err = client.companies().create(&payload).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert_eq!(err.server_message(), Some("Company already exists"));
}

#[tokio::test]
async fn unparseable_error_body_should_still_be_a_server_error() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client.users().list().await.unwrap_err();

    assert!(matches!(err, RequestError::Server { .. }));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn empty_success_body_should_yield_no_job() {
    let (server, client) = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/9"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert_eq!(client.jobs().get(9).await.unwrap(), None);
}

#[tokio::test]
async fn default_headers_should_be_sent_with_every_request() {
    let server = wiremock::MockServer::start().await;
    let config = ApiConfig::new(format!("{}/api/", server.uri()))
        .with_header("X-Request-Source", "console");
    let client = ApiClient::new(config).unwrap();
    Mock::given(method("GET"))
        .and(path("/api/companies"))
        .and(header("X-Request-Source", "console"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let companies = client.companies().list().await.unwrap();
    assert!(companies.is_empty());
}

#[tokio::test]
async fn post_should_send_json_body() {
    let (server, client) = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/api/companies"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Acme", "website": "https://acme.example"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 5, "name": "Acme"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = NewCompany {
        name: "Acme".to_string(),
        website: Some("https://acme.example".to_string()),
        description: None,
    };
    let company = client.companies().create(&payload).await.unwrap();
    assert_eq!(company.id, 5);
    assert_eq!(company.website, None);
}

#[tokio::test]
async fn delete_should_ignore_response_body() {
    let (server, client) = start_backend().await;
    Mock::given(method("DELETE"))
        .and(path("/api/jobs/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    client.jobs().delete(4).await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_should_be_a_transport_error() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:1/api")).unwrap();

    let err = client.users().list().await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
    assert_eq!(err.server_message(), None);
}
