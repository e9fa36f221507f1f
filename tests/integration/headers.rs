//! Integration tests for request headers

use integrations_travis::TravisClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use super::ORGANIZATION_JSON;

/// Matches requests that carry no `Authorization` header.
struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request
            .headers
            .keys()
            .any(|name| name.as_str().eq_ignore_ascii_case("authorization"))
    }
}

#[tokio::test]
async fn test_anonymous_client_sends_no_authorization() {
    let server = MockServer::start().await;
    let client = TravisClient::builder()
        .base_url(server.uri())
        .user_agent("travis-headers-test/1.0")
        .build()
        .expect("Failed to build client");

    Mock::given(method("GET"))
        .and(path("/org/111"))
        .and(header("User-Agent", "travis-headers-test/1.0"))
        .and(header("Travis-API-Version", "3"))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_string(ORGANIZATION_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let (org, _) = client
        .organizations()
        .find(111, &Default::default())
        .await
        .unwrap();

    assert_eq!(org.id, Some(111));
}

#[tokio::test]
async fn test_default_user_agent_sent() {
    let server = MockServer::start().await;
    let client = TravisClient::builder()
        .base_url(server.uri())
        .build()
        .expect("Failed to build client");

    Mock::given(method("GET"))
        .and(path("/org/111"))
        .and(header("User-Agent", "integrations-travis/0.1.0"))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_string(ORGANIZATION_JSON))
        .expect(1)
        .mount(&server)
        .await;

    client
        .organizations()
        .find(111, &Default::default())
        .await
        .unwrap();
}
