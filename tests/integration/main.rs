//! Integration tests using WireMock
//!
//! These tests run every operation against a mock Travis API and check the
//! verb, path, query string and headers sent, and how fixtures are decoded.

mod headers;
mod repositories;

use integrations_travis::TravisClient;
use wiremock::matchers::header;
use wiremock::{Mock, MockBuilder, MockServer};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_REPO_SLUG: &str = "shuheiktgw/go-travis-test";
pub const ENCODED_REPO_SLUG: &str = "shuheiktgw%2Fgo-travis-test";

pub const ORGANIZATION_JSON: &str = r#"{"id":111,"login":"TestOrg","name":"TestOrg","github_id":12345,"avatar_url":"https:///test.com","education":false}"#;
pub const REPOSITORY_JSON: &str = r#"{"id":1,"name":"go-travis-test","slug":"shuheiktgw/go-travis-test"}"#;

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, TravisClient) {
    let server = MockServer::start().await;
    let client = TravisClient::builder()
        .base_url(server.uri())
        .token(TEST_TOKEN)
        .build()
        .expect("Failed to build client");
    (server, client)
}

/// A mock matching the headers every request must carry.
pub fn travis_request(method_matcher: &str, path_matcher: &str) -> MockBuilder {
    Mock::given(wiremock::matchers::method(method_matcher))
        .and(wiremock::matchers::path(path_matcher))
        .and(header("Travis-API-Version", "3"))
        .and(header("Authorization", "token test-token"))
        .and(header("Accept", "application/json"))
}
