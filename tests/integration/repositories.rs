//! Integration tests for repositories

use super::*;
use integrations_travis::{PageLink, RepositoriesOption, Repository, RepositoryOption};
use pretty_assertions::assert_eq;
use test_case::test_case;
use wiremock::matchers::query_param;
use wiremock::ResponseTemplate;

fn test_repo() -> Repository {
    Repository {
        id: Some(1),
        name: Some("go-travis-test".to_string()),
        slug: Some(TEST_REPO_SLUG.to_string()),
        ..Default::default()
    }
}

fn filter_options() -> RepositoriesOption {
    RepositoriesOption {
        active_on_org: Some(true),
        starred: Some(true),
        private: Some(true),
        ..Default::default()
    }
}

fn repository_list() -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(r#"{{"repositories": [{}]}}"#, REPOSITORY_JSON))
}

async fn mount_filtered_list(server: &wiremock::MockServer, path: &str, body: ResponseTemplate) {
    travis_request("GET", path)
        .and(query_param("active_on_org", "true"))
        .and(query_param("starred", "true"))
        .and(query_param("private", "true"))
        .respond_with(body)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_repositories_list() {
    let (server, client) = setup().await;
    mount_filtered_list(&server, "/repos", repository_list()).await;

    let (repos, _) = client
        .repositories()
        .list(&filter_options())
        .await
        .expect("Repositories.list returned error");

    assert_eq!(repos, vec![test_repo()]);
}

#[tokio::test]
async fn test_repositories_list_by_owner() {
    let (server, client) = setup().await;
    mount_filtered_list(&server, "/owner/shuheiktgw/repos", repository_list()).await;

    let (repos, _) = client
        .repositories()
        .list_by_owner("shuheiktgw", &filter_options())
        .await
        .expect("Repositories.list_by_owner returned error");

    assert_eq!(repos[0], test_repo());
}

#[tokio::test]
async fn test_repositories_list_by_github_id() {
    let (server, client) = setup().await;
    mount_filtered_list(&server, "/owner/github_id/1234/repos", repository_list()).await;

    let (repos, _) = client
        .repositories()
        .list_by_github_id(1234, &filter_options())
        .await
        .expect("Repositories.list_by_github_id returned error");

    assert_eq!(repos[0], test_repo());
}

#[tokio::test]
async fn test_repositories_list_by_owner_pagination() {
    let (server, client) = setup().await;

    let body = format!(
        r#"{{"repositories": [{}], "@pagination": {{"limit": 25,"offset": 1,"count": 2,"is_first": true,"is_last": true,"next": null,"prev": null,"first": {{"@href": "/repo/shuheiktgw%2Fgo-travis/builds","offset": 0,"limit": 25}},"last": {{"@href": "/repo/shuheiktgw%2Fgo-travis/builds?limit=25&offset=-25","offset": -25,"limit": 25}}}}}}"#,
        REPOSITORY_JSON
    );
    mount_filtered_list(
        &server,
        "/owner/shuheiktgw/repos",
        ResponseTemplate::new(200).set_body_string(body),
    )
    .await;

    let (_, response) = client
        .repositories()
        .list_by_owner("shuheiktgw", &filter_options())
        .await
        .expect("Repositories.list_by_owner returned error");

    assert_eq!(response.limit(), 25);
    assert_eq!(response.offset(), 1);
    assert_eq!(response.count(), 2);
    assert!(response.is_first());
    assert!(response.is_last());
    assert_eq!(response.next_page(), None);
    assert_eq!(response.prev_page(), None);
    assert_eq!(
        response.first_page(),
        Some(&PageLink {
            href: "/repo/shuheiktgw%2Fgo-travis/builds".to_string(),
            offset: 0,
            limit: 25,
        })
    );
    assert_eq!(
        response.last_page(),
        Some(&PageLink {
            href: "/repo/shuheiktgw%2Fgo-travis/builds?limit=25&offset=-25".to_string(),
            offset: -25,
            limit: 25,
        })
    );
}

#[tokio::test]
async fn test_repositories_list_page() {
    let (server, client) = setup().await;

    travis_request("GET", "/repos")
        .and(query_param("limit", "25"))
        .and(query_param("offset", "25"))
        .respond_with(repository_list())
        .expect(1)
        .mount(&server)
        .await;

    let link = PageLink {
        href: "/repos?limit=25&offset=25".to_string(),
        offset: 25,
        limit: 25,
    };
    let (repos, response) = client.repositories().list_page(&link).await.unwrap();

    assert_eq!(repos, vec![test_repo()]);
    assert!(response.pagination.is_none());
}

#[tokio::test]
async fn test_repositories_find() {
    let (server, client) = setup().await;

    travis_request("GET", &format!("/repo/{}", ENCODED_REPO_SLUG))
        .and(query_param("include", "repository.default_branch"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REPOSITORY_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let options = RepositoryOption {
        include: vec!["repository.default_branch".to_string()],
    };
    let (repo, _) = client
        .repositories()
        .find(TEST_REPO_SLUG, &options)
        .await
        .expect("Repositories.find returned error");

    assert_eq!(repo, test_repo());
}

#[tokio::test]
async fn test_repositories_find_by_id() {
    let (server, client) = setup().await;

    travis_request("GET", "/repo/1")
        .respond_with(ResponseTemplate::new(200).set_body_string(REPOSITORY_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let (repo, _) = client
        .repositories()
        .find("1", &RepositoryOption::default())
        .await
        .unwrap();

    assert_eq!(repo, test_repo());
}

#[test_case("activate" ; "activate")]
#[test_case("deactivate" ; "deactivate")]
#[test_case("migrate" ; "migrate")]
#[test_case("star" ; "star")]
#[test_case("unstar" ; "unstar")]
#[tokio::test]
async fn test_repositories_action(action: &str) {
    let (server, client) = setup().await;

    travis_request("POST", &format!("/repo/{}/{}", ENCODED_REPO_SLUG, action))
        .respond_with(ResponseTemplate::new(200).set_body_string(REPOSITORY_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client.repositories();
    let result = match action {
        "activate" => repos.activate(TEST_REPO_SLUG).await,
        "deactivate" => repos.deactivate(TEST_REPO_SLUG).await,
        "migrate" => repos.migrate(TEST_REPO_SLUG).await,
        "star" => repos.star(TEST_REPO_SLUG).await,
        "unstar" => repos.unstar(TEST_REPO_SLUG).await,
        other => panic!("unexpected action {}", other),
    };

    let (repo, response) = result.expect("repository action returned error");
    assert_eq!(repo, test_repo());
    assert_eq!(response.status, 200);
}
