//! End-to-end tests of `ResourceClient` against a wiremock server.

use std::sync::LazyLock;

use assert2::{check, let_assert};
use restbind::{
    Decoded, Headers, HttpService, HyperTransport, MediaType, MethodBinding, MethodBindingSet,
    Resource, ResourceClient, args,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

struct Users {
    base_url: String,
}

impl Resource for Users {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

static REPOS: LazyLock<MethodBindingSet> = LazyLock::new(|| {
    MethodBindingSet::builder()
        .with_crud()
        .bind(
            "issues",
            MethodBinding::get("/{owner}/{repo}/issues")
                .path("owner", 0)
                .path("repo", 1)
                .query(2)
                .header("X-Request-Id", 3),
        )
        .bind(
            "readme",
            MethodBinding::get("/{owner}/{repo}/readme")
                .path("owner", 0)
                .path("repo", 1)
                .static_header("Accept", "text/markdown")
                .produces(MediaType::Raw),
        )
        .bind(
            "mirror_issue",
            MethodBinding::get("/issues/{id}").url(0).path("id", 1),
        )
        .build()
        .expect("valid bindings")
});

struct Repos {
    base_url: String,
    defaults: Headers,
}

impl Resource for Repos {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_headers(&self) -> &Headers {
        &self.defaults
    }

    fn bindings(&self) -> &MethodBindingSet {
        &REPOS
    }
}

fn users(server: &MockServer) -> ResourceClient<Users, HyperTransport> {
    let resource = Users {
        base_url: format!("{}/api/users", server.uri()),
    };
    ResourceClient::new(resource, HttpService::bare(HyperTransport::new()))
}

fn repos(server: &MockServer) -> ResourceClient<Repos, HyperTransport> {
    let resource = Repos {
        base_url: format!("{}/repos", server.uri()),
        defaults: [("User-Agent", "restbind-tests")].into_iter().collect(),
    };
    ResourceClient::new(resource, HttpService::bare(HyperTransport::new()))
}

#[tokio::test]
async fn test_find_one() {
    let mock_server = MockServer::start().await;
    let alice = User {
        id: 42,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/api/users/42"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&alice))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user: User = users(&mock_server)
        .find_one(&42)
        .await
        .expect("response")
        .deserialize()
        .expect("user");

    check!(user == alice);
}

#[tokio::test]
async fn test_save_sends_json_body() {
    let mock_server = MockServer::start().await;
    let bob = json!({"name": "Bob"});

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(&bob))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 2, "name": "Bob"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = users(&mock_server).save(&bob).await.expect("created");

    check!(created.as_json() == Some(&json!({"id": 2, "name": "Bob"})));
}

#[tokio::test]
async fn test_save_sends_string_body_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_string("name=Bob"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = users(&mock_server).save("name=Bob").await.expect("saved");

    // No content: the empty body is not JSON
    check!(result.as_raw().map(restbind::Response::status) == Some(204));
}

#[tokio::test]
async fn test_update_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/users/3"))
        .and(body_json(json!({"id": 3, "name": "Dave"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Dave"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = users(&mock_server);
    let dave = User {
        id: 3,
        name: "Dave".to_string(),
    };

    let updated: User = client
        .update(&3, &dave)
        .await
        .expect("updated")
        .deserialize()
        .expect("user");
    check!(updated == dave);

    client.delete(&3).await.expect("deleted");
}

#[tokio::test]
async fn test_find_with_and_without_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = users(&mock_server);
    client
        .find(Some(&json!({"active": true, "tags": ["a", "b"], "deleted": null})))
        .await
        .expect("filtered");
    client.find::<serde_json::Value>(None).await.expect("all");

    let received = mock_server.received_requests().await.expect("recording");
    let queries = received
        .iter()
        .map(|request| request.url.query().map(ToString::to_string))
        .collect::<Vec<_>>();
    check!(queries == vec![Some("active=true&tags=a&tags=b".to_string()), None]);
}

#[tokio::test]
async fn test_malformed_json_degrades_to_raw() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let decoded = users(&mock_server).find_one(&1).await.expect("no error");

    let_assert!(Decoded::Raw(response) = decoded);
    check!(response.text().expect("utf8") == "<html>maintenance</html>");
}

#[tokio::test]
async fn test_not_found_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = users(&mock_server).find_one(&404).await;

    let_assert!(Err(error) = result);
    check!(error.status() == Some(404));
}

#[tokio::test]
async fn test_custom_binding_with_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/rust-lang/rust/issues"))
        .and(query_param("state", "open"))
        .and(query_param("labels", "A-macros"))
        .and(query_param("labels", "T-compiler"))
        .and(header("User-Agent", "restbind-tests"))
        .and(header("X-Request-Id", "req-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"number": 1}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let issues = repos(&mock_server)
        .invoke(
            "issues",
            &args![
                "rust-lang",
                "rust",
                json!({"state": "open", "labels": ["A-macros", "T-compiler"]}),
                "req-7"
            ]
            .expect("args"),
        )
        .await
        .expect("issues");

    check!(issues.as_json() == Some(&json!([{"number": 1}])));
}

#[tokio::test]
async fn test_raw_media_type_and_static_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/rust-lang/rust/readme"))
        .and(header("Accept", "text/markdown"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"looks\":\"like json\"}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let readme = repos(&mock_server)
        .invoke("readme", &args!["rust-lang", "rust"].expect("args"))
        .await
        .expect("readme");

    let_assert!(Decoded::Raw(response) = readme);
    check!(response.text().expect("utf8") == "{\"looks\":\"like json\"}");
}

#[tokio::test]
async fn test_url_binding_overrides_base_url() {
    let primary = MockServer::start().await;
    let mirror = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mirror/issues/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"number": 9})))
        .expect(1)
        .mount(&mirror)
        .await;

    let issue = repos(&primary)
        .invoke(
            "mirror_issue",
            &args![format!("{}/mirror", mirror.uri()), 9].expect("args"),
        )
        .await
        .expect("issue");

    check!(issue.as_json() == Some(&json!({"number": 9})));
    check!(
        primary
            .received_requests()
            .await
            .expect("recording")
            .is_empty()
    );
}

#[tokio::test]
async fn test_binding_error_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = repos(&mock_server);

    let unknown = client.invoke("stars", &args![1].expect("args")).await;
    let_assert!(Err(error) = unknown);
    check!(error.is_binding());

    let missing_path = client.invoke("issues", &args!["rust-lang"].expect("args")).await;
    let_assert!(Err(error) = missing_path);
    check!(error.is_binding());

    check!(
        mock_server
            .received_requests()
            .await
            .expect("recording")
            .is_empty()
    );
}

#[tokio::test]
async fn test_request_inspection() {
    let client = ResourceClient::new(
        Users {
            base_url: "/api/users".to_string(),
        },
        HttpService::bare(HyperTransport::new()),
    );

    let request = client
        .request("find_one", &args![42].expect("args"))
        .expect("request");

    check!(request.url() == "/api/users/42");
    check!(request.header("Content-Type") == Some("application/json"));
}
