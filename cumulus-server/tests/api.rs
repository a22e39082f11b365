use cumulus::{resource::ResourceRecord, ApiError};
use reqwest::StatusCode;
use serde_json::json;

const TOKEN: &str = "server-test";

fn authed(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    req.bearer_auth(TOKEN)
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let server = cumulus_server::spawn(TOKEN).unwrap();
    let http = reqwest::Client::new();

    let resp = http.get(server.base_url()).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let err: ApiError = resp.json().await.unwrap();
    assert_eq!(err.status, "UNAUTHORIZED");
}

#[tokio::test]
async fn created_resource_can_be_read_and_deleted_once() {
    let server = cumulus_server::spawn(TOKEN).unwrap();
    let http = reqwest::Client::new();
    let resources = format!("{}/resources", server.base_url());

    let resp = authed(http.post(&resources))
        .json(&json!({ "name": "test-instance", "type": "vm", "region": "us-east-1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: ResourceRecord = resp.json().await.unwrap();
    assert!(created.id.starts_with("res-"));
    assert!(created.is_running());

    let url = format!("{resources}/{}", created.id);
    let fetched: ResourceRecord = authed(http.get(&url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let first = authed(http.delete(&url)).send().await.unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = authed(http.delete(&url)).send().await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    assert_eq!(server.state().deletions(), 1);
}

#[tokio::test]
async fn invalid_bodies_are_bad_requests() {
    let server = cumulus_server::spawn(TOKEN).unwrap();
    let http = reqwest::Client::new();
    let resources = format!("{}/resources", server.base_url());

    let cases = [
        (json!({ "name": "", "type": "vm" }), "INVALID_NAME"),
        (json!({ "type": "vm" }), "INVALID_NAME"),
        (json!({ "name": "test-instance" }), "INVALID_REQUEST"),
        (json!("not a resource"), "INVALID_REQUEST"),
    ];

    for (body, code) in cases {
        let resp = authed(http.post(&resources))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");

        let err: ApiError = resp.json().await.unwrap();
        assert_eq!(err.status, code, "{body}");
    }
}

#[tokio::test]
async fn unknown_resource_is_not_found() {
    let server = cumulus_server::spawn(TOKEN).unwrap();
    let http = reqwest::Client::new();

    let resp = authed(http.get(format!("{}/resources/res-999", server.base_url())))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
