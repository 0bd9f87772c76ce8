//! V1 routes.

use serde_json::Value;

use crate::support::{start_server, V1_JSON};

#[tokio::test]
async fn create_with_title() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/messages/create"))
        .header("Accept", V1_JSON)
        .form(&[("title", "hello v1")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    let id = body["entityId"].as_str().unwrap();
    assert!(body.get("title").is_none());
    assert_eq!(body["links"][0]["rel"], "self");
    assert_eq!(body["links"][0]["href"], format!("{base}/messages/{id}"));
}

#[tokio::test]
async fn create_without_title_is_bad_request() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/messages/create"))
        .header("Accept", V1_JSON)
        .form(&[("content", "no title")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn list_shows_identity_and_title() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/messages/create?title=first"))
        .header("Accept", V1_JSON)
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{base}/messages/list/1"))
        .header("Accept", V1_JSON)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let first = &body["resources"][0];
    assert!(first["entityId"].is_string());
    assert_eq!(first["title"], "first");
    assert!(first.get("sender").is_none());
    assert_eq!(body["links"][0]["rel"], "self");
    assert_eq!(body["links"][0]["href"], format!("{base}/messages/list/1"));
}

#[tokio::test]
async fn list_with_extra_columns() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/messages/create"))
        .header("Accept", V1_JSON)
        .form(&[("title", "with sender")])
        .send()
        .await
        .unwrap();

    let body: Value = client
        .get(format!("{base}/messages/list/1?includeFields=sender"))
        .header("Accept", V1_JSON)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first = &body["resources"][0];
    assert_eq!(first["title"], "with sender");
    assert_eq!(first["sender"], "127.0.0.1");
}

#[tokio::test]
async fn filter_list_does_not_exist_in_v1() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/messages/filterList/1?includeFields=content"))
        .header("Accept", V1_JSON)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn page_zero_is_bad_request() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/messages/list/0"))
        .header("Accept", V1_JSON)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn unknown_message_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/messages/does-not-exist"))
        .header("Accept", V1_JSON)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().is_empty());
}
