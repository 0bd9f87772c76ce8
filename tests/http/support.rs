use std::net::SocketAddr;

use hateoas_messages::http::{router, AppState};
use hateoas_messages::MessageStore;

pub const V1_JSON: &str = "application/vnd.messages-v1+json";
pub const V2_JSON: &str = "application/vnd.messages-v2+json";
pub const V1_XML: &str = "application/vnd.messages-v1+xml";
pub const V2_XML: &str = "application/vnd.messages-v2+xml";

/// Bind to port 0 and return the base URL.
pub async fn start_server() -> String {
    start_server_with(AppState::new(MessageStore::new(), 10)).await
}

pub async fn start_server_with(state: AppState) -> String {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });
    format!("http://{addr}")
}

/// Create a message through the V2 API and return its identity.
pub async fn create_v2(client: &reqwest::Client, base: &str, title: &str, content: &str) -> String {
    let resp = client
        .post(format!("{base}/messages/create"))
        .header("Accept", V2_JSON)
        .form(&[("title", title), ("content", content)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["entityId"].as_str().unwrap().to_string()
}
