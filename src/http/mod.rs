//! HTTP transport - maps versioned REST requests onto the message API.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /messages/:id`: one message.
//! - `GET /messages/list/:page`: a page of messages (`includeFields` optional).
//! - `GET /messages/filterList/:page`: a field-filtered page (V2 only).
//! - `POST /messages/create`: create from form parameters, answers 201.
//! - `GET /health`: returns `{ "ok": true, "messages": <count> }`.
//!
//! The API version and body format are picked from the `Accept` header
//! (`application/vnd.messages-v{1,2}+json` or `+xml`) and echoed back as the
//! response `Content-Type`.
//!
//! ## Example
//!
//! ```ignore
//! use hateoas_messages::http::{self, AppState};
//! use hateoas_messages::store::MessageStore;
//!
//! let state = AppState::new(MessageStore::new(), 10);
//! http::serve(state, "0.0.0.0:8080").await?;
//! ```

mod error;
mod handlers;
mod media;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::model::Message;
use crate::service::{ApiVersion, LinkBuilder, MessageApi, MessageService};
use crate::store::Store;

pub use error::ApiError;
pub use media::{MediaFormat, VersionedMedia};

/// Shared application state: one service per API version over one store.
#[derive(Clone)]
pub struct AppState {
    v1: Arc<dyn MessageApi>,
    v2: Arc<dyn MessageApi>,
    public_url: Option<String>,
}

impl AppState {
    /// Build both API versions over the same store handle.
    pub fn new<S>(store: S, page_size: usize) -> Self
    where
        S: Store<Message> + Clone + 'static,
    {
        Self {
            v1: Arc::new(MessageService::v1(store.clone(), page_size)),
            v2: Arc::new(MessageService::v2(store, page_size)),
            public_url: None,
        }
    }

    /// Use a fixed base URL for links instead of the request's `Host`.
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = Some(public_url.into());
        self
    }

    pub fn api(&self, version: ApiVersion) -> &dyn MessageApi {
        match version {
            ApiVersion::V1 => self.v1.as_ref(),
            ApiVersion::V2 => self.v2.as_ref(),
        }
    }

    fn links_for(&self, host: Option<&str>) -> LinkBuilder {
        match (&self.public_url, host) {
            (Some(url), _) => LinkBuilder::new(url.clone()),
            (None, Some(host)) => LinkBuilder::new(format!("http://{}", host)),
            (None, None) => LinkBuilder::default(),
        }
    }
}

/// Build an axum `Router` serving both API versions.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/messages/create", post(handlers::create))
        .route("/messages/list/:page", get(handlers::list))
        .route("/messages/filterList/:page", get(handlers::filter_list))
        .route("/messages/:id", get(handlers::find))
        .with_state(state)
}

/// Serve the API over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
///
/// The caller's socket address is made available to handlers so that
/// created messages record their sender.
pub async fn serve(state: AppState, addr: &str) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
