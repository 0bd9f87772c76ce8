//! HTTP route handlers for the message API.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE, HOST};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::error::ApiError;
use super::media::{MediaFormat, VersionedMedia};
use super::AppState;
use crate::projection::FieldSet;
use crate::service::{ApiVersion, CreateMessage, LinkBuilder, PageRequest};

/// XML document element for a single message.
const MESSAGE_ROOT: &str = "message";
/// XML document element for a page of messages.
const PAGE_ROOT: &str = "messages";

/// Query parameters accepted by the paged routes.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(rename = "includeFields")]
    pub include_fields: Option<String>,
}

impl PageParams {
    fn fields(&self) -> FieldSet {
        self.include_fields
            .as_deref()
            .map(FieldSet::parse)
            .unwrap_or_default()
    }
}

/// Parameters accepted by `POST /messages/create`, from the query string or
/// a form body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Resolve the API version and representation from `Accept`.
fn negotiate(headers: &HeaderMap) -> Result<VersionedMedia, ApiError> {
    VersionedMedia::from_headers(headers).ok_or_else(|| {
        debug!(accept = ?headers.get(ACCEPT), "no acceptable media type");
        ApiError::NotAcceptable
    })
}

fn links(state: &AppState, headers: &HeaderMap) -> LinkBuilder {
    let host = headers.get(HOST).and_then(|h| h.to_str().ok());
    state.links_for(host)
}

/// Render `body` in the negotiated format. `root` names the XML document
/// element.
fn versioned<T: Serialize>(
    media: VersionedMedia,
    status: StatusCode,
    root: &'static str,
    body: T,
) -> Result<Response, ApiError> {
    let content_type = [(CONTENT_TYPE, media.content_type())];
    match media.format {
        MediaFormat::Json => Ok((status, content_type, Json(body)).into_response()),
        MediaFormat::Xml => {
            let xml = quick_xml::se::to_string_with_root(root, &body)
                .map_err(|e| ApiError::Render(e.to_string()))?;
            Ok((status, content_type, xml).into_response())
        }
    }
}

/// `GET /messages/:id`
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let media = negotiate(&headers)?;
    let links = links(&state, &headers);

    match state.api(media.version).find(&links, &id)? {
        Some(message) => versioned(media, StatusCode::OK, MESSAGE_ROOT, message),
        None => Err(ApiError::NotFound),
    }
}

/// `GET /messages/list/:page`
pub async fn list(
    State(state): State<AppState>,
    Path(page): Path<i64>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let media = negotiate(&headers)?;
    let links = links(&state, &headers);

    let request = PageRequest::list(page).with_fields(params.fields());
    let resources = state.api(media.version).get_page(&links, &request)?;
    versioned(media, StatusCode::OK, PAGE_ROOT, resources)
}

/// `GET /messages/filterList/:page`
pub async fn filter_list(
    State(state): State<AppState>,
    Path(page): Path<i64>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let media = negotiate(&headers)?;
    let links = links(&state, &headers);

    let request = PageRequest::filter_list(page, params.fields());
    let resources = state.api(media.version).get_page(&links, &request)?;
    versioned(media, StatusCode::OK, PAGE_ROOT, resources)
}

/// `POST /messages/create`
pub async fn create(
    State(state): State<AppState>,
    origin: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Query(query): Query<CreateParams>,
    form: Option<Form<CreateParams>>,
) -> Result<Response, ApiError> {
    let media = negotiate(&headers)?;
    let links = links(&state, &headers);

    let form = form.map(|Form(params)| params).unwrap_or_default();
    let request = CreateMessage {
        title: form.title.or(query.title),
        content: form.content.or(query.content),
        sender: origin.map(|ConnectInfo(addr)| addr.ip().to_string()),
    };

    let created = state.api(media.version).create(&links, request)?;
    versioned(media, StatusCode::CREATED, MESSAGE_ROOT, created)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let count = state.api(ApiVersion::V2).count()?;
    Ok(Json(json!({ "ok": true, "messages": count })))
}
