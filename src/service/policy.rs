//! Per-version field policies.

use super::{ApiVersion, CreateMessage, ServiceError};
use crate::model::{Message, ENTITY_ID};
use crate::projection::FieldSet;

/// What a given API version exposes and accepts.
pub trait FieldPolicy: Send + Sync {
    fn version(&self) -> ApiVersion;

    /// Fields returned by find-by-id.
    fn find_fields(&self) -> FieldSet;

    /// Fields returned for a page, given the fields the client asked for.
    fn page_fields(&self, requested: &FieldSet) -> FieldSet;

    /// Whether the `filterList` route exists in this version.
    fn supports_filter_list(&self) -> bool;

    /// Turn create input into a message draft.
    fn draft(&self, request: CreateMessage) -> Result<Message, ServiceError>;
}

/// V1: identity and title only.
#[derive(Debug, Clone, Copy, Default)]
pub struct V1Fields;

impl V1Fields {
    fn displayed() -> FieldSet {
        FieldSet::from_names([ENTITY_ID, Message::TITLE])
    }
}

impl FieldPolicy for V1Fields {
    fn version(&self) -> ApiVersion {
        ApiVersion::V1
    }

    fn find_fields(&self) -> FieldSet {
        Self::displayed()
    }

    fn page_fields(&self, requested: &FieldSet) -> FieldSet {
        Self::displayed().union(requested)
    }

    fn supports_filter_list(&self) -> bool {
        false
    }

    fn draft(&self, request: CreateMessage) -> Result<Message, ServiceError> {
        let title = request
            .title
            .ok_or_else(|| ServiceError::missing_parameter(Message::TITLE))?;
        let mut message = Message::builder().title(title);
        if let Some(sender) = request.sender {
            message = message.sender(sender);
        }
        Ok(message.build())
    }
}

/// V2: every field, with client-chosen projections on pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct V2Fields;

impl FieldPolicy for V2Fields {
    fn version(&self) -> ApiVersion {
        ApiVersion::V2
    }

    fn find_fields(&self) -> FieldSet {
        FieldSet::all()
    }

    fn page_fields(&self, requested: &FieldSet) -> FieldSet {
        if requested.is_empty() {
            FieldSet::all()
        } else {
            requested.clone().with(ENTITY_ID)
        }
    }

    fn supports_filter_list(&self) -> bool {
        true
    }

    fn draft(&self, request: CreateMessage) -> Result<Message, ServiceError> {
        let title = request
            .title
            .ok_or_else(|| ServiceError::missing_parameter(Message::TITLE))?;
        let content = request
            .content
            .ok_or_else(|| ServiceError::missing_parameter(Message::CONTENT))?;
        let mut message = Message::builder().title(title).content(content);
        if let Some(sender) = request.sender {
            message = message.sender(sender);
        }
        Ok(message.build())
    }
}
