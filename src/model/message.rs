use std::fmt;

use serde::{Deserialize, Serialize};

use super::builder::MessageBuilder;
use super::{Entity, ENTITY_ID};
use crate::projection::{FieldAccessor, Projectable};

/// A message resource. Every attribute is optional; an absent attribute is
/// left out of the serialized form entirely rather than written as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

impl Message {
    pub const TITLE: &'static str = "title";
    pub const CONTENT: &'static str = "content";
    pub const SENDER: &'static str = "sender";

    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }
}

impl Entity for Message {
    fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    fn assign_id(&mut self, id: String) -> Result<(), String> {
        match &self.entity_id {
            Some(existing) => Err(existing.clone()),
            None => {
                self.entity_id = Some(id);
                Ok(())
            }
        }
    }
}

impl Projectable for Message {
    const FIELDS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor {
            name: ENTITY_ID,
            copy: |from, to| to.entity_id = from.entity_id.clone(),
        },
        FieldAccessor {
            name: Message::TITLE,
            copy: |from, to| to.title = from.title.clone(),
        },
        FieldAccessor {
            name: Message::CONTENT,
            copy: |from, to| to.content = from.content.clone(),
        },
        FieldAccessor {
            name: Message::SENDER,
            copy: |from, to| to.sender = from.sender.clone(),
        },
    ];
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "null".to_string());
        write!(
            f,
            "Message{{entityId={}, title={}, content={}, sender={}}}",
            show(&self.entity_id),
            show(&self.title),
            show(&self.content),
            show(&self.sender)
        )
    }
}
