//! MessageService - the shared find/page/create logic behind every version.

use tracing::{debug, error, info};

use super::links::LinkBuilder;
use super::policy::{FieldPolicy, V1Fields, V2Fields};
use super::{ApiVersion, CreateMessage, MessageApi, PageRequest, PageRoute, ServiceError};
use crate::model::{Message, Resource, Resources, ENTITY_ID};
use crate::paging::{self, PageDescriptor};
use crate::projection::{project, FieldSet, Projectable};
use crate::store::Store;

/// Message API over a store handle `S`, shaped by the field policy `P`.
#[derive(Debug, Clone)]
pub struct MessageService<S, P> {
    store: S,
    policy: P,
    page_size: usize,
}

pub type MessageServiceV1<S> = MessageService<S, V1Fields>;
pub type MessageServiceV2<S> = MessageService<S, V2Fields>;

impl<S: Store<Message>> MessageService<S, V1Fields> {
    pub fn v1(store: S, page_size: usize) -> Self {
        MessageService::with_policy(store, V1Fields, page_size)
    }
}

impl<S: Store<Message>> MessageService<S, V2Fields> {
    pub fn v2(store: S, page_size: usize) -> Self {
        MessageService::with_policy(store, V2Fields, page_size)
    }
}

impl<S: Store<Message>, P: FieldPolicy + Default> MessageService<S, P> {
    pub fn new(store: S, page_size: usize) -> Self {
        Self::with_policy(store, P::default(), page_size)
    }
}

impl<S: Store<Message>, P: FieldPolicy> MessageService<S, P> {
    pub fn with_policy(store: S, policy: P, page_size: usize) -> Self {
        Self {
            store,
            policy,
            page_size,
        }
    }

    fn with_self_link(links: &LinkBuilder, message: Message) -> Resource<Message> {
        match message.entity_id.as_deref() {
            Some(id) => {
                let link = links.message(id);
                Resource::new(message).with_link(link)
            }
            None => Resource::new(message),
        }
    }
}

impl<S: Store<Message>, P: FieldPolicy> MessageApi for MessageService<S, P> {
    fn version(&self) -> ApiVersion {
        self.policy.version()
    }

    fn find(&self, links: &LinkBuilder, id: &str) -> Result<Option<Resource<Message>>, ServiceError> {
        let version = self.policy.version();
        info!(%version, id, "find message");

        let found = self
            .store
            .find(id, &self.policy.find_fields())
            .inspect_err(|e| error!(%version, id, error = %e, "couldn't find message"))?;
        Ok(found.map(|message| Self::with_self_link(links, message)))
    }

    fn get_page(
        &self,
        links: &LinkBuilder,
        request: &PageRequest,
    ) -> Result<Resources<Message>, ServiceError> {
        let version = self.policy.version();
        info!(
            %version,
            page = request.page,
            route = request.route.segment(),
            include_fields = %request.include_fields,
            "get messages"
        );

        if request.route == PageRoute::FilterList && !self.policy.supports_filter_list() {
            return Err(ServiceError::Unsupported {
                operation: "filterList",
                version,
            });
        }
        let offset = paging::start_offset(request.page, self.page_size)?;

        let fields = self.policy.page_fields(&request.include_fields);
        debug!(%version, %fields, "filter - included fields");
        for unknown in request.include_fields.iter().filter(|name| !Message::has_field(name)) {
            debug!(%version, field = unknown, "ignoring unknown field");
        }

        let (messages, total) = self
            .store
            .scan_with_total(offset, self.page_size, &fields)
            .inspect_err(|e| {
                error!(
                    %version,
                    page = request.page,
                    offset,
                    limit = self.page_size,
                    %fields,
                    error = %e,
                    "couldn't get messages"
                )
            })?;
        let descriptor = PageDescriptor::new(request.page, self.page_size, total)?;

        let mut page = Resources::new(
            messages
                .into_iter()
                .map(|m| Self::with_self_link(links, m))
                .collect(),
        );
        for link in links.page_links(&descriptor, request.route, &request.include_fields) {
            page.push_link(link);
        }
        Ok(page)
    }

    fn create(
        &self,
        links: &LinkBuilder,
        request: CreateMessage,
    ) -> Result<Resource<Message>, ServiceError> {
        let version = self.policy.version();
        info!(
            %version,
            title = request.title.as_deref(),
            content = request.content.as_deref(),
            "creating new message"
        );

        let draft = self.policy.draft(request)?;
        let created = self
            .store
            .create(draft.clone())
            .inspect_err(|e| error!(%version, draft = %draft, error = %e, "couldn't create message"))?;

        let id_only = project(&created, &FieldSet::from_names([ENTITY_ID]));
        Ok(Self::with_self_link(links, id_only))
    }

    fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.store.count()?)
    }
}
