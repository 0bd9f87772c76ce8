//! V1: identity and title only.

use hateoas_messages::{
    CreateMessage, FieldSet, Link, LinkBuilder, MessageApi, MessageService, MessageStore,
    PageRequest, ServiceError,
};

use crate::support::{seed, BrokenStore, RecordingStore};

#[test]
fn find_hides_content_and_sender() {
    let store = MessageStore::new();
    let ids = seed(&store, 1);
    let api = MessageService::v1(store, 10);

    let found = api.find(&LinkBuilder::default(), &ids[0]).unwrap().unwrap();
    assert_eq!(found.entity.title.as_deref(), Some("Title-0"));
    assert!(found.entity.content.is_none());
    assert!(found.entity.sender.is_none());
}

#[test]
fn extra_columns_extend_the_fixed_set() {
    let store = MessageStore::new();
    seed(&store, 3);
    let api = MessageService::v1(store, 10);

    let request = PageRequest::list(1).with_fields(FieldSet::parse("content"));
    let page = api.get_page(&LinkBuilder::default(), &request).unwrap();

    assert_eq!(page.len(), 3);
    for resource in &page.resources {
        assert!(resource.entity.entity_id.is_some());
        assert!(resource.entity.title.is_some());
        assert!(resource.entity.content.is_some());
        assert!(resource.entity.sender.is_none());
    }
}

#[test]
fn invalid_page_never_reaches_the_store() {
    let store = RecordingStore::new();
    let api = MessageService::v1(store.clone(), 10);

    let err = api
        .get_page(&LinkBuilder::default(), &PageRequest::list(0))
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidArgument(_)));
    assert_eq!(store.calls(), 0);
}

#[test]
fn create_takes_title_only() {
    let store = MessageStore::new();
    let api = MessageService::v1(store.clone(), 10);
    let links = LinkBuilder::new("http://api.test");

    let created = api
        .create(
            &links,
            CreateMessage {
                title: Some("hello".into()),
                content: Some("dropped".into()),
                sender: Some("192.168.1.5".into()),
            },
        )
        .unwrap();
    let id = created.entity.entity_id.clone().unwrap();
    assert_eq!(
        created.link(Link::SELF).unwrap().href,
        format!("http://api.test/messages/{id}")
    );

    let v2 = MessageService::v2(store, 10);
    let stored = v2.find(&links, &id).unwrap().unwrap();
    assert_eq!(stored.entity.title.as_deref(), Some("hello"));
    assert!(stored.entity.content.is_none());
    assert_eq!(stored.entity.sender.as_deref(), Some("192.168.1.5"));
}

#[test]
fn storage_faults_surface_as_service_errors() {
    let api = MessageService::v1(BrokenStore, 10);

    let err = api
        .get_page(&LinkBuilder::default(), &PageRequest::list(1))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));
    assert!(!err.is_client_error());
}
