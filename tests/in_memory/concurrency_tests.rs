//! Concurrent creation through a shared service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::in_memory::helpers::{TestService, draft, service};
use message_service::message::{
    adapters::{TITLE_TAKEN, memory::InMemoryMessageRepository},
    domain::MessageId,
    error::MessageError,
    services::MessageService,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_identifiers(service: TestService) {
    let handles: Vec<_> = (0..16)
        .map(|n| {
            let worker = service.clone();
            tokio::spawn(async move {
                worker
                    .create_message(&draft(&format!("title {n}"), "the body"))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let created = handle
            .await
            .expect("task should join")
            .expect("creation should succeed");
        ids.insert(created.id());
    }

    assert_eq!(ids.len(), 16);
    assert!((1..=16).all(|n| ids.contains(&MessageId::new(n))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_duplicate_titles_store_exactly_one() {
    let repository = Arc::new(InMemoryMessageRepository::new());
    let service = MessageService::new(Arc::clone(&repository));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let worker = service.clone();
            tokio::spawn(async move {
                worker
                    .create_message(&draft("contended", "the body"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.expect("task should join") {
            Ok(created) => {
                assert_eq!(created.title(), "contended");
                successes += 1;
            }
            Err(err) => assert_eq!(err, MessageError::internal(TITLE_TAKEN)),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(repository.len(), 1);
}
