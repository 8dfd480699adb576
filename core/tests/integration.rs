//! End-to-end store behaviour against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives a `TodoStore` wired
//! to a real `RemoteTodoService` over reqwest. Validates that request
//! building, transport and response parsing agree with the server's schema.

use std::net::SocketAddr;

use todo_core::{
    ApiError, ClientConfig, LoadStatus, OwnerId, RemoteTodoService, StoreError, TodoId, TodoService,
    TodoStore,
};

async fn spawn_server(seed: Vec<mock_server::Todo>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run_with(listener, seed).await });
    addr
}

fn service(addr: SocketAddr) -> RemoteTodoService {
    RemoteTodoService::from_config(&ClientConfig {
        base_url: format!("http://{addr}"),
        owner: OwnerId(1),
    })
}

#[tokio::test]
async fn store_lifecycle_against_mock_server() {
    let addr = spawn_server(mock_server::sample_todos()).await;
    let store = TodoStore::new(service(addr));

    // Load: three seeded records.
    store.load_all().await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.status, LoadStatus::Resolved);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[0].title, "delectus aut autem");

    // Add: appended with the server-assigned id.
    let created = store.add("buy milk").await.unwrap();
    assert_eq!(created.id, TodoId(4));
    assert_eq!(created.owner, OwnerId(1));
    assert_eq!(store.snapshot().items.last(), Some(&created));

    // Toggle: flipped locally and remotely.
    store.toggle_completed(TodoId(4)).await.unwrap();
    assert!(store.snapshot().get(TodoId(4)).unwrap().completed);

    // Remove: gone locally, and a reload confirms it is gone remotely.
    store.remove(TodoId(1)).await.unwrap();
    store.load_all().await.unwrap();
    let state = store.snapshot();
    let ids: Vec<_> = state.items.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![TodoId(2), TodoId(3), TodoId(4)]);
    assert!(state.get(TodoId(4)).unwrap().completed);
}

#[tokio::test]
async fn load_all_is_bounded_to_ten() {
    let seed = (1..=25)
        .map(|id| mock_server::Todo {
            id,
            title: format!("todo {id}"),
            completed: false,
            user_id: 1,
        })
        .collect();
    let addr = spawn_server(seed).await;
    let store = TodoStore::new(service(addr));

    store.load_all().await.unwrap();
    assert_eq!(store.snapshot().items.len(), 10);
}

#[tokio::test]
async fn record_deleted_elsewhere_surfaces_as_network_error() {
    let addr = spawn_server(mock_server::sample_todos()).await;
    let store = TodoStore::new(service(addr));
    store.load_all().await.unwrap();

    // Another client removes record 2 behind our back.
    service(addr).delete_todo(TodoId(2)).await.unwrap();

    let err = store.toggle_completed(TodoId(2)).await.unwrap_err();
    assert!(matches!(err, StoreError::Network(ApiError::NotFound)));
    let state = store.snapshot();
    assert_eq!(state.status, LoadStatus::Rejected);
    assert_eq!(state.last_error.as_deref(), Some("resource not found"));
    assert_eq!(state.items.len(), 3);
}

#[tokio::test]
async fn unreachable_server_rejects_load() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let store = TodoStore::new(service(addr));

    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Network(ApiError::Transport(_))));
    let state = store.snapshot();
    assert_eq!(state.status, LoadStatus::Rejected);
    assert!(state.items.is_empty());
}
