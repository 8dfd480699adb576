//! Drives parsed commands through a store connected to the mock server.

use todo_cli::{parse_command, render, Command};
use todo_core::{ClientConfig, OwnerId, RemoteTodoService, StoreError, TodoStore};

async fn store() -> TodoStore<RemoteTodoService> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run_with(listener, mock_server::sample_todos()).await });

    TodoStore::new(RemoteTodoService::from_config(&ClientConfig {
        base_url: format!("http://{addr}"),
        owner: OwnerId(1),
    }))
}

async fn run(store: &TodoStore<RemoteTodoService>, line: &str) -> Result<(), StoreError> {
    match parse_command(line).unwrap() {
        Command::Action(action) => store.dispatch(action).await,
        other => panic!("expected an action for {line:?}, got {other:?}"),
    }
}

#[tokio::test]
async fn scripted_session_renders_final_list() {
    let store = store().await;

    for line in ["load", "add buy milk", "toggle 1", "rm 2"] {
        run(&store, line).await.unwrap();
    }

    assert_eq!(
        render(&store.snapshot()),
        "[x]    1  delectus aut autem\n\
         [x]    3  fugiat veniam minus\n\
         [ ]    4  buy milk\n\
         2 of 3 done\n"
    );
}

#[tokio::test]
async fn removing_an_unknown_id_is_reported_without_changing_state() {
    let store = store().await;
    run(&store, "load").await.unwrap();
    let before = store.snapshot();

    let err = run(&store, "rm 5").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(store.snapshot(), before);
}
