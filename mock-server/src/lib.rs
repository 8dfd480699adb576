//! In-memory stand-in for a jsonplaceholder-style `/todos` collection.
//!
//! Ids are sequential numbers assigned on create. Records are kept in a
//! `BTreeMap`, so listing returns them in creation order.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(rename = "userId", default = "default_user")]
    pub user_id: u64,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit", alias = "limit")]
    pub limit: Option<usize>,
}

fn default_user() -> u64 {
    1
}

#[derive(Default)]
pub struct Collection {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl Collection {
    fn seeded(seed: Vec<Todo>) -> Self {
        let next_id = seed.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: seed.into_iter().map(|t| (t.id, t)).collect(),
            next_id,
        }
    }
}

pub type Db = Arc<RwLock<Collection>>;

/// A handful of records for local runs.
pub fn sample_todos() -> Vec<Todo> {
    ["delectus aut autem", "quis ut nam facilis et officia qui", "fugiat veniam minus"]
        .into_iter()
        .zip(1..)
        .map(|(title, id)| Todo {
            id,
            title: title.to_string(),
            completed: id == 3,
            user_id: 1,
        })
        .collect()
}

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(seed: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(Collection::seeded(seed)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run_with(listener: TcpListener, seed: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let db = db.read().await;
    let limit = params.limit.unwrap_or(usize::MAX);
    tracing::debug!(limit, total = db.todos.len(), "list todos");
    Json(db.todos.values().take(limit).cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut db = db.write().await;
    let todo = Todo {
        id: db.next_id,
        title: input.title,
        completed: input.completed,
        user_id: input.user_id,
    };
    db.next_id += 1;
    db.todos.insert(todo.id, todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let db = db.read().await;
    db.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut db = db.write().await;
    let todo = db.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.todos.remove(&id).map(|_| StatusCode::OK).ok_or(StatusCode::NOT_FOUND)
}
