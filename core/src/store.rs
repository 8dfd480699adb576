//! The todo store: local state mirrored against the remote collection.
//!
//! # Design
//! Every operation calls the remote service first and mutates local state
//! only once the call has succeeded. The single exception is `load_all`,
//! which flips the status to `Loading` before it suspends.
//!
//! State lives inside a `tokio::sync::watch` channel. Each mutation is one
//! `send_modify` closure, so no two updates interleave and subscribers see
//! every transition. Nothing is held across an `.await`: operations can be in
//! flight concurrently and each applies its update when it resumes. The last
//! write wins, and a `load_all` that resolves after another operation has
//! already mutated the list replaces that mutation wholesale.

use std::fmt;

use tokio::sync::watch;

use crate::error::{ApiError, StoreError};
use crate::service::TodoService;
use crate::types::{TodoId, TodoRecord};

/// Number of records fetched by `load_all`.
pub const LOAD_LIMIT: usize = 10;

/// Outcome of the most recent `load_all`. Remote failures from the other
/// operations also land in `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Resolved,
    Rejected,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Resolved => "resolved",
            LoadStatus::Rejected => "rejected",
        })
    }
}

/// Snapshot of everything the presentation layer can read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub items: Vec<TodoRecord>,
    pub status: LoadStatus,
    pub last_error: Option<String>,
}

impl StoreState {
    pub fn get(&self, id: TodoId) -> Option<&TodoRecord> {
        self.items.iter().find(|todo| todo.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoRecord> {
        self.items.iter_mut().find(|todo| todo.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }
}

/// An operation the presentation layer can ask the store to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    LoadAll,
    Add { title: String },
    ToggleCompleted { id: TodoId },
    Remove { id: TodoId },
}

/// State container mediating between the presentation layer and a
/// `TodoService`.
pub struct TodoStore<S> {
    service: S,
    state: watch::Sender<StoreState>,
}

impl<S: TodoService> TodoStore<S> {
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { service, state }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub async fn dispatch(&self, action: TodoAction) -> Result<(), StoreError> {
        match action {
            TodoAction::LoadAll => self.load_all().await,
            TodoAction::Add { title } => self.add(&title).await.map(|_| ()),
            TodoAction::ToggleCompleted { id } => self.toggle_completed(id).await,
            TodoAction::Remove { id } => self.remove(id).await,
        }
    }

    /// Replace the list with the first `LOAD_LIMIT` records from the server.
    /// On failure the current items are kept.
    #[tracing::instrument(skip(self))]
    pub async fn load_all(&self) -> Result<(), StoreError> {
        self.state.send_modify(|state| {
            state.status = LoadStatus::Loading;
            state.last_error = None;
        });

        let items = self
            .service
            .list_todos(LOAD_LIMIT)
            .await
            .map_err(|err| self.reject(err))?;

        tracing::info!(count = items.len(), "loaded todos");
        self.state.send_modify(|state| {
            state.items = items;
            state.status = LoadStatus::Resolved;
        });
        Ok(())
    }

    /// Create a record remotely and append the server's copy. The title is
    /// sent as given; only the blank check trims it.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, title: &str) -> Result<TodoRecord, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::InvalidTitle);
        }

        let created = self
            .service
            .create_todo(title)
            .await
            .map_err(|err| self.reject(err))?;

        tracing::debug!(id = %created.id, "todo created");
        let record = created.clone();
        self.state.send_modify(move |state| state.items.push(record));
        Ok(created)
    }

    /// Flip `completed` on the record with `id`, remote first.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_completed(&self, id: TodoId) -> Result<(), StoreError> {
        let current = self.lookup(id)?;
        let completed = !current.completed;

        self.service
            .set_completed(id, completed)
            .await
            .map_err(|err| self.reject(err))?;

        self.state.send_modify(|state| match state.get_mut(id) {
            Some(todo) => todo.completed = completed,
            None => tracing::debug!(%id, "todo removed while toggle was in flight"),
        });
        Ok(())
    }

    /// Delete the record with `id`, remote first.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: TodoId) -> Result<(), StoreError> {
        self.lookup(id)?;

        self.service
            .delete_todo(id)
            .await
            .map_err(|err| self.reject(err))?;

        self.state.send_modify(|state| state.items.retain(|todo| todo.id != id));
        Ok(())
    }

    fn lookup(&self, id: TodoId) -> Result<TodoRecord, StoreError> {
        self.state.borrow().get(id).cloned().ok_or_else(|| {
            tracing::debug!(%id, "todo not present locally, skipping remote call");
            StoreError::NotFound { id }
        })
    }

    /// Record a remote failure in state and hand it back as a `StoreError`.
    fn reject(&self, err: ApiError) -> StoreError {
        let message = err.to_string();
        tracing::warn!(error = %message, "remote todo operation failed");
        self.state.send_modify(|state| {
            state.status = LoadStatus::Rejected;
            state.last_error = Some(message);
        });
        StoreError::Network(err)
    }
}
