//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the remote collection's JSON schema. The owner travels
//! as `userId` on the wire; ids are numbers assigned by the server. The
//! mock-server crate defines its own copies and integration tests catch any
//! schema drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user owning a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "userId")]
    pub owner: OwnerId,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(rename = "userId")]
    pub owner: OwnerId,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update payload that only touches the `completed` flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetCompleted {
    pub completed: bool,
}
