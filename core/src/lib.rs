//! Client core for a remote todo collection.
//!
//! # Overview
//! Two layers. The remote service layer turns each logical operation into one
//! HTTP round-trip: `TodoClient` builds `HttpRequest` values and parses
//! `HttpResponse` values, a `Transport` executes them, and
//! `RemoteTodoService` glues the two behind the `TodoService` trait. The
//! `TodoStore` owns the in-memory list and composes a remote call with a
//! local mutation for each of its four operations.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url` and the owner id.
//! - Each remote operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the wire format is testable without a server.
//! - The store never mutates local state for a failed remote call; failures
//!   are recorded as `status = rejected` plus `last_error`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{RemoteTodoService, TodoService};
pub use store::{LoadStatus, StoreState, TodoAction, TodoStore, LOAD_LIMIT};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateTodo, OwnerId, SetCompleted, TodoId, TodoRecord};
