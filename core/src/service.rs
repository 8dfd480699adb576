//! The remote todo service: one logical operation, one network request.
//!
//! `TodoService` is what the store depends on. `RemoteTodoService` is the
//! production implementation, pairing a `TodoClient` (request building and
//! response parsing) with a `Transport` (the round-trip itself).

use std::future::Future;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{TodoId, TodoRecord};

/// Asynchronous access to the remote todo collection.
///
/// Every call is a single attempt; failures are reported immediately.
pub trait TodoService: Send + Sync {
    /// Fetch up to `limit` records in server order.
    fn list_todos(&self, limit: usize) -> impl Future<Output = Result<Vec<TodoRecord>, ApiError>> + Send;

    /// Create a record owned by the configured user; returns the server's echo
    /// including the assigned id.
    fn create_todo(&self, title: &str) -> impl Future<Output = Result<TodoRecord, ApiError>> + Send;

    fn set_completed(&self, id: TodoId, completed: bool) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_todo(&self, id: TodoId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct RemoteTodoService<T = ReqwestTransport> {
    client: TodoClient,
    transport: T,
}

impl RemoteTodoService<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(TodoClient::from_config(config), ReqwestTransport::new())
    }
}

impl<T: Transport> RemoteTodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }
}

impl<T: Transport> TodoService for RemoteTodoService<T> {
    async fn list_todos(&self, limit: usize) -> Result<Vec<TodoRecord>, ApiError> {
        let request = self.client.build_list_todos(limit);
        let response = self.transport.execute(request).await?;
        self.client.parse_list_todos(response, limit)
    }

    async fn create_todo(&self, title: &str) -> Result<TodoRecord, ApiError> {
        let request = self.client.build_create_todo(title)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_todo(response)
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<(), ApiError> {
        let request = self.client.build_set_completed(id, completed)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_set_completed(response)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete_todo(response)
    }
}
