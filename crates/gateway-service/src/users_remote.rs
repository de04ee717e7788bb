//! Binding to the remote users service.

use crate::dto::{CreateUserInput, UpdateUserRequest, User};
use async_trait::async_trait;
use futures::stream::BoxStream;
use gateway_core::{GatewayResult, PaginationRequest};

/// Outbound stream of pagination requests fed to [`UsersRemote::query_users`].
pub type PaginationStream = BoxStream<'static, PaginationRequest>;

/// Inbound stream of result chunks, one page of users per item.
pub type UserChunkStream = BoxStream<'static, GatewayResult<Vec<User>>>;

/// Typed call stubs of the remote users service.
///
/// Lookups return `None` when the remote service answers with no record.
#[async_trait]
pub trait UsersRemote: Send + Sync {
    /// Creates a user.
    async fn create_user(&self, input: CreateUserInput) -> GatewayResult<User>;

    /// Lists every user.
    async fn find_all_users(&self) -> GatewayResult<Vec<User>>;

    /// Looks up a user by id.
    async fn find_one_user(&self, id: &str) -> GatewayResult<Option<User>>;

    /// Updates the user addressed by `request.id`.
    async fn update_user(&self, request: UpdateUserRequest) -> GatewayResult<Option<User>>;

    /// Removes a user by id.
    async fn remove_user(&self, id: &str) -> GatewayResult<Option<User>>;

    /// Opens the bidirectional paginated query.
    async fn query_users(&self, requests: PaginationStream) -> GatewayResult<UserChunkStream>;
}
