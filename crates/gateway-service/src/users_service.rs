//! Envelope translation over the remote users service.

use crate::dto::{CreateUserInput, UpdateUserInput, User};
use crate::pagination_streamer::{ChunkHandler, PaginationQueryStreamer};
use crate::users_remote::UsersRemote;
use gateway_core::{GatewayError, GatewayResult, ResponseEnvelope};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Forwards each operation to the remote users service and wraps the outcome.
///
/// Failures reach the caller as one of two classifications: `NotFound`
/// (kept as is) or `Internal` with a fixed per-operation message. The
/// underlying cause is only logged.
#[derive(Clone)]
pub struct UsersService {
    remote: Arc<dyn UsersRemote>,
    streamer: PaginationQueryStreamer,
}

impl UsersService {
    /// Creates the service around a resolved remote binding.
    pub fn new(remote: Arc<dyn UsersRemote>) -> Self {
        let streamer = PaginationQueryStreamer::new(Arc::clone(&remote));
        Self { remote, streamer }
    }

    /// Creates the service with a custom handler for streamed chunks.
    pub fn with_chunk_handler(remote: Arc<dyn UsersRemote>, handler: ChunkHandler) -> Self {
        let streamer = PaginationQueryStreamer::with_handler(Arc::clone(&remote), handler);
        Self { remote, streamer }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// `Internal("Failed to create user")` on any remote failure.
    pub async fn create(&self, input: CreateUserInput) -> GatewayResult<ResponseEnvelope<User>> {
        debug!(username = %input.username, "Create user");

        self.remote
            .create_user(input)
            .await
            .map(|user| ResponseEnvelope::created("User successfully created", user))
            .map_err(|e| classify(e, "Failed to create user"))
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// `Internal("Failed to fetch users")` on any remote failure.
    pub async fn find_all(&self) -> GatewayResult<ResponseEnvelope<Vec<User>>> {
        debug!("Find all users");

        self.remote
            .find_all_users()
            .await
            .map(|users| ResponseEnvelope::ok("Users fetched successfully", users))
            .map_err(|e| classify(e, "Failed to fetch users"))
    }

    /// Fetches one user.
    ///
    /// # Errors
    ///
    /// `NotFound` when the remote returns no record or one without an id,
    /// `Internal("Failed to fetch user")` otherwise.
    pub async fn find_one(&self, id: &str) -> GatewayResult<ResponseEnvelope<User>> {
        debug!(user_id = %id, "Find user");

        self.remote
            .find_one_user(id)
            .await
            .and_then(|user| require_user(user, id))
            .map(|user| ResponseEnvelope::ok(format!("User with id {id} fetched successfully"), user))
            .map_err(|e| classify(e, "Failed to fetch user"))
    }

    /// Updates the user addressed by `id`. Any id inside `input` is discarded.
    ///
    /// # Errors
    ///
    /// `NotFound` when the remote returns no record or one without an id,
    /// `Internal("Failed to update user")` otherwise.
    pub async fn update(
        &self,
        id: &str,
        input: UpdateUserInput,
    ) -> GatewayResult<ResponseEnvelope<User>> {
        debug!(user_id = %id, "Update user");

        self.remote
            .update_user(input.into_request(id))
            .await
            .and_then(|user| require_user(user, id))
            .map(|user| ResponseEnvelope::ok(format!("User with id {id} updated successfully"), user))
            .map_err(|e| classify(e, "Failed to update user"))
    }

    /// Removes the user addressed by `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when the remote returns no record or one without an id,
    /// `Internal("Failed to remove user")` otherwise.
    pub async fn remove(&self, id: &str) -> GatewayResult<ResponseEnvelope<User>> {
        debug!(user_id = %id, "Remove user");

        self.remote
            .remove_user(id)
            .await
            .and_then(|user| require_user(user, id))
            .map(|user| ResponseEnvelope::ok(format!("User with id {id} removed successfully"), user))
            .map_err(|e| classify(e, "Failed to remove user"))
    }

    /// Kicks off the paginated email batch query. Fire-and-forget.
    pub fn email_users(&self) -> JoinHandle<()> {
        debug!("Email users");
        self.streamer.start()
    }
}

fn require_user(user: Option<User>, id: &str) -> GatewayResult<User> {
    user.filter(User::has_id)
        .ok_or_else(|| GatewayError::user_not_found(id))
}

/// Keeps `NotFound`; collapses everything else to `Internal(message)`.
fn classify(err: GatewayError, message: &'static str) -> GatewayError {
    if err.is_not_found() {
        return err;
    }

    warn!(error = %err, code = err.error_code(), "{}", message);
    GatewayError::internal(message)
}
