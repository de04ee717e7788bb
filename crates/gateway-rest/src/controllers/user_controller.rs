//! Users controller.

use crate::{
    responses::{respond, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gateway_service::{CreateUserInput, UpdateUserInput, User};
use tracing::debug;

/// Creates the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all_users).post(create_user))
        .route("/email", post(email_users))
        .route(
            "/:id",
            get(find_one_user).patch(update_user).delete(remove_user),
        )
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "User created", body = gateway_core::ResponseEnvelope<User>),
        (status = 500, description = "Remote failure", body = gateway_core::ErrorEnvelope)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> ApiResult<User> {
    debug!(username = %input.username, "Create user request");

    let envelope = state.users_service.create(input).await?;
    Ok(respond(envelope))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users fetched", body = gateway_core::ResponseEnvelope<Vec<User>>),
        (status = 500, description = "Remote failure", body = gateway_core::ErrorEnvelope)
    )
)]
pub async fn find_all_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    debug!("List users request");

    let envelope = state.users_service.find_all().await?;
    Ok(respond(envelope))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User fetched", body = gateway_core::ResponseEnvelope<User>),
        (status = 404, description = "User not found", body = gateway_core::ErrorEnvelope),
        (status = 500, description = "Remote failure", body = gateway_core::ErrorEnvelope)
    )
)]
pub async fn find_one_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    debug!(user_id = %id, "Get user request");

    let envelope = state.users_service.find_one(&id).await?;
    Ok(respond(envelope))
}

/// Update a user. The path id wins over any id in the body.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserInput,
    responses(
        (status = 200, description = "User updated", body = gateway_core::ResponseEnvelope<User>),
        (status = 404, description = "User not found", body = gateway_core::ErrorEnvelope),
        (status = 500, description = "Remote failure", body = gateway_core::ErrorEnvelope)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateUserInput>,
) -> ApiResult<User> {
    debug!(user_id = %id, "Update user request");

    let envelope = state.users_service.update(&id, input).await?;
    Ok(respond(envelope))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed", body = gateway_core::ResponseEnvelope<User>),
        (status = 404, description = "User not found", body = gateway_core::ErrorEnvelope),
        (status = 500, description = "Remote failure", body = gateway_core::ErrorEnvelope)
    )
)]
pub async fn remove_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    debug!(user_id = %id, "Remove user request");

    let envelope = state.users_service.remove(&id).await?;
    Ok(respond(envelope))
}

/// Start the paginated email batch. Returns before any chunk arrives.
#[utoipa::path(
    post,
    path = "/users/email",
    tag = "users",
    responses(
        (status = 202, description = "Batch query started")
    )
)]
pub async fn email_users(State(state): State<AppState>) -> StatusCode {
    debug!("Email users request");

    drop(state.users_service.email_users());
    StatusCode::ACCEPTED
}
