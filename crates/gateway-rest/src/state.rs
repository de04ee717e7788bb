//! Application state for Axum handlers.

use gateway_config::UpstreamConfig;
use gateway_service::UsersService;
use serde::Serialize;
use utoipa::ToSchema;

/// How the users service binding was resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsersBinding {
    /// Endpoint of the remote users service.
    pub url: String,
    /// `true` when the channel dials on first use.
    pub lazy: bool,
}

impl From<&UpstreamConfig> for UsersBinding {
    fn from(config: &UpstreamConfig) -> Self {
        Self {
            url: config.users_url.clone(),
            lazy: config.lazy_connect,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users_service: UsersService,
    pub binding: UsersBinding,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(users_service: UsersService, binding: UsersBinding) -> Self {
        Self {
            users_service,
            binding,
        }
    }
}
