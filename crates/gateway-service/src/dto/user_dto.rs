//! User-related DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Social media links attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_uri: Option<String>,
}

/// User record as returned by the remote service.
///
/// Only `id` is inspected by the gateway; every other field passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub age: i32,
    pub subscribed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

impl User {
    /// Whether the record carries a usable identifier.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Request to create a new user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub age: i32,
}

/// Update body accepted from the caller.
///
/// Any `id` in the body is ignored in favour of the path identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

impl UpdateUserInput {
    /// Drops the body identifier and addresses the update at `id`.
    #[must_use]
    pub fn into_request(self, id: &str) -> UpdateUserRequest {
        let Self {
            id: _ignored,
            social_media,
        } = self;

        UpdateUserRequest {
            id: id.to_string(),
            social_media,
        }
    }
}

/// Update request sent to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: String,
    pub social_media: Option<SocialMedia>,
}
