//! Remote users service client via gRPC.

use crate::proto::users;
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::StreamExt;
use gateway_config::UpstreamConfig;
use gateway_core::{GatewayError, GatewayResult, PaginationRequest};
use gateway_service::{
    CreateUserInput, PaginationStream, SocialMedia, UpdateUserRequest, User, UserChunkStream,
    UsersRemote,
};
use std::sync::Arc;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

type UsersServiceClient = users::users_service_client::UsersServiceClient<Channel>;

/// Remote users service client that communicates via gRPC.
#[derive(Debug, Clone)]
pub struct GrpcUsersClient {
    client: UsersServiceClient,
}

impl GrpcUsersClient {
    /// Builds a client whose channel dials on first use.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the endpoint URL is invalid.
    pub fn connect_lazy(config: &UpstreamConfig) -> GatewayResult<Self> {
        let channel = endpoint(config)?.connect_lazy();
        Ok(Self::from_channel(channel))
    }

    /// Builds a client and dials the users service immediately.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid URL, or an upstream error
    /// when the service cannot be reached.
    pub async fn connect(config: &UpstreamConfig) -> GatewayResult<Self> {
        let channel = endpoint(config)?.connect().await.map_err(|e| {
            GatewayError::upstream(
                "Unavailable",
                format!("Failed to connect to users service: {e}"),
            )
        })?;

        Ok(Self::from_channel(channel))
    }

    /// Creates from an existing channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: UsersServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl UsersRemote for GrpcUsersClient {
    async fn create_user(&self, input: CreateUserInput) -> GatewayResult<User> {
        debug!(username = %input.username, "Remote CreateUser");

        let response = self
            .client
            .clone()
            .create_user(users::CreateUserDto {
                username: input.username,
                password: input.password,
                age: input.age,
            })
            .await
            .map_err(map_grpc_error)?;

        Ok(from_proto_user(response.into_inner()))
    }

    async fn find_all_users(&self) -> GatewayResult<Vec<User>> {
        debug!("Remote FindAllUsers");

        let response = self
            .client
            .clone()
            .find_all_users(users::Empty {})
            .await
            .map_err(map_grpc_error)?;

        Ok(from_proto_users(response.into_inner()))
    }

    async fn find_one_user(&self, id: &str) -> GatewayResult<Option<User>> {
        debug!(user_id = %id, "Remote FindOneUser");

        let response = self
            .client
            .clone()
            .find_one_user(users::FindOneUserDto { id: id.to_string() })
            .await
            .map_err(map_grpc_error)?;

        Ok(into_record(response.into_inner()))
    }

    async fn update_user(&self, request: UpdateUserRequest) -> GatewayResult<Option<User>> {
        debug!(user_id = %request.id, "Remote UpdateUser");

        let response = self
            .client
            .clone()
            .update_user(users::UpdateUserDto {
                id: request.id,
                social_media: request.social_media.map(to_proto_social_media),
            })
            .await
            .map_err(map_grpc_error)?;

        Ok(into_record(response.into_inner()))
    }

    async fn remove_user(&self, id: &str) -> GatewayResult<Option<User>> {
        debug!(user_id = %id, "Remote RemoveUser");

        let response = self
            .client
            .clone()
            .remove_user(users::FindOneUserDto { id: id.to_string() })
            .await
            .map_err(map_grpc_error)?;

        Ok(into_record(response.into_inner()))
    }

    async fn query_users(&self, requests: PaginationStream) -> GatewayResult<UserChunkStream> {
        debug!("Remote QueryUsers");

        let outbound = requests.map(to_proto_pagination);

        // Boxing the call keeps the `dyn Stream` out of this future's state,
        // which rustc otherwise cannot prove `Send` (higher-ranked lifetime error).
        let mut client = self.client.clone();
        let call: BoxFuture<'_, _> = Box::pin(client.query_users(outbound));
        let inbound = call
            .await
            .map_err(map_grpc_error)?
            .into_inner();

        Ok(inbound
            .map(|chunk| chunk.map(from_proto_users).map_err(map_grpc_error))
            .boxed())
    }
}

/// Resolves the users service binding once, honouring `lazy_connect`.
///
/// # Errors
///
/// See [`GrpcUsersClient::connect_lazy`] and [`GrpcUsersClient::connect`].
pub async fn create_remote_users_service(
    config: &UpstreamConfig,
) -> GatewayResult<Arc<dyn UsersRemote>> {
    let client = if config.lazy_connect {
        GrpcUsersClient::connect_lazy(config)?
    } else {
        GrpcUsersClient::connect(config).await?
    };

    info!(
        url = %config.users_url,
        lazy = config.lazy_connect,
        "Users service binding resolved"
    );

    Ok(Arc::new(client))
}

// Helper functions

fn endpoint(config: &UpstreamConfig) -> GatewayResult<Endpoint> {
    let endpoint = Endpoint::from_shared(config.users_url.clone()).map_err(|e| {
        GatewayError::Configuration(format!(
            "Invalid users service URL {}: {e}",
            config.users_url
        ))
    })?;

    Ok(endpoint
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout()))
}

/// Every remote status becomes an upstream error; classification happens in the service layer.
fn map_grpc_error(status: tonic::Status) -> GatewayError {
    GatewayError::upstream(format!("{:?}", status.code()), status.message())
}

/// An all-default message is the remote's way of saying "no record".
fn into_record(user: users::User) -> Option<User> {
    if user == users::User::default() {
        None
    } else {
        Some(from_proto_user(user))
    }
}

fn from_proto_users(chunk: users::Users) -> Vec<User> {
    chunk.users.into_iter().map(from_proto_user).collect()
}

fn from_proto_user(user: users::User) -> User {
    User {
        id: user.id,
        username: user.username,
        password: user.password,
        age: user.age,
        subscribed: user.subscribed,
        social_media: user.social_media.map(|s| SocialMedia {
            twitter_uri: s.twitter_uri,
            fb_uri: s.fb_uri,
        }),
    }
}

fn to_proto_social_media(social: SocialMedia) -> users::SocialMedia {
    users::SocialMedia {
        twitter_uri: social.twitter_uri,
        fb_uri: social.fb_uri,
    }
}

fn to_proto_pagination(request: PaginationRequest) -> users::PaginationDto {
    users::PaginationDto {
        page: i32::try_from(request.page).unwrap_or(i32::MAX),
        skip: i32::try_from(request.skip).unwrap_or(i32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_no_record() {
        assert!(into_record(users::User::default()).is_none());
    }

    #[test]
    fn test_record_without_id_is_kept_for_classification() {
        let record = into_record(users::User {
            username: "ghost".to_string(),
            ..users::User::default()
        })
        .unwrap();
        assert!(!record.has_id());
    }

    #[test]
    fn test_status_maps_to_upstream() {
        let err = map_grpc_error(tonic::Status::not_found("no such user"));
        assert!(!err.is_not_found());
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_pagination_conversion() {
        let dto = to_proto_pagination(PaginationRequest { page: 3, skip: 25 });
        assert_eq!(dto.page, 3);
        assert_eq!(dto.skip, 25);
    }

    #[tokio::test]
    async fn test_invalid_url_is_configuration_error() {
        let config = UpstreamConfig {
            users_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        };
        let err = GrpcUsersClient::connect_lazy(&config).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_lazy_connect_does_not_dial() {
        let config = UpstreamConfig {
            users_url: "http://127.0.0.1:1".to_string(),
            ..UpstreamConfig::default()
        };
        assert!(create_remote_users_service(&config).await.is_ok());
    }
}
