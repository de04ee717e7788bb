//! Generated protobuf types.

#[allow(clippy::pedantic, clippy::all)]
pub mod users {
    tonic::include_proto!("users");
}
