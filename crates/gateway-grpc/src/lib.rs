//! # Gateway gRPC
//!
//! Tonic binding to the remote users service. Implements
//! [`gateway_service::UsersRemote`] over a lazily or eagerly connected
//! channel, including the bidirectional `QueryUsers` stream.

pub mod clients;
pub mod proto;

pub use clients::*;
