//! # Gateway Service
//!
//! Translates calls on the remote users service into uniform response
//! envelopes, and drives the paginated bulk query over its bidirectional
//! stream.

pub mod dto;
pub mod pagination_streamer;
pub mod users_remote;
pub mod users_service;

#[cfg(test)]
mod test_support;

pub use dto::*;
pub use pagination_streamer::*;
pub use users_remote::*;
pub use users_service::*;
