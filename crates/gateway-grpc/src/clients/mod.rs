//! Remote clients for the users service.

mod users_client;

pub use users_client::*;
