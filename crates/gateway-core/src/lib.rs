//! # Gateway Core
//!
//! Core types shared by every layer of the users gateway: the error
//! taxonomy, the uniform response envelope, and pagination requests.

pub mod envelope;
pub mod error;
pub mod pagination;
pub mod result;

pub use envelope::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
