//! # Gateway REST
//!
//! REST API layer using Axum for the users gateway.
//! Exposes the users CRUD operations, the email batch trigger, and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
