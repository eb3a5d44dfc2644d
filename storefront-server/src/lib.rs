//! storefront-server: HTTP CRUD API over `users` and `products`
//!
//! Each handler decodes its payload, runs one parameterized SQL
//! statement through the shared pool, and serializes the uniform
//! response envelope.

pub mod db;
pub mod http;
pub mod server;
pub mod state;

pub use server::{create_router, run_server, ServerArgs};
pub use state::AppState;
