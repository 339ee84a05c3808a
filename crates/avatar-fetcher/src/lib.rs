//! Avatar Fetcher Library
//!
//! HTTP transport around [`avatar_providers::AvatarResolver`].

pub mod config;
pub mod error;
pub mod server;
pub mod types;

pub use config::Config;
pub use error::{ApiError, AvatarFetcherError, Result};
pub use server::{create_router, start_server, ServerState, SharedState};
