//! HTTP server implementation for rawhttp.
//!
//! This module accepts TCP connections, drives the incremental parser
//! against each one, and hands the parsed request to a user-supplied
//! handler together with a [`ResponseWriter`](crate::response::ResponseWriter).

mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use handler::{HandlerError, HandlerFn};
pub use http_server::HttpServer;
