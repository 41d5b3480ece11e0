//! Model Context Protocol (MCP) server implementation.
//!
//! Framing, transport and method routing are handled by `rmcp`. This module
//! plugs the operation [`Registry`](crate::registry::Registry) into its
//! `ServerHandler` trait and serves it over stdio.

mod server;

pub use server::{DemoMcpServer, run_server};
