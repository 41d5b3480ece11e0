//! Demo MCP server
//!
//! A small Model Context Protocol server exposing two tools (`add`,
//! `get_weather`) and two resource templates (`greeting://{name}`,
//! `user_profile://{username}`) over stdio. Weather and profile data are
//! random and for demonstration only.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Static server metadata
//! - `handlers`: The four operations and their registration
//! - `logging`: tracing setup and the per-call logging decorator
//! - `mcp`: `rmcp` server implementation
//! - `registry`: Operation registry, input validation, URI templates

pub mod cli;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod mcp;
pub mod registry;
