//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `serve`: Start the MCP server over stdio (the default)
//! - `list`: Print registered tools and resources
//! - `call`: Invoke a tool once without an MCP client
//! - `read`: Read a resource once without an MCP client

use clap::{Args, Parser, Subcommand};

pub const LOG_ENV: &str = "DEMO_MCP_LOG";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log filter, e.g. `info` or `demo_mcp=debug,rmcp=warn`. Logs go to stderr.
    #[arg(long, global = true, env = "DEMO_MCP_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start MCP server on stdio (default)
    Serve,
    /// Print registered tools and resources as JSON
    List,
    /// Call a tool and print its text result
    Call(CallArgs),
    /// Read a resource and print its text contents
    Read(ReadArgs),
}

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name, e.g. `add`
    pub name: String,

    /// Tool arguments as a JSON object, e.g. '{"a": 5, "b": 3}'
    #[arg(long, default_value = "{}")]
    pub args: String,
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Resource URI, e.g. `greeting://Alice`
    pub uri: String,
}
