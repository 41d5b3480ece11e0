use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use rmcp::model::{CallToolResult, JsonObject, ReadResourceResult, ResourceContents};
use serde_json::Value;

use super::args::{CallArgs, Command, ReadArgs};
use super::exit_status::ExitStatus;
use crate::handlers;
use crate::mcp;
use crate::registry::DispatchError;

/// Dispatch a parsed command. Running without a command serves MCP.
pub fn run(command: Option<Command>) -> Result<ExitStatus> {
    match command {
        None | Some(Command::Serve) => {
            mcp::run_server()?;
            Ok(ExitStatus::Success)
        }
        Some(Command::List) => list(),
        Some(Command::Call(args)) => call(args),
        Some(Command::Read(args)) => read(args),
    }
}

fn list() -> Result<ExitStatus> {
    let registry = handlers::registry()?;
    let json = serde_json::to_string_pretty(&registry.operations())?;
    writeln!(io::stdout(), "{}", json)?;
    Ok(ExitStatus::Success)
}

fn call(CallArgs { name, args }: CallArgs) -> Result<ExitStatus> {
    let arguments = parse_arguments(&args)?;
    let registry = handlers::registry()?;
    match registry.call_tool(&name, Some(arguments)) {
        Ok(result) => {
            print_lines(tool_text(&result))?;
            Ok(ExitStatus::Success)
        }
        Err(err) => Ok(report(err)),
    }
}

fn read(ReadArgs { uri }: ReadArgs) -> Result<ExitStatus> {
    let registry = handlers::registry()?;
    match registry.read_resource(&uri) {
        Ok(result) => {
            print_lines(resource_text(&result))?;
            Ok(ExitStatus::Success)
        }
        Err(err) => Ok(report(err)),
    }
}

fn parse_arguments(raw: &str) -> Result<JsonObject> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("--args is not valid JSON: {}", raw))?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("--args must be a JSON object, got: {}", other),
    }
}

fn report(err: DispatchError) -> ExitStatus {
    eprintln!("Error: {}", err);
    ExitStatus::for_dispatch_error(&err)
}

fn print_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

fn tool_text(result: &CallToolResult) -> Vec<&str> {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text())
        .map(|t| t.text.as_str())
        .collect()
}

fn resource_text(result: &ReadResourceResult) -> Vec<&str> {
    result
        .contents
        .iter()
        .filter_map(|c| match c {
            ResourceContents::TextResourceContents { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
