use std::process::ExitCode;

use crate::registry::DispatchError;

/// Process exit status of `demo-mcp`.
///
/// `Rejected` covers requests the registry refuses before any handler runs;
/// everything that goes wrong on our side is `Error`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: the command ran to completion.
    Success,
    /// 1: invalid arguments, unknown tool, or no resource matching the URI.
    Rejected,
    /// 2: startup failure, bad `--log-level` or `--args`, handler failure.
    Error,
}

impl ExitStatus {
    /// Status for a failed `call` or `read`.
    pub fn for_dispatch_error(err: &DispatchError) -> Self {
        if err.is_client_error() {
            Self::Rejected
        } else {
            Self::Error
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Rejected => 1,
            ExitStatus::Error => 2,
        })
    }
}
