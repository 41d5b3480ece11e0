//! Static server metadata.
//!
//! The server has no configuration file. Everything a client learns about it
//! during `initialize` comes from [`ServerConfig`]; runtime knobs such as the
//! log filter are command-line flags.

use serde::Serialize;

use crate::registry::{OperationKind, Registry};

pub const SERVER_NAME: &str = "Demo";

pub const SERVER_DESCRIPTION: &str = "다양한 계산 도구와 사용자 정보 리소스를 제공하는 MCP 서버입니다. \
     수학 계산, 날씨 정보 조회, 사용자 프로필 생성 등의 기능을 지원합니다.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: SERVER_DESCRIPTION.to_string(),
        }
    }
}

impl ServerConfig {
    /// Instructions sent to the client, listing every registered operation.
    pub fn instructions(&self, registry: &Registry) -> String {
        let mut text = format!("{}\n", self.description);
        for kind in [OperationKind::Tool, OperationKind::Resource] {
            let ops: Vec<_> = registry
                .operations()
                .into_iter()
                .filter(|op| op.kind == kind)
                .collect();
            if ops.is_empty() {
                continue;
            }
            text.push_str(match kind {
                OperationKind::Tool => "\nTools:\n",
                OperationKind::Resource => "\nResources:\n",
            });
            for op in ops {
                let address = op.uri_template.as_deref().unwrap_or(&op.name);
                match &op.description {
                    Some(desc) => text.push_str(&format!("- {} - {}\n", address, desc)),
                    None => text.push_str(&format!("- {}\n", address)),
                }
            }
        }
        text
    }
}
