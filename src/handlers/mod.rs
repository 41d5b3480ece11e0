//! The operations this server exposes.
//!
//! | Operation      | Kind     | Address                     |
//! |----------------|----------|-----------------------------|
//! | `add`          | tool     | `add`                       |
//! | `get_weather`  | tool     | `get_weather`               |
//! | `greeting`     | resource | `greeting://{name}`         |
//! | `user_profile` | resource | `user_profile://{username}` |
//!
//! Weather and profile payloads are random and for demonstration only.

pub mod add;
pub mod greeting;
pub mod profile;
pub mod weather;

use anyhow::Context;

use crate::registry::{Metadata, RegistrationError, Registry, Variables};

pub use add::AddParams;
pub use weather::GetWeatherParams;

/// Build the registry with every operation registered.
pub fn registry() -> Result<Registry, RegistrationError> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

pub fn register_all(registry: &mut Registry) -> Result<(), RegistrationError> {
    registry
        .register_tool(
            "add",
            Metadata::new().with_description("두 숫자를 더합니다."),
            add::add,
        )?
        .register_tool(
            "get_weather",
            Metadata::new().with_title("날씨 조회").with_description(
                "도시의 날씨 정보를 반환합니다. 기온, 습도, 날씨 상태를 포함한 상세한 정보를 제공합니다.",
            ),
            |params: GetWeatherParams| {
                Ok(weather::current_weather(&params.city, &mut rand::thread_rng()))
            },
        )?
        .register_resource(
            "greeting",
            greeting::URI_TEMPLATE,
            Metadata::new().with_description("이름을 받아 인사말을 반환합니다."),
            |vars| Ok(greeting::greeting(required(vars, "name")?)),
        )?
        .register_resource(
            "user_profile",
            profile::URI_TEMPLATE,
            Metadata::new().with_title("사용자 프로필 정보").with_description(
                "username에 해당하는 사용자의 프로필 정보를 반환합니다. 직책, 부서, 위치, 나이, 경력 등의 정보를 포함합니다.",
            ),
            |vars| {
                let username = required(vars, "username")?;
                Ok(profile::UserProfile::random(username, &mut rand::thread_rng()).to_string())
            },
        )?;
    Ok(())
}

fn required<'a>(vars: &'a Variables, name: &str) -> anyhow::Result<&'a str> {
    vars.get(name)
        .with_context(|| format!("URI is missing the `{}` segment", name))
}
