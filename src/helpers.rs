use anyhow::{Context, Result};

pub fn read_env_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Environment variable {name} is not set"))
}

pub fn read_optional_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
