use anyhow::Result;
use serde::Deserialize;

use crate::helpers::{read_env_var, read_optional_env_var};

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_namespace: String,
    pub database_name: String,
    pub database_user: Option<String>,
    pub database_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Ok(Config {
            database_url: read_env_var("DATABASE_URL")?,
            database_namespace: read_env_var("DATABASE_NAMESPACE")?,
            database_name: read_env_var("DATABASE_NAME")?,
            database_user: read_optional_env_var("DATABASE_USER"),
            database_password: read_optional_env_var("DATABASE_PASSWORD"),
        })
    }
}
