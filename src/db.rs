use anyhow::Result;
use dioxus::logger::tracing::info;
use surrealdb::opt::auth::Root;

use crate::{config::Config, DB};

pub async fn establish_connection(config: &Config) -> Result<()> {
    DB.connect(config.database_url.clone()).await?;

    if let (Some(username), Some(password)) = (&config.database_user, &config.database_password) {
        DB.signin(Root { username, password }).await?;
    }

    DB.use_ns(config.database_namespace.clone())
        .use_db(config.database_name.clone())
        .await?;

    info!(
        "Connected to {} ({}/{})",
        config.database_url, config.database_namespace, config.database_name
    );
    Ok(())
}
