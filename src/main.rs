use std::sync::LazyLock;

use dioxus::prelude::*;
use surrealdb::{engine::any::Any, Surreal};

use components::navbar::Navbar;
use views::{fields::Fields, home::Home, performance::Performance};

mod chart;
mod components;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod db;
#[cfg(feature = "server")]
mod functions;
#[cfg(feature = "server")]
mod helpers;
mod models;
mod views;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const HIGHCHARTS_JS: &str = "https://code.highcharts.com/highcharts.js";

pub static DB: LazyLock<Surreal<Any>> = LazyLock::new(Surreal::init);

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/:owner/fields")]
        Fields { owner: String },
        #[route("/:owner/fields/:field/performance")]
        Performance { owner: String, field: i64 },
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::routing::put;
    use dioxus::logger::tracing::info;
    use functions::{store_field::store_field, update_status::update_status};

    dotenvy::dotenv().ok();
    dioxus::logger::initialize_default();

    let config = config::Config::from_env()?;
    db::establish_connection(&config).await?;

    let serve_config = ServeConfig::new().map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let router = axum::Router::new()
        .route("/api/fields/:field", put(store_field))
        .route("/api/fields/:field/status", put(update_status))
        .serve_dioxus_application(serve_config, App);

    let address = dioxus_cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Listening on {address}");

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: HIGHCHARTS_JS }
        Router::<Route> {}
    }
}

#[cfg(feature = "server")]
pub struct AppError(anyhow::Error);

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        dioxus::logger::tracing::error!("{:#}", self.0);
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

#[cfg(feature = "server")]
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
