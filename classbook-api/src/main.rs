use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::outbound::{JsonFileStudentStore, SystemClock},
    app_state::AppState,
    domain::services::RosterServiceImpl,
};

mod adapters;
mod app_state;
mod config;
mod domain;
mod router;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classbook_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::read_config()?;
    let offset = config.calendar.utc_offset()?;

    let store = JsonFileStudentStore::new(&config.storage.path);
    tracing::info!("Using roster file {}", store.path().display());

    let roster = RosterServiceImpl::load(Arc::new(store), Arc::new(SystemClock::new(offset))).await?;
    let app_state = AppState::new(Arc::new(roster));
    let app = router::create(app_state, &config)?;

    let addr = format!("{}:{}", config.application.host, config.application.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
