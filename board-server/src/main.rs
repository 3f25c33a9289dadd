use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use board_server::board::ZonedClock;
use board_server::config::Settings;
use board_server::rejseplanen::TripClient;
use board_server::web::{AppState, create_router};

/// Where static assets are served from, relative to the working directory.
const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Validate everything before touching the network
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        routes = settings.routes.len(),
        walk_minutes = settings.walk_minutes,
        timezone = %settings.timezone,
        "loaded settings"
    );

    let client = match TripClient::new(settings.client_config()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to create trip client: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let clock = ZonedClock::new(settings.timezone);
    let addr = settings.bind;
    let state = AppState::new(client, settings, clock);
    let app = create_router(state, STATIC_DIR);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Departure board listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
