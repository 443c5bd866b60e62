//! Documentation of the fridge inventory server.
//!
//! Server-rendered HTML over in-memory state. Nothing is persisted, every
//! store resets when the process restarts.
//!
//!
//!
//! # Stores
//! - Stock: item name to quantity and expiration date, see [`stock`]
//! - Temperature log: append-only readings, see [`temperature`]
//! - Recipe catalog: static recipes and their ingredients, see [`recipes`]
//!
//! Stock and temperature each sit behind a `tokio` `RwLock` held for a single
//! operation. Recipes are read-only.
//!
//!
//!
//! # Routes
//!
//! | Method | Path | Effect |
//! |---|---|---|
//! | GET | `/` | home |
//! | GET | `/add_item_form` | add-item form |
//! | POST | `/add_item_form` | store item, 303 to `/` |
//! | GET | `/stock` | stock listing |
//! | GET | `/temperature` | temperature log |
//! | POST | `/set_temperature_form` | record reading, 303 to `/temperature`, or JSON rejection |
//! | GET | `/expired_items` | items expired before today |
//! | GET | `/recipes` | recipes fully covered by stock |
//! | GET | `/capture_image` | grab one camera frame |
//!
//! Files under the static directory are served at `/static/*`, including the
//! last captured image.
//!
//!
//!
//! # Setup
//!
//! Environment variables, all optional.
//! - `RUST_PORT`: listen port, default `8000`
//! - `STATIC_DIR`: static directory, default `static`
//! - `CAMERA_INDEX`: V4L2 device index, default `0`
//! - `RUST_LOG`: tracing filter, default `server=info,tower_http=info`
//!
//! Run.
//! ```sh
//! RUST_LOG=debug cargo run -p fridge
//! ```
//!
//! Extra per-request logging.
//! ```sh
//! cargo run -p fridge --features verbose
//! ```
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod camera;
pub mod config;
pub mod error;
pub mod forms;
pub mod recipes;
pub mod render;
pub mod routes;
pub mod state;
pub mod stock;
pub mod temperature;

use config::Config;
use routes::{
    add_item_form_handler, add_item_handler, capture_image_handler, expired_items_handler,
    home_handler, recipes_handler, set_temperature_handler, stock_handler, temperature_handler,
};
use state::AppState;

const DEFAULT_LOG_FILTER: &str = "server=info,tower_http=info";

pub async fn start_server() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config);

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let app = app(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .route(
            "/add_item_form",
            get(add_item_form_handler).post(add_item_handler),
        )
        .route("/stock", get(stock_handler))
        .route("/temperature", get(temperature_handler))
        .route("/set_temperature_form", post(set_temperature_handler))
        .route("/expired_items", get(expired_items_handler))
        .route("/recipes", get(recipes_handler))
        .route("/capture_image", get(capture_image_handler))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
