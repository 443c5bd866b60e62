use std::sync::Arc;

use axum::{
    Form, Json,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use serde_json::json;
use tokio::task::spawn_blocking;
use tracing::{info, warn};

use crate::{
    camera::{CAPTURED_IMAGE_URL, capture_frame, save_capture},
    error::AppError,
    forms::{AddItemForm, NewItem, TemperatureForm},
    render::Page,
    state::AppState,
    stock::{StockEntry, today},
};

fn render(state: &AppState, page: &Page<'_>) -> Result<Html<String>, AppError> {
    #[cfg(feature = "verbose")]
    tracing::debug!(view = page.name(), "Rendering view");

    Ok(Html(state.renderer.render(page)?))
}

pub async fn home_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, &Page::Home)
}

pub async fn add_item_form_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, &Page::AddItemForm)
}

pub async fn add_item_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, AppError> {
    let item = NewItem::try_from(form)?;

    let replaced = state.stock.write().await.add_item(
        item.name.clone(),
        StockEntry {
            quantity: item.quantity,
            expiration_date: item.expiration_date,
        },
    );

    info!(
        name = %item.name,
        quantity = item.quantity,
        expiration_date = %item.expiration_date,
        replaced = replaced.is_some(),
        "Stored item"
    );

    Ok(Redirect::to("/"))
}

pub async fn stock_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let stock = state.stock.read().await;

    render(&state, &Page::Stock(&stock))
}

pub async fn temperature_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let log = state.temperature_log.read().await;

    render(&state, &Page::Temperature(log.readings()))
}

/// Out-of-range readings get a JSON message instead of the redirect.
pub async fn set_temperature_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TemperatureForm>,
) -> Result<Response, AppError> {
    let temperature = form.value()?;

    let mut log = state.temperature_log.write().await;

    match log.record(temperature, Local::now()) {
        Ok(reading) => {
            info!(temperature, timestamp = %reading.timestamp, "Recorded temperature");

            Ok(Redirect::to("/temperature").into_response())
        }
        Err(rejected) => {
            warn!(temperature, "Rejected temperature outside safe range");

            Ok(Json(json!({ "message": rejected.to_string() })).into_response())
        }
    }
}

pub async fn expired_items_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let expired = state.stock.read().await.expired_items(today());

    render(&state, &Page::ExpiredItems(&expired))
}

pub async fn recipes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let recommended = state.recipes.recommend(state.stock.read().await.names());

    render(&state, &Page::Recipes(&recommended))
}

pub async fn capture_image_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let camera = state.camera.clone();
    let index = state.config.camera_index;

    let frame = spawn_blocking(move || capture_frame(camera.as_ref(), index))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let image = match frame {
        Ok(data) => match save_capture(&state.config.static_dir, &data).await {
            Ok(path) => {
                info!(path = %path.display(), size = data.len(), "Captured image");
                Some(CAPTURED_IMAGE_URL)
            }
            Err(e) => {
                warn!(error = %e, "Failed to save captured image");
                None
            }
        },
        Err(e) => {
            warn!(camera_index = index, error = %e, "Camera capture failed");
            None
        }
    };

    render(&state, &Page::Camera(image))
}
