use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use boxoffice_core::ShowId;
use boxoffice_inventory::Show;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/:show_id/seats", get(get_availability))
        .route("/shows/:show_id/book", post(book_seat))
        .route("/shows/:show_id/cancel", post(cancel_seat))
}

pub async fn list_shows(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Show>> {
    Json(services.inventory.list_shows().to_vec())
}

pub async fn get_availability(
    Extension(services): Extension<Arc<AppServices>>,
    Path(show_id): Path<String>,
) -> axum::response::Response {
    let show_id: ShowId = match show_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::show_not_found(),
    };

    match services.inventory.get_availability(show_id) {
        Ok(availability) => {
            (StatusCode::OK, Json(dto::availability_to_json(availability))).into_response()
        }
        Err(e) => errors::inventory_error_to_response(e),
    }
}

pub async fn book_seat(
    Extension(services): Extension<Arc<AppServices>>,
    Path(show_id): Path<String>,
    body: Option<Json<serde_json::Value>>,
) -> axum::response::Response {
    let show_id: ShowId = match show_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::show_not_found(),
    };
    let seat = dto::seat_from_body(body.as_ref().map(|Json(b)| b));

    match services.inventory.book_seat(show_id, seat) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::message_to_json("Seat booked successfully")),
        )
            .into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}

pub async fn cancel_seat(
    Extension(services): Extension<Arc<AppServices>>,
    Path(show_id): Path<String>,
    body: Option<Json<serde_json::Value>>,
) -> axum::response::Response {
    let show_id: ShowId = match show_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::show_not_found(),
    };
    let seat = dto::seat_from_body(body.as_ref().map(|Json(b)| b));

    match services.inventory.cancel_seat(show_id, seat) {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::message_to_json("Seat cancelled successfully")),
        )
            .into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}
