use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use boxoffice_inventory::InventoryError;

pub const SHOW_NOT_FOUND: &str = "Show not found";

pub fn inventory_error_to_response(err: InventoryError) -> axum::response::Response {
    match err {
        InventoryError::ShowNotFound(_) => show_not_found(),
        InventoryError::InvalidSeatNumber => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_seat_number",
            "Invalid seat number",
        ),
        InventoryError::SeatAlreadyBooked(_) => json_error(
            StatusCode::CONFLICT,
            "seat_already_booked",
            "Seat already booked",
        ),
        InventoryError::ScreenFull {
            alternative: Some(next_show),
            ..
        } => (
            StatusCode::CONFLICT,
            axum::Json(json!({
                "error": "Seats are full. Suggested next show:",
                "code": "screen_full",
                "nextShow": next_show,
            })),
        )
            .into_response(),
        InventoryError::ScreenFull {
            alternative: None, ..
        } => json_error(
            StatusCode::CONFLICT,
            "screen_full",
            "Seats are full. No more shows available.",
        ),
        InventoryError::SeatNotBooked(_) => json_error(
            StatusCode::CONFLICT,
            "seat_not_booked",
            "Seat is not booked",
        ),
        e @ InventoryError::ScreenMissing { .. } => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}

/// Also used for show ids that are not integers at all.
pub fn show_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "show_not_found", SHOW_NOT_FOUND)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}
