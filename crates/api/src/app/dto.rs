use serde::Serialize;
use serde_json::Value;

use boxoffice_inventory::{Availability, RequestedSeat};

// -------------------------
// Request DTOs
// -------------------------

/// Seat number carried by the body of `POST /shows/:id/book` and
/// `POST /shows/:id/cancel`.
///
/// Only a JSON object has a `seatNumber`; arrays, scalars and a missing or
/// unparseable body carry none. A non-integer value is a seat-validation
/// failure reported after the show lookup, not a body rejection.
pub fn seat_from_body(body: Option<&Value>) -> RequestedSeat {
    body.and_then(Value::as_object)
        .and_then(|fields| fields.get("seatNumber"))
        .map_or(RequestedSeat::Malformed, requested_seat)
}

/// Integer semantics follow JSON numbers: `7` and `7.0` are integers, `7.5`,
/// `"7"`, `null` and `true` are not.
pub fn requested_seat(value: &Value) -> RequestedSeat {
    let Value::Number(n) = value else {
        return RequestedSeat::Malformed;
    };

    if let Some(i) = n.as_i64() {
        return RequestedSeat::Number(i);
    }
    if n.is_u64() {
        // Beyond i64::MAX: an integer, but never a valid seat.
        return RequestedSeat::Number(i64::MAX);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            if f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                RequestedSeat::Number(f as i64)
            } else {
                RequestedSeat::Number(i64::MAX)
            }
        }
        _ => RequestedSeat::Malformed,
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub screen: String,
    pub available_seats: u32,
}

pub fn availability_to_json(availability: Availability) -> AvailabilityResponse {
    AvailabilityResponse {
        screen: availability.screen_name,
        available_seats: availability.available_seats,
    }
}

pub fn message_to_json(message: &str) -> Value {
    serde_json::json!({ "message": message })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: Value) -> RequestedSeat {
        seat_from_body(Some(&body))
    }

    #[test]
    fn integral_numbers_are_seat_numbers() {
        assert_eq!(parse(json!({ "seatNumber": 7 })), RequestedSeat::Number(7));
        assert_eq!(parse(json!({ "seatNumber": -2 })), RequestedSeat::Number(-2));
        assert_eq!(parse(json!({ "seatNumber": 7.0 })), RequestedSeat::Number(7));
        assert_eq!(
            parse(json!({ "seatNumber": u64::MAX })),
            RequestedSeat::Number(i64::MAX)
        );
    }

    #[test]
    fn everything_else_is_malformed() {
        for body in [
            json!({}),
            json!({ "seatNumber": null }),
            json!({ "seatNumber": 7.5 }),
            json!({ "seatNumber": "7" }),
            json!({ "seatNumber": true }),
            json!({ "seatNumber": [7] }),
            json!({ "seat": 7 }),
            json!([7]),
            json!(7),
            json!("7"),
        ] {
            assert_eq!(parse(body.clone()), RequestedSeat::Malformed, "{body}");
        }
    }

    #[test]
    fn missing_body_carries_no_seat() {
        assert_eq!(seat_from_body(None), RequestedSeat::Malformed);
    }

    #[test]
    fn repeated_seat_number_key_keeps_the_last_value() {
        let body: Value =
            serde_json::from_str(r#"{ "seatNumber": 1, "seatNumber": 9 }"#).unwrap();
        assert_eq!(seat_from_body(Some(&body)), RequestedSeat::Number(9));
    }

    #[test]
    fn availability_uses_wire_field_names() {
        let json = serde_json::to_value(availability_to_json(Availability {
            screen_name: "Screen 1".to_string(),
            available_seats: 44,
        }))
        .unwrap();
        assert_eq!(json, json!({ "screen": "Screen 1", "availableSeats": 44 }));
    }
}
