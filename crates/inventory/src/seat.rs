//! Seat numbers.

use serde::{Deserialize, Serialize};

use boxoffice_core::{DomainError, DomainResult};

/// A validated, 1-based seat number.
///
/// Seats have no identity beyond their number within a screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumber(u32);

impl SeatNumber {
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("seat numbers start at 1"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Accept `requested` only if it names a seat in `1..=capacity`.
    pub fn within(requested: RequestedSeat, capacity: u32) -> Option<Self> {
        match requested {
            RequestedSeat::Number(n) if n >= 1 && n <= i64::from(capacity) => {
                u32::try_from(n).ok().map(Self)
            }
            _ => None,
        }
    }
}

impl core::fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A seat number as supplied by a caller, before range validation.
///
/// Callers may send anything; whether it is a usable seat is only known once
/// the target screen's capacity is known, so the raw value travels this far.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequestedSeat {
    /// An integer value (possibly zero, negative, or above capacity).
    Number(i64),
    /// Not an integer at all (missing, fractional, text, ...).
    Malformed,
}

impl From<i64> for RequestedSeat {
    fn from(value: i64) -> Self {
        RequestedSeat::Number(value)
    }
}

impl From<i32> for RequestedSeat {
    fn from(value: i32) -> Self {
        RequestedSeat::Number(i64::from(value))
    }
}

impl From<u32> for RequestedSeat {
    fn from(value: u32) -> Self {
        RequestedSeat::Number(i64::from(value))
    }
}

impl From<SeatNumber> for RequestedSeat {
    fn from(value: SeatNumber) -> Self {
        RequestedSeat::Number(i64::from(value.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_seat() {
        assert!(matches!(SeatNumber::new(0), Err(DomainError::Validation(_))));
        assert_eq!(SeatNumber::new(1).unwrap().get(), 1);
    }

    #[test]
    fn within_accepts_only_one_through_capacity() {
        assert_eq!(SeatNumber::within(1.into(), 45), SeatNumber::new(1).ok());
        assert_eq!(SeatNumber::within(45.into(), 45), SeatNumber::new(45).ok());

        for bad in [0i64, -1, 46, i64::MAX, i64::MIN] {
            assert_eq!(SeatNumber::within(bad.into(), 45), None, "seat {bad}");
        }
        assert_eq!(SeatNumber::within(RequestedSeat::Malformed, 45), None);
    }
}
