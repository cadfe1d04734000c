//! Strongly-typed identifiers used across the domain.
//!
//! Screens and shows are addressed by small integers on the wire, so the
//! identifiers wrap `u32` rather than opaque UUIDs.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a screen (a room with a fixed seat count).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(u32);

/// Identifier of a show (a screening bound to one screen).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(u32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            /// Strict decimal parse: surrounding whitespace, signs and
            /// trailing garbage are all rejected.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!("{}: {:?}", $name, s)));
                }
                let value = s
                    .parse::<u32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(ScreenId, "ScreenId");
impl_int_newtype!(ShowId, "ShowId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal_ids() {
        assert_eq!("1".parse::<ShowId>().unwrap(), ShowId::new(1));
        assert_eq!("0042".parse::<ScreenId>().unwrap(), ScreenId::new(42));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["", "abc", "1abc", "-1", "+1", " 1", "1.0", "99999999999"] {
            let err = raw.parse::<ShowId>().unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidId(ref msg) if msg.starts_with("ShowId")),
                "expected InvalidId for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_value(ShowId::new(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));

        let back: ScreenId = serde_json::from_value(serde_json::json!(3)).unwrap();
        assert_eq!(back, ScreenId::new(3));
    }
}
