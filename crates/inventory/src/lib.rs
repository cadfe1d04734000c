//! Seat inventory domain module.
//!
//! This crate contains the business rules for screens, shows and seat
//! occupancy, implemented as deterministic in-memory logic (no IO, no HTTP).
//! [`InventoryService`] is the only entry point that mutates seat state.

pub mod catalog;
pub mod screen;
pub mod seat;
pub mod seed;
pub mod service;

pub use catalog::{Show, ShowCatalog};
pub use screen::{Screen, ScreenRegistry, ScreenSnapshot};
pub use seat::{RequestedSeat, SeatNumber};
pub use service::{Availability, CatalogError, InventoryError, InventoryService};
