//! Inventory service: the only place seat state changes.

use thiserror::Error;

use boxoffice_core::{ScreenId, ShowId};

use crate::catalog::{Show, ShowCatalog};
use crate::screen::{ReserveRejection, Screen, ScreenRegistry, ScreenSnapshot};
use crate::seat::{RequestedSeat, SeatNumber};

/// Outcome of an inventory operation that did not succeed.
///
/// Every variant except [`InventoryError::ScreenMissing`] is an expected,
/// user-facing result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("show {0} not found")]
    ShowNotFound(ShowId),

    #[error("invalid seat number")]
    InvalidSeatNumber,

    #[error("seat {0} already booked")]
    SeatAlreadyBooked(SeatNumber),

    /// Every seat on the screen is taken. `alternative` is another show on
    /// the same screen, if the catalog has one.
    #[error("screen {screen_id} is full")]
    ScreenFull {
        screen_id: ScreenId,
        alternative: Option<Show>,
    },

    #[error("seat {0} is not booked")]
    SeatNotBooked(SeatNumber),

    /// Internal consistency fault; construction validation rules this out.
    #[error("show {show_id} references unknown screen {screen_id}")]
    ScreenMissing { show_id: ShowId, screen_id: ScreenId },
}

/// Rejected catalog data at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate screen id {0}")]
    DuplicateScreen(ScreenId),

    #[error("duplicate show id {0}")]
    DuplicateShow(ShowId),

    #[error("screen {0} must have at least one seat")]
    EmptyScreen(ScreenId),

    #[error("show {show_id} references unknown screen {screen_id}")]
    UnknownScreen { show_id: ShowId, screen_id: ScreenId },
}

/// Remaining seats for a show's screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub screen_name: String,
    pub available_seats: u32,
}

/// Coordinates the show catalog and screen registry.
///
/// All methods take `&self`; share it behind an `Arc`. Booking and
/// cancellation hold the target screen's lock for the whole
/// check-then-update sequence.
#[derive(Debug)]
pub struct InventoryService {
    screens: ScreenRegistry,
    shows: ShowCatalog,
}

impl InventoryService {
    pub fn new(screens: Vec<Screen>, shows: Vec<Show>) -> Result<Self, CatalogError> {
        if let Some(empty) = screens.iter().find(|s| s.capacity == 0) {
            return Err(CatalogError::EmptyScreen(empty.id));
        }
        let screens = ScreenRegistry::new(screens).map_err(CatalogError::DuplicateScreen)?;
        let shows = ShowCatalog::new(shows).map_err(CatalogError::DuplicateShow)?;

        if let Some(orphan) = shows.list().iter().find(|s| !screens.contains(s.screen_id)) {
            return Err(CatalogError::UnknownScreen {
                show_id: orphan.id,
                screen_id: orphan.screen_id,
            });
        }

        tracing::debug!(
            screens = screens.len(),
            shows = shows.len(),
            "inventory initialised"
        );

        Ok(Self { screens, shows })
    }

    pub fn list_shows(&self) -> &[Show] {
        self.shows.list()
    }

    pub fn show(&self, id: ShowId) -> Option<&Show> {
        self.shows.find(id)
    }

    pub fn screen(&self, id: ScreenId) -> Option<ScreenSnapshot> {
        self.screens.snapshot(id)
    }

    pub fn get_availability(&self, show_id: ShowId) -> Result<Availability, InventoryError> {
        let show = self.resolve_show(show_id)?;
        let (screen, seats) = self
            .screens
            .seats(show.screen_id)
            .ok_or_else(|| missing_screen(show))?;

        Ok(Availability {
            screen_name: screen.name.clone(),
            available_seats: screen.capacity - seats.booked_count(),
        })
    }

    pub fn book_seat(
        &self,
        show_id: ShowId,
        seat: impl Into<RequestedSeat>,
    ) -> Result<(), InventoryError> {
        let show = self.resolve_show(show_id)?;
        let (screen, mut seats) = self
            .screens
            .seats(show.screen_id)
            .ok_or_else(|| missing_screen(show))?;
        let seat = SeatNumber::within(seat.into(), screen.capacity)
            .ok_or(InventoryError::InvalidSeatNumber)?;

        let outcome = seats.reserve(seat);
        drop(seats);

        match outcome {
            Ok(()) => {
                tracing::debug!(show_id = %show.id, screen_id = %screen.id, seat = %seat, "seat booked");
                Ok(())
            }
            Err(ReserveRejection::Occupied) => Err(InventoryError::SeatAlreadyBooked(seat)),
            Err(ReserveRejection::Full) => {
                let alternative = self.shows.alternative_for(show).cloned();
                tracing::warn!(
                    show_id = %show.id,
                    screen_id = %screen.id,
                    alternative = ?alternative.as_ref().map(|s| s.id),
                    "screen full"
                );
                Err(InventoryError::ScreenFull {
                    screen_id: screen.id,
                    alternative,
                })
            }
        }
    }

    pub fn cancel_seat(
        &self,
        show_id: ShowId,
        seat: impl Into<RequestedSeat>,
    ) -> Result<(), InventoryError> {
        let show = self.resolve_show(show_id)?;
        let (screen, mut seats) = self
            .screens
            .seats(show.screen_id)
            .ok_or_else(|| missing_screen(show))?;
        let seat = SeatNumber::within(seat.into(), screen.capacity)
            .ok_or(InventoryError::InvalidSeatNumber)?;

        if !seats.release(seat) {
            return Err(InventoryError::SeatNotBooked(seat));
        }
        drop(seats);

        tracing::debug!(show_id = %show.id, screen_id = %screen.id, seat = %seat, "seat cancelled");
        Ok(())
    }

    fn resolve_show(&self, id: ShowId) -> Result<&Show, InventoryError> {
        self.shows.find(id).ok_or(InventoryError::ShowNotFound(id))
    }
}

fn missing_screen(show: &Show) -> InventoryError {
    tracing::error!(show_id = %show.id, screen_id = %show.screen_id, "show references unknown screen");
    InventoryError::ScreenMissing {
        show_id: show.id,
        screen_id: show.screen_id,
    }
}
