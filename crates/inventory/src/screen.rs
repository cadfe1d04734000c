//! Screens and their seat pools.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use boxoffice_core::{first_duplicate_id, Entity, ScreenId};

use crate::seat::SeatNumber;

/// Static description of a screen: identity, display name and seat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: ScreenId,
    pub name: String,
    pub capacity: u32,
}

impl Screen {
    pub fn new(id: ScreenId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }
}

impl Entity for Screen {
    type Id = ScreenId;

    fn id(&self) -> ScreenId {
        self.id
    }
}

/// Point-in-time copy of a screen's occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSnapshot {
    pub id: ScreenId,
    pub name: String,
    pub capacity: u32,
    /// Booked seats in ascending order.
    pub booked: Vec<SeatNumber>,
}

impl ScreenSnapshot {
    pub fn available_seats(&self) -> u32 {
        // booked.len() <= capacity, so this never saturates in practice.
        self.capacity.saturating_sub(self.booked.len() as u32)
    }
}

/// Why a seat pool refused a reservation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ReserveRejection {
    Occupied,
    Full,
}

/// The mutable half of a screen: which seats are currently booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeatPool {
    capacity: u32,
    booked: BTreeSet<SeatNumber>,
}

impl SeatPool {
    pub(crate) fn new(capacity: u32) -> Self {
        Self {
            capacity,
            booked: BTreeSet::new(),
        }
    }

    /// Duplicate check first, capacity check second; callers rely on this order.
    pub(crate) fn reserve(&mut self, seat: SeatNumber) -> Result<(), ReserveRejection> {
        if self.booked.contains(&seat) {
            return Err(ReserveRejection::Occupied);
        }
        if self.booked.len() >= self.capacity as usize {
            return Err(ReserveRejection::Full);
        }
        self.booked.insert(seat);
        Ok(())
    }

    /// Returns `false` if the seat was not booked.
    pub(crate) fn release(&mut self, seat: SeatNumber) -> bool {
        self.booked.remove(&seat)
    }

    pub(crate) fn booked_count(&self) -> u32 {
        self.booked.len() as u32
    }

    pub(crate) fn booked(&self) -> Vec<SeatNumber> {
        self.booked.iter().copied().collect()
    }
}

#[derive(Debug)]
struct ScreenEntry {
    screen: Screen,
    seats: Mutex<SeatPool>,
}

/// Fixed set of screens, each with its own seat lock.
///
/// The map itself never changes after construction, so lookups take no lock
/// and operations on different screens never contend.
#[derive(Debug)]
pub struct ScreenRegistry {
    screens: HashMap<ScreenId, ScreenEntry>,
}

impl ScreenRegistry {
    /// Build a registry; returns the first duplicated id on conflict.
    pub(crate) fn new(screens: Vec<Screen>) -> Result<Self, ScreenId> {
        if let Some(id) = first_duplicate_id(&screens) {
            return Err(id);
        }
        let screens = screens
            .into_iter()
            .map(|screen| {
                let seats = Mutex::new(SeatPool::new(screen.capacity));
                (screen.id, ScreenEntry { screen, seats })
            })
            .collect();
        Ok(Self { screens })
    }

    pub fn get(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.get(&id).map(|e| &e.screen)
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.screens.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn snapshot(&self, id: ScreenId) -> Option<ScreenSnapshot> {
        let entry = self.screens.get(&id)?;
        let booked = lock(&entry.seats).booked();
        Some(ScreenSnapshot {
            id,
            name: entry.screen.name.clone(),
            capacity: entry.screen.capacity,
            booked,
        })
    }

    /// Exclusive access to one screen's seat pool.
    pub(crate) fn seats(&self, id: ScreenId) -> Option<(&Screen, MutexGuard<'_, SeatPool>)> {
        let entry = self.screens.get(&id)?;
        Some((&entry.screen, lock(&entry.seats)))
    }
}

#[cfg(test)]
impl ScreenRegistry {
    /// Mark seats booked without any range or capacity checks.
    pub(crate) fn force_booked(&self, id: ScreenId, seats: &[SeatNumber]) {
        if let Some((_, mut pool)) = self.seats(id) {
            pool.booked.extend(seats.iter().copied());
        }
    }
}

// A panic while holding the lock cannot leave the set half-updated (every
// mutation is a single insert or remove), so a poisoned pool is still valid.
fn lock(seats: &Mutex<SeatPool>) -> MutexGuard<'_, SeatPool> {
    seats.lock().unwrap_or_else(PoisonError::into_inner)
}
