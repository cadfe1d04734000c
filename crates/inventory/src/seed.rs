//! Bootstrap inventory loaded at startup.
//!
//! Three screens (45, 60 and 75 seats) with one show each. Nothing here is
//! persisted; every process starts from this state.

use boxoffice_core::{ScreenId, ShowId};

use crate::catalog::Show;
use crate::screen::Screen;
use crate::service::InventoryService;

const SCREEN_CAPACITIES: [u32; 3] = [45, 60, 75];

pub fn screens() -> Vec<Screen> {
    (1u32..)
        .zip(SCREEN_CAPACITIES)
        .map(|(id, capacity)| Screen::new(ScreenId::new(id), format!("Screen {id}"), capacity))
        .collect()
}

pub fn shows() -> Vec<Show> {
    (1u32..=SCREEN_CAPACITIES.len() as u32)
        .map(|id| Show::new(ShowId::new(id), format!("Show {id}"), ScreenId::new(id)))
        .collect()
}

/// The seeded service. The data above is consistent by construction.
pub fn default_theater() -> InventoryService {
    match InventoryService::new(screens(), shows()) {
        Ok(service) => service,
        Err(e) => unreachable!("seed catalog is inconsistent: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_three_screens_with_one_show_each() {
        let screens = screens();
        let capacities: Vec<u32> = screens.iter().map(|s| s.capacity).collect();
        assert_eq!(capacities, vec![45, 60, 75]);
        assert_eq!(screens[2].name, "Screen 3");

        let shows = shows();
        assert_eq!(shows.len(), 3);
        assert!(shows.iter().all(|s| s.id.get() == s.screen_id.get()));
        assert_eq!(shows[0].name, "Show 1");
    }
}
