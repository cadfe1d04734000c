//! Show catalog.

use serde::{Deserialize, Serialize};

use boxoffice_core::{first_duplicate_id, Entity, ScreenId, ShowId};

/// A screening bound to exactly one screen.
///
/// Several shows may point at the same screen. They then share that screen's
/// seat pool: a seat booked through one show is taken for all of them. This
/// models back-to-back screenings in one room without a per-showtime reset,
/// and the "suggest another show" behaviour of a full screen depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: ShowId,
    pub name: String,
    pub screen_id: ScreenId,
}

impl Show {
    pub fn new(id: ShowId, name: impl Into<String>, screen_id: ScreenId) -> Self {
        Self {
            id,
            name: name.into(),
            screen_id,
        }
    }
}

impl Entity for Show {
    type Id = ShowId;

    fn id(&self) -> ShowId {
        self.id
    }
}

/// Immutable, insertion-ordered list of shows.
#[derive(Debug, Clone)]
pub struct ShowCatalog {
    shows: Vec<Show>,
}

impl ShowCatalog {
    /// Build a catalog; returns the first duplicated id on conflict.
    pub(crate) fn new(shows: Vec<Show>) -> Result<Self, ShowId> {
        match first_duplicate_id(&shows) {
            Some(id) => Err(id),
            None => Ok(Self { shows }),
        }
    }

    pub fn list(&self) -> &[Show] {
        &self.shows
    }

    pub fn find(&self, id: ShowId) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }

    /// First other show, in catalog order, that uses the same screen as `show`.
    pub fn alternative_for(&self, show: &Show) -> Option<&Show> {
        self.shows
            .iter()
            .find(|s| s.screen_id == show.screen_id && s.id != show.id)
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}
