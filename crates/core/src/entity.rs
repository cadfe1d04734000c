//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// First identifier that appears more than once in `items`, if any.
pub fn first_duplicate_id<E: Entity>(items: &[E]) -> Option<E::Id> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.iter().map(|item| item.id()).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing(u8);

    impl Entity for Thing {
        type Id = u8;

        fn id(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn finds_the_first_repeated_id() {
        assert_eq!(first_duplicate_id(&[Thing(1), Thing(2), Thing(3)]), None);
        assert_eq!(first_duplicate_id(&[Thing(1), Thing(2), Thing(2), Thing(1)]), Some(2));
        assert_eq!(first_duplicate_id::<Thing>(&[]), None);
    }
}
