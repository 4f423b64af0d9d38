// In: src/battle/tags.rs

use serde::{Deserialize, Serialize};

/// Remaining-turn counter shared by field tags and battler tags.
///
/// A counter created with fewer than one turn never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    turns: i32,
}

impl Countdown {
    pub fn new(turns: i32) -> Self {
        Self { turns }
    }

    pub fn permanent() -> Self {
        Self { turns: 0 }
    }

    pub fn remaining(&self) -> i32 {
        self.turns
    }

    pub fn is_permanent(&self) -> bool {
        self.turns < 1
    }

    /// Advance one turn. Returns whether the owner should stay active.
    pub fn tick(&mut self) -> bool {
        if self.turns < 1 {
            return true;
        }
        self.turns -= 1;
        self.turns > 0
    }
}

/// Anything stored in a `TagSet`, keyed by a type id.
pub trait Tag {
    type Kind: Copy + PartialEq;

    fn kind(&self) -> Self::Kind;
}

/// Ordered collection holding at most one tag per kind.
///
/// Hooks (add/overlap/remove messaging) belong to the owner of the set; the set
/// only stores, finds and expires tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSet<T> {
    tags: Vec<T>,
}

impl<T> Default for TagSet<T> {
    fn default() -> Self {
        Self { tags: Vec::new() }
    }
}

impl<T: Tag> TagSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: T::Kind) -> Option<&T> {
        self.tags.iter().find(|tag| tag.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: T::Kind) -> Option<&mut T> {
        self.tags.iter_mut().find(|tag| tag.kind() == kind)
    }

    pub fn contains(&self, kind: T::Kind) -> bool {
        self.get(kind).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Append a tag whose kind is not yet present. Hands the tag back otherwise.
    pub fn insert(&mut self, tag: T) -> Result<(), T> {
        if self.contains(tag.kind()) {
            return Err(tag);
        }
        self.tags.push(tag);
        Ok(())
    }

    pub fn remove(&mut self, kind: T::Kind) -> Option<T> {
        let position = self.tags.iter().position(|tag| tag.kind() == kind)?;
        Some(self.tags.remove(position))
    }

    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            if predicate(&tag) {
                removed.push(tag);
            } else {
                kept.push(tag);
            }
        }
        self.tags = kept;
        removed
    }

    /// Run `lapse` on every tag accepted by `filter`; tags whose lapse returns
    /// false leave the set in this same pass and are returned in order.
    pub fn lapse_where(
        &mut self,
        mut filter: impl FnMut(&T) -> bool,
        mut lapse: impl FnMut(&mut T) -> bool,
    ) -> Vec<T> {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.tags.len());
        for mut tag in self.tags.drain(..) {
            if filter(&tag) && !lapse(&mut tag) {
                expired.push(tag);
            } else {
                kept.push(tag);
            }
        }
        self.tags = kept;
        expired
    }

    pub fn clear(&mut self) -> Vec<T> {
        self.tags.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker {
        id: u8,
        countdown: Countdown,
    }

    impl Tag for Marker {
        type Kind = u8;

        fn kind(&self) -> u8 {
            self.id
        }
    }

    #[rstest]
    #[case("permanent at zero", 0, 50)]
    #[case("permanent when negative", -3, 50)]
    #[case("one turn", 1, 1)]
    #[case("five turns", 5, 5)]
    fn test_countdown_survives_exact_number_of_ticks(
        #[case] desc: &str,
        #[case] turns: i32,
        #[case] expected_ticks: usize,
    ) {
        let mut countdown = Countdown::new(turns);
        let mut ticks = 0;
        while ticks < 50 {
            ticks += 1;
            if !countdown.tick() {
                break;
            }
        }
        assert_eq!(ticks, expected_ticks, "{}", desc);
    }

    #[test]
    fn test_non_positive_turns_are_permanent() {
        assert!(Countdown::permanent().is_permanent());
        assert!(Countdown::new(-1).is_permanent());
        assert!(!Countdown::new(2).is_permanent());
    }

    #[test]
    fn test_insert_rejects_duplicate_kind() {
        let mut set = TagSet::new();
        assert!(set.insert(Marker { id: 1, countdown: Countdown::new(2) }).is_ok());
        let rejected = set.insert(Marker { id: 1, countdown: Countdown::new(9) });
        assert_eq!(rejected.map_err(|tag| tag.countdown.remaining()), Err(9));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_lapse_removes_expired_in_same_pass_preserving_order() {
        let mut set = TagSet::new();
        for (id, turns) in [(1, 1), (2, 3), (3, 1), (4, 0)] {
            set.insert(Marker { id, countdown: Countdown::new(turns) }).unwrap();
        }
        let expired = set.lapse_where(|_| true, |tag| tag.countdown.tick());
        assert_eq!(expired.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(set.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
    }
}
