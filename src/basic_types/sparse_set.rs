use super::StorageKey;

const NOT_PRESENT: usize = usize::MAX;

/// A set over the keys `0..capacity` with constant-time insertion, removal, membership and
/// access by position. The latter is what allows uniform random selection of a member.
///
/// Removal swaps the last member into the vacated slot, so the order of the members is not
/// stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SparseSet<T> {
    members: Vec<T>,
    positions: Vec<usize>,
}

impl<T: StorageKey> SparseSet<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        SparseSet {
            members: Vec::with_capacity(capacity),
            positions: vec![NOT_PRESENT; capacity],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn contains(&self, element: T) -> bool {
        self.positions[element.to_index()] != NOT_PRESENT
    }

    /// Returns whether the element was newly inserted.
    pub(crate) fn insert(&mut self, element: T) -> bool {
        if self.contains(element) {
            return false;
        }

        self.positions[element.to_index()] = self.members.len();
        self.members.push(element);
        true
    }

    /// Returns whether the element was present.
    pub(crate) fn remove(&mut self, element: T) -> bool {
        let position = self.positions[element.to_index()];
        if position == NOT_PRESENT {
            return false;
        }

        let _ = self.members.swap_remove(position);
        if let Some(moved) = self.members.get(position) {
            self.positions[moved.to_index()] = position;
        }
        self.positions[element.to_index()] = NOT_PRESENT;
        true
    }

    /// The member stored at `position`, where `position < self.len()`.
    pub(crate) fn get(&self, position: usize) -> T {
        self.members[position]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.members.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::SparseSet;

    #[test]
    fn insert_and_remove_keep_positions_consistent() {
        let mut set = SparseSet::<usize>::new(5);

        assert!(set.insert(3));
        assert!(set.insert(0));
        assert!(set.insert(4));
        assert!(!set.insert(0));
        assert_eq!(set.len(), 3);

        assert!(set.remove(3));
        assert!(!set.remove(3));

        assert!(!set.contains(3));
        assert!(set.contains(0));
        assert!(set.contains(4));
        assert_eq!(set.len(), 2);

        let mut members = set.iter().collect::<Vec<_>>();
        members.sort();
        assert_eq!(members, vec![0, 4]);

        for position in 0..set.len() {
            assert!(set.contains(set.get(position)));
        }
    }

    #[test]
    fn removing_the_last_member_empties_the_set() {
        let mut set = SparseSet::<usize>::new(2);

        let _ = set.insert(1);
        assert!(set.remove(1));

        assert!(set.is_empty());
        assert!(!set.contains(1));
    }
}
