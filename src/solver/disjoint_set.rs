/// Union-find over dense vertex slots with path compression and union by size.
///
/// The representative chosen here says nothing about branch age; callers that
/// care about creation order track it separately.
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(len: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Finds the representative of `slot`, compressing the path on the way.
    pub fn find(&mut self, slot: usize) -> usize {
        let parent = self.parent[slot];
        if slot != parent {
            let root = self.find(parent);
            self.parent[slot] = root;
            root
        } else {
            parent
        }
    }

    /// Joins the sets of `first` and `second` and returns the new representative.
    pub fn union(&mut self, first: usize, second: usize) -> usize {
        let mut first = self.find(first);
        let mut second = self.find(second);
        if first == second {
            return first;
        }
        if self.size[first] < self.size[second] {
            std::mem::swap(&mut first, &mut second);
        }
        self.parent[second] = first;
        self.size[first] += self.size[second];
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_joins_sets_and_find_agrees() {
        let mut sets = DisjointSet::new(5);
        assert_ne!(sets.find(0), sets.find(1));

        sets.union(0, 1);
        sets.union(3, 4);
        assert_eq!(sets.find(0), sets.find(1));
        assert_eq!(sets.find(3), sets.find(4));
        assert_ne!(sets.find(1), sets.find(3));

        let root = sets.union(1, 4);
        for slot in [0, 1, 3, 4] {
            assert_eq!(sets.find(slot), root);
        }
        assert_eq!(sets.find(2), 2);
    }

    #[test]
    fn smaller_set_is_attached_to_larger() {
        let mut sets = DisjointSet::new(4);
        sets.union(1, 2);
        sets.union(2, 3);
        let big = sets.find(1);
        assert_eq!(sets.union(0, 3), big);
    }
}
