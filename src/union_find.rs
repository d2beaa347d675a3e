use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

/// A union-find (disjoint-set) forest over the elements `0..count`.
///
/// Every element starts in its own singleton partition. [`union`](Self::union)
/// joins two partitions by rank; [`find`](Self::find) resolves an element to
/// its partition's representative, compressing the path it walked so later
/// queries are near O(1) amortized. Both passes are iterative, so deep
/// parent chains cannot overflow the stack.
///
/// Elements at or past `count` are programmer errors and panic with a
/// diagnostic.
///
/// # Examples
///
/// ```rust
/// use chain_hash::UnionFind;
///
/// let mut uf = UnionFind::new(8);
/// assert!(uf.union(1, 2));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 3));
///
/// assert!(uf.connected(1, 3));
/// assert!(!uf.connected(1, 4));
/// ```
#[derive(Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Creates a forest of `count` singleton partitions.
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: alloc::vec![0; count],
        }
    }

    /// Returns the number of registered elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no elements are registered.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    #[track_caller]
    fn check(&self, element: usize) {
        assert!(
            element < self.parent.len(),
            "element out of range: the count is {} but the element is {element}",
            self.parent.len()
        );
    }

    /// Returns the representative of `element`'s partition, compressing the
    /// walked path.
    #[track_caller]
    pub fn find(&mut self, element: usize) -> usize {
        self.check(element);
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // second pass: point everything on the walked path at the root
        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Returns the representative of `element`'s partition without mutating
    /// the forest.
    ///
    /// Skips path compression, so repeated calls stay slow on deep chains;
    /// meant for inspection and tests.
    #[track_caller]
    pub fn root_of(&self, element: usize) -> usize {
        self.check(element);
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Joins the partitions of `a` and `b`, attaching the lower-ranked root
    /// under the higher.
    ///
    /// Returns `false` if they already share a partition.
    #[track_caller]
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// Returns `true` if `a` and `b` share a partition.
    #[track_caller]
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

impl Debug for UnionFind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for element in 0..self.parent.len() {
            map.entry(&element, &self.root_of(element));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_representatives() {
        let mut uf = UnionFind::new(16);
        for element in 0..16 {
            assert_eq!(uf.find(element), element);
            assert_eq!(uf.root_of(element), element);
        }
    }

    #[test]
    fn union_joins_and_reports() {
        let mut uf = UnionFind::new(8);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.connected(0, 2));

        assert!(uf.union(1, 3));
        assert!(uf.connected(0, 2));
        assert!(uf.connected(0, 3));

        // already joined
        assert!(!uf.union(0, 2));
    }

    #[test]
    fn union_through_non_roots() {
        let mut uf = UnionFind::new(10);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(2, 3);
        // any member of a partition works, not just its representative
        assert!(uf.connected(0, 3));
        assert!(uf.union(3, 9));
        assert!(uf.connected(0, 9));
    }

    #[test]
    fn find_compresses_paths() {
        let mut uf = UnionFind::new(64);
        for element in 0..63 {
            uf.union(element, element + 1);
        }
        let root = uf.find(0);
        for element in 0..64 {
            assert_eq!(uf.find(element), root);
            // after compression the element hangs directly off the root
            assert_eq!(uf.root_of(element), root);
        }
    }

    #[test]
    fn ranks_keep_trees_shallow() {
        let mut uf = UnionFind::new(8);
        // two rank-1 trees
        uf.union(0, 1);
        uf.union(2, 3);
        // equal ranks: one root adopts the other and gains a rank
        uf.union(0, 2);
        let root = uf.root_of(0);
        for element in [1usize, 2, 3] {
            assert_eq!(uf.root_of(element), root);
        }
    }

    #[test]
    fn disjoint_partitions_stay_apart() {
        let mut uf = UnionFind::new(100);
        for element in (0..98).step_by(2) {
            uf.union(element, element + 2);
        }
        assert!(uf.connected(0, 96));
        for element in (1..99).step_by(2) {
            assert!(!uf.connected(0, element));
        }
    }

    #[test]
    #[should_panic(expected = "element out of range")]
    fn find_past_count_panics() {
        let mut uf = UnionFind::new(4);
        uf.find(4);
    }

    #[test]
    #[should_panic(expected = "element out of range")]
    fn union_past_count_panics() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 17);
    }
}
