//! Disjoint Set (Union-Find) over dense `usize` ids.
//!
//! Elements are identified by their position, so callers index vertices by
//! their place in the graph's vertex order instead of hashing keys.
//!
//! # Performance
//!
//! - Parent pointers and ranks live in two flat `Vec`s for cache locality.
//! - Path compression and union-by-rank give nearly constant amortized time.

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers; a root points to itself.
    parent: Vec<usize>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `len` singleton sets with ids `0..len`.
    pub fn with_singletons(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the id of the new element.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id` is not an element of the structure.
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        match self.rank[root1].cmp(&self.rank[root2]) {
            core::cmp::Ordering::Less => self.parent[root1] = root2,
            core::cmp::Ordering::Greater => self.parent[root2] = root1,
            core::cmp::Ordering::Equal => {
                self.parent[root2] = root1;
                self.rank[root1] += 1;
            }
        }

        true
    }

    /// Returns `true` if `id1` and `id2` are in the same set.
    pub fn connected(&mut self, id1: usize, id2: usize) -> bool {
        self.find(id1) == self.find(id2)
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
