//! Disjoint-set forest for tracking merged map sections

/// Disjoint sets over the indices `0..len`
///
/// Uses path compression and union by size. Indices outside the structure behave
/// as isolated singletons: they are never connected to anything else and unions
/// involving them are ignored.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `len` singleton sets
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Number of disjoint sets remaining
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Number of elements tracked
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when tracking no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `element`
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = element;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            let next = *slot;
            *slot = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`
    pub fn union(&mut self, a: usize, b: usize) {
        if a >= self.len() || b >= self.len() {
            return;
        }
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        let size_a = self.size.get(root_a).copied().unwrap_or(1);
        let size_b = self.size.get(root_b).copied().unwrap_or(1);
        let (child, root) = if size_a < size_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        if let Some(slot) = self.parent.get_mut(child) {
            *slot = root;
        }
        if let Some(slot) = self.size.get_mut(root) {
            *slot = size_a + size_b;
        }
        self.count -= 1;
    }

    /// Whether `a` and `b` belong to the same set
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        a == b || (a < self.len() && b < self.len() && self.find(a) == self.find(b))
    }
}
