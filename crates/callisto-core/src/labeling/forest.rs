/// Union-find forest over provisional labels, stored as a flat arena of
/// parent indices. A label is a root when it points to itself.
///
/// Merges always attach the larger root under the smaller one, so every root
/// is the smallest label of its equivalence class.
#[derive(Clone, Debug, Default)]
pub struct EquivalenceForest {
    parent: Vec<u32>,
}

impl EquivalenceForest {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
        }
    }

    /// Forest sized for the worst case of a `rows x cols` grid: with
    /// 8-connectivity, new labels can only start on every other row and
    /// column.
    pub fn for_grid(rows: usize, cols: usize) -> Self {
        Self::with_capacity(rows.div_ceil(2) * cols.div_ceil(2))
    }

    pub fn capacity(&self) -> usize {
        self.parent.capacity()
    }

    /// Issue the next unused label as a new singleton root.
    pub fn make_label(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Number of labels issued so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn is_root(&self, label: u32) -> bool {
        self.parent[label as usize] == label
    }

    /// Walk parent pointers until a self-pointing root is reached.
    pub fn find(&self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            label = self.parent[label as usize];
        }
        label
    }

    /// Merge the classes of `a` and `b`; returns the surviving (smaller) root.
    pub fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[big as usize] = small;
        small
    }
}
