use serde::{Deserialize, Serialize};

/// One animation step: a full copy of the array plus the two positions the
/// algorithm is acting on.
///
/// `index_a`/`index_b` are highlight positions, not guaranteed to be valid
/// indices into `data` (a tracer may point one past the end).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub data: Vec<u32>,
    pub index_a: usize,
    pub index_b: usize,
}

impl Frame {
    /// Snapshot `data`; later mutation of the source never reaches the frame.
    pub fn new(data: &[u32], index_a: usize, index_b: usize) -> Self {
        Self {
            data: data.to_vec(),
            index_a,
            index_b,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the bar at `index` should be drawn as current.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.index_a == index || self.index_b == index
    }
}
