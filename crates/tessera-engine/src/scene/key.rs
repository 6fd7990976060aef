use core::cmp::Ordering;

use super::ZIndex;

/// Paint-order key for queued shapes.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `seq`: ascending (push order for equal z)
///
/// `seq` is unique per queue, so two entries never compare equal even when
/// their shapes are identical.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    /// Draw priority. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Push sequence number within the owning queue.
    pub seq: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, seq: u64) -> Self {
        Self { z, seq }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.z.cmp(&other.z) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
