//! Queue of callbacks waiting for the next repaint

use std::collections::BTreeMap;

use super::Callback;

/// Handle to a queued animation-frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub u64);

/// Callbacks keyed by id; ids grow monotonically so map order is request order
#[derive(Default)]
pub(super) struct FrameQueue {
    next_id: u64,
    pending: BTreeMap<FrameId, Callback>,
}

impl FrameQueue {
    pub fn push(&mut self, callback: Callback) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.pending.insert(id, callback);
        id
    }

    pub fn cancel(&mut self, id: FrameId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Ids queued so far, in request order
    pub fn snapshot(&self) -> Vec<FrameId> {
        self.pending.keys().copied().collect()
    }

    pub fn take(&mut self, id: FrameId) -> Option<Callback> {
        self.pending.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
