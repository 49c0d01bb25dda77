//! Cooperative per-frame callback scheduling.
//!
//! The host owns the frame clock. The engine asks for the next frame and gets
//! a [`FrameHandle`] ticket back; when the frame fires the host hands the same
//! ticket to `SelectionEngine::on_frame`. Cancelling a ticket guarantees the
//! host will not deliver it, and the engine additionally drops any ticket it
//! is not currently waiting for.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ticket identifying one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

/// Request/cancel per-frame callbacks (requestAnimationFrame equivalent).
pub trait FrameScheduler {
    /// Schedule one callback for the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested callback. Unknown or already fired
    /// handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler driven by the caller.
///
/// Requested frames queue up in order; [`ManualFrameScheduler::next_frame`]
/// pops the oldest one so the owner can deliver it.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
    requested_total: u64,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending frame, if any.
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Total number of frames ever requested.
    pub fn requested_total(&self) -> u64 {
        self.requested_total
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested_total += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
