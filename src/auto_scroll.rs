//! Edge auto-scroll while dragging.
//!
//! Velocity grows linearly inside a band at the top and bottom of the
//! viewport, from zero at the inner edge of the band to `max_speed` at the
//! viewport edge. Only vertical scrolling is driven.
//!
//! [`AutoScroller`] owns the frame ticket of the scroll loop. It never
//! scrolls on its own: the engine receives the frame, checks the ticket with
//! [`AutoScroller::accept_frame`], scrolls, re-reconciles and calls
//! [`AutoScroller::reschedule`].

use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::settings::AutoScrollSettings;
use tracing::trace;

/// Scroll step in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollVelocity {
    pub x: f32,
    pub y: f32,
}

impl ScrollVelocity {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Velocity for a pointer at `pointer_y` (viewport coordinates).
pub fn compute_scroll_velocity(
    pointer_y: f32,
    viewport_height: f32,
    settings: &AutoScrollSettings,
) -> ScrollVelocity {
    let edge = settings.edge_size;
    // Direction comes from the band alone, never from the sign of the setting
    let max = settings.max_speed.abs();
    if !settings.enabled || !edge.is_finite() || edge <= 0.0 || !max.is_finite() {
        return ScrollVelocity::ZERO;
    }

    let y = if pointer_y < edge {
        let distance = edge - pointer_y;
        -(distance / edge * max).min(max)
    } else if pointer_y > viewport_height - edge {
        let distance = pointer_y - (viewport_height - edge);
        (distance / edge * max).min(max)
    } else {
        0.0
    };

    ScrollVelocity { x: 0.0, y }
}

/// Outcome of [`AutoScroller::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTransition {
    Started,
    Stopped,
    Unchanged,
}

/// Scroll loop state: current velocity plus the one outstanding frame.
#[derive(Debug, Default)]
pub struct AutoScroller {
    velocity: ScrollVelocity,
    ticket: Option<FrameHandle>,
}

impl AutoScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> ScrollVelocity {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.ticket.is_some()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.ticket
    }

    /// Store a new velocity, starting or stopping the loop as needed.
    pub fn update<S: FrameScheduler + ?Sized>(
        &mut self,
        velocity: ScrollVelocity,
        scheduler: &mut S,
    ) -> ScrollTransition {
        self.velocity = velocity;

        if !velocity.is_zero() && self.ticket.is_none() {
            self.ticket = Some(scheduler.request_frame());
            trace!(?velocity, "Auto-scroll started");
            ScrollTransition::Started
        } else if velocity.is_zero() && self.ticket.is_some() {
            self.stop(scheduler);
            ScrollTransition::Stopped
        } else {
            ScrollTransition::Unchanged
        }
    }

    /// Claim a delivered frame.
    ///
    /// Returns the velocity to scroll by when `handle` is the pending ticket
    /// and the loop should keep going. Stale handles return `None` and leave
    /// the loop untouched; a matching handle with zero velocity ends the loop.
    pub fn accept_frame(&mut self, handle: FrameHandle) -> Option<ScrollVelocity> {
        if self.ticket != Some(handle) {
            trace!(?handle, "Ignoring stale scroll frame");
            return None;
        }
        self.ticket = None;
        if self.velocity.is_zero() {
            return None;
        }
        Some(self.velocity)
    }

    /// Schedule the next tick after a frame was processed.
    pub fn reschedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.ticket.is_none() && !self.velocity.is_zero() {
            self.ticket = Some(scheduler.request_frame());
        }
    }

    /// Cancel the pending frame and zero the velocity. Idempotent.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(ticket) = self.ticket.take() {
            scheduler.cancel_frame(ticket);
            trace!(?ticket, "Auto-scroll stopped");
        }
        self.velocity = ScrollVelocity::ZERO;
    }
}
