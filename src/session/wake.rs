// ABOUTME: Best-effort keep-awake capability for open cooking sessions
// ABOUTME: Tri-state acquisition outcome and the no-op fallback provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Project

/// Outcome of a wake-lock acquisition attempt
///
/// Only `Acquired` marks the lock as held. `Unsupported` and `Denied` are
/// normal disabled-path branches, never propagated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The platform granted the lock
    Acquired,
    /// The platform has no wake-lock capability
    Unsupported,
    /// The platform refused the request
    Denied,
}

/// Platform keep-awake capability
///
/// Acquisition is fire-and-forget from the session's perspective: the
/// outcome only updates the internal held flag and navigation never waits
/// on it.
pub trait WakeLock {
    /// Attempt to acquire the lock
    fn acquire(&mut self) -> AcquireOutcome;

    /// Release the lock; failures are ignored by the caller
    fn release(&mut self);
}

/// Wake-lock provider for platforms without the capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWakeLock;

impl WakeLock for NoopWakeLock {
    fn acquire(&mut self) -> AcquireOutcome {
        AcquireOutcome::Unsupported
    }

    fn release(&mut self) {}
}
