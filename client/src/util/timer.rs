//! Scope-owned timeouts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Alerts, delayed redirects and scroll-lock release all schedule work after
//! a delay. A component creates one `TimerScope` at setup; every timeout it
//! starts dies with the component, so nothing fires into disposed signals.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifetime flag shared by every timer a component starts.
#[derive(Clone, Debug)]
pub struct TimerScope {
    open: Arc<AtomicBool>,
}

impl Default for TimerScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerScope {
    /// A scope that is only closed explicitly.
    pub fn new() -> Self {
        Self { open: Arc::new(AtomicBool::new(true)) }
    }

    /// A scope closed by the current reactive owner's cleanup.
    pub fn install() -> Self {
        let scope = Self::new();
        let closer = scope.clone();
        leptos::prelude::on_cleanup(move || closer.close());
        scope
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    /// Run `f` once after `delay_ms`, unless the guard or scope is cancelled first.
    pub fn timeout<F>(&self, delay_ms: u64, f: F) -> TimerGuard
    where
        F: FnOnce() + 'static,
    {
        let guard = TimerGuard { armed: Arc::new(AtomicBool::new(true)), scope: self.clone() };
        #[cfg(feature = "hydrate")]
        {
            let pending = guard.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
                if pending.take() {
                    f();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, f);
        }
        guard
    }
}

/// Handle to one pending timeout.
#[derive(Clone, Debug)]
pub struct TimerGuard {
    armed: Arc<AtomicBool>,
    scope: TimerScope,
}

impl TimerGuard {
    pub fn cancel(&self) {
        self.armed.store(false, Ordering::Relaxed);
    }

    /// True while the timeout may still fire.
    pub fn is_active(&self) -> bool {
        self.armed.load(Ordering::Relaxed) && self.scope.is_open()
    }

    /// Disarm and report whether the callback should run now.
    fn take(&self) -> bool {
        self.armed.swap(false, Ordering::Relaxed) && self.scope.is_open()
    }
}
