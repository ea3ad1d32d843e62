//! Body scroll locking for slide-in panels.
//!
//! Requires a browser environment; SSR paths no-op.

/// Delay before scrolling is restored after a panel closes; matches the
/// panel's slide-out animation.
pub const SCROLL_RESTORE_DELAY_MS: u64 = 300;

pub fn lock() {
    set_body_overflow("hidden");
}

pub fn unlock() {
    set_body_overflow("unset");
}

fn set_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
