//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, cookies,
//! timers, DOM styling) from page and component logic so the logic stays
//! testable without a browser.

pub mod auth;
pub mod scroll_lock;
pub mod session;
pub mod timer;
pub mod validate;
