//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod alert;
pub mod dropdown;
pub mod error_view;
pub mod filter_panel;
pub mod navbar;
pub mod project_modal;
pub mod sidebar;
