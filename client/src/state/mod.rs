pub mod alerts;
pub mod auth;
pub mod projects;
pub mod ui;
