pub mod actions;
pub mod app;
pub mod core;
pub mod host;
pub mod models;
