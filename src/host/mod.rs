//! Host Shell Interfaces
//!
//! Interface-only model of the dashboard host shell this plugin is loaded
//! into. The host owns the implementations; this crate only consumes them.

// Internal modules - all access should go through api module
pub(crate) mod application;
pub(crate) mod error;

// Public API module - the only public interface for host interop
pub mod api;
