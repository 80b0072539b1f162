//! Plugin Lifecycle Controller
//!
//! Sequences the plugin's two host-driven phases: setup (register the
//! application surface, expose the action extension point) and start (seal
//! the registry, after which the application may render).

// Internal modules - all access should go through api module
pub(crate) mod plugin;
pub(crate) mod render;

// Public API module - the only public interface for the plugin lifecycle
pub mod api;
