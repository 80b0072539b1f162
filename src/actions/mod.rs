//! Action Extension Registry
//!
//! Keyed store mapping index-lifecycle action types to the UI construction
//! recipe contributed by other plugins. Mutable while the plugin is being set
//! up, sealed before the application renders.

// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the action system
pub mod api;
