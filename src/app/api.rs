//! Public API for the plugin lifecycle
//!
//! External modules should import from here rather than directly from the
//! internal modules.

// Lifecycle controller and its capability objects
pub use crate::app::plugin::{
    IndexManagementPlugin, IndexManagementSetup, IndexManagementStart, LifecyclePhase, APP_ID,
    APP_ORDER, APP_TITLE,
};

// Deferred render entry point seams
pub use crate::app::render::{RenderApp, RenderAppLoader};
