//! Public API for the action registry
//!
//! External modules should import from here rather than directly from the
//! internal modules.

// Registry and its shared handle
pub use crate::actions::registry::{ActionRegistry, SharedActionRegistry};

// Error handling
pub use crate::actions::error::{ActionRegistryError, ActionRegistryResult};

// Contributed-widget seams
pub use crate::actions::traits::{UiAction, UiActionFactory};

// Registration record
pub use crate::actions::types::ActionRegistration;
