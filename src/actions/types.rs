//! Type definitions for the action registry
//!
//! Data structures describing a registered action type: the widget factory
//! contributed by the registering plugin and the default configuration used
//! when a user adds a new action of that type.

use crate::actions::traits::UiActionFactory;
use serde_json::Value;
use std::sync::Arc;

/// A registered action type's UI construction recipe
#[derive(Clone)]
pub struct ActionRegistration {
    /// Factory producing the widget that edits this action type
    pub factory: Arc<dyn UiActionFactory>,

    /// Opaque default configuration for a freshly added action
    pub default_action: Value,
}

impl ActionRegistration {
    pub fn new(factory: Arc<dyn UiActionFactory>, default_action: Value) -> Self {
        Self {
            factory,
            default_action,
        }
    }
}

impl std::fmt::Debug for ActionRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistration")
            .field("default_action", &self.default_action)
            .finish_non_exhaustive()
    }
}
