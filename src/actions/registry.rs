//! Action Registry
//!
//! Keyed store mapping action-type identifiers to their UI registration, with
//! a mutate-then-seal lifecycle: open during the setup phase, sealed exactly
//! once when the plugin starts, read-only for the rest of the process.

use crate::actions::error::{ActionRegistryError, ActionRegistryResult};
use crate::actions::traits::UiActionFactory;
use crate::actions::types::ActionRegistration;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry of contributed policy-action UI widgets
pub struct ActionRegistry {
    /// Map of action-type identifier to its registration
    registrations: HashMap<String, ActionRegistration>,

    /// Phase flag: false while open for registration, true after start
    sealed: bool,
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field(
                "registrations",
                &self.registrations.keys().collect::<Vec<_>>(),
            )
            .field("sealed", &self.sealed)
            .finish()
    }
}

impl ActionRegistry {
    /// Create a new open registry with no registrations
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
            sealed: false,
        }
    }

    /// Register a UI widget factory and default configuration for an action type
    ///
    /// Identifiers are case-sensitive and not normalized. Fails with
    /// `RegistrySealed` once the registry has been sealed and with
    /// `DuplicateActionType` if the identifier is already taken; duplicates
    /// are rejected rather than overwritten so that extension-order-dependent
    /// shadowing of built-in action types cannot happen silently.
    pub fn register_action(
        &mut self,
        action_type: &str,
        factory: Arc<dyn UiActionFactory>,
        default_action: Value,
    ) -> ActionRegistryResult<()> {
        if self.sealed {
            return Err(ActionRegistryError::RegistrySealed {
                action_type: action_type.to_string(),
            });
        }

        if self.registrations.contains_key(action_type) {
            return Err(ActionRegistryError::DuplicateActionType {
                action_type: action_type.to_string(),
            });
        }

        log::trace!("Registered action type '{}'", action_type);
        self.registrations.insert(
            action_type.to_string(),
            ActionRegistration::new(factory, default_action),
        );
        Ok(())
    }

    /// Get the registration for an action type
    ///
    /// Valid in both phases. Before sealing, readers may observe
    /// registrations appearing one by one as dependent plugins run their
    /// setup in unspecified order; pre-seal reads are advisory only.
    pub fn get_registration(&self, action_type: &str) -> Option<&ActionRegistration> {
        self.registrations.get(action_type)
    }

    /// Check if an action type is registered
    pub fn has_action(&self, action_type: &str) -> bool {
        self.registrations.contains_key(action_type)
    }

    /// Get sorted list of all registered action types
    pub fn action_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.registrations.keys().cloned().collect();
        types.sort();
        types
    }

    /// Get total count of registered action types
    pub fn action_count(&self) -> usize {
        self.registrations.len()
    }

    /// Check whether the registry has been sealed
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Seal the registry, making it read-only for the rest of the process
    ///
    /// Called once by the lifecycle controller at the beginning of start.
    /// Idempotent: a second call is a no-op.
    pub fn seal(&mut self) {
        if self.sealed {
            return;
        }
        self.sealed = true;
        log::debug!(
            "Action registry sealed with {} action type(s)",
            self.registrations.len()
        );
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared action registry
///
/// The lifecycle controller owns the only handle during construction; clones
/// are handed to dependent plugins via the setup capability and to the
/// rendered application, which only reads once the registry is sealed.
#[derive(Debug, Clone)]
pub struct SharedActionRegistry {
    inner: Arc<RwLock<ActionRegistry>>,
}

impl SharedActionRegistry {
    /// Create a new shared registry in the open phase
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ActionRegistry::new())),
        }
    }

    /// Get access to the inner registry for read/write operations
    pub fn inner(&self) -> &Arc<RwLock<ActionRegistry>> {
        &self.inner
    }

    /// Convenience method to register an action type
    pub async fn register_action(
        &self,
        action_type: &str,
        factory: Arc<dyn UiActionFactory>,
        default_action: Value,
    ) -> ActionRegistryResult<()> {
        let mut registry = self.inner.write().await;
        registry.register_action(action_type, factory, default_action)
    }

    /// Convenience method to get a registration (cloned out of the lock)
    pub async fn get_registration(&self, action_type: &str) -> Option<ActionRegistration> {
        let registry = self.inner.read().await;
        registry.get_registration(action_type).cloned()
    }

    /// Convenience method to check if an action type is registered
    pub async fn has_action(&self, action_type: &str) -> bool {
        let registry = self.inner.read().await;
        registry.has_action(action_type)
    }

    /// Convenience method to get sorted action type names
    pub async fn action_types(&self) -> Vec<String> {
        let registry = self.inner.read().await;
        registry.action_types()
    }

    /// Convenience method to get the registration count
    pub async fn action_count(&self) -> usize {
        let registry = self.inner.read().await;
        registry.action_count()
    }

    /// Convenience method to check the phase flag
    pub async fn is_sealed(&self) -> bool {
        let registry = self.inner.read().await;
        registry.is_sealed()
    }

    /// Convenience method to seal the registry
    pub async fn seal(&self) {
        let mut registry = self.inner.write().await;
        registry.seal();
    }
}

impl Default for SharedActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
