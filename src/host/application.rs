//! Host application-registration surface
//!
//! Shapes and traits the host shell exposes for registering a UI application:
//! descriptor metadata, the mount contract, and the lifecycle service
//! accessors handed to plugins during setup and start. The host serializes
//! the two phases globally: every plugin's setup completes before any start
//! runs.

use crate::host::error::HostResult;
use std::sync::Arc;

/// Callback invoked by the host when the user navigates away from the surface
pub type Unmount = Box<dyn FnOnce() + Send>;

/// Category metadata grouping applications in the host's navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCategory {
    pub id: String,
    pub label: String,
    pub order: u32,
}

/// Parameters the host passes when mounting an application surface
#[derive(Debug, Clone)]
pub struct AppMountParameters {
    /// DOM/container identifier the application renders into
    pub element_id: String,

    /// Base path the application is mounted under
    pub app_base_path: String,
}

/// Mount contract for a registered application surface
///
/// The host calls `mount` on first navigation to the surface and invokes the
/// returned callback when the user navigates away. Cancellation of an
/// in-flight mount is the host's concern, not the plugin's.
#[async_trait::async_trait]
pub trait AppMount: Send + Sync {
    async fn mount(&self, params: AppMountParameters) -> HostResult<Unmount>;
}

/// A UI application registered with the host shell
#[derive(Clone)]
pub struct AppRegistration {
    pub id: String,
    pub title: String,
    pub order: u32,
    pub category: AppCategory,
    pub mount: Arc<dyn AppMount>,
}

impl std::fmt::Debug for AppRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRegistration")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("order", &self.order)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Runtime services the host hands to the mounted application at start
pub trait CoreStart: Send + Sync {
    /// Base path of the host shell, for building application links
    fn base_path(&self) -> String;
}

/// Deferred accessor resolving to the host's start services
///
/// Handed out during setup; resolves only once the host has entered its start
/// phase, which is how mount code observes post-start state.
#[async_trait::async_trait]
pub trait StartServicesAccessor: Send + Sync {
    async fn start_services(&self) -> Arc<dyn CoreStart>;
}

/// Host capabilities available to a plugin during its setup phase
pub trait CoreSetup: Send + Sync {
    /// Register an application surface with the host's navigation
    fn register_application(&mut self, app: AppRegistration);

    /// Accessor for the host's start services, usable from mount code
    fn start_services_accessor(&self) -> Arc<dyn StartServicesAccessor>;
}
