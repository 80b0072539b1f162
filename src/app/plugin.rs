//! Index Management plugin lifecycle
//!
//! The host shell drives the plugin through two phases, setup then start,
//! calling each exactly once with every plugin's setup completing before any
//! start begins. During setup the plugin registers its application surface
//! and exposes the action extension point; at start it seals the action
//! registry, so the rendered application always observes a stable, fully
//! populated set of contributed action types.

use crate::actions::api::{ActionRegistryResult, SharedActionRegistry, UiActionFactory};
use crate::app::render::{LazyRenderEntry, RenderAppLoader};
use crate::host::api::{
    AppCategory, AppMount, AppMountParameters, AppRegistration, CoreSetup, CoreStart, HostResult,
    StartServicesAccessor, Unmount,
};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

/// Application identifier registered with the host shell
pub const APP_ID: &str = "index_management_dashboards";

/// Application title shown in the host's navigation
pub const APP_TITLE: &str = "Index Management";

/// Navigation ordering weight for the application surface
pub const APP_ORDER: u32 = 7000;

static APP_CATEGORY: Lazy<AppCategory> = Lazy::new(|| AppCategory {
    id: "opensearch".to_string(),
    label: "OpenSearch Plugins".to_string(),
    order: 2000,
});

/// Lifecycle phase of the plugin controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Constructed,
    SetUp,
    Started,
}

/// Capability object returned to dependent plugins from setup
///
/// Exposes exactly one operation: registering a policy-action UI widget.
/// Dependents may call it any number of times before the plugin starts.
#[derive(Debug, Clone)]
pub struct IndexManagementSetup {
    actions: SharedActionRegistry,
}

impl IndexManagementSetup {
    /// Register a UI widget factory and default configuration for an action type
    pub async fn register_action(
        &self,
        action_type: &str,
        factory: Arc<dyn UiActionFactory>,
        default_action: Value,
    ) -> ActionRegistryResult<()> {
        self.actions
            .register_action(action_type, factory, default_action)
            .await
    }
}

/// Capability object returned from start
///
/// Empty: extension is a setup-time-only concept, there are no further
/// extension points once the application has started.
#[derive(Debug, Clone, Default)]
pub struct IndexManagementStart {}

/// Mount adapter handed to the host for the application surface
struct IndexManagementMounter {
    entry: LazyRenderEntry,
    services: Arc<dyn StartServicesAccessor>,
    actions: SharedActionRegistry,
}

#[async_trait::async_trait]
impl AppMount for IndexManagementMounter {
    async fn mount(&self, params: AppMountParameters) -> HostResult<Unmount> {
        let renderer = self.entry.get().await?;
        let core = self.services.start_services().await;
        log::trace!("Mounting '{}' under '{}'", APP_ID, params.app_base_path);
        Ok(renderer.render(core, &params, self.actions.clone()))
    }
}

/// The Index Management plugin's lifecycle controller
pub struct IndexManagementPlugin {
    actions: SharedActionRegistry,
    loader: Arc<dyn RenderAppLoader>,
    phase: LifecyclePhase,
}

impl std::fmt::Debug for IndexManagementPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexManagementPlugin")
            .field("actions", &self.actions)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl IndexManagementPlugin {
    /// Create the plugin with its deferred render entry point
    ///
    /// The action registry is created here, open for registration, and stays
    /// owned by this controller until it is sealed at start.
    pub fn new(loader: Arc<dyn RenderAppLoader>) -> Self {
        Self {
            actions: SharedActionRegistry::new(),
            loader,
            phase: LifecyclePhase::Constructed,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Setup phase: register the application surface and expose the
    /// action extension point
    ///
    /// The host calls this exactly once, before `start`. The returned
    /// capability delegates straight to the action registry; any dependent
    /// plugin holding it may register action types until `start` runs.
    pub fn setup(&mut self, core: &mut dyn CoreSetup) -> IndexManagementSetup {
        let services = core.start_services_accessor();
        core.register_application(AppRegistration {
            id: APP_ID.to_string(),
            title: APP_TITLE.to_string(),
            order: APP_ORDER,
            category: APP_CATEGORY.clone(),
            mount: Arc::new(IndexManagementMounter {
                entry: LazyRenderEntry::new(Arc::clone(&self.loader)),
                services,
                actions: self.actions.clone(),
            }),
        });

        self.phase = LifecyclePhase::SetUp;
        log::debug!("'{}' set up; action registry open", APP_ID);

        IndexManagementSetup {
            actions: self.actions.clone(),
        }
    }

    /// Start phase: seal the action registry
    ///
    /// Sealing completes before this method returns, and the host only
    /// mounts the surface after start, so sealing happens-before the render
    /// entry point is ever invoked. Every `register_action` call from here
    /// on fails for the remainder of the process.
    pub async fn start(&mut self, _core: Arc<dyn CoreStart>) -> IndexManagementStart {
        self.actions.seal().await;
        self.phase = LifecyclePhase::Started;
        log::debug!("'{}' started; action registry sealed", APP_ID);
        IndexManagementStart::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render::RenderApp;
    use serde_json::json;

    struct NoopRenderer;

    impl RenderApp for NoopRenderer {
        fn render(
            &self,
            _core: Arc<dyn CoreStart>,
            _params: &AppMountParameters,
            _actions: SharedActionRegistry,
        ) -> Unmount {
            Box::new(|| {})
        }
    }

    struct NoopLoader;

    #[async_trait::async_trait]
    impl RenderAppLoader for NoopLoader {
        async fn load(&self) -> HostResult<Arc<dyn RenderApp>> {
            Ok(Arc::new(NoopRenderer))
        }
    }

    struct MockCoreStart;

    impl CoreStart for MockCoreStart {
        fn base_path(&self) -> String {
            String::new()
        }
    }

    struct MockAccessor;

    #[async_trait::async_trait]
    impl StartServicesAccessor for MockAccessor {
        async fn start_services(&self) -> Arc<dyn CoreStart> {
            Arc::new(MockCoreStart)
        }
    }

    #[derive(Default)]
    struct MockCoreSetup {
        registered: Vec<AppRegistration>,
    }

    impl CoreSetup for MockCoreSetup {
        fn register_application(&mut self, app: AppRegistration) {
            self.registered.push(app);
        }

        fn start_services_accessor(&self) -> Arc<dyn StartServicesAccessor> {
            Arc::new(MockAccessor)
        }
    }

    struct NoopFactory;

    impl UiActionFactory for NoopFactory {
        fn create(&self, action: Value) -> Box<dyn crate::actions::api::UiAction> {
            struct Widget {
                payload: Value,
            }
            impl crate::actions::api::UiAction for Widget {
                fn action_type(&self) -> &str {
                    "noop"
                }
                fn to_action(&self) -> Value {
                    self.payload.clone()
                }
                fn clone_with(&self, action: Value) -> Box<dyn crate::actions::api::UiAction> {
                    Box::new(Widget { payload: action })
                }
            }
            Box::new(Widget { payload: action })
        }
    }

    #[test]
    fn test_setup_registers_application_surface() {
        let mut plugin = IndexManagementPlugin::new(Arc::new(NoopLoader));
        let mut core = MockCoreSetup::default();

        assert_eq!(plugin.phase(), LifecyclePhase::Constructed);
        let _setup = plugin.setup(&mut core);

        assert_eq!(plugin.phase(), LifecyclePhase::SetUp);
        assert_eq!(core.registered.len(), 1);

        let app = &core.registered[0];
        assert_eq!(app.id, APP_ID);
        assert_eq!(app.title, APP_TITLE);
        assert_eq!(app.order, APP_ORDER);
        assert_eq!(app.category.id, "opensearch");
        assert_eq!(app.category.label, "OpenSearch Plugins");
        assert_eq!(app.category.order, 2000);
    }

    #[tokio::test]
    async fn test_setup_capability_registers_into_registry() {
        let mut plugin = IndexManagementPlugin::new(Arc::new(NoopLoader));
        let mut core = MockCoreSetup::default();

        let setup = plugin.setup(&mut core);
        setup
            .register_action("custom_a", Arc::new(NoopFactory), json!({"interval": 5}))
            .await
            .unwrap();

        let registration = plugin.actions.get_registration("custom_a").await.unwrap();
        assert_eq!(registration.default_action, json!({"interval": 5}));
    }

    #[tokio::test]
    async fn test_start_seals_registry() {
        let mut plugin = IndexManagementPlugin::new(Arc::new(NoopLoader));
        let mut core = MockCoreSetup::default();

        let setup = plugin.setup(&mut core);
        setup
            .register_action("custom_a", Arc::new(NoopFactory), json!({}))
            .await
            .unwrap();

        let _start = plugin.start(Arc::new(MockCoreStart)).await;
        assert_eq!(plugin.phase(), LifecyclePhase::Started);

        // Capability kept from setup is dead after start
        let result = setup
            .register_action("custom_b", Arc::new(NoopFactory), json!({}))
            .await;
        assert!(result.is_err());

        // Earlier registrations remain readable
        assert!(plugin.actions.get_registration("custom_a").await.is_some());
    }

    #[tokio::test]
    async fn test_mount_renders_after_start() {
        let mut plugin = IndexManagementPlugin::new(Arc::new(NoopLoader));
        let mut core = MockCoreSetup::default();

        let _setup = plugin.setup(&mut core);
        let _start = plugin.start(Arc::new(MockCoreStart)).await;

        let app = core.registered.remove(0);
        let unmount = app
            .mount
            .mount(AppMountParameters {
                element_id: "root".to_string(),
                app_base_path: "/app/index_management_dashboards".to_string(),
            })
            .await
            .unwrap();
        unmount();
    }
}
