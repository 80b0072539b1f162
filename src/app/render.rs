//! Deferred render entry point
//!
//! The application's render code is loaded lazily on first navigation to keep
//! the surface cheap to register. The loader resolves once; the resolved
//! renderer is cached for every later mount.

use crate::actions::api::SharedActionRegistry;
use crate::host::api::{AppMountParameters, CoreStart, HostResult, Unmount};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// The application's render entry point
///
/// Invoked only after the lifecycle controller has sealed the action
/// registry, so implementations always observe a stable, fully populated
/// registry.
pub trait RenderApp: Send + Sync {
    fn render(
        &self,
        core: Arc<dyn CoreStart>,
        params: &AppMountParameters,
        actions: SharedActionRegistry,
    ) -> Unmount;
}

/// Deferred loader for the render entry point
#[async_trait::async_trait]
pub trait RenderAppLoader: Send + Sync {
    async fn load(&self) -> HostResult<Arc<dyn RenderApp>>;
}

/// Once-resolved cache around a [`RenderAppLoader`]
pub(crate) struct LazyRenderEntry {
    loader: Arc<dyn RenderAppLoader>,
    resolved: OnceCell<Arc<dyn RenderApp>>,
}

impl LazyRenderEntry {
    pub(crate) fn new(loader: Arc<dyn RenderAppLoader>) -> Self {
        Self {
            loader,
            resolved: OnceCell::new(),
        }
    }

    /// Resolve the renderer, loading it on the first call only
    pub(crate) async fn get(&self) -> HostResult<Arc<dyn RenderApp>> {
        let renderer = self
            .resolved
            .get_or_try_init(|| async {
                log::debug!("Loading render entry point");
                self.loader.load().await
            })
            .await?;
        Ok(Arc::clone(renderer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRenderer;

    impl RenderApp for CountingRenderer {
        fn render(
            &self,
            _core: Arc<dyn CoreStart>,
            _params: &AppMountParameters,
            _actions: SharedActionRegistry,
        ) -> Unmount {
            Box::new(|| {})
        }
    }

    struct CountingLoader {
        loads: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl RenderAppLoader for CountingLoader {
        async fn load(&self) -> HostResult<Arc<dyn RenderApp>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(CountingRenderer))
        }
    }

    #[tokio::test]
    async fn test_loader_resolves_exactly_once() {
        let loader = Arc::new(CountingLoader {
            loads: AtomicUsize::new(0),
        });
        let entry = LazyRenderEntry::new(loader.clone());

        entry.get().await.unwrap();
        entry.get().await.unwrap();
        entry.get().await.unwrap();

        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_surfaces_error() {
        struct FailingLoader;

        #[async_trait::async_trait]
        impl RenderAppLoader for FailingLoader {
            async fn load(&self) -> HostResult<Arc<dyn RenderApp>> {
                Err(crate::host::api::HostError::RenderLoadFailed {
                    cause: "bundle missing".to_string(),
                })
            }
        }

        let entry = LazyRenderEntry::new(Arc::new(FailingLoader));
        let result = entry.get().await;
        assert!(result.is_err());
    }
}
