//! Public API for host shell interop
//!
//! External modules should import from here rather than directly from the
//! internal modules.

// Application registration surface
pub use crate::host::application::{
    AppCategory, AppMount, AppMountParameters, AppRegistration, CoreSetup, CoreStart,
    StartServicesAccessor, Unmount,
};

// Error handling
pub use crate::host::error::{HostError, HostResult};
