//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod controller;
pub mod host;
pub mod issues;
pub mod registry;

pub use controller::AutomationController;
pub use host::HostContext;
pub use issues::IssueReporter;
pub use registry::{AreaRegistry, DeviceRegistry, EntityRegistry};
