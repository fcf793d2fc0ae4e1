//! Host context port — everything an area controller needs from the host.

use std::sync::Arc;

use crate::ports::{AreaRegistry, DeviceRegistry, EntityRegistry, IssueReporter};

/// Bundles the registries and the issue sink a controller reads from and
/// reports into.
///
/// Controllers keep the context for their whole lifetime and query the
/// registries through it on every call, so implementations should be cheap
/// to clone (typically an `Arc`).
pub trait HostContext {
    type Areas: AreaRegistry;
    type Devices: DeviceRegistry;
    type Entities: EntityRegistry;
    type Issues: IssueReporter;

    fn areas(&self) -> &Self::Areas;
    fn devices(&self) -> &Self::Devices;
    fn entities(&self) -> &Self::Entities;
    fn issues(&self) -> &Self::Issues;
}

impl<T: HostContext> HostContext for Arc<T> {
    type Areas = T::Areas;
    type Devices = T::Devices;
    type Entities = T::Entities;
    type Issues = T::Issues;

    fn areas(&self) -> &Self::Areas {
        (**self).areas()
    }

    fn devices(&self) -> &Self::Devices {
        (**self).devices()
    }

    fn entities(&self) -> &Self::Entities {
        (**self).entities()
    }

    fn issues(&self) -> &Self::Issues {
        (**self).issues()
    }
}
