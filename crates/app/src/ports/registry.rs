//! Registry port — read-only accessors over the host's area, device and
//! entity registries.
//!
//! The registries are owned and mutated by the host. Every call returns a
//! snapshot; the core never writes back.

use std::sync::Arc;

use autoarea_domain::area::Area;
use autoarea_domain::device::Device;
use autoarea_domain::entity::Entity;
use autoarea_domain::id::{AreaId, DeviceId};

/// Looks up areas by identifier.
pub trait AreaRegistry {
    /// Fetch the area registered under `id`, if any.
    fn get_area(&self, id: &AreaId) -> Option<Area>;
}

/// Looks up devices by identifier.
pub trait DeviceRegistry {
    /// Fetch the device registered under `id`, if any.
    fn get_device(&self, id: &DeviceId) -> Option<Device>;
}

/// Enumerates entities and answers whether the host can currently use one.
pub trait EntityRegistry {
    /// Every registered entity, in registration order.
    fn list_entities(&self) -> Vec<Entity>;

    /// Host-defined usability check (state available, not restored, …).
    ///
    /// Disabled and hidden entities are already rejected by the core before
    /// this is consulted. The default accepts everything.
    fn is_entity_usable(&self, _entity: &Entity) -> bool {
        true
    }
}

impl<T: AreaRegistry + ?Sized> AreaRegistry for Arc<T> {
    fn get_area(&self, id: &AreaId) -> Option<Area> {
        (**self).get_area(id)
    }
}

impl<T: DeviceRegistry + ?Sized> DeviceRegistry for Arc<T> {
    fn get_device(&self, id: &DeviceId) -> Option<Device> {
        (**self).get_device(id)
    }
}

impl<T: EntityRegistry + ?Sized> EntityRegistry for Arc<T> {
    fn list_entities(&self) -> Vec<Entity> {
        (**self).list_entities()
    }

    fn is_entity_usable(&self, entity: &Entity) -> bool {
        (**self).is_entity_usable(entity)
    }
}
