//! Insertion-ordered in-memory registries.
//!
//! The host mutates these through `&self` (they sit behind an `Arc` shared
//! with the controllers); the core only ever reads them via the port traits.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use autoarea_app::ports::{AreaRegistry, DeviceRegistry, EntityRegistry};
use autoarea_domain::area::Area;
use autoarea_domain::device::Device;
use autoarea_domain::entity::Entity;
use autoarea_domain::error::{AutoAreaError, ValidationError};
use autoarea_domain::id::{AreaId, DeviceId, EntityId};
use indexmap::IndexMap;
use tracing::debug;

/// Area registry keyed by [`AreaId`].
#[derive(Debug, Default)]
pub struct InMemoryAreaRegistry {
    areas: RwLock<IndexMap<AreaId, Area>>,
}

impl InMemoryAreaRegistry {
    /// Register or replace an area.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] if the area breaks its invariants.
    pub fn upsert(&self, area: Area) -> Result<(), AutoAreaError> {
        area.validate()?;
        debug!(area_id = %area.id, "registering area");
        let mut areas = self.areas.write().unwrap_or_else(PoisonError::into_inner);
        areas.insert(area.id.clone(), area);
        Ok(())
    }

    pub fn remove(&self, id: &AreaId) -> Option<Area> {
        let mut areas = self.areas.write().unwrap_or_else(PoisonError::into_inner);
        areas.shift_remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AreaRegistry for InMemoryAreaRegistry {
    fn get_area(&self, id: &AreaId) -> Option<Area> {
        let areas = self.areas.read().unwrap_or_else(PoisonError::into_inner);
        areas.get(id).cloned()
    }
}

/// Device registry keyed by [`DeviceId`].
#[derive(Debug, Default)]
pub struct InMemoryDeviceRegistry {
    devices: RwLock<IndexMap<DeviceId, Device>>,
}

impl InMemoryDeviceRegistry {
    /// Register or replace a device.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] when the device id is empty.
    pub fn upsert(&self, device: Device) -> Result<(), AutoAreaError> {
        if device.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        debug!(device_id = %device.id, "registering device");
        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        devices.insert(device.id.clone(), device);
        Ok(())
    }

    pub fn remove(&self, id: &DeviceId) -> Option<Device> {
        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        devices.shift_remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DeviceRegistry for InMemoryDeviceRegistry {
    fn get_device(&self, id: &DeviceId) -> Option<Device> {
        let devices = self.devices.read().unwrap_or_else(PoisonError::into_inner);
        devices.get(id).cloned()
    }
}

/// Entity registry keyed by [`EntityId`], enumerated in registration order.
///
/// Replacing an entity keeps its original position.
#[derive(Debug, Default)]
pub struct InMemoryEntityRegistry {
    entities: RwLock<IndexMap<EntityId, Entity>>,
    unusable: RwLock<HashSet<EntityId>>,
}

impl InMemoryEntityRegistry {
    /// Register or replace an entity.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] if the entity breaks its invariants.
    pub fn upsert(&self, entity: Entity) -> Result<(), AutoAreaError> {
        entity.validate()?;
        debug!(entity_id = %entity.entity_id, "registering entity");
        let mut entities = self.entities.write().unwrap_or_else(PoisonError::into_inner);
        entities.insert(entity.entity_id.clone(), entity);
        Ok(())
    }

    /// Drop an entity together with its usability flag.
    pub fn remove(&self, id: &EntityId) -> Option<Entity> {
        self.unusable
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        let mut entities = self.entities.write().unwrap_or_else(PoisonError::into_inner);
        entities.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<Entity> {
        let entities = self.entities.read().unwrap_or_else(PoisonError::into_inner);
        entities.get(id).cloned()
    }

    /// Flag an entity as (un)usable, e.g. when its state becomes unavailable.
    pub fn set_usable(&self, id: &EntityId, usable: bool) {
        let mut unusable = self.unusable.write().unwrap_or_else(PoisonError::into_inner);
        if usable {
            unusable.remove(id);
        } else {
            unusable.insert(id.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntityRegistry for InMemoryEntityRegistry {
    fn list_entities(&self) -> Vec<Entity> {
        let entities = self.entities.read().unwrap_or_else(PoisonError::into_inner);
        entities.values().cloned().collect()
    }

    fn is_entity_usable(&self, entity: &Entity) -> bool {
        let unusable = self.unusable.read().unwrap_or_else(PoisonError::into_inner);
        !unusable.contains(&entity.entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str) -> Entity {
        Entity::builder().entity_id(id).build().unwrap()
    }

    #[test]
    fn should_get_registered_area() {
        let registry = InMemoryAreaRegistry::default();
        let area = Area::builder().id("kitchen").name("Kitchen").build().unwrap();
        registry.upsert(area.clone()).unwrap();

        assert_eq!(registry.get_area(&AreaId::from("kitchen")), Some(area));
        assert!(registry.get_area(&AreaId::from("attic")).is_none());
    }

    #[test]
    fn should_forget_removed_area() {
        let registry = InMemoryAreaRegistry::default();
        registry
            .upsert(Area::builder().id("kitchen").name("Kitchen").build().unwrap())
            .unwrap();

        assert!(registry.remove(&AreaId::from("kitchen")).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn should_reject_device_without_id() {
        let registry = InMemoryDeviceRegistry::default();
        let result = registry.upsert(Device::new(""));
        assert!(matches!(
            result,
            Err(AutoAreaError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_get_registered_device() {
        let registry = InMemoryDeviceRegistry::default();
        registry
            .upsert(Device::new("dev1").with_area("kitchen"))
            .unwrap();

        let device = registry.get_device(&DeviceId::from("dev1")).unwrap();
        assert_eq!(device.area_id, Some(AreaId::from("kitchen")));
    }

    #[test]
    fn should_list_entities_in_registration_order() {
        let registry = InMemoryEntityRegistry::default();
        registry.upsert(entity("switch.b")).unwrap();
        registry.upsert(entity("light.a")).unwrap();
        registry.upsert(entity("sensor.c")).unwrap();

        let ids: Vec<String> = registry
            .list_entities()
            .into_iter()
            .map(|e| e.entity_id.to_string())
            .collect();
        assert_eq!(ids, vec!["switch.b", "light.a", "sensor.c"]);
    }

    #[test]
    fn should_keep_position_when_replacing_entity() {
        let registry = InMemoryEntityRegistry::default();
        registry.upsert(entity("switch.b")).unwrap();
        registry.upsert(entity("light.a")).unwrap();
        registry
            .upsert(
                Entity::builder()
                    .entity_id("switch.b")
                    .area_id("kitchen")
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let listed = registry.list_entities();
        assert_eq!(listed[0].entity_id.as_str(), "switch.b");
        assert_eq!(listed[0].area_id, Some(AreaId::from("kitchen")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn should_toggle_usability() {
        let registry = InMemoryEntityRegistry::default();
        let light = entity("light.a");
        registry.upsert(light.clone()).unwrap();
        assert!(registry.is_entity_usable(&light));

        registry.set_usable(&light.entity_id, false);
        assert!(!registry.is_entity_usable(&light));

        registry.set_usable(&light.entity_id, true);
        assert!(registry.is_entity_usable(&light));
    }

    #[test]
    fn should_forget_removed_device() {
        let registry = InMemoryDeviceRegistry::default();
        registry.upsert(Device::new("dev1")).unwrap();

        assert!(registry.remove(&DeviceId::from("dev1")).is_some());
        assert!(registry.remove(&DeviceId::from("dev1")).is_none());
        assert!(registry.get_device(&DeviceId::from("dev1")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn should_get_registered_entity() {
        let registry = InMemoryEntityRegistry::default();
        registry.upsert(entity("light.a")).unwrap();

        assert_eq!(
            registry.get(&EntityId::from("light.a")),
            Some(entity("light.a"))
        );
        assert!(registry.get(&EntityId::from("light.b")).is_none());
    }

    #[test]
    fn should_reset_usability_when_entity_is_registered_again() {
        let registry = InMemoryEntityRegistry::default();
        let light = entity("light.a");
        registry.upsert(light.clone()).unwrap();
        registry.set_usable(&light.entity_id, false);

        assert_eq!(registry.remove(&light.entity_id), Some(light.clone()));
        assert!(registry.is_empty());

        registry.upsert(light.clone()).unwrap();
        assert!(registry.is_entity_usable(&light));
    }
}
