//! Entity relevance filter — which entities matter for an area.
//!
//! Pure projections over registry snapshots: nothing here writes to a
//! registry, and every call reads the registries afresh.

use autoarea_domain::DOMAIN;
use autoarea_domain::domains::RelevantDomains;
use autoarea_domain::entity::Entity;
use autoarea_domain::id::{AreaId, EntityId};

use crate::ports::{DeviceRegistry, EntityRegistry};

/// Area an entity effectively belongs to.
///
/// The entity's own area wins; otherwise the area of its device. A device id
/// the registry does not know is treated as "no area".
pub fn effective_area<D>(devices: &D, entity: &Entity) -> Option<AreaId>
where
    D: DeviceRegistry + ?Sized,
{
    if let Some(area_id) = &entity.area_id {
        return Some(area_id.clone());
    }
    let device_id = entity.device_id.as_ref()?;
    devices.get_device(device_id)?.area_id
}

/// Entities of `area_id` whose domain is in `relevant_domains`, in registry order.
///
/// No usability check is applied; see [`valid_entities`].
pub fn area_entities<E, D>(
    entities: &E,
    devices: &D,
    area_id: &AreaId,
    relevant_domains: &RelevantDomains,
) -> Vec<Entity>
where
    E: EntityRegistry + ?Sized,
    D: DeviceRegistry + ?Sized,
{
    entities
        .list_entities()
        .into_iter()
        .filter(|entity| relevant_domains.contains(entity.domain()))
        .filter(|entity| effective_area(devices, entity).as_ref() == Some(area_id))
        .collect()
}

/// Whether an entity can be automated over right now.
///
/// Disabled and hidden entities are rejected, as are entities provided by
/// this integration itself. Everything else is up to the host's oracle.
pub fn is_valid_entity<E>(entities: &E, entity: &Entity) -> bool
where
    E: EntityRegistry + ?Sized,
{
    if entity.is_disabled() || entity.is_hidden() {
        return false;
    }
    if entity.platform == DOMAIN {
        return false;
    }
    entities.is_entity_usable(entity)
}

/// [`area_entities`] narrowed down by [`is_valid_entity`].
#[tracing::instrument(skip(entities, devices, relevant_domains))]
pub fn valid_entities<E, D>(
    entities: &E,
    devices: &D,
    area_id: &AreaId,
    relevant_domains: &RelevantDomains,
) -> Vec<Entity>
where
    E: EntityRegistry + ?Sized,
    D: DeviceRegistry + ?Sized,
{
    let valid: Vec<Entity> = area_entities(entities, devices, area_id, relevant_domains)
        .into_iter()
        .filter(|entity| is_valid_entity(entities, entity))
        .collect();
    tracing::trace!(count = valid.len(), "filtered area entities");
    valid
}

/// Ids of the entities whose current *or* original device class is one of
/// `device_classes`, keeping the input order.
pub fn entity_ids_by_device_class<S: AsRef<str>>(
    entities: &[Entity],
    device_classes: &[S],
) -> Vec<EntityId> {
    entities
        .iter()
        .filter(|entity| entity.has_device_class(device_classes))
        .map(|entity| entity.entity_id.clone())
        .collect()
}
