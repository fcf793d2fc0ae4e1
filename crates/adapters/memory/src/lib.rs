//! # autoarea-adapter-memory
//!
//! In-memory implementations of the `autoarea-app` ports.
//!
//! A real host plugs its own registries in; this adapter backs the daemon's
//! configured snapshot and the end-to-end tests.
//!
//! ## Dependency rule
//!
//! Depends on `autoarea-app` (port traits) and `autoarea-domain` only.

mod issues;
mod registries;

use autoarea_app::ports::HostContext;
use autoarea_domain::area::Area;
use autoarea_domain::device::Device;
use autoarea_domain::entity::Entity;
use autoarea_domain::error::AutoAreaError;
use serde::Deserialize;

pub use issues::{InMemoryIssueRegistry, IssueEntry};
pub use registries::{InMemoryAreaRegistry, InMemoryDeviceRegistry, InMemoryEntityRegistry};

/// Registry content used to seed an [`InMemoryHost`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrySnapshot {
    pub areas: Vec<Area>,
    pub devices: Vec<Device>,
    pub entities: Vec<Entity>,
}

/// All registries plus the issue sink, ready to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    areas: InMemoryAreaRegistry,
    devices: InMemoryDeviceRegistry,
    entities: InMemoryEntityRegistry,
    issues: InMemoryIssueRegistry,
}

impl InMemoryHost {
    /// Build a host whose registries hold exactly `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] on the first invalid record.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, AutoAreaError> {
        let host = Self::default();
        for area in snapshot.areas {
            host.areas.upsert(area)?;
        }
        for device in snapshot.devices {
            host.devices.upsert(device)?;
        }
        for entity in snapshot.entities {
            host.entities.upsert(entity)?;
        }
        tracing::info!(
            areas = host.areas.len(),
            devices = host.devices.len(),
            entities = host.entities.len(),
            "registry snapshot loaded"
        );
        Ok(host)
    }
}

impl HostContext for InMemoryHost {
    type Areas = InMemoryAreaRegistry;
    type Devices = InMemoryDeviceRegistry;
    type Entities = InMemoryEntityRegistry;
    type Issues = InMemoryIssueRegistry;

    fn areas(&self) -> &InMemoryAreaRegistry {
        &self.areas
    }

    fn devices(&self) -> &InMemoryDeviceRegistry {
        &self.devices
    }

    fn entities(&self) -> &InMemoryEntityRegistry {
        &self.entities
    }

    fn issues(&self) -> &InMemoryIssueRegistry {
        &self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoarea_app::ports::{AreaRegistry, EntityRegistry};
    use autoarea_domain::id::AreaId;

    #[test]
    fn should_seed_registries_from_toml_snapshot() {
        let snapshot: RegistrySnapshot = toml::from_str(
            r#"
            [[areas]]
            id = "kitchen"
            name = "Kitchen"

            [[devices]]
            id = "dev1"
            area_id = "kitchen"

            [[entities]]
            entity_id = "light.kitchen_main"
            device_id = "dev1"
            "#,
        )
        .unwrap();

        let host = InMemoryHost::from_snapshot(snapshot).unwrap();
        assert!(host.areas().get_area(&AreaId::from("kitchen")).is_some());
        assert_eq!(host.entities().list_entities().len(), 1);
        assert!(host.issues().is_empty());
    }

    #[test]
    fn should_reject_invalid_area_in_snapshot() {
        let snapshot = RegistrySnapshot {
            areas: vec![Area {
                id: AreaId::from("kitchen"),
                name: String::new(),
            }],
            ..RegistrySnapshot::default()
        };
        assert!(matches!(
            InMemoryHost::from_snapshot(snapshot),
            Err(AutoAreaError::Validation(_))
        ));
    }

    #[test]
    fn should_start_empty() {
        let host = InMemoryHost::default();
        assert!(host.areas().is_empty());
        assert!(host.devices().is_empty());
        assert!(host.entities().is_empty());
    }
}
