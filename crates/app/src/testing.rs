//! In-memory fakes shared by the unit tests of this crate.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use autoarea_domain::area::Area;
use autoarea_domain::device::Device;
use autoarea_domain::entity::Entity;
use autoarea_domain::error::AutoAreaError;
use autoarea_domain::id::{AreaId, DeviceId, EntityId};
use autoarea_domain::issue::Issue;

use crate::ports::{
    AreaRegistry, AutomationController, DeviceRegistry, EntityRegistry, HostContext,
    IssueReporter,
};

/// Registries and issue sink in one struct, mutable through `&self`.
#[derive(Default)]
pub(crate) struct FakeHost {
    areas: Mutex<Vec<Area>>,
    devices: Mutex<Vec<Device>>,
    entities: Mutex<Vec<Entity>>,
    unusable: Mutex<HashSet<EntityId>>,
    issues: Mutex<Vec<Issue>>,
}

impl FakeHost {
    pub(crate) fn add_area(&self, id: &str, name: &str) {
        let area = Area::builder().id(id).name(name).build().unwrap();
        self.areas.lock().unwrap().push(area);
    }

    pub(crate) fn add_device(&self, device: Device) {
        self.devices.lock().unwrap().push(device);
    }

    pub(crate) fn add_entity(&self, entity: Entity) {
        self.entities.lock().unwrap().push(entity);
    }

    pub(crate) fn mark_unusable(&self, entity_id: &str) {
        self.unusable
            .lock()
            .unwrap()
            .insert(EntityId::from(entity_id));
    }

    pub(crate) fn reported_issues(&self) -> Vec<Issue> {
        self.issues.lock().unwrap().clone()
    }
}

impl AreaRegistry for FakeHost {
    fn get_area(&self, id: &AreaId) -> Option<Area> {
        let areas = self.areas.lock().unwrap();
        areas.iter().find(|a| &a.id == id).cloned()
    }
}

impl DeviceRegistry for FakeHost {
    fn get_device(&self, id: &DeviceId) -> Option<Device> {
        let devices = self.devices.lock().unwrap();
        devices.iter().find(|d| &d.id == id).cloned()
    }
}

impl EntityRegistry for FakeHost {
    fn list_entities(&self) -> Vec<Entity> {
        self.entities.lock().unwrap().clone()
    }

    fn is_entity_usable(&self, entity: &Entity) -> bool {
        !self.unusable.lock().unwrap().contains(&entity.entity_id)
    }
}

impl IssueReporter for FakeHost {
    fn create_issue(&self, issue: Issue) {
        let mut issues = self.issues.lock().unwrap();
        if !issues.iter().any(|i| i.key == issue.key) {
            issues.push(issue);
        }
    }
}

impl HostContext for FakeHost {
    type Areas = Self;
    type Devices = Self;
    type Entities = Self;
    type Issues = Self;

    fn areas(&self) -> &Self {
        self
    }

    fn devices(&self) -> &Self {
        self
    }

    fn entities(&self) -> &Self {
        self
    }

    fn issues(&self) -> &Self {
        self
    }
}

/// Subordinate controller counting its cleanups, optionally failing each one.
pub(crate) struct CountingController {
    pub(crate) cleanups: Arc<AtomicUsize>,
    pub(crate) fail: bool,
}

impl CountingController {
    pub(crate) fn new(fail: bool) -> (Self, Arc<AtomicUsize>) {
        let cleanups = Arc::new(AtomicUsize::new(0));
        let controller = Self {
            cleanups: Arc::clone(&cleanups),
            fail,
        };
        (controller, cleanups)
    }
}

impl AutomationController for CountingController {
    fn name(&self) -> &str {
        "counting"
    }

    fn cleanup(&mut self) -> Result<(), AutoAreaError> {
        self.cleanups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AutoAreaError::controller("counting", "cleanup failed"));
        }
        Ok(())
    }
}
