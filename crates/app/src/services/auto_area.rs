//! Area controller — one per configured area.
//!
//! Resolves its area once at construction, answers "which entities matter
//! here" on demand, and owns at most one subordinate automation controller
//! whose cleanup it cascades.

use std::sync::Arc;

use autoarea_domain::area::Area;
use autoarea_domain::device_info::DeviceInfo;
use autoarea_domain::domains::RelevantDomains;
use autoarea_domain::entity::Entity;
use autoarea_domain::id::{AreaId, EntityId};
use autoarea_domain::text::UNKNOWN;
use autoarea_domain::{DOMAIN, NAME, VERSION};
use tracing::{debug, error, info, warn};

use crate::ports::{AutomationController, HostContext};
use crate::services::entity_filter;
use crate::services::resolver::resolve_area;

/// Placeholder identifier of the logical device every controller registers.
pub const DEVICE_IDENTIFIER: &str = "TBD";

/// Position of a controller in its `Uninitialized → Initialized → CleanedUp` lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized,
    CleanedUp,
}

/// Controller for a single area.
pub struct AutoArea<H> {
    host: H,
    area_id: Option<AreaId>,
    area: Option<Area>,
    relevant_domains: Arc<RelevantDomains>,
    lifecycle: Lifecycle,
    controller: Option<Box<dyn AutomationController>>,
}

impl<H: HostContext> AutoArea<H> {
    /// Create the controller and resolve its area right away.
    ///
    /// An identifier that does not resolve leaves the controller in the
    /// "unknown area" state for good and reports one issue to the host.
    pub fn new(
        host: H,
        area_id: Option<AreaId>,
        relevant_domains: Arc<RelevantDomains>,
    ) -> Self {
        info!(area_id = ?area_id.as_ref().map(AreaId::as_str), "creating auto area");
        let area = resolve_area(&host, area_id.as_ref());
        Self {
            host,
            area_id,
            area,
            relevant_domains,
            lifecycle: Lifecycle::Uninitialized,
            controller: None,
        }
    }

    /// Identifier this controller was created with.
    #[must_use]
    pub fn area_id(&self) -> Option<&AreaId> {
        self.area_id.as_ref()
    }

    /// Resolved area, `None` when the identifier did not resolve.
    #[must_use]
    pub fn area(&self) -> Option<&Area> {
        self.area.as_ref()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.area.is_some()
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Run once the host is fully started.
    ///
    /// Returns `true` when the controller moved to [`Lifecycle::Initialized`].
    /// Calling it on an unresolved, already initialized or cleaned up
    /// controller does nothing.
    pub fn initialize(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Uninitialized if self.is_resolved() => {
                info!(area = %self.area_name(), "initializing after host start");
                // Registry-change subscriptions will hook in here.
                self.lifecycle = Lifecycle::Initialized;
                true
            }
            Lifecycle::Uninitialized => {
                debug!(area = %self.area_name(), "skipping initialization of unresolved area");
                false
            }
            Lifecycle::Initialized | Lifecycle::CleanedUp => false,
        }
    }

    /// Tear the controller down, cascading into the subordinate first.
    ///
    /// Never fails: a subordinate error is logged and swallowed. Calling it
    /// again is a no-op.
    pub fn cleanup(&mut self) {
        if self.lifecycle == Lifecycle::CleanedUp {
            return;
        }
        debug!(area = %self.area_name(), "disabling area control");
        if let Some(controller) = self.controller.take() {
            cleanup_controller(controller);
        }
        self.lifecycle = Lifecycle::CleanedUp;
    }

    /// Hand a subordinate automation controller to this area.
    ///
    /// A previously attached controller is cleaned up first. Once the area is
    /// cleaned up, the new controller is cleaned up immediately instead.
    pub fn attach_controller(&mut self, controller: Box<dyn AutomationController>) {
        if self.lifecycle == Lifecycle::CleanedUp {
            warn!(
                area = %self.area_name(),
                controller = controller.name(),
                "area already cleaned up, discarding controller"
            );
            cleanup_controller(controller);
            return;
        }
        if let Some(previous) = self.controller.replace(controller) {
            cleanup_controller(previous);
        }
    }

    #[must_use]
    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    /// Valid, relevant entities of this area, read from the live registries.
    ///
    /// Always empty for an unresolved area.
    #[must_use]
    pub fn valid_entities(&self) -> Vec<Entity> {
        let Some(area) = &self.area else {
            return Vec::new();
        };
        entity_filter::valid_entities(
            self.host.entities(),
            self.host.devices(),
            &area.id,
            &self.relevant_domains,
        )
    }

    /// Ids of the valid entities whose current or original device class is
    /// one of `device_classes`.
    #[must_use]
    pub fn entity_ids_by_device_class<S: AsRef<str>>(
        &self,
        device_classes: &[S],
    ) -> Vec<EntityId> {
        entity_filter::entity_ids_by_device_class(&self.valid_entities(), device_classes)
    }

    /// Display name of the area, or `"unknown"`.
    #[must_use]
    pub fn area_name(&self) -> &str {
        self.area.as_ref().map_or(UNKNOWN, |area| area.name.as_str())
    }

    /// Slug of the area name, or `"unknown"`.
    #[must_use]
    pub fn slugified_area_name(&self) -> String {
        self.area
            .as_ref()
            .map_or_else(|| UNKNOWN.to_string(), Area::slug)
    }

    /// Describe this controller as a logical device for the host.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifiers: vec![(DOMAIN.to_string(), DEVICE_IDENTIFIER.to_string())],
            name: NAME.to_string(),
            model: VERSION.to_string(),
            manufacturer: NAME.to_string(),
            suggested_area: self.area_name().to_string(),
        }
    }
}

fn cleanup_controller(mut controller: Box<dyn AutomationController>) {
    if let Err(err) = controller.cleanup() {
        error!(
            controller = controller.name(),
            error = %err,
            "automation controller cleanup failed"
        );
    }
}
