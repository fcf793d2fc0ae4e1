//! Entity — the smallest addressable unit of state or control.
//!
//! An entity belongs to a domain (the prefix of its id), optionally to a
//! device, and optionally directly to an area. Entities without a direct
//! area inherit the area of their device.

use serde::{Deserialize, Serialize};

use crate::error::{AutoAreaError, ValidationError};
use crate::id::{AreaId, DeviceId, EntityId};

/// Reason an entity was disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledBy {
    ConfigEntry,
    Device,
    Hass,
    Integration,
    User,
}

/// Reason an entity was hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenBy {
    Integration,
    User,
}

/// Snapshot of an entity registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaId>,
    /// Integration that provides this entity.
    #[serde(default)]
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<String>,
    /// Device class reported by the integration before any user override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_device_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by: Option<DisabledBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_by: Option<HiddenBy>,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Functional category of this entity (`light`, `sensor`, …).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id.domain()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled_by.is_some()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden_by.is_some()
    }

    /// Whether either the current or the original device class is one of `classes`.
    #[must_use]
    pub fn has_device_class<S: AsRef<str>>(&self, classes: &[S]) -> bool {
        let requested = |class: Option<&str>| {
            class.is_some_and(|class| classes.iter().any(|c| c.as_ref() == class))
        };
        requested(self.device_class.as_deref())
            || requested(self.original_device_class.as_deref())
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] when the entity id is empty.
    pub fn validate(&self) -> Result<(), AutoAreaError> {
        if self.entity_id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug, Default)]
pub struct EntityBuilder {
    entity_id: Option<EntityId>,
    device_id: Option<DeviceId>,
    area_id: Option<AreaId>,
    platform: Option<String>,
    device_class: Option<String>,
    original_device_class: Option<String>,
    disabled_by: Option<DisabledBy>,
    hidden_by: Option<HiddenBy>,
}

impl EntityBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<EntityId>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<DeviceId>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    #[must_use]
    pub fn device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_class = Some(device_class.into());
        self
    }

    #[must_use]
    pub fn original_device_class(mut self, device_class: impl Into<String>) -> Self {
        self.original_device_class = Some(device_class.into());
        self
    }

    #[must_use]
    pub fn disabled_by(mut self, reason: DisabledBy) -> Self {
        self.disabled_by = Some(reason);
        self
    }

    #[must_use]
    pub fn hidden_by(mut self, reason: HiddenBy) -> Self {
        self.hidden_by = Some(reason);
        self
    }

    /// Consume the builder, validate, and return an [`Entity`].
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] if `entity_id` is missing or empty.
    pub fn build(self) -> Result<Entity, AutoAreaError> {
        let entity = Entity {
            entity_id: self.entity_id.unwrap_or_else(|| EntityId::new("")),
            device_id: self.device_id,
            area_id: self.area_id,
            platform: self.platform.unwrap_or_default(),
            device_class: self.device_class,
            original_device_class: self.original_device_class,
            disabled_by: self.disabled_by,
            hidden_by: self.hidden_by,
        };
        entity.validate()?;
        Ok(entity)
    }
}
