//! Device — a physical unit that exposes one or more entities.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, DeviceId};

/// Snapshot of a device registry entry.
///
/// A device belongs to zero or one area; its entities inherit that area
/// unless they carry their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<AreaId>,
}

impl Device {
    /// Create a device that is not assigned to any area.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            area_id: None,
        }
    }

    /// Assign the device to an area.
    #[must_use]
    pub fn with_area(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
