//! Area — a logical grouping (room, floor, zone) for devices and entities.

use serde::{Deserialize, Serialize};

use crate::error::{AutoAreaError, ValidationError};
use crate::id::AreaId;
use crate::text::slugify;

/// Immutable snapshot of an area registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder() -> AreaBuilder {
        AreaBuilder::default()
    }

    /// Normalised form of the display name (`"Living Room"` → `"living_room"`).
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] when `id` or `name` is empty.
    pub fn validate(&self) -> Result<(), AutoAreaError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Area`].
#[derive(Debug, Default)]
pub struct AreaBuilder {
    id: Option<AreaId>,
    name: Option<String>,
}

impl AreaBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<AreaId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return an [`Area`].
    ///
    /// # Errors
    ///
    /// Returns [`AutoAreaError::Validation`] if `id` or `name` is missing or empty.
    pub fn build(self) -> Result<Area, AutoAreaError> {
        let area = Area {
            id: self.id.unwrap_or_else(|| AreaId::new("")),
            name: self.name.unwrap_or_default(),
        };
        area.validate()?;
        Ok(area)
    }
}
