//! Typed identifier newtypes backed by opaque strings.
//!
//! Identifiers are owned by the host registries; this crate never generates
//! them. An empty identifier is representable on purpose: the area resolver
//! has to tell "empty" apart from "unknown".

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of an [`Area`](crate::area::Area), unique within the area registry.
    AreaId
);

define_id!(
    /// Identifier of a [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Globally unique `domain.object_id` identifier of an [`Entity`](crate::entity::Entity).
    EntityId
);

impl EntityId {
    /// Functional category prefix, e.g. `light` for `light.kitchen_main`.
    ///
    /// An identifier without a dot is its own domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(domain, _)| domain)
    }
}
