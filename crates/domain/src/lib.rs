//! # autoarea-domain
//!
//! Pure domain model for the autoarea system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Areas** (logical groupings such as rooms)
//! - Define **Devices** (physical units that expose entities)
//! - Define **Entities** (addressable state holders, filtered by domain and device class)
//! - Define **Issues** (deduplicated configuration diagnostics)
//! - Define the **`DeviceInfo`** descriptor and name normalisation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod text;

pub mod area;
pub mod device;
pub mod device_info;
pub mod domains;
pub mod entity;
pub mod issue;

/// Integration domain owning issues and device descriptors.
pub const DOMAIN: &str = "auto_areas";

/// Product name used for the logical device of every area controller.
pub const NAME: &str = "Auto Areas";

/// Version reported as the logical device model.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
