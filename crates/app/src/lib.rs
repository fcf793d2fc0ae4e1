//! # autoarea-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `AreaRegistry`, `DeviceRegistry`, `EntityRegistry`: read-only registry snapshots
//!   - `IssueReporter`: key-deduplicated issue sink
//!   - `AutomationController`: subordinate behaviour owned by an area
//!   - `HostContext`: the bundle of the above handed to every area
//! - Provide the **use-cases**:
//!   - area resolution with `invalid-area` issue reporting
//!   - entity relevance filtering by area, domain, validity and device class
//!   - the per-area `AutoArea` controller and the `AreaManager`
//! - Provide the **startup signal** that defers initialization until the host is up
//!
//! ## Dependency rule
//! Depends on `autoarea-domain` only (plus `tokio::sync` for the startup signal).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod manager;
pub mod ports;
pub mod services;
pub mod startup;

#[cfg(test)]
pub(crate) mod testing;
