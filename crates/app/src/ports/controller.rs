//! Subordinate automation controller port.
//!
//! A concrete automation behaviour (light control, climate, …) layered on
//! top of an area. The owning [`AutoArea`](crate::services::auto_area::AutoArea)
//! holds it exclusively and cascades cleanup into it.

use autoarea_domain::error::AutoAreaError;

/// An automation behaviour owned by a single area controller.
pub trait AutomationController: Send {
    /// Short name used in logs (e.g. `"auto_lights"`).
    fn name(&self) -> &str;

    /// Release everything the controller holds.
    ///
    /// # Errors
    ///
    /// Any error is logged and swallowed by the owner; it never prevents the
    /// owner from finishing its own cleanup.
    fn cleanup(&mut self) -> Result<(), AutoAreaError>;
}
