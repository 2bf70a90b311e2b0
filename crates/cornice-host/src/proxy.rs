//! Trait boundary to the out-of-process applet proxy.
//!
//! A spawner turns a descriptor into an embeddable handle; the handle starts
//! the applet, receives property updates, and fires a one-shot notification
//! when the applet's window finishes embedding. Real implementations wrap the
//! platform's cross-process embedding protocol; tests use in-memory fakes.

use cornice_common::{HostError, Orientation, PanelGeometry};

use crate::descriptor::AppletDescriptor;

/// Which panel properties an applet implements.
///
/// External applets are not required to implement every property; the fan-out
/// skips the ones they lack instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub size: bool,
    pub offset: bool,
    pub orientation: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            size: true,
            offset: true,
            orientation: true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// The manager's reference to one applet's embeddable window.
pub trait AppletHandle {
    /// Start the out-of-process applet. Returns immediately; the window
    /// embeds itself at an unspecified later time and fires the embedded
    /// notification. There is no cancellation for an in-flight start.
    fn execute(&mut self);

    fn capabilities(&self) -> Capabilities;

    fn set_size(&mut self, size: u32);

    fn set_offset(&mut self, offset: u32);

    fn set_orientation(&mut self, orientation: Orientation);

    /// Register the fire-once embedded notification. Called at most once per
    /// handle, before `execute`.
    fn on_embedded(&mut self, notify: Box<dyn FnOnce() + Send>);

    /// Tear down the applet's window and process resources.
    fn destroy(&mut self);
}

/// Produces embeddable handles from applet descriptors.
pub trait AppletSpawner {
    /// Create a not-yet-running applet for `descriptor`, initialized with the
    /// panel's current geometry. Failure is per-applet and recoverable: the
    /// caller skips the entry and continues.
    fn create(
        &mut self,
        descriptor: &AppletDescriptor,
        geometry: &PanelGeometry,
    ) -> Result<Box<dyn AppletHandle>, HostError>;
}
