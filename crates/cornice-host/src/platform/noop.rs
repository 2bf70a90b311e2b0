//! No-op backend: an always-realized in-memory tray and a spawner whose
//! applets only log. The embedded notification fires as soon as the applet
//! executes, so the event path stays exercised without a windowing system.

use tracing::debug;

use cornice_common::{Axis, HostError, Orientation, PanelGeometry, SlotId};

use crate::descriptor::AppletDescriptor;
use crate::proxy::{AppletHandle, AppletSpawner, Capabilities};
use crate::tray::SlotTray;

pub struct NoopTray {
    axis: Axis,
    slots: Vec<SlotId>,
}

impl NoopTray {
    pub fn new() -> Self {
        Self {
            axis: Axis::Horizontal,
            slots: Vec::new(),
        }
    }

    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }
}

impl Default for NoopTray {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotTray for NoopTray {
    fn is_realized(&self) -> bool {
        true
    }

    fn append(&mut self, slot: SlotId) {
        self.slots.push(slot);
    }

    fn reorder(&mut self, slot: SlotId, index: usize) {
        let Some(pos) = self.slots.iter().position(|s| *s == slot) else {
            return;
        };
        if pos == index {
            return;
        }
        self.slots.remove(pos);
        let index = index.min(self.slots.len());
        self.slots.insert(index, slot);
    }

    fn remove(&mut self, slot: SlotId) {
        self.slots.retain(|s| *s != slot);
    }

    fn set_axis(&mut self, axis: Axis) {
        debug!("tray axis set to {axis:?}");
        self.axis = axis;
    }

    fn axis(&self) -> Axis {
        self.axis
    }
}

pub struct NoopSpawner;

impl AppletSpawner for NoopSpawner {
    fn create(
        &mut self,
        descriptor: &AppletDescriptor,
        geometry: &PanelGeometry,
    ) -> Result<Box<dyn AppletHandle>, HostError> {
        debug!(
            "creating applet {} from {} at size {}",
            descriptor.uid, descriptor.path, geometry.size
        );
        Ok(Box::new(NoopApplet {
            uid: descriptor.uid.clone(),
            embedded: None,
        }))
    }
}

struct NoopApplet {
    uid: String,
    embedded: Option<Box<dyn FnOnce() + Send>>,
}

impl AppletHandle for NoopApplet {
    fn execute(&mut self) {
        debug!("applet {} started", self.uid);
        // No out-of-process window to wait for; report embedded right away.
        if let Some(notify) = self.embedded.take() {
            notify();
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn set_size(&mut self, size: u32) {
        debug!("applet {} size -> {size}", self.uid);
    }

    fn set_offset(&mut self, offset: u32) {
        debug!("applet {} offset -> {offset}", self.uid);
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        debug!("applet {} orientation -> {orientation}", self.uid);
    }

    fn on_embedded(&mut self, notify: Box<dyn FnOnce() + Send>) {
        self.embedded = Some(notify);
    }

    fn destroy(&mut self) {
        debug!("applet {} destroyed", self.uid);
    }
}
