//! The AppletManager reconciles the configured applet list against the live
//! applet set and fans panel property changes out to every applet.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use cornice_common::{Event, Orientation, PanelGeometry, SlotId};

use crate::descriptor::AppletDescriptor;
use crate::proxy::AppletSpawner;
use crate::registry::{AppletEntry, AppletRegistry};
use crate::tray::SlotTray;

/// Owns the applet registry, the panel geometry, and the trait objects for
/// the slot container and the applet proxy. All mutation happens on the
/// panel's event-loop thread.
pub struct AppletManager {
    tray: Box<dyn SlotTray>,
    spawner: Box<dyn AppletSpawner>,
    registry: AppletRegistry,
    geometry: PanelGeometry,
    /// Generation number of the current reconciliation pass. Entries whose
    /// `seen_pass` lags behind after a pass are swept.
    pass: u64,
    next_slot: u64,
    events: broadcast::Sender<Event>,
}

impl AppletManager {
    pub fn new(
        tray: Box<dyn SlotTray>,
        spawner: Box<dyn AppletSpawner>,
        events: broadcast::Sender<Event>,
    ) -> Self {
        Self {
            tray,
            spawner,
            registry: AppletRegistry::new(),
            geometry: PanelGeometry::default(),
            pass: 0,
            next_slot: 0,
            events,
        }
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn registry(&self) -> &AppletRegistry {
        &self.registry
    }

    pub fn applet_count(&self) -> usize {
        self.registry.len()
    }

    pub fn uids(&self) -> Vec<String> {
        self.registry.uids()
    }

    /// Bring the live applet set and its visual order into agreement with the
    /// configured list.
    ///
    /// Applets already running are reused and reordered; missing ones are
    /// created; everything no longer listed is destroyed. Malformed entries
    /// and creation failures are logged and skipped, so one broken applet
    /// never takes down the rest of the pass. A uid listed twice keeps a
    /// single live applet at the last listed position.
    pub fn refresh(&mut self, applet_list: &[String]) {
        if !self.tray.is_realized() {
            debug!("tray not realized, deferring applet refresh");
            return;
        }

        if applet_list.is_empty() {
            debug!("no applets configured");
            return;
        }

        // Mark phase: everything created or matched below carries this pass
        // number; entries left on an older pass are stale.
        self.pass += 1;
        let pass = self.pass;

        let mut index = 0;
        for raw in applet_list {
            let descriptor = match AppletDescriptor::parse(raw) {
                Ok(d) => d,
                Err(e) => {
                    warn!("{e}");
                    continue;
                }
            };

            if !self.registry.contains(&descriptor.uid) {
                if let Err(e) = self.create_applet(&descriptor) {
                    warn!("skipping applet {}: {e}", descriptor.uid);
                    continue;
                }
            }

            let Some(entry) = self.registry.get_mut(&descriptor.uid) else {
                continue;
            };

            self.tray.reorder(entry.window_slot, index);
            index += 1;
            self.tray.reorder(entry.spinner_slot, index);
            index += 1;

            entry.seen_pass = pass;
        }

        // Sweep: destroy everything the list no longer mentions.
        for mut entry in self.registry.take_stale(pass) {
            debug!("removing applet {}", entry.uid);
            entry.handle.destroy();
            self.tray.remove(entry.window_slot);
            self.tray.remove(entry.spinner_slot);
            let _ = self.events.send(Event::AppletRemoved(entry.uid));
        }
    }

    /// Store the panel size and fan it out to every applet that scales.
    pub fn set_size(&mut self, size: u32) {
        self.geometry.size = size;
        self.registry.for_each_handle(|handle| {
            if handle.capabilities().size {
                handle.set_size(size);
            }
        });
    }

    /// Store the icon offset and fan it out to every applet that supports it.
    pub fn set_offset(&mut self, offset: u32) {
        self.geometry.offset = offset;
        self.registry.for_each_handle(|handle| {
            if handle.capabilities().offset {
                handle.set_offset(offset);
            }
        });
    }

    /// Store the orientation, retarget the tray's stacking axis, then fan the
    /// new orientation out. The axis changes first so applets querying the
    /// tray during their own update observe the new stacking direction.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.geometry.orientation = orientation;
        self.tray.set_axis(orientation.axis());
        self.registry.for_each_handle(|handle| {
            if handle.capabilities().orientation {
                handle.set_orientation(orientation);
            }
        });
    }

    fn alloc_slot(&mut self) -> SlotId {
        let slot = SlotId(self.next_slot);
        self.next_slot += 1;
        slot
    }

    fn create_applet(&mut self, descriptor: &AppletDescriptor) -> Result<(), cornice_common::HostError> {
        let mut handle = self.spawner.create(descriptor, &self.geometry)?;

        let uid = descriptor.uid.clone();
        let events = self.events.clone();
        handle.on_embedded(Box::new(move || {
            let _ = events.send(Event::AppletEmbedded(uid));
        }));

        let window_slot = self.alloc_slot();
        let spinner_slot = self.alloc_slot();
        self.tray.append(window_slot);
        self.tray.append(spinner_slot);

        handle.execute();

        self.registry
            .insert(AppletEntry {
                uid: descriptor.uid.clone(),
                handle,
                window_slot,
                spinner_slot,
                seen_pass: self.pass,
            })
            .expect("registry invariant violated: duplicate applet uid");

        let _ = self.events.send(Event::AppletAdded(descriptor.uid.clone()));
        Ok(())
    }
}
