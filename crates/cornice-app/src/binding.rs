//! Binds the four configured panel properties into the applet manager.
//!
//! The config layer hands over whole configs; this module applies them as
//! property sets, calling only the setters whose values actually changed so
//! a reload touching one property does not fan the others out again.

use cornice_config::CorniceConfig;
use cornice_host::AppletManager;

/// Apply every bound property of the initial config.
pub fn apply_initial(manager: &mut AppletManager, config: &CorniceConfig) {
    manager.set_orientation(config.panel.orientation);
    manager.set_size(config.panel.size);
    manager.set_offset(config.panel.offset);
    manager.refresh(&config.panel.applets);
}

/// Apply only the properties that differ between `old` and `new`.
pub fn apply_delta(manager: &mut AppletManager, old: &CorniceConfig, new: &CorniceConfig) {
    if old.panel.orientation != new.panel.orientation {
        manager.set_orientation(new.panel.orientation);
    }
    if old.panel.size != new.panel.size {
        manager.set_size(new.panel.size);
    }
    if old.panel.offset != new.panel.offset {
        manager.set_offset(new.panel.offset);
    }
    if old.panel.applets != new.panel.applets {
        manager.refresh(&new.panel.applets);
    }
}
