//! Platform backends for the slot container and the applet proxy.
//!
//! Cross-process window embedding is platform specific (XEmbed socket/plug on
//! X11); everything above it talks to the [`SlotTray`] and [`AppletSpawner`]
//! traits. The no-op backend keeps the full lifecycle observable for headless
//! runs and unsupported platforms.

pub mod noop;

use crate::proxy::AppletSpawner;
use crate::tray::SlotTray;

/// Create the platform-appropriate container and spawner pair.
pub fn create_backend() -> (Box<dyn SlotTray>, Box<dyn AppletSpawner>) {
    (
        Box::new(noop::NoopTray::new()),
        Box::new(noop::NoopSpawner),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AppletDescriptor;
    use cornice_common::PanelGeometry;

    #[test]
    fn backend_spawner_produces_handles() {
        let (_tray, mut spawner) = create_backend();
        let descriptor = AppletDescriptor::parse("a::1").unwrap();
        let handle = spawner.create(&descriptor, &PanelGeometry::default());
        assert!(handle.is_ok());
    }

    #[test]
    fn backend_tray_is_realized() {
        let (tray, _spawner) = create_backend();
        assert!(tray.is_realized());
    }
}
