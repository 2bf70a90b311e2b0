//! Applet lifecycle management for the cornice panel.
//!
//! The [`AppletManager`] reconciles an ordered list of applet descriptors
//! against the live set of embedded applet windows: it creates applets that
//! are missing, reorders the ones that exist, and destroys the ones no longer
//! wanted, without ever restarting an applet that is still listed. Property
//! changes (size, offset, orientation) fan out to every live applet.
//!
//! The out-of-process embedding machinery and the toolkit container live
//! behind the [`AppletSpawner`], [`AppletHandle`], and [`SlotTray`] traits so
//! the reconciliation logic is testable with in-memory fakes.

pub mod descriptor;
pub mod manager;
pub mod platform;
pub mod proxy;
pub mod registry;
pub mod tray;

pub use descriptor::AppletDescriptor;
pub use manager::AppletManager;
pub use proxy::{AppletHandle, AppletSpawner, Capabilities};
pub use registry::{AppletEntry, AppletRegistry};
pub use tray::SlotTray;
