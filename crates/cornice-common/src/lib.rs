pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, CorniceError, GatewayError, HostError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id};
pub use types::{Axis, Orientation, PanelGeometry, SizePolicy, SlotId};

pub type Result<T> = std::result::Result<T, CorniceError>;
