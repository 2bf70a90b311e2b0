//! External applet registration for the cornice panel.
//!
//! Third-party processes offer an already-running window to the panel over a
//! session-local Unix socket speaking newline-delimited JSON. Protocol
//! version 1 validates and acknowledges offers and surfaces them as panel
//! events; actually embedding the offered window (with size negotiation by
//! policy tag) is the version 2 extension and is not yet performed.

pub mod protocol;
pub mod service;

pub use protocol::{GatewayRequest, GatewayResponse, GATEWAY_PROTOCOL_VERSION};
pub use service::{default_socket_path, Gateway};
