//! Registration wire protocol: newline-delimited JSON, one request per line,
//! one response per request.

use cornice_common::SizePolicy;
use serde::{Deserialize, Serialize};

/// Version of the registration protocol this panel speaks.
pub const GATEWAY_PROTOCOL_VERSION: u32 = 1;

/// Requests a client may send.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GatewayRequest {
    /// Offer an applet for attachment. `window` is the native handle of the
    /// client's already-created window; `width`/`height` are the requested
    /// dimensions, interpreted according to `size_policy`.
    #[serde(rename = "add_applet")]
    AddApplet {
        name: String,
        uid: String,
        window: u64,
        width: i32,
        height: i32,
        size_policy: SizePolicy,
    },
}

/// Responses the panel sends back.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum GatewayResponse {
    #[serde(rename = "ack")]
    Ack { accepted: bool, uid: String },

    #[serde(rename = "error")]
    Error { message: String },
}
