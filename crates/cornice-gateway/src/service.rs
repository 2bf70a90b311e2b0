//! Registration socket: accept connections, parse offers, acknowledge.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use cornice_common::{new_correlation_id, Event, GatewayError};

use crate::protocol::{GatewayRequest, GatewayResponse, GATEWAY_PROTOCOL_VERSION};

/// The session-local default socket path.
pub fn default_socket_path() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cornice")
        .join("gateway.sock")
}

/// Listens for third-party applet registrations.
pub struct Gateway {
    listener: UnixListener,
    path: PathBuf,
}

impl Gateway {
    /// Bind the registration socket. A stale socket file from a previous run
    /// is removed first. Failure here disables external registration; the
    /// caller decides whether that is fatal for the process.
    pub fn bind(path: &Path) -> Result<Self, GatewayError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GatewayError::Bind(format!("{}: {e}", parent.display())))?;
        }
        if path.exists() {
            std::fs::remove_file(path)
                .map_err(|e| GatewayError::Bind(format!("{}: {e}", path.display())))?;
        }

        let listener = UnixListener::bind(path)
            .map_err(|e| GatewayError::Bind(format!("{}: {e}", path.display())))?;

        info!(
            "registration gateway v{GATEWAY_PROTOCOL_VERSION} listening on {}",
            path.display()
        );
        Ok(Self {
            listener,
            path: path.to_path_buf(),
        })
    }

    pub fn socket_path(&self) -> &Path {
        &self.path
    }

    /// Accept loop. One task per connection; runs until the process exits.
    pub async fn run(self, events: broadcast::Sender<Event>) {
        loop {
            match self.listener.accept().await {
                Ok((stream, _addr)) => {
                    let events = events.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, events).await;
                    });
                }
                Err(e) => {
                    warn!("gateway accept error: {e}");
                }
            }
        }
    }
}

async fn handle_connection(stream: UnixStream, events: broadcast::Sender<Event>) {
    let conn = new_correlation_id();
    debug!(%conn, "gateway client connected");

    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&line, &conn, &events);
        let mut json = serde_json::to_string(&response).unwrap();
        json.push('\n');
        if writer.write_all(json.as_bytes()).await.is_err() {
            break;
        }
    }

    debug!(%conn, "gateway client disconnected");
}

/// Handle one request line.
///
/// Version 1 accepts a well-formed offer and acknowledges it without
/// attaching the window; the panel is told through
/// [`Event::RegistrationOffered`]. Attachment and size negotiation by policy
/// tag are the version 2 extension.
pub fn handle_line(
    line: &str,
    conn: &str,
    events: &broadcast::Sender<Event>,
) -> GatewayResponse {
    match serde_json::from_str::<GatewayRequest>(line) {
        Ok(GatewayRequest::AddApplet {
            name,
            uid,
            window,
            width,
            height,
            size_policy,
        }) => {
            info!(
                conn,
                %name,
                %uid,
                window,
                width,
                height,
                ?size_policy,
                "applet registration offered"
            );
            let _ = events.send(Event::RegistrationOffered {
                uid: uid.clone(),
                accepted: true,
            });
            GatewayResponse::Ack {
                accepted: true,
                uid,
            }
        }
        Err(e) => {
            warn!(conn, "invalid registration request: {e}");
            GatewayResponse::Error {
                message: e.to_string(),
            }
        }
    }
}
