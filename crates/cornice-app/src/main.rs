mod binding;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use cornice_common::{Event, EventBus};
use cornice_config::ReloadManager;
use cornice_gateway::Gateway;
use cornice_host::{platform, AppletManager};

// Registry and layout state are only ever touched from this one task, so the
// runtime stays single-threaded.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("cornice=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "cornice=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("cornice v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = match &args.config {
        Some(path) => PathBuf::from(path),
        None => match cornice_config::default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("cannot determine config path: {e}");
                std::process::exit(1);
            }
        },
    };

    let (mut current, mut config_rx) = ReloadManager::start(config_path).await;
    tracing::info!(
        "config loaded ({} applets, orientation {})",
        current.panel.applets.len(),
        current.panel.orientation
    );

    let bus = EventBus::new(64);
    let (tray, spawner) = platform::create_backend();
    let mut manager = AppletManager::new(tray, spawner, bus.sender());
    binding::apply_initial(&mut manager, &current);

    if args.no_gateway || !current.gateway.enabled {
        tracing::info!("external registration gateway disabled");
    } else {
        let socket = args
            .socket
            .as_deref()
            .map(PathBuf::from)
            .or_else(|| {
                if current.gateway.socket.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(&current.gateway.socket))
                }
            })
            .unwrap_or_else(cornice_gateway::default_socket_path);

        match Gateway::bind(&socket) {
            Ok(gateway) => {
                tokio::spawn(gateway.run(bus.sender()));
            }
            Err(e) => {
                if current.gateway.required {
                    tracing::error!("{e}");
                    std::process::exit(1);
                }
                tracing::warn!("external registration disabled: {e}");
            }
        }
    }

    let mut events_rx = bus.subscribe();

    tracing::info!("entering event loop");
    loop {
        tokio::select! {
            changed = config_rx.changed() => {
                if changed.is_err() {
                    tracing::info!("config channel closed");
                    break;
                }
                let new = config_rx.borrow_and_update().clone();
                binding::apply_delta(&mut manager, &current, &new);
                current = new;
                bus.publish(Event::ConfigReloaded);
            }

            event = events_rx.recv() => {
                match event {
                    Ok(Event::AppletEmbedded(uid)) => {
                        tracing::info!("applet {uid} embedded");
                    }
                    Ok(Event::RegistrationOffered { uid, accepted }) => {
                        tracing::info!("registration offer for {uid} (accepted: {accepted})");
                    }
                    Ok(Event::Shutdown) => break,
                    Ok(_) => {}
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("event bus lagged by {n} events");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }

            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    tracing::info!("shutdown complete");
}
