use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("applet spawn failed: {0}")]
    Spawn(String),

    #[error("duplicate applet uid: {0}")]
    DuplicateUid(String),

    #[error("bad applet key: {0}")]
    BadDescriptor(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway bind failed: {0}")]
    Bind(String),

    #[error("gateway protocol error: {0}")]
    Protocol(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CorniceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
