use clap::Parser;

/// A desktop panel hosting out-of-process applets.
#[derive(Parser, Debug)]
#[command(name = "cornice", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Registration socket path override.
    #[arg(long)]
    pub socket: Option<String>,

    /// Disable the external registration gateway.
    #[arg(long)]
    pub no_gateway: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
