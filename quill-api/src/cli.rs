use crate::config::ApiConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quill-api")]
#[command(about = "HTTP API for the quill writing assistant")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/quill/api.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding [server] host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding [server] port and PORT
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Command-line flags win over the file and environment.
    pub fn apply(&self, config: &mut ApiConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
