use clap::Parser;
use pedidosapp::config::PedidosConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pedidos", bin_name = "pedidos", version)]
#[command(about = "Order records with receipt uploads over HTTP", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./pedidos.toml when present)
    #[arg(short, long, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8080
    #[arg(short, long, help_heading = "Options")]
    pub bind: Option<String>,

    /// Directory holding pedidos.json
    #[arg(long, value_name = "DIR", help_heading = "Storage")]
    pub data_dir: Option<PathBuf>,

    /// Directory receipts are written to
    #[arg(long, value_name = "DIR", help_heading = "Storage")]
    pub uploads_dir: Option<PathBuf>,

    /// Directory of static files served at /
    #[arg(long, value_name = "DIR", help_heading = "Storage")]
    pub public_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, help_heading = "Options")]
    pub log_json: bool,
}

impl Cli {
    /// Flags win over every other configuration layer.
    pub fn apply(&self, config: &mut PedidosConfig) {
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(dir) = &self.uploads_dir {
            config.uploads_dir = dir.clone();
        }
        if let Some(dir) = &self.public_dir {
            config.public_dir = dir.clone();
        }
        if self.log_json {
            config.log_json = true;
        }
    }
}
