//! # Configuration
//!
//! Pedidos configuration is managed by [`confique`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: flags of the `pedidos` binary, applied on top of the result.
//! 2. **Environment variables**: `PEDIDOS_BIND`, `PEDIDOS_DATA_DIR`, etc.
//! 3. **Config file**: `--config <path>`, or `pedidos.toml` in the working directory.
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `bind` | `0.0.0.0:3000` | Listen address |
//! | `data_dir` | `data` | Directory of the backing document |
//! | `data_file` | `pedidos.json` | Backing document name inside `data_dir` |
//! | `uploads_dir` | `uploads` | Upload area, served under `/uploads` |
//! | `public_dir` | `public` | Static front end, served for every other path |
//! | `max_upload_bytes` | `26214400` | Request body limit; `0` removes it |
//! | `log_json` | `false` | Emit logs as JSON lines |

use crate::error::{PedidosError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "pedidos.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PedidosConfig {
    /// Address the HTTP server listens on.
    #[config(env = "PEDIDOS_BIND", default = "0.0.0.0:3000")]
    pub bind: String,

    /// Directory holding the backing document.
    #[config(env = "PEDIDOS_DATA_DIR", default = "data")]
    pub data_dir: PathBuf,

    #[config(env = "PEDIDOS_DATA_FILE", default = "pedidos.json")]
    pub data_file: String,

    /// Where receipts are written and served from.
    #[config(env = "PEDIDOS_UPLOADS_DIR", default = "uploads")]
    pub uploads_dir: PathBuf,

    /// Static files served for any path the API does not claim.
    #[config(env = "PEDIDOS_PUBLIC_DIR", default = "public")]
    pub public_dir: PathBuf,

    /// Largest accepted request body. `0` means unlimited.
    #[config(env = "PEDIDOS_MAX_UPLOAD_BYTES", default = 26214400)]
    pub max_upload_bytes: usize,

    #[config(env = "PEDIDOS_LOG_JSON", default = false)]
    pub log_json: bool,
}

impl Default for PedidosConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            data_dir: PathBuf::from("data"),
            data_file: "pedidos.json".to_string(),
            uploads_dir: PathBuf::from("uploads"),
            public_dir: PathBuf::from("public"),
            max_upload_bytes: 25 * 1024 * 1024,
            log_json: false,
        }
    }
}

impl PedidosConfig {
    /// Load from the environment and a config file.
    ///
    /// An explicit `file` must exist; the default `pedidos.toml` is optional.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let builder = Self::builder().env();
        let builder = match file {
            Some(path) => {
                if !path.is_file() {
                    return Err(PedidosError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                builder.file(path)
            }
            None => builder.file(DEFAULT_CONFIG_FILE),
        };
        builder
            .load()
            .map_err(|e| PedidosError::Config(e.to_string()))
    }

    /// Full path of the backing document.
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }
}
