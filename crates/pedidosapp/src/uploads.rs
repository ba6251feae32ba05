//! # Receipt Uploads
//!
//! A create request may carry one file, the receipt ("comprobante"). Its bytes are
//! written to the upload area under a fresh name and the record gets a
//! `comprobanteUrl` pointing at the public retrieval path:
//!
//! ```text
//! uploads/
//! └── 1718000000000-5f0c…e1.png      ->  "/uploads/1718000000000-5f0c…e1.png"
//! ```
//!
//! Names are `<unix millis>-<random>` plus the original file's extension, so two
//! uploads of `foto.png` never collide. Content is not inspected: any type and size
//! the HTTP layer lets through is stored as-is.
//!
//! This module never touches the store; it only produces the value create consumes.

use crate::error::{PedidosError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// URL prefix under which stored uploads are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// A file written to the upload area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub filename: String,
    pub path: PathBuf,
    pub public_path: String,
}

pub struct UploadArea {
    dir: PathBuf,
}

impl UploadArea {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn init(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(PedidosError::Io)?;
        }
        Ok(())
    }

    /// Write `bytes` under a new collision-resistant name.
    pub fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredUpload> {
        self.init()?;
        let filename = stored_filename(original_name, Utc::now(), Uuid::new_v4());
        let path = self.dir.join(&filename);
        fs::write(&path, bytes).map_err(PedidosError::Io)?;
        debug!(file = %filename, bytes = bytes.len(), "stored upload");

        Ok(StoredUpload {
            public_path: public_path(&filename),
            filename,
            path,
        })
    }
}

pub fn public_path(filename: &str) -> String {
    format!("{}/{}", PUBLIC_PREFIX, filename)
}

pub fn stored_filename(original_name: &str, now: DateTime<Utc>, random: Uuid) -> String {
    format!(
        "{}-{}{}",
        now.timestamp_millis(),
        random.simple(),
        extension(original_name)
    )
}

/// Extension of the last path component, dot included, or "" when there is none.
/// Dotfiles like `.env` have no extension.
pub fn extension(original_name: &str) -> &str {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    if base == ".." {
        return "";
    }
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[idx..],
        _ => "",
    }
}
