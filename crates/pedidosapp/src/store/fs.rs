use super::{decode, encode, DataStore};
use crate::error::{PedidosError, Result};
use crate::model::Collection;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "pedidos.json";

/// The backing document on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/pedidos.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(PedidosError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("pedidos");
        self.dir().join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        self.ensure_dir()?;

        // The target only ever sees a rename of a fully written file.
        let tmp = self.tmp_path();
        let written = File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(PedidosError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn init(&mut self) -> Result<()> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "backing file present");
            return Ok(());
        }
        self.write_atomic(&encode(&Collection::default())?)?;
        info!(path = %self.path.display(), "initialized empty pedidos file");
        Ok(())
    }

    fn load(&self) -> Result<Collection> {
        let content = fs::read_to_string(&self.path).map_err(PedidosError::Io)?;
        decode(&content)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.write_atomic(&encode(collection)?)?;
        debug!(
            path = %self.path.display(),
            pedidos = collection.pedidos.len(),
            "saved pedidos"
        );
        Ok(())
    }
}
