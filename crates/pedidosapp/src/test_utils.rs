use crate::api::PedidosApi;
use crate::store::fs::FileStore;
use crate::uploads::UploadArea;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub api: Arc<PedidosApi<FileStore>>,
    pub data_file: PathBuf,
    pub uploads_dir: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// A file-backed api in a fresh temp dir, already initialized.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("data").join("pedidos.json");
        let uploads_dir = temp_dir.path().join("uploads");
        let api = PedidosApi::new(
            FileStore::new(data_file.clone()),
            UploadArea::new(uploads_dir.clone()),
        );
        api.init().expect("failed to init store");
        Self {
            _temp_dir: temp_dir,
            api: Arc::new(api),
            data_file,
            uploads_dir,
        }
    }
}
