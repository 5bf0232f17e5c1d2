use super::backend::StorageBackend;
use crate::error::{Result, StockError, StorageAction};
use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File-backed storage: one delimited text file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> StockError {
        StockError::storage(StorageAction::Write, self.location(), source)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(|e| self.write_err(e))?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inventory".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

fn write_file(path: &Path, text: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<String>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Inventory file does not exist yet");
                return Ok(None);
            }
            Err(e) => return Err(StockError::storage(StorageAction::Read, self.location(), e)),
        };

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| StockError::storage(StorageAction::Read, self.location(), e))?;
        Ok(Some(text))
    }

    fn write(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            self.ensure_dir(parent)?;
        }

        // Write to a sibling temp file, then rename over the target.
        let tmp = self.tmp_path();
        if let Err(e) = write_file(&tmp, text) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_err(e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_err(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
