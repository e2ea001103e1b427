use crate::core::Storage;
use crate::utils::error::{DealError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let display_path = full_path.display().to_string();
        let to_write_error = |source: std::io::Error| DealError::ReportWriteError {
            path: display_path.clone(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }

        fs::write(&full_path, data).map_err(to_write_error)?;
        Ok(display_path)
    }
}
