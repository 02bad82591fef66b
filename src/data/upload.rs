use std::path::Path;

use crate::config::ENDPOINT;
use crate::engine::UploadError;

/// A CSV file read into memory, ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads `path` from disk. The part is named after the file.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn read(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::FileRead(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(file_name_of(path), bytes))
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ENDPOINT.fallback_file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_name_falls_back_for_bare_roots() {
        assert_eq!(file_name_of(Path::new("/data/prices.csv")), "prices.csv");
        assert_eq!(file_name_of(Path::new("/")), "upload.csv");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = PathBuf::from("definitely/not/here.csv");
        // tokio::fs runs the read on a blocking pool, so it needs a runtime
        let rt = tokio::runtime::Runtime::new().unwrap();
        let result = rt.block_on(CsvUpload::read(&path));
        assert!(matches!(result, Err(UploadError::FileRead(msg)) if msg.contains("here.csv")));
    }

    #[test]
    fn reads_file_contents() {
        let dir = std::env::temp_dir().join("price_trend_view_upload_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");
        std::fs::write(&path, "date,price\n2026-01-01,10\n").unwrap();

        let rt = tokio::runtime::Runtime::new().unwrap();
        let upload = rt.block_on(CsvUpload::read(&path)).unwrap();
        assert_eq!(upload.file_name, "series.csv");
        assert_eq!(upload.bytes, b"date,price\n2026-01-01,10\n");
    }
}
