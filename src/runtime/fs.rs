//! File system operations (read, write, directory).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("prefs.json");

        assert!(!runtime.exists(&file_path));

        runtime.write(&file_path, b"{\"theme\":\"dark\"}").unwrap();
        assert!(runtime.exists(&file_path));

        let content = runtime.read_to_string(&file_path).unwrap();
        assert_eq!(content, "{\"theme\":\"dark\"}");
    }

    #[test]
    fn test_real_runtime_dir_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("folio/nested");

        runtime.create_dir_all(&sub_dir).unwrap();
        assert!(runtime.exists(&sub_dir));

        // Creating an existing directory is not an error
        runtime.create_dir_all(&sub_dir).unwrap();
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = runtime.read_to_string(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));

        let nested = dir.path().join("no/such/dir/file.json");
        assert!(runtime.write(&nested, b"x").is_err());
    }
}
