//! [`SecretDir`] for mounting value files in tests.

use std::fs;
use std::path::{Path, PathBuf};

use envget::MapEnv;
use tempfile::TempDir;

/// A temporary directory standing in for a mounted secrets volume.
///
/// # Example
///
/// ```rust
/// use envget_test_utils::SecretDir;
///
/// let secrets = SecretDir::new();
/// let path = secrets.write("db_password", "hunter2\n");
/// assert_eq!(std::fs::read_to_string(path).unwrap(), "hunter2\n");
/// ```
pub struct SecretDir {
    temp_dir: TempDir,
}

impl Default for SecretDir {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` and return the file's path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        self.write_bytes(name, content.as_bytes())
    }

    pub fn write_bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// A path inside the directory that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        assert!(!path.exists(), "{} unexpectedly exists", path.display());
        path
    }

    /// A [`MapEnv`] with `variable` pointing at a freshly written file.
    pub fn env_with_file(&self, variable: &str, name: &str, content: &str) -> MapEnv {
        let path = self.write(name, content);
        MapEnv::new().with(variable, path.display().to_string())
    }
}
