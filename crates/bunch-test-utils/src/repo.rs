//! [`TestRepo`] builder for bunch switch scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working tree with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use bunch_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write("src/app.conf", "base");
/// repo.write("src/app.conf.dev", "dev");
/// repo.write_history(&["prod", "dev"]);
/// repo.assert_file_contains("src/app.conf.dev", "dev");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Absolute path of `rel` below the canonicalized root, matching the
    /// paths a switch reports in its change set.
    pub fn canonical(&self, rel: &str) -> PathBuf {
        fs::canonicalize(self.root()).unwrap().join(rel)
    }

    /// Initialise the directory as a real git repository with a committer
    /// identity and one commit holding the current tree.
    pub fn init_git(&self) -> git2::Repository {
        crate::git::real_git_repo_with_commit(self.root())
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestRepo::write: {}: {e}", path.display()));
    }

    /// Create a directory at `rel`.
    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).unwrap();
    }

    /// Write the `.bunch` rule-history file, one line per entry.
    pub fn write_history(&self, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        self.write(".bunch", &content);
    }

    /// Read `rel` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestRepo::read: {}: {e}", path.display()))
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the repo root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
