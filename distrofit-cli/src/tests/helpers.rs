//! Test helpers for writing signals and catalog fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary workspace holding fixture documents.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) const GAMER_SIGNALS: &str = r#"{
    "topics": ["games"],
    "sentiment": "positive",
    "experience_level": "mid",
    "keywords": ["gaming", "vulkan"],
    "tech_stack": ["c++", "cuda"]
}"#;

pub(super) const SMALL_CATALOG: &str = r#"[
    {"id": "steady", "name": "Steady OS", "rolling": 2, "easy": 8, "diy": 2,
     "performance": 4, "dev_focus": 4, "popularity": 2400, "trend": "stable"},
    {"id": "speedy", "name": "Speedy Linux", "rolling": 8, "easy": 5, "diy": 5,
     "performance": 9, "dev_focus": 5, "popularity": 900, "trend": "rising"}
]"#;
