// tests/common/fixtures.rs
//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Four readings over three days; 2014-02-13 and 2014-02-22 share a bucket.
#[allow(dead_code)]
pub const READINGS: &str = r#"{"2014-02-13T06:20:00": 10.0}
{"2014-02-13T13:50:00": 30.0}
{"2014-02-22T08:00:00": 20.0}
{"2014-02-14T23:10:00": -2.5}
"#;

/// Same as [`READINGS`] with a broken second line.
#[allow(dead_code)]
pub const READINGS_WITH_GARBAGE: &str = r#"{"2014-02-13T06:20:00": 10.0}
not json at all
{"2014-02-22T08:00:00": 20.0}
"#;

/// Readings spread over two months of one year.
#[allow(dead_code)]
pub const TWO_MONTHS: &str = r#"{"2014-01-05T00:00:00": 1.0}
{"2014-01-20T00:00:00": 3.0}
{"2014-02-01T00:00:00": 10.0}
"#;

/// Scratch directory holding input files for one test.
#[allow(dead_code)]
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// ファイルを作成
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}
