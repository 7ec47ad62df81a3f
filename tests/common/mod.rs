use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("addressbook.db")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The binary pointed at this workspace's database, isolated from any ambient config.
    pub fn addressbook(&self) -> Command {
        let mut cmd = Command::cargo_bin("addressbook").unwrap();
        cmd.current_dir(self.path())
            .env("ADDRESSBOOK_PATH", self.db_path())
            .env_remove("STORAGE_CHOICE")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn create_input(name: &str, email: &str, phone: &str, kind: u8) -> String {
    format!("0\n{name}\n{email}\n{phone}\n{kind}\n")
}
