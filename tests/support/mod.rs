#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command as AssertCommand;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct CliFixture {
    _tmp: TempDir,
    pub project: PathBuf,
    config_dir: PathBuf,
}

impl CliFixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        let config_dir = tmp.path().join("config");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        Self {
            _tmp: tmp,
            project,
            config_dir,
        }
    }

    pub fn linefix_cmd(&self) -> AssertCommand {
        let mut cmd = cargo_bin_cmd!("linefix");
        cmd.current_dir(&self.project)
            .env("LINEFIX_CONFIG_DIR", &self.config_dir);
        cmd
    }

    pub fn run_stdout(&self, args: &[&str]) -> String {
        let out = self.linefix_cmd().args(args).output().unwrap();
        assert!(
            out.status.success(),
            "linefix {:?} failed: stdout={:?} stderr={:?}",
            args,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
        String::from_utf8(out.stdout).unwrap()
    }

    /// `rel` may use either separator, like the built-in target list.
    pub fn path(&self, rel: &str) -> PathBuf {
        let mut p = self.project.clone();
        for part in rel.split(['\\', '/']) {
            p.push(part);
        }
        p
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn read(&self, rel: &str) -> Vec<u8> {
        fs::read(self.path(rel)).unwrap()
    }
}
