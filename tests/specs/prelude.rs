// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! `check("links")` runs one check, `cli()` runs all of them. Both build a
//! `sitelint check` command and finish with `passes()`, `fails()` or
//! `exits(code)`. After `.json()` the same calls return the parsed output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

/// Returns a Command configured to run the sitelint binary
pub fn sitelint_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sitelint"))
}

/// Run only the named check
pub fn check(name: &str) -> Run<Text> {
    Run::new(Some(name))
}

/// Run every check
pub fn cli() -> Run<Text> {
    Run::new(None)
}

/// Output mode markers
pub struct Text;
pub struct Json;

/// A `sitelint check` invocation under construction
pub struct Run<Mode = Text> {
    only: Option<String>,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

impl<Mode> Run<Mode> {
    /// Run inside a fixture site from `tests/fixtures/`
    pub fn on(self, fixture_name: &str) -> Self {
        self.pwd(fixture(fixture_name))
    }

    /// Run inside an arbitrary directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn command(&self, json: bool) -> Command {
        let mut cmd = sitelint_cmd();
        cmd.arg("check");
        if let Some(name) = &self.only {
            cmd.arg(format!("--{}", name));
        }
        if json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.envs(self.envs.iter().map(|(k, v)| (k, v)));
        cmd
    }
}

impl Run<Text> {
    fn new(only: Option<&str>) -> Self {
        Self {
            only: only.map(String::from),
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    /// Switch to JSON output
    pub fn json(self) -> Run<Json> {
        Run {
            only: self.only,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        RunAssert::expect(self.command(false), Some(0))
    }

    pub fn fails(self) -> RunAssert {
        RunAssert::expect(self.command(false), None)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        RunAssert::expect(self.command(false), Some(code))
    }
}

impl Run<Json> {
    pub fn passes(self) -> JsonOutput {
        let run = RunAssert::expect(self.command(true), Some(0));
        JsonOutput::new(&run.output.stdout, self.only)
    }

    pub fn fails(self) -> JsonOutput {
        let run = RunAssert::expect(self.command(true), None);
        JsonOutput::new(&run.output.stdout, self.only)
    }
}

/// Finished run, for chaining assertions on its output
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Run `cmd`. `Some(code)` requires that exit code; `None` requires a
    /// non-zero exit.
    fn expect(mut cmd: Command, code: Option<i32>) -> Self {
        let output = cmd.output().expect("command should run");
        let ok = match code {
            Some(code) => output.status.code() == Some(code),
            None => !output.status.success(),
        };
        assert!(
            ok,
            "expected exit {}, got {:?}\nstdout: {}\nstderr: {}",
            code.map_or("non-zero".to_string(), |c| c.to_string()),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        Self { output }
    }

    fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stderr equals expected (with diff on failure)
    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout lacks {:?}:\n{}", needle, stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout has {:?}:\n{}", needle, stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr lacks {:?}:\n{}", needle, stderr);
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(!stderr.contains(needle), "stderr has {:?}:\n{}", needle, stderr);
        self
    }
}

/// Parsed JSON output.
///
/// When a single check was selected, the accessors below read that check's
/// entry in `checks`.
pub struct JsonOutput {
    root: Value,
    only: Option<String>,
}

impl JsonOutput {
    fn new(stdout: &[u8], only: Option<String>) -> Self {
        let root = serde_json::from_slice(stdout).expect("valid JSON");
        Self { root, only }
    }

    /// Whole document
    pub fn value(&self) -> &Value {
        &self.root
    }

    fn check(&self) -> &Value {
        let name = self.only.as_deref().expect("run selects a single check");
        self.root["checks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == name)
            .unwrap_or_else(|| panic!("check '{}' not in output", name))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.check().get(key)
    }

    pub fn require(&self, key: &str) -> &Value {
        self.get(key)
            .unwrap_or_else(|| panic!("expected '{}' in check JSON", key))
    }

    pub fn violations(&self) -> &[Value] {
        self.get("violations")
            .and_then(|v| v.as_array())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn violations_of_type(&self, vtype: &str) -> Vec<&Value> {
        self.violations()
            .iter()
            .filter(|v| v["type"] == vtype)
            .collect()
    }

    pub fn has_violation(&self, vtype: &str) -> bool {
        !self.violations_of_type(vtype).is_empty()
    }

    pub fn require_violation(&self, vtype: &str) -> &Value {
        self.violations_of_type(vtype)
            .first()
            .copied()
            .unwrap_or_else(|| panic!("expected violation of type '{}'", vtype))
    }
}

/// Path to a site under `tests/fixtures/`
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// A minimal entry page that passes strict and loose validation.
pub const GOOD_INDEX: &str = "<!DOCTYPE html>
<html>
<head><title>Home</title></head>
<body>
<h1>Welcome</h1>
<p>This page has enough content to count.</p>
</body>
</html>
";

/// Site with `sitelint.toml` and a passing `index.html`
pub fn default_project() -> Project {
    let temp = Project::empty();
    temp.file("sitelint.toml", "version = 1\n");
    temp.file("index.html", GOOD_INDEX);
    temp
}

/// Temporary site directory.
///
/// ```ignore
/// let temp = default_project();
/// temp.file("about.html", "<a href=\"gone.html\">x</a>");
/// check("links").pwd(temp.path()).fails();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write sitelint.toml, prefixing `version = 1` unless a version is given
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("sitelint.toml", &content);
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        self.bytes(path, content.as_bytes());
    }

    /// Write raw bytes, for pages that are not valid UTF-8
    pub fn bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

/// Names of the checks in JSON output, in order
pub fn check_names(json: &Value) -> Vec<&str> {
    json["checks"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect()
}
