//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated working directory
//! - Writing plain and gzip input files
//! - Executing the CLI and reading back its outputs

use anyhow::{Context, Result};
use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use hitsplit_testing::TestWorld;
///
/// let world = TestWorld::new().with_input("sessions.json", "");
///
/// let result = world.run(&["sessions.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            cwd: temp_dir.path().to_path_buf(),
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add an environment variable for commands.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a plain-text input file relative to the cwd.
    pub fn with_input(self, name: &str, contents: &str) -> Self {
        let path = self.cwd.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create input directory");
        }
        std::fs::write(&path, contents).expect("Failed to write input file");
        self
    }

    /// Write a gzip-compressed input file relative to the cwd.
    pub fn with_gzip_input(self, name: &str, contents: &str) -> Self {
        let file = std::fs::File::create(self.cwd.join(name)).expect("Failed to create gzip file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(contents.as_bytes())
            .expect("Failed to write gzip input");
        encoder.finish().expect("Failed to finish gzip input");
        self
    }

    /// Configure a CLI command with this test environment's cwd and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.cwd);
        cmd.env_remove("HITSPLIT_CONFIG");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Create a configured command for the `hitsplit` binary.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("hitsplit")
            .map_err(|e| anyhow::anyhow!("Failed to find hitsplit binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the binary with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command()?.args(args).output()?;
        Ok(CliResult::from(output))
    }

    /// Execute the binary feeding `stdin` to it.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let output = self
            .command()?
            .args(args)
            .write_stdin(stdin.to_string())
            .output()?;
        Ok(CliResult::from(output))
    }

    /// Read a file relative to the cwd.
    pub fn read(&self, name: impl AsRef<Path>) -> Result<String> {
        let path = self.cwd.join(name);
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    pub fn exists(&self, name: impl AsRef<Path>) -> bool {
        self.cwd.join(name).exists()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for CliResult {
    fn from(output: std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
