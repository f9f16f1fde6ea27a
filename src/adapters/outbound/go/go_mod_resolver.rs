use crate::compliance::domain::Module;
use crate::ports::outbound::ModuleResolver;
use crate::shared::error::LicenseError;
use crate::shared::{CancellationToken, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How often a running `go` process is checked for exit or cancellation
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One object of the `go mod download -json` stream
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoModule {
    path: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    dir: String,
    #[serde(default)]
    error: Option<String>,
}

/// GoModResolver adapter running `go mod download -json`
///
/// `go mod download` both materializes every module in the module cache and
/// prints one JSON object per module, so the returned directories exist.
#[derive(Debug, Clone)]
pub struct GoModResolver {
    program: OsString,
}

impl GoModResolver {
    pub fn new() -> Self {
        Self::with_program("go")
    }

    /// Uses `program` in place of `go`, it receives `mod download -json`
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn(&self, project_dir: &Path) -> Result<Child> {
        Command::new(&self.program)
            .args(["mod", "download", "-json"])
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to run `{} mod download -json`: {} (is Go installed?)",
                    self.program.to_string_lossy(),
                    e
                )
            })
    }

    /// Runs the command to completion and returns (status, stdout, stderr)
    ///
    /// The pipes are drained on separate threads so a chatty child cannot
    /// block on a full pipe while we wait for it.
    fn run(&self, project_dir: &Path, cancel: &CancellationToken) -> Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
        let mut child = self.spawn(project_dir)?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = loop {
            if cancel.is_cancelled() {
                // the child may already have exited; nothing to report either way.
                // Reader threads are detached: grandchildren can keep the pipes open.
                let _ = child.kill();
                let _ = child.wait();
                drop((stdout, stderr));
                return Err(LicenseError::Cancelled.into());
            }
            match child.try_wait()? {
                Some(status) => break status,
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        Ok((status, join(stdout)?, join(stderr)?))
    }
}

impl Default for GoModResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleResolver for GoModResolver {
    fn resolve(&self, project_dir: &Path, cancel: &CancellationToken) -> Result<Vec<Module>> {
        cancel.check()?;
        let (status, stdout, stderr) = self.run(project_dir, cancel)?;

        // a failing download still prints per-module errors on stdout
        let decoded = parse_modules(&stdout);
        if let Ok(modules) = &decoded {
            let errors = module_errors(modules);
            if !errors.is_empty() {
                anyhow::bail!("go mod download reported errors:\n  {}", errors.join("\n  "));
            }
        }

        if !status.success() {
            anyhow::bail!(
                "go mod download failed ({}): {}",
                status,
                String::from_utf8_lossy(&stderr).trim()
            );
        }

        Ok(decoded?.into_iter().map(into_module).collect())
    }
}

fn parse_modules(output: &[u8]) -> Result<Vec<GoModule>> {
    serde_json::Deserializer::from_slice(output)
        .into_iter::<GoModule>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("Failed to parse go mod download output: {}", e))
}

fn module_errors(modules: &[GoModule]) -> Vec<String> {
    modules
        .iter()
        .filter_map(|m| {
            m.error
                .as_deref()
                .filter(|e| !e.is_empty())
                .map(|e| format!("{}@{}: {}", m.path, m.version, e))
        })
        .collect()
}

fn into_module(module: GoModule) -> Module {
    let dir = (!module.dir.is_empty()).then(|| PathBuf::from(module.dir));
    Module::new(module.path, module.version, dir)
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("Output reader thread panicked"))?
        .map_err(Into::into)
}
