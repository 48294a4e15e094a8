//! One-shot execution of the assembled script in an external interpreter.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tslister_script::OUTPUT_FILE;

use crate::error::EngineError;

/// Entry-point filename the script is written to inside the work directory.
const ENTRY_FILE: &str = "index.js";

/// Interval between child exit checks while waiting.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The narrow seam behind which the analysis engine sits.
///
/// Takes the assembled script text, returns the JSON document the engine
/// produced. Swapping the external interpreter for an in-process analyzer
/// means implementing this trait; nothing in discovery or caching changes.
pub trait ScriptRunner {
    /// Executes `script` and returns the engine's JSON output.
    fn run(&self, script: &str) -> Result<String, EngineError>;
}

impl<R: ScriptRunner + ?Sized> ScriptRunner for &R {
    fn run(&self, script: &str) -> Result<String, EngineError> {
        (**self).run(script)
    }
}

/// Configuration for [`NodeRunner`].
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Interpreter program to launch (on `PATH` or an absolute path).
    pub program: String,

    /// Hard deadline for one engine run. The child is killed when exceeded.
    pub timeout: Duration,

    /// Parent directory for ephemeral work directories. `None` uses the
    /// system temp directory; tests set this to observe cleanup.
    pub temp_root: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "node".to_string(),
            timeout: Duration::from_secs(60),
            temp_root: None,
        }
    }
}

/// Runs the assembled script with an external interpreter (`node` by default).
///
/// Each run gets a uniquely named ephemeral directory holding the script and
/// the engine's output file. The directory is removed on every exit path,
/// including timeouts and decode failures, via [`tempfile::TempDir`]'s drop.
pub struct NodeRunner {
    config: RunnerConfig,
}

impl NodeRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Waits for `child` to exit, enforcing the configured deadline.
    ///
    /// On timeout the child is killed and reaped before the error returns;
    /// a stuck engine never outlives the call that started it.
    fn wait_with_deadline(&self, child: &mut std::process::Child) -> Result<(), EngineError> {
        let deadline = Instant::now() + self.config.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(_status)) => return Ok(()),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(EngineError::Timeout {
                            timeout: self.config.timeout,
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(source) => return Err(EngineError::Wait { source }),
            }
        }
    }
}

impl Default for NodeRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

impl ScriptRunner for NodeRunner {
    fn run(&self, script: &str) -> Result<String, EngineError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("tslister-");
        let work_dir = match &self.config.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|source| EngineError::WorkDir { source })?;

        std::fs::write(work_dir.path().join(ENTRY_FILE), script)
            .map_err(|source| EngineError::WorkDir { source })?;

        tracing::debug!(
            program = %self.config.program,
            work_dir = %work_dir.path().display(),
            "launching analysis engine"
        );

        let mut child = Command::new(&self.config.program)
            .arg(ENTRY_FILE)
            .current_dir(work_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EngineError::Unavailable {
                program: self.config.program.clone(),
                source,
            })?;

        self.wait_with_deadline(&mut child)?;

        // Exit code is not interpreted; the output file is the contract.
        std::fs::read_to_string(work_dir.path().join(OUTPUT_FILE)).map_err(|_| {
            EngineError::OutputMissing {
                output: OUTPUT_FILE.to_string(),
            }
        })
    }
}
