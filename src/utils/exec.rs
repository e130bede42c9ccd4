//! External command execution utilities.
//!
//! Spawns the configured converter command with piped stdio and reports
//! failures with the captured stderr attached.

use anyhow::{Context, Result, bail};
use std::process::{Child, ChildStdin, Command, Output, Stdio};

/// Spawn a command and return a `RunningProcess` handle.
///
/// The child is spawned with stdin, stdout and stderr piped. Caller writes
/// input via `proc.stdin()` and calls `proc.wait()` to collect the output.
///
/// # Errors
/// Returns error if the command is empty or fails to spawn.
pub fn spawn_with_stdin(cmd: &[String]) -> Result<RunningProcess> {
    let (name, mut command) = prepare(cmd)?;

    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child: Child = command
        .spawn()
        .with_context(|| format!("Failed to spawn `{name}`"))?;

    let stdin = child.stdin.take().context("Failed to acquire stdin")?;
    Ok(RunningProcess {
        child,
        stdin: Some(stdin),
        name,
    })
}

/// A running child process with piped stdin.
///
/// Encapsulates the lifecycle of a process that expects input via stdin.
/// Ensures stdin is closed before waiting for the process to exit.
pub struct RunningProcess {
    child: Child,
    stdin: Option<ChildStdin>,
    name: String,
}

impl RunningProcess {
    /// Get a mutable reference to the child's stdin.
    pub const fn stdin(&mut self) -> Option<&mut ChildStdin> {
        self.stdin.as_mut()
    }

    /// Wait for the child to complete and collect its output.
    ///
    /// Automatically closes stdin to signal EOF to the child process.
    ///
    /// # Errors
    /// Returns error if the process exits with non-zero status; captured
    /// stderr is included in the message.
    pub fn wait(mut self) -> Result<Output> {
        // Must close stdin before wait, otherwise child blocks on read
        drop(self.stdin.take());

        let output = self
            .child
            .wait_with_output()
            .with_context(|| format!("{} process failed", self.name))?;

        if !output.status.success() {
            bail!(format_error(&self.name, &output));
        }
        Ok(output)
    }
}

/// Prepare a Command from components.
fn prepare(cmd: &[String]) -> Result<(String, Command)> {
    let name = cmd.first().context("Empty command")?.clone();

    let mut command = Command::new(&cmd[0]);
    command.args(&cmd[1..]);

    Ok((name, command))
}

/// Format command error message with captured stderr.
fn format_error(name: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut msg = format!("Command `{name}` failed with {}", output.status);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        msg.push('\n');
        msg.push_str(stderr);
    }
    msg
}
