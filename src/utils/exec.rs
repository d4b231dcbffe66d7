//! External command execution utilities.
//!
//! Provides a Builder-based API for running converter binaries with
//! output handling and stdin piping.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // With stdin piping (for magick, ffmpeg)
//! let output = Cmd::new("magick")
//!     .args(["-background", "none", "-", "png:-"])
//!     .stdin(svg_data)
//!     .run()?;
//! ```

use crate::debug;
use anyhow::{Context, Result};
use std::{
    ffi::{OsStr, OsString},
    io::Write,
    process::{Command, Output, Stdio},
};

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
#[derive(Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    stdin_data: Option<Vec<u8>>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            let arg = arg.as_ref();
            if !arg.is_empty() {
                self.args.push(arg.to_owned());
            }
        }
        self
    }

    /// Set stdin data to pipe to the process.
    pub fn stdin<D: AsRef<[u8]>>(mut self, data: D) -> Self {
        self.stdin_data = Some(data.as_ref().to_vec());
        self
    }

    /// Execute the command and return output.
    ///
    /// Stdin is always piped; without data the process sees an empty stream.
    pub fn run(mut self) -> Result<Output> {
        let name = self.program_name();
        debug!("exec"; "{} {}", name, self.args_display());

        let data = self.stdin_data.take().unwrap_or_default();
        self.run_with_stdin(&name, &data)
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    fn args_display(&self) -> String {
        self.args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Execution with stdin piping.
    fn run_with_stdin(self, name: &str, stdin_data: &[u8]) -> Result<Output> {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn `{name}`"))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(stdin_data)
                .with_context(|| format!("Failed to write stdin to `{name}`"))?;
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for `{name}`"))?;

        if !output.status.success() {
            anyhow::bail!(format_error(name, &output));
        }

        Ok(output)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Format error message for failed command.
///
/// Binary stdout (PNG data) is never echoed back.
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_builder() {
        let cmd = Cmd::new("magick")
            .args(["-background", "none", "svg:-"])
            .args(["-resize", "192x192!", "png:-"])
            .stdin(b"<svg/>");

        assert_eq!(cmd.program, OsString::from("magick"));
        assert_eq!(cmd.args.len(), 6);
        assert_eq!(cmd.stdin_data.as_deref(), Some(&b"<svg/>"[..]));
        assert_eq!(cmd.args_display(), "-background none svg:- -resize 192x192! png:-");
    }

    #[test]
    fn test_empty_args_filtered() {
        let cmd = Cmd::new("echo").args(["a", "", "b"]);
        assert_eq!(cmd.args.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_stdin_pipe() {
        let output = Cmd::new("cat").stdin(b"<svg/>").run().unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout, b"<svg/>");
    }

    #[cfg(unix)]
    #[test]
    fn test_without_stdin_data_reads_empty_stream() {
        let output = Cmd::new("cat").run().unwrap();
        assert!(output.stdout.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_command_reports_status() {
        let err = Cmd::new("sh")
            .args(["-c", "echo broken >&2; exit 3"])
            .run()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Command `sh` failed"));
        assert!(msg.contains("broken"));
    }

    #[test]
    fn test_missing_program_is_error() {
        let err = Cmd::new("pwa-tools-no-such-binary").run().unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }
}
