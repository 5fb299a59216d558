//! Running clipboard commands through the platform shell.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::debug;
use wait_timeout::ChildExt;

use crate::error::ShellError;

/// Execute a shell command with `input` piped to its stdin.
///
/// Returns the command's stdout on success. If `timeout` elapses the process
/// is killed and [`ShellError::TimedOut`] is returned.
pub fn run_piped(
    command: &str,
    input: &str,
    timeout: Option<Duration>,
) -> Result<String, ShellError> {
    run(command, input, timeout, true)
}

/// Like [`run_piped`], but discards the command's stdout.
///
/// Clipboard writers such as `xclip` leave a background process holding
/// stdout open, so their output must not be captured.
pub fn run_consuming(
    command: &str,
    input: &str,
    timeout: Option<Duration>,
) -> Result<(), ShellError> {
    run(command, input, timeout, false).map(|_| ())
}

fn run(
    command: &str,
    input: &str,
    timeout: Option<Duration>,
    capture: bool,
) -> Result<String, ShellError> {
    let stdout = if capture {
        Stdio::piped()
    } else {
        Stdio::null()
    };
    debug!(command, bytes = input.len(), "running clipboard command");
    let mut child = shell(command)
        .stdin(Stdio::piped())
        .stdout(stdout)
        .stderr(Stdio::inherit())
        .spawn()?;

    // Drain stdout concurrently so a large clipboard can't fill the pipe
    // while we wait on the child.
    let pipe = child.stdout.take();
    let reader = thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut output = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut output)?;
        }
        Ok(output)
    });

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let status = match timeout {
        None => child.wait()?,
        Some(after) => match child.wait_timeout(after)? {
            Some(status) => status,
            None => {
                child.kill()?;
                child.wait()?;
                return Err(ShellError::TimedOut {
                    command: command.to_string(),
                    after,
                });
            }
        },
    };

    if !status.success() {
        return Err(ShellError::Status {
            command: command.to_string(),
            status,
        });
    }

    let output = reader
        .join()
        .map_err(|_| io::Error::other("stdout reader panicked"))??;
    Ok(String::from_utf8(output)?)
}

fn shell(command: &str) -> Command {
    let (program, flag) = if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };
    let mut cmd = Command::new(program);
    cmd.arg(flag).arg(command);
    cmd
}
