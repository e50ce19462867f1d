//! External command execution with logging and an optional timeout.
//!
//! Every status query goes through [`Cmd`] so that `-v` shows exactly what
//! was run and how long it took:
//!
//! ```text
//! $ sinfo -h
//! [nodegrid-trace] cmd="sinfo -h" dur_us=48211 ok=true
//! ```

use std::io::{ErrorKind, Read};
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant};

/// Interval between polls of a child running under a timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Implementation of timeout-based command execution.
///
/// Spawns the process, captures stdout/stderr in background threads, and waits with timeout.
/// If the timeout is exceeded, kills the process and everything it started, then returns
/// TimedOut error.
fn run_with_timeout_impl(cmd: &mut Command, timeout: Duration) -> std::io::Result<Output> {
    // Own process group so a wrapper script's children die with it
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let mut stdout_handle = child.stdout.take();
    let mut stderr_handle = child.stderr.take();

    // Drain both pipes concurrently so a chatty child can't block on a full buffer
    let stdout_thread = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(ref mut handle) = stdout_handle {
            let _ = handle.read_to_end(&mut buf);
        }
        buf
    });

    let stderr_thread = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(ref mut handle) = stderr_handle {
            let _ = handle.read_to_end(&mut buf);
        }
        buf
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None => {
                if Instant::now() >= deadline {
                    kill_tree(&mut child);
                    let _ = child.wait();

                    // Not joined: a descendant that left the group can hold the pipes open
                    drop(stdout_thread);
                    drop(stderr_thread);

                    return Err(std::io::Error::new(
                        ErrorKind::TimedOut,
                        format!("command timed out after {}s", timeout.as_secs_f64()),
                    ));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
        }
    };

    let stdout = stdout_thread.join().unwrap_or_default();
    let stderr = stderr_thread.join().unwrap_or_default();

    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

/// Kill the child's whole process group.
#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    let Ok(pid) = i32::try_from(child.id()) else {
        let _ = child.kill();
        return;
    };
    let pgid = nix::unistd::Pid::from_raw(pid);
    if nix::sys::signal::killpg(pgid, nix::sys::signal::Signal::SIGKILL).is_err() {
        let _ = child.kill();
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) {
    let _ = child.kill();
}

/// Builder for executing commands with logging and an optional timeout.
///
/// # Examples
///
/// ```no_run
/// use nodegrid::shell_exec::Cmd;
///
/// let output = Cmd::new("sinfo")
///     .args(["-h"])
///     .context("status")
///     .run()?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
    context: Option<String>,
    timeout: Option<Duration>,
}

impl Cmd {
    /// Create a new command builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            context: None,
            timeout: None,
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the logging context.
    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// Set a timeout for command execution. `None` waits indefinitely.
    pub fn timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    /// The command line as it is logged.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Execute the command and return its output.
    ///
    /// A non-zero exit status is not an error here; callers inspect
    /// `output.status` themselves.
    pub fn run(self) -> std::io::Result<Output> {
        let cmd_str = self.display();

        match &self.context {
            Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
            None => log::debug!("$ {}", cmd_str),
        }

        let t0 = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        let result = match self.timeout {
            Some(timeout) => run_with_timeout_impl(&mut cmd, timeout),
            None => cmd.stdin(Stdio::null()).output(),
        };

        let dur_us = t0.elapsed().as_micros();
        match &result {
            Ok(output) => log::debug!(
                "[nodegrid-trace] cmd=\"{}\" dur_us={} ok={}",
                cmd_str,
                dur_us,
                output.status.success()
            ),
            Err(e) => log::debug!(
                "[nodegrid-trace] cmd=\"{}\" dur_us={} err=\"{}\"",
                cmd_str,
                dur_us,
                e
            ),
        }

        result
    }
}
