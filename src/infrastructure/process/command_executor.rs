use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, trace};

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("Failed to start `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read output of `{command}`: {source}")]
    ReadFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for `{command}`: {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {}", describe_exit(.exit_code))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

impl CommandExecutorError {
    /// The command line that produced this error
    pub fn command(&self) -> &str {
        match self {
            Self::SpawnFailed { command, .. }
            | Self::ReadFailed { command, .. }
            | Self::WaitFailed { command, .. }
            | Self::CommandFailed { command, .. } => command,
        }
    }
}

/// Where the child's standard error goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StderrMode {
    /// Pass through to our own stderr, unmodified
    #[default]
    Inherit,
    /// Drop it
    Discard,
}

impl StderrMode {
    fn to_stdio(self) -> Stdio {
        match self {
            StderrMode::Inherit => Stdio::inherit(),
            StderrMode::Discard => Stdio::null(),
        }
    }
}

/// Configuration for command execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionConfig {
    /// Working directory for command execution
    pub working_directory: Option<PathBuf>,

    /// Handling of the child's standard error
    pub stderr: StderrMode,
}

impl ExecutionConfig {
    /// Create a new execution config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set stderr handling
    pub fn with_stderr(mut self, stderr: StderrMode) -> Self {
        self.stderr = stderr;
        self
    }
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// The command line that was run
    pub command: String,

    /// Exit code of the process, `None` when terminated by a signal
    pub exit_code: Option<i32>,

    /// Standard output, one entry per line without terminators
    pub stdout_lines: Vec<String>,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

impl ExecutionResult {
    /// Whether the command exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turn a non-zero exit into [`CommandExecutorError::CommandFailed`]
    pub fn into_checked(self) -> Result<Self, CommandExecutorError> {
        if self.success() {
            Ok(self)
        } else {
            Err(CommandExecutorError::CommandFailed {
                command: self.command,
                exit_code: self.exit_code,
            })
        }
    }
}

/// Owns a spawned child until it has been reaped.
///
/// Dropping the guard before [`ChildGuard::wait`] succeeded kills the child and
/// waits for it, so no early return leaves a zombie or a running process behind.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        let pid = self.child.id();
        if let Err(e) = self.child.kill() {
            trace!(pid, "kill on cleanup failed: {}", e);
        }
        if let Err(e) = self.child.wait() {
            trace!(pid, "wait on cleanup failed: {}", e);
        }
    }
}

/// Runs an external program synchronously and collects its standard output.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    program: String,
}

impl CommandExecutor {
    /// Create an executor for `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this executor runs
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render `program args...` for messages and logs
    pub fn command_line(&self, args: &[&str]) -> String {
        if args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, args.join(" "))
        }
    }

    /// Run the program with `args` and block until it has exited.
    ///
    /// Standard output is read line by line until end-of-stream, then the
    /// child is reaped. A non-zero exit is reported through
    /// [`ExecutionResult::exit_code`], not as an error; use
    /// [`ExecutionResult::into_checked`] for that.
    pub fn execute(
        &self,
        args: &[&str],
        config: &ExecutionConfig,
    ) -> Result<ExecutionResult, CommandExecutorError> {
        let command = self.command_line(args);
        let started = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(config.stderr.to_stdio());

        if let Some(dir) = &config.working_directory {
            cmd.current_dir(dir);
        }

        debug!(command = %command, cwd = ?config.working_directory, "Running command");

        let child = cmd
            .spawn()
            .map_err(|source| CommandExecutorError::SpawnFailed {
                command: command.clone(),
                source,
            })?;
        let mut guard = ChildGuard::new(child);

        let stdout = guard
            .take_stdout()
            .ok_or_else(|| CommandExecutorError::ReadFailed {
                command: command.clone(),
                source: io::Error::new(io::ErrorKind::BrokenPipe, "stdout was not captured"),
            })?;

        let stdout_lines = read_lines(stdout).map_err(|source| CommandExecutorError::ReadFailed {
            command: command.clone(),
            source,
        })?;

        let status = guard
            .wait()
            .map_err(|source| CommandExecutorError::WaitFailed {
                command: command.clone(),
                source,
            })?;

        let execution_time_ms = started.elapsed().as_millis() as u64;
        trace!(
            command = %command,
            exit_code = ?status.code(),
            lines = stdout_lines.len(),
            execution_time_ms,
            "Command finished"
        );

        Ok(ExecutionResult {
            command,
            exit_code: status.code(),
            stdout_lines,
            execution_time_ms,
        })
    }
}

/// Read every line until end-of-stream. The pipe is closed when this returns.
fn read_lines(stdout: ChildStdout) -> io::Result<Vec<String>> {
    split_lines(BufReader::new(stdout))
}

/// Split on `\n`, dropping the terminator and a trailing `\r`.
///
/// Bytes that are not valid UTF-8 are decoded lossily; only I/O errors fail.
fn split_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sh() -> CommandExecutor {
        CommandExecutor::new("sh")
    }

    fn quiet() -> ExecutionConfig {
        ExecutionConfig::new().with_stderr(StderrMode::Discard)
    }

    #[test]
    fn test_collects_stdout_lines_in_order() {
        let result = sh()
            .execute(&["-c", "printf 'one\\ntwo\\nthree\\n'"], &quiet())
            .unwrap();

        assert!(result.success());
        assert_eq!(result.stdout_lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_keeps_last_line_without_newline() {
        let result = sh().execute(&["-c", "printf 'a\\nb'"], &quiet()).unwrap();
        assert_eq!(result.stdout_lines, vec!["a", "b"]);
    }

    #[test]
    fn test_non_zero_exit_is_not_an_error_until_checked() {
        let result = sh().execute(&["-c", "echo partial; exit 3"], &quiet()).unwrap();

        assert!(!result.success());
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stdout_lines, vec!["partial"]);

        match result.into_checked() {
            Err(CommandExecutorError::CommandFailed { command, exit_code }) => {
                assert_eq!(command, "sh -c echo partial; exit 3");
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_spawn_failure() {
        let executor = CommandExecutor::new("ghbrowse-no-such-program");
        let err = executor.execute(&["remote", "-v"], &quiet()).unwrap_err();

        assert!(matches!(err, CommandExecutorError::SpawnFailed { .. }));
        assert_eq!(err.command(), "ghbrowse-no-such-program remote -v");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let result = sh()
            .execute(&["-c", "printf 'caf\\351\\nnext\\n'"], &quiet())
            .unwrap();
        assert_eq!(result.stdout_lines, vec!["caf\u{FFFD}", "next"]);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("pipe broke"))
        }
    }

    #[test]
    fn test_split_lines_propagates_io_errors() {
        let err = split_lines(BufReader::new(FailingReader)).unwrap_err();
        assert_eq!(err.to_string(), "pipe broke");
    }

    #[test]
    fn test_split_lines_strips_terminators() {
        let lines = split_lines(&b"a\r\nb\n\nc"[..]).unwrap();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_working_directory_is_applied() {
        let dir = tempfile::TempDir::new().unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        let config = quiet().with_working_directory(&canonical);

        let result = sh().execute(&["-c", "pwd -P"], &config).unwrap();
        assert_eq!(result.stdout_lines, vec![canonical.display().to_string()]);
    }

    #[test]
    fn test_error_messages() {
        let err = CommandExecutorError::CommandFailed {
            command: "git symbolic-ref HEAD".to_string(),
            exit_code: Some(128),
        };
        assert_eq!(
            err.to_string(),
            "`git symbolic-ref HEAD` exited with exit code 128"
        );

        let err = CommandExecutorError::CommandFailed {
            command: "git remote -v".to_string(),
            exit_code: None,
        };
        assert_eq!(err.to_string(), "`git remote -v` exited with a signal");
    }

    #[test]
    fn test_command_line_rendering() {
        let executor = CommandExecutor::new("git");
        assert_eq!(executor.command_line(&[]), "git");
        assert_eq!(executor.command_line(&["remote", "-v"]), "git remote -v");
    }
}
