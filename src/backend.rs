//! Directory backends
//!
//! Every piece of I/O the browser performs goes through [`DirectoryBackend`]:
//! listing a directory and copying a path across the host/container boundary.
//! The production implementation shells out to `sh` on the host and to the
//! container CLI (`docker exec`, `docker cp`) for the container side.

use std::{io, process::Command};

use tracing::debug;

use crate::error::{CopyError, ListError};

// ============================================================================
// Endpoints
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Local,
    Remote,
}

impl BackendKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Local => "host",
            Self::Remote => "container",
        }
    }
}

/// Where a path lives: on the host, or inside a named container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Local,
    Remote(String),
}

impl Endpoint {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Local => BackendKind::Local,
            Self::Remote(_) => BackendKind::Remote,
        }
    }

    /// Path in the form the container CLI expects (`target:/path` for remote).
    pub fn qualify(&self, path: &str) -> String {
        match self {
            Self::Local => path.to_owned(),
            Self::Remote(target) => format!("{}:{}", target, path),
        }
    }
}

pub trait DirectoryBackend {
    /// Raw names in `cwd`, directories suffixed with `/`. Never includes `.` or `..`.
    fn list(&self, endpoint: &Endpoint, cwd: &str) -> Result<Vec<String>, ListError>;

    /// Copy `source_path` into the existing directory `dest_path`.
    fn copy(
        &self,
        source: &Endpoint,
        source_path: &str,
        dest: &Endpoint,
        dest_path: &str,
    ) -> Result<(), CopyError>;
}

// ============================================================================
// Process Execution
// ============================================================================

/// Captured result of a finished command.
#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Trimmed stderr, or the exit code when the command printed nothing.
    pub fn error_text(&self) -> String {
        let stderr = String::from_utf8_lossy(&self.stderr).trim().to_owned();
        if !stderr.is_empty() {
            return stderr;
        }
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_owned(),
        }
    }
}

pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs commands as child processes of the browser.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

// ============================================================================
// Docker Backend
// ============================================================================

const LIST_SHELL: &str = "sh";

/// Prints every name in `$1` followed by NUL, with `/` appended to anything
/// that resolves to a directory (symlinks included). `./` and `../` come first.
const LIST_SCRIPT: &str = r#"cd -- "$1" || exit 1
[ -r . ] || { echo "cannot read directory $1" >&2; exit 1; }
printf './\0../\0'
for f in .* *; do
  case "$f" in .|..) continue ;; esac
  [ -e "$f" ] || [ -L "$f" ] || continue
  if [ -d "$f" ]; then printf '%s/\0' "$f"; else printf '%s\0' "$f"; fi
done
exit 0"#;

pub struct DockerBackend<R = ProcessRunner> {
    docker: String,
    runner: R,
}

impl DockerBackend {
    pub fn new(docker: impl Into<String>) -> Self {
        Self::with_runner(docker, ProcessRunner)
    }
}

impl<R: CommandRunner> DockerBackend<R> {
    pub fn with_runner(docker: impl Into<String>, runner: R) -> Self {
        Self {
            docker: docker.into(),
            runner,
        }
    }

    pub fn docker(&self) -> &str {
        &self.docker
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn list_command(&self, endpoint: &Endpoint, cwd: &str) -> (String, Vec<String>) {
        let mut args: Vec<String> = Vec::new();
        let program = match endpoint {
            Endpoint::Local => LIST_SHELL.to_owned(),
            Endpoint::Remote(target) => {
                args.push("exec".to_owned());
                args.push(target.clone());
                args.push(LIST_SHELL.to_owned());
                self.docker.clone()
            }
        };
        // The second `sh` becomes `$0` inside the script
        args.extend(["-c", LIST_SCRIPT, LIST_SHELL, cwd].map(str::to_owned));
        (program, args)
    }
}

impl<R: CommandRunner> DirectoryBackend for DockerBackend<R> {
    fn list(&self, endpoint: &Endpoint, cwd: &str) -> Result<Vec<String>, ListError> {
        let (program, args) = self.list_command(endpoint, cwd);
        debug!(%program, ?args, "listing directory");

        let output = self
            .runner
            .run(&program, &args)
            .map_err(|source| ListError::Spawn { program, source })?;

        if !output.success {
            return Err(ListError::Status {
                path: endpoint.qualify(cwd),
                stderr: output.error_text(),
            });
        }

        parse_listing(&endpoint.qualify(cwd), &output.stdout)
    }

    fn copy(
        &self,
        source: &Endpoint,
        source_path: &str,
        dest: &Endpoint,
        dest_path: &str,
    ) -> Result<(), CopyError> {
        if source.kind() == dest.kind() {
            return Err(CopyError::Unsupported {
                from: source.kind().name(),
                to: dest.kind().name(),
            });
        }

        let args = vec![
            "cp".to_owned(),
            source.qualify(source_path),
            dest.qualify(dest_path),
        ];
        debug!(program = %self.docker, ?args, "copying");

        let output = self
            .runner
            .run(&self.docker, &args)
            .map_err(|source| CopyError::Spawn {
                program: self.docker.clone(),
                source,
            })?;

        if output.success {
            Ok(())
        } else {
            Err(CopyError::Status {
                source_path: source.qualify(source_path),
                stderr: output.error_text(),
            })
        }
    }
}

/// Split NUL-separated listing output into raw names.
///
/// Names may contain newlines, so NUL is the only separator. The `./` and
/// `../` records must be present; they are dropped from the result. Their
/// absence means the output did not come from a directory listing.
pub fn parse_listing(path: &str, stdout: &[u8]) -> Result<Vec<String>, ListError> {
    let text = std::str::from_utf8(stdout).map_err(|_| ListError::Malformed {
        path: path.to_owned(),
        reason: "output is not valid UTF-8".to_owned(),
    })?;

    let mut saw_self = false;
    let mut saw_parent = false;
    let mut names = Vec::new();

    for record in text.split('\0').filter(|r| !r.is_empty()) {
        match record {
            "./" => saw_self = true,
            "../" => saw_parent = true,
            name => names.push(name.to_owned()),
        }
    }

    if !(saw_self && saw_parent) {
        return Err(ListError::Malformed {
            path: path.to_owned(),
            reason: "missing ./ and ../ entries".to_owned(),
        });
    }

    Ok(names)
}

// ============================================================================
// Test Doubles
// ============================================================================
