//! Client for one configured ffmpeg executable.

use crate::catalog::{
    parse_codec_table, parse_format_table, parse_pixel_format_table, Catalog, Codec, Format,
    PixelFormat,
};
use crate::error::{Error, Result};
use crate::probe::{parse_probe_report, MediaInfo};
use crate::tools;
use crate::version::{parse_banner, parse_version_report, BuildInfo, VersionReport};

use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::OnceLock;

/// Executable name used when no explicit path is configured.
pub const DEFAULT_BINARY: &str = "ffmpeg";

/// Output collected from one completed tool invocation.
///
/// The exit status is reported, not enforced: several report invocations
/// exit non-zero by design (the banner run has no arguments, a probe run
/// has no output file).
#[derive(Debug, Clone)]
pub struct RawOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Collected standard output (lossy UTF-8).
    pub stdout: String,
    /// Collected standard error (lossy UTF-8).
    pub stderr: String,
}

/// Client for driving one ffmpeg executable.
///
/// Owns the configured binary path and the cached availability probe: the
/// first operation resolves the executable once, and the resolution sticks
/// for the lifetime of the client. Configure the path before first use.
///
/// # Example
///
/// ```no_run
/// use ffpipe_av::Ffmpeg;
///
/// let ffmpeg = Ffmpeg::new();
/// let codecs = ffmpeg.codecs()?;
/// if let Some(h264) = codecs.get("h264") {
///     println!("h264 decoding supported: {}", h264.decoding);
/// }
/// # Ok::<(), ffpipe_av::Error>(())
/// ```
#[derive(Debug)]
pub struct Ffmpeg {
    binary: PathBuf,
    resolved: OnceLock<PathBuf>,
}

impl Ffmpeg {
    /// Client for `ffmpeg` on `PATH`.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Client for an explicit executable path or name.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            resolved: OnceLock::new(),
        }
    }

    /// The configured (unresolved) binary path.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Resolve the executable, probing on first use.
    ///
    /// A successful probe is cached for the lifetime of the client and
    /// never re-checked; a failed probe is returned as
    /// [`Error::ToolNotFound`] and retried on the next call. Racing first
    /// calls may each run the lookup; the result is the same.
    pub fn ensure_available(&self) -> Result<&Path> {
        if let Some(path) = self.resolved.get() {
            return Ok(path);
        }
        let path = tools::require_tool(&self.binary.to_string_lossy())?;
        Ok(self.resolved.get_or_init(|| path))
    }

    /// Spawn the tool with stdin and stdout piped; stderr stays attached
    /// to the parent. The caller owns the child and its teardown.
    pub fn spawn<I, S>(&self, args: I) -> Result<Child>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.spawn_inner(args, Stdio::inherit())
    }

    /// Spawn the tool with stdin, stdout, and stderr all piped.
    pub fn spawn_with_stderr<I, S>(&self, args: I) -> Result<Child>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.spawn_inner(args, Stdio::piped())
    }

    fn spawn_inner<I, S>(&self, args: I, stderr: Stdio) -> Result<Child>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let binary = self.ensure_available()?;
        let mut command = Command::new(binary);
        command
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(stderr);

        tracing::debug!("spawning {:?}", command);

        command.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(self.binary.to_string_lossy())
            } else {
                Error::Io(e)
            }
        })
    }

    /// Run one invocation to completion, collecting both streams.
    ///
    /// Blocking and unbounded: stdout is read fully, then stderr, then the
    /// child is reaped. Each report query owns exactly one child process
    /// for its own duration.
    pub fn run<I, S>(&self, args: I) -> Result<RawOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut child = self.spawn_with_stderr(args)?;
        // Nothing is ever written to the child; close its stdin so report
        // invocations cannot wait on it.
        drop(child.stdin.take());

        let mut stdout = Vec::new();
        if let Some(mut pipe) = child.stdout.take() {
            pipe.read_to_end(&mut stdout)?;
        }
        let mut stderr = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            pipe.read_to_end(&mut stderr)?;
        }
        let status = child.wait()?;

        Ok(RawOutput {
            status,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }

    /// Supported codecs, from the `-codecs` report.
    pub fn codecs(&self) -> Result<Catalog<Codec>> {
        let output = self.run(["-codecs"])?;
        parse_codec_table(&output.stdout)
    }

    /// Supported container formats, from the `-formats` report.
    pub fn formats(&self) -> Result<Catalog<Format>> {
        let output = self.run(["-formats"])?;
        parse_format_table(&output.stdout)
    }

    /// Supported pixel formats, from the `-pix_fmts` report.
    pub fn pixel_formats(&self) -> Result<Catalog<PixelFormat>> {
        let output = self.run(["-pix_fmts"])?;
        parse_pixel_format_table(&output.stdout)
    }

    /// Tool and library versions, from the `-version` report.
    pub fn version(&self) -> Result<VersionReport> {
        let output = self.run(["-version"])?;
        Ok(parse_version_report(&output.stdout))
    }

    /// Build information from the banner the tool prints to stderr when
    /// invoked without arguments.
    pub fn build_info(&self) -> Result<BuildInfo> {
        let output = self.run::<_, &OsStr>([])?;
        Ok(parse_banner(&output.stderr))
    }

    /// Per-file metadata, from the `-i <path>` report on stderr.
    pub fn probe(&self, path: impl AsRef<Path>) -> Result<MediaInfo> {
        let path = path.as_ref();
        let output = self.run([OsStr::new("-i"), path.as_os_str()])?;
        parse_probe_report(&output.stderr)
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_configuration_error() {
        let ffmpeg = Ffmpeg::with_binary("nonexistent_ffmpeg_12345");
        let err = ffmpeg.ensure_available().unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));

        // Every report query fails the same way.
        let err = ffmpeg.codecs().unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn missing_binary_path_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let ffmpeg = Ffmpeg::with_binary(dir.path().join("ffmpeg"));
        assert!(ffmpeg.ensure_available().is_err());
    }

    #[test]
    fn default_client_uses_path_lookup_name() {
        let ffmpeg = Ffmpeg::new();
        assert_eq!(ffmpeg.binary(), Path::new(DEFAULT_BINARY));
    }
}
