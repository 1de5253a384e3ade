//! # ffpipe-av
//!
//! Report scraping for the `ffmpeg` command-line tool.
//!
//! This crate drives the external binary through standard-input/output
//! pipes and decodes the human-readable reports it prints:
//!
//! - capability catalogs: codecs (`-codecs`), container formats
//!   (`-formats`), pixel formats (`-pix_fmts`)
//! - tool and library versions (`-version`) and the build banner
//! - per-file media metadata (`-i <path>`): duration, streams, codecs,
//!   resolution, framerate
//!
//! No encoding, decoding, or media processing happens here; the external
//! tool does all of it, and its text output is treated as the wire
//! contract. Operation is synchronous and blocking: one child process per
//! report query, fully read before parsing.
//!
//! ## Example
//!
//! ```no_run
//! use ffpipe_av::Ffmpeg;
//!
//! let ffmpeg = Ffmpeg::new();
//! let info = ffmpeg.probe("/path/to/video.mp4")?;
//! if let Some(video) = info.primary_video() {
//!     println!("{} at {}", video.codec, video.size);
//! }
//! # Ok::<(), ffpipe_av::Error>(())
//! ```

mod error;
mod ffmpeg;
mod report;

pub mod catalog;
pub mod probe;
pub mod tools;
pub mod version;

// Re-exports
pub use catalog::{Catalog, Codec, CodecKind, Format, PixelFormat};
pub use error::{Error, Result};
pub use ffmpeg::{Ffmpeg, RawOutput, DEFAULT_BINARY};
pub use probe::{AudioStream, DurationInfo, MediaInfo, Stream, StreamKind, VideoStream};
pub use report::ReportLines;
pub use tools::{check_tool, require_tool, ToolInfo};
pub use version::{BuildInfo, VersionReport};

/// Probe a media file with a default-configured client.
///
/// # Example
///
/// ```no_run
/// let info = ffpipe_av::probe("/path/to/video.mp4")?;
/// println!("streams: {}", info.streams().len());
/// # Ok::<(), ffpipe_av::Error>(())
/// ```
pub fn probe<P: AsRef<std::path::Path>>(path: P) -> Result<MediaInfo> {
    Ffmpeg::new().probe(path)
}
