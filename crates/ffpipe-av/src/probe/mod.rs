//! Per-file media probing via the `-i` report.
//!
//! Probing a file runs `-i <path>` with no output file; the tool then prints
//! the input description to stderr after its banner and exits. The report is
//! a small two-phase grammar: container metadata lines up to the `Duration`
//! line, then stream lines.
//!
//! ```text
//! Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'your_video.mp4':
//!   Metadata:
//!     major_brand     : isom
//!     creation_time   : 2010-11-20 10:39:32
//!   Duration: 00:01:15.26, start: 0.000000, bitrate: 602 kb/s
//!     Stream #0.0(und): Video: h264, yuv420p, 512x384, 511 kb/s, 30 fps, ...
//!     Stream #0.1(und): Audio: aac, 48000 Hz, stereo, s16, 88 kb/s
//! ```

mod types;

pub use types::{AudioStream, DurationInfo, MediaInfo, Stream, StreamKind, VideoStream};

use crate::error::{Error, Result};
use crate::report::ReportLines;

const REPORT: &str = "media info";

/// Last library line of the banner; the report body follows it.
const SEPARATOR: &str = "  libpostproc";

/// Tokens a `Video` stream line must carry after its type token.
const VIDEO_FIELDS: usize = 8;
/// Tokens an `Audio` stream line must carry after its type token.
const AUDIO_FIELDS: usize = 5;

/// Decode a collected `-i` stderr into [`MediaInfo`].
pub fn parse_probe_report(text: &str) -> Result<MediaInfo> {
    let mut info = MediaInfo::default();
    for raw in ReportLines::new(text, SEPARATOR) {
        let line = raw.trim_start();
        if line.starts_with("Input") || line == "Metadata:" {
            continue;
        }
        match info.duration {
            None => {
                let (key, value) = line
                    .split_once(": ")
                    .ok_or_else(|| Error::malformed_report(REPORT, line))?;
                if key.trim_end() == "Duration" {
                    info.duration = Some(parse_duration_line(line));
                } else {
                    info.metadata.insert(key.trim_end(), value.to_string());
                }
            }
            Some(ref mut duration) => {
                if line.starts_with("Stream") {
                    duration.streams.push(parse_stream_line(line)?);
                }
                // Per-stream metadata blocks and other trailers fall through.
            }
        }
    }
    Ok(info)
}

/// Split `Duration: 00:01:15.26, start: 0.000000, bitrate: 602 kb/s` into
/// its labeled fields. Fields the line does not carry (a `N/A` report may
/// omit `start`) stay unset.
fn parse_duration_line(line: &str) -> DurationInfo {
    let mut info = DurationInfo::default();
    for field in line.split(", ") {
        let Some((label, value)) = field.split_once(": ") else {
            continue;
        };
        match label {
            "Duration" => info.duration = value.to_string(),
            "start" => info.start = Some(value.to_string()),
            "bitrate" => info.bitrate = Some(value.to_string()),
            _ => {}
        }
    }
    info
}

/// Decode one stream line into its tagged record.
fn parse_stream_line(line: &str) -> Result<Stream> {
    // "Stream #0.0(und): Video: h264, yuv420p, ..." splits into the stream
    // identifier, the type token, and the comma-separated detail tokens.
    let (_, rest) = line
        .split_once(": ")
        .ok_or_else(|| Error::malformed_report(REPORT, line))?;
    let (kind_token, detail) = rest
        .split_once(": ")
        .ok_or_else(|| Error::malformed_report(REPORT, line))?;
    let tokens: Vec<&str> = detail.split(", ").collect();

    let mut raw = Vec::with_capacity(tokens.len() + 1);
    raw.push(kind_token.to_string());
    raw.extend(tokens.iter().map(|token| token.to_string()));

    let kind = match kind_token {
        "Video" => {
            if tokens.len() < VIDEO_FIELDS {
                return Err(Error::malformed_report(REPORT, line));
            }
            StreamKind::Video(VideoStream {
                codec: tokens[0].to_string(),
                pix_fmt: tokens[1].to_string(),
                size: tokens[2].to_string(),
                bitrate: tokens[3].to_string(),
                fps: tokens[4].to_string(),
                tbr: tokens[5].to_string(),
                tbn: tokens[6].to_string(),
                tbc: tokens[7].to_string(),
            })
        }
        "Audio" => {
            if tokens.len() < AUDIO_FIELDS {
                return Err(Error::malformed_report(REPORT, line));
            }
            StreamKind::Audio(AudioStream {
                codec: tokens[0].to_string(),
                sample_rate: tokens[1].to_string(),
                channels: tokens[2].to_string(),
                sample_format: tokens[3].to_string(),
                bitrate: tokens[4].to_string(),
            })
        }
        other => StreamKind::Other {
            kind: other.to_string(),
        },
    };

    Ok(Stream { raw, kind })
}
