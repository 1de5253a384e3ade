//! Media probe report types.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Metadata and stream information scraped from a per-file probe report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Container-level metadata tags (`major_brand`, `creation_time`, ...).
    pub metadata: Catalog<String>,
    /// Duration block, present once the report reaches its `Duration` line.
    pub duration: Option<DurationInfo>,
}

/// The `Duration` line and the stream lines that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInfo {
    /// Playback duration, e.g. `00:01:15.26`.
    pub duration: String,
    /// Start offset in seconds, e.g. `0.000000`.
    pub start: Option<String>,
    /// Overall bitrate, e.g. `602 kb/s`.
    pub bitrate: Option<String>,
    /// Streams in report order.
    pub streams: Vec<Stream>,
}

/// One `Stream #...` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Unparsed token sequence, type token first. Kept so callers can read
    /// fields this crate does not decode.
    pub raw: Vec<String>,
    /// Decoded per-type payload.
    pub kind: StreamKind,
}

/// Stream payload, discriminated by the report's type token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamKind {
    Video(VideoStream),
    Audio(AudioStream),
    /// A type this crate has no field layout for (`Subtitle`, `Data`, ...);
    /// only the raw tokens are available.
    Other { kind: String },
}

/// Positional fields of a `Video` stream line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStream {
    pub codec: String,
    pub pix_fmt: String,
    /// Frame size, e.g. `512x384`.
    pub size: String,
    pub bitrate: String,
    pub fps: String,
    pub tbr: String,
    pub tbn: String,
    pub tbc: String,
}

/// Positional fields of an `Audio` stream line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStream {
    pub codec: String,
    /// Sample rate, e.g. `48000 Hz`.
    pub sample_rate: String,
    /// Channel layout, e.g. `stereo`.
    pub channels: String,
    /// Sample format, e.g. `s16`.
    pub sample_format: String,
    pub bitrate: String,
}

impl MediaInfo {
    /// Streams in report order, or none before the `Duration` line was seen.
    pub fn streams(&self) -> &[Stream] {
        self.duration
            .as_ref()
            .map(|duration| duration.streams.as_slice())
            .unwrap_or(&[])
    }

    /// Decoded video streams in report order.
    pub fn video_streams(&self) -> impl Iterator<Item = &VideoStream> {
        self.streams().iter().filter_map(|stream| match &stream.kind {
            StreamKind::Video(video) => Some(video),
            _ => None,
        })
    }

    /// Decoded audio streams in report order.
    pub fn audio_streams(&self) -> impl Iterator<Item = &AudioStream> {
        self.streams().iter().filter_map(|stream| match &stream.kind {
            StreamKind::Audio(audio) => Some(audio),
            _ => None,
        })
    }

    /// The first video stream, if any.
    pub fn primary_video(&self) -> Option<&VideoStream> {
        self.video_streams().next()
    }
}
