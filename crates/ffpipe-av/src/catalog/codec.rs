//! Decoder for the `-codecs` report.
//!
//! Captured sample of the table body:
//!
//! ```text
//!  ------
//!  D V D  4xm
//!  D A    8svx_exp
//!  DEVSDT mpeg4
//!  DEA    aac
//! ```
//!
//! Column 0 is padding; columns 1..=6 are single-character capability flags
//! and the name begins at column 8.

use super::Catalog;
use crate::error::{Error, Result};
use crate::report::ReportLines;
use serde::{Deserialize, Serialize};

const REPORT: &str = "codec";

/// Header separator preceding the table body.
const SEPARATOR: &str = " ------";

const COL_DECODING: usize = 1;
const COL_ENCODING: usize = 2;
const COL_KIND: usize = 3;
const COL_HORIZ_BAND: usize = 4;
const COL_DIRECT_RENDERING: usize = 5;
const COL_FRAME_TRUNCATION: usize = 6;
const COL_NAME: usize = 8;

/// Media kind of a codec, from the single kind column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    Video,
    Audio,
    Subtitle,
}

impl CodecKind {
    fn from_cell(cell: u8) -> Option<Self> {
        match cell {
            b'V' => Some(CodecKind::Video),
            b'A' => Some(CodecKind::Audio),
            b'S' => Some(CodecKind::Subtitle),
            _ => None,
        }
    }

    fn cell(self) -> char {
        match self {
            CodecKind::Video => 'V',
            CodecKind::Audio => 'A',
            CodecKind::Subtitle => 'S',
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecKind::Video => write!(f, "video"),
            CodecKind::Audio => write!(f, "audio"),
            CodecKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// One codec supported by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codec {
    pub name: String,
    pub kind: CodecKind,
    pub decoding: bool,
    pub encoding: bool,
    pub draw_horiz_band: bool,
    pub direct_rendering: bool,
    pub frame_truncation: bool,
}

impl Codec {
    /// Decode one table line.
    pub fn parse(line: &str) -> Result<Self> {
        let name = line
            .get(COL_NAME..)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::malformed_report(REPORT, line))?;
        let cells = line.as_bytes();
        let kind = CodecKind::from_cell(cells[COL_KIND])
            .ok_or_else(|| Error::malformed_report(REPORT, line))?;

        Ok(Self {
            name: name.to_string(),
            kind,
            decoding: cells[COL_DECODING] == b'D',
            encoding: cells[COL_ENCODING] == b'E',
            draw_horiz_band: cells[COL_HORIZ_BAND] == b'S',
            direct_rendering: cells[COL_DIRECT_RENDERING] == b'D',
            frame_truncation: cells[COL_FRAME_TRUNCATION] == b'T',
        })
    }

    /// Re-encode the six flag columns as they appear in the table.
    pub fn flags(&self) -> String {
        [
            if self.decoding { 'D' } else { ' ' },
            if self.encoding { 'E' } else { ' ' },
            self.kind.cell(),
            if self.draw_horiz_band { 'S' } else { ' ' },
            if self.direct_rendering { 'D' } else { ' ' },
            if self.frame_truncation { 'T' } else { ' ' },
        ]
        .iter()
        .collect()
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Decode a collected `-codecs` stdout into a name-keyed catalog.
pub fn parse_codec_table(text: &str) -> Result<Catalog<Codec>> {
    let mut codecs = Catalog::new();
    for line in ReportLines::new(text, SEPARATOR) {
        let codec = Codec::parse(line)?;
        codecs.insert(codec.name.clone(), codec);
    }
    Ok(codecs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_flag_set() {
        let codec = Codec::parse(" DEVSDT mpeg4").unwrap();
        assert_eq!(codec.name, "mpeg4");
        assert_eq!(codec.kind, CodecKind::Video);
        assert!(codec.decoding);
        assert!(codec.encoding);
        assert!(codec.draw_horiz_band);
        assert!(codec.direct_rendering);
        assert!(codec.frame_truncation);
    }

    #[test]
    fn decodes_sparse_flags() {
        let codec = Codec::parse(" D A    8svx_exp").unwrap();
        assert_eq!(codec.name, "8svx_exp");
        assert_eq!(codec.kind, CodecKind::Audio);
        assert!(codec.decoding);
        assert!(!codec.encoding);
        assert!(!codec.draw_horiz_band);
        assert!(!codec.direct_rendering);
        assert!(!codec.frame_truncation);
    }

    #[test]
    fn subtitle_kind() {
        let codec = Codec::parse(" DES    dvdsub").unwrap();
        assert_eq!(codec.kind, CodecKind::Subtitle);
    }

    #[test]
    fn flags_round_trip() {
        for line in [" DEVSDT mpeg4", " D V D  4xm", " DEA    aac", "  ES    xsub"] {
            let codec = Codec::parse(line).unwrap();
            let rebuilt = format!(" {} {}", codec.flags(), codec.name);
            assert_eq!(Codec::parse(&rebuilt).unwrap(), codec);
        }
    }

    #[test]
    fn short_line_is_malformed() {
        let err = Codec::parse(" DEV").unwrap_err();
        assert!(matches!(err, Error::MalformedReport { report: "codec", .. }));
    }

    #[test]
    fn unknown_kind_cell_is_malformed() {
        let err = Codec::parse(" DEX    mystery").unwrap_err();
        assert!(matches!(err, Error::MalformedReport { .. }));
    }

    #[test]
    fn table_is_keyed_by_name_in_order() {
        let text = "Codecs:\n D..... = Decoding supported\n ------\n D V D  4xm\n DEA    aac\n\n";
        let codecs = parse_codec_table(text).unwrap();
        let names: Vec<&str> = codecs.names().collect();
        assert_eq!(names, vec!["4xm", "aac"]);
        assert_eq!(codecs.get("aac").unwrap().kind, CodecKind::Audio);
    }
}
