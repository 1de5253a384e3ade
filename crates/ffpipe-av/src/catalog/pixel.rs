//! Decoder for the `-pix_fmts` report.
//!
//! Captured sample of the table body:
//!
//! ```text
//! -----
//! IO...   yuv420p   3   12
//! IO...   yuyv422   3   16
//! ..H..   vdpau_h264   0   0
//! ```
//!
//! Flag columns sit at fixed offsets from column 0 (column 4 is unused);
//! the remainder from column 8 is whitespace-delimited: name, component
//! count, bits per pixel.

use super::Catalog;
use crate::error::{Error, Result};
use crate::report::ReportLines;
use serde::{Deserialize, Serialize};

const REPORT: &str = "pixel format";

/// Header separator preceding the table body.
const SEPARATOR: &str = "-----";

const COL_INPUT: usize = 0;
const COL_OUTPUT: usize = 1;
const COL_HARDWARE: usize = 2;
const COL_PALETTED: usize = 3;
const COL_BITSTREAM: usize = 5;
const COL_FIELDS: usize = 8;

/// One pixel format supported by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelFormat {
    pub name: String,
    pub input: bool,
    pub output: bool,
    pub hardware: bool,
    pub paletted: bool,
    pub bitstream: bool,
    pub components: u32,
    pub bits_per_pixel: u32,
}

impl PixelFormat {
    /// Decode one table line.
    pub fn parse(line: &str) -> Result<Self> {
        let fields = line
            .get(COL_FIELDS..)
            .ok_or_else(|| Error::malformed_report(REPORT, line))?;
        let cells = line.as_bytes();

        let mut tokens = fields.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| Error::malformed_report(REPORT, line))?;
        let components = parse_count(tokens.next(), line)?;
        let bits_per_pixel = parse_count(tokens.next(), line)?;

        Ok(Self {
            name: name.to_string(),
            input: cells[COL_INPUT] == b'I',
            output: cells[COL_OUTPUT] == b'O',
            hardware: cells[COL_HARDWARE] == b'H',
            paletted: cells[COL_PALETTED] == b'P',
            bitstream: cells[COL_BITSTREAM] == b'B',
            components,
            bits_per_pixel,
        })
    }

    /// Re-encode the flag columns as they appear in the table.
    pub fn flags(&self) -> String {
        [
            if self.input { 'I' } else { '.' },
            if self.output { 'O' } else { '.' },
            if self.hardware { 'H' } else { '.' },
            if self.paletted { 'P' } else { '.' },
            '.',
            if self.bitstream { 'B' } else { '.' },
        ]
        .iter()
        .collect()
    }
}

fn parse_count(token: Option<&str>, line: &str) -> Result<u32> {
    token
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| Error::malformed_report(REPORT, line))
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.flags(),
            self.components,
            self.bits_per_pixel
        )
    }
}

/// Decode a collected `-pix_fmts` stdout into a name-keyed catalog.
pub fn parse_pixel_format_table(text: &str) -> Result<Catalog<PixelFormat>> {
    let mut pixel_formats = Catalog::new();
    for line in ReportLines::new(text, SEPARATOR) {
        let pixel_format = PixelFormat::parse(line)?;
        pixel_formats.insert(pixel_format.name.clone(), pixel_format);
    }
    Ok(pixel_formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_conversion_format() {
        let pix = PixelFormat::parse("IO...   yuv420p   3   12").unwrap();
        assert_eq!(pix.name, "yuv420p");
        assert!(pix.input);
        assert!(pix.output);
        assert!(!pix.hardware);
        assert!(!pix.paletted);
        assert!(!pix.bitstream);
        assert_eq!(pix.components, 3);
        assert_eq!(pix.bits_per_pixel, 12);
    }

    #[test]
    fn decodes_hardware_format() {
        let pix = PixelFormat::parse("..H..   vdpau_h264   0   0").unwrap();
        assert_eq!(pix.name, "vdpau_h264");
        assert!(pix.hardware);
        assert_eq!(pix.components, 0);
        assert_eq!(pix.bits_per_pixel, 0);
    }

    #[test]
    fn flags_round_trip() {
        for line in [
            "IO...   yuv420p   3   12",
            "..H..   vdpau_h264   0   0",
            "I..P.   pal8   1   8",
            ".O...B  monob   1   1",
        ] {
            let pix = PixelFormat::parse(line).unwrap();
            let rebuilt = format!(
                "{}  {}   {}   {}",
                pix.flags(),
                pix.name,
                pix.components,
                pix.bits_per_pixel
            );
            assert_eq!(PixelFormat::parse(&rebuilt).unwrap(), pix);
        }
    }

    #[test]
    fn missing_counts_are_malformed() {
        let err = PixelFormat::parse("IO...   yuv420p   3").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedReport {
                report: "pixel format",
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_count_is_malformed() {
        assert!(PixelFormat::parse("IO...   yuv420p   x   12").is_err());
    }

    #[test]
    fn short_line_is_malformed() {
        assert!(PixelFormat::parse("IO...").is_err());
    }
}
