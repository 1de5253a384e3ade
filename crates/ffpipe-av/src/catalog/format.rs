//! Decoder for the `-formats` report.
//!
//! Captured sample of the table body:
//!
//! ```text
//!  --
//!  DE 3g2
//!  D  4xm
//!   E a64
//! ```
//!
//! Column 0 is padding; demux/mux flags sit at columns 1 and 2 and the name
//! begins at column 4.

use super::Catalog;
use crate::error::{Error, Result};
use crate::report::ReportLines;
use serde::{Deserialize, Serialize};

const REPORT: &str = "format";

/// Header separator preceding the table body.
const SEPARATOR: &str = " --";

const COL_DEMUXING: usize = 1;
const COL_MUXING: usize = 2;
const COL_NAME: usize = 4;

/// One container format supported by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub name: String,
    pub demuxing: bool,
    pub muxing: bool,
}

impl Format {
    /// Decode one table line.
    pub fn parse(line: &str) -> Result<Self> {
        let name = line
            .get(COL_NAME..)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::malformed_report(REPORT, line))?;
        let cells = line.as_bytes();

        Ok(Self {
            name: name.to_string(),
            demuxing: cells[COL_DEMUXING] == b'D',
            muxing: cells[COL_MUXING] == b'E',
        })
    }

    /// Re-encode the two flag columns as they appear in the table.
    pub fn flags(&self) -> String {
        [
            if self.demuxing { 'D' } else { ' ' },
            if self.muxing { 'E' } else { ' ' },
        ]
        .iter()
        .collect()
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.flags().trim_end())
    }
}

/// Decode a collected `-formats` stdout into a name-keyed catalog.
pub fn parse_format_table(text: &str) -> Result<Catalog<Format>> {
    let mut formats = Catalog::new();
    for line in ReportLines::new(text, SEPARATOR) {
        let format = Format::parse(line)?;
        formats.insert(format.name.clone(), format);
    }
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_directions() {
        let format = Format::parse(" DE 3g2").unwrap();
        assert_eq!(format.name, "3g2");
        assert!(format.demuxing);
        assert!(format.muxing);
    }

    #[test]
    fn decodes_demux_only() {
        let format = Format::parse(" D  4xm").unwrap();
        assert_eq!(format.name, "4xm");
        assert!(format.demuxing);
        assert!(!format.muxing);
    }

    #[test]
    fn decodes_mux_only() {
        let format = Format::parse("  E a64").unwrap();
        assert_eq!(format.name, "a64");
        assert!(!format.demuxing);
        assert!(format.muxing);
    }

    #[test]
    fn flags_round_trip() {
        for line in [" DE 3g2", " D  4xm", "  E a64"] {
            let format = Format::parse(line).unwrap();
            let rebuilt = format!(" {} {}", format.flags(), format.name);
            assert_eq!(Format::parse(&rebuilt).unwrap(), format);
        }
    }

    #[test]
    fn short_line_is_malformed() {
        let err = Format::parse(" DE").unwrap_err();
        assert!(matches!(err, Error::MalformedReport { report: "format", .. }));
    }

    #[test]
    fn comma_separated_aliases_stay_one_name() {
        // The tool lists muxer aliases as one comma-joined name field.
        let format = Format::parse(" DE mov,mp4,m4a,3gp,3g2,mj2").unwrap();
        assert_eq!(format.name, "mov,mp4,m4a,3gp,3g2,mj2");
    }
}
