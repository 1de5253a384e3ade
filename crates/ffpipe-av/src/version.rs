//! Version and build-banner reports.
//!
//! Two report kinds live here: the `-version` table on stdout (component
//! name followed by a raw version string per line) and the build banner the
//! tool prints to stderr when invoked without arguments. Both are scraped
//! with fixed offsets documented against captured output; no decomposition
//! of the version strings themselves is attempted.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Component versions from the `-version` report, keyed by component name.
///
/// ```text
/// FFmpeg SVN-r26400
/// libavutil     50.36. 0 / 50.36. 0
/// libavcodec    52.108. 0 / 52.108. 0
/// ```
pub type VersionReport = Catalog<String>;

/// Split each `-version` line at its first space into name and version.
///
/// Lines without a space carry no name/version pair and are skipped. No
/// uniqueness validation; a repeated name keeps its last version.
pub fn parse_version_report(text: &str) -> VersionReport {
    let mut report = VersionReport::new();
    for raw in text.lines() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        let Some((name, version)) = line.split_once(' ') else {
            continue;
        };
        report.insert(name, version.trim_start().to_string());
    }
    report
}

// Banner line layout, against the captured sample:
//
//   FFmpeg version SVN-r26400, Copyright (c) 2000-2011 the FFmpeg developers
//     built on Jan 17 2011 22:59:06 with gcc 4.5.2
//     configuration: --enable-memalign-hack --enable-gpl ...
//     libavutil     50.36. 0 / 50.36. 0
//
/// Leading text of the version line.
const VERSION_LABEL: &str = "FFmpeg version ";
/// Indented classifier tokens start at column 2.
const CLASSIFIER_COL: usize = 2;
/// The build line's text starts after "  built on ".
const BUILT_VALUE_COL: usize = 11;
/// The configuration line's text starts after "  configuration: ".
const CONFIGURATION_VALUE_COL: usize = 17;

/// Build information scraped from the no-argument banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Tool version substring from the banner's first line.
    pub version: Option<String>,
    /// Build date and toolchain text.
    pub built: Option<String>,
    /// Configure-time option string.
    pub configuration: Option<String>,
    /// Bundled library versions, keyed by library name.
    pub libraries: Catalog<String>,
}

/// Classify each banner line by its fixed-prefix pattern.
///
/// Lines matching none of the known patterns are dropped.
pub fn parse_banner(text: &str) -> BuildInfo {
    let mut info = BuildInfo::default();
    for raw in text.lines() {
        let line = raw.trim_end();
        if let Some(tail) = line.strip_prefix(VERSION_LABEL) {
            let version = tail.split(',').next().unwrap_or(tail);
            info.version = Some(version.to_string());
        } else if classifier_is(line, "built") {
            info.built = Some(line.get(BUILT_VALUE_COL..).unwrap_or_default().to_string());
        } else if classifier_is(line, "configuration") {
            info.configuration = Some(
                line.get(CONFIGURATION_VALUE_COL..)
                    .unwrap_or_default()
                    .to_string(),
            );
        } else if classifier_is(line, "lib") {
            let library = &line[CLASSIFIER_COL..];
            if let Some((name, version)) = library.split_once(' ') {
                info.libraries.insert(name, version.trim_start().to_string());
            }
        }
    }
    info
}

fn classifier_is(line: &str, token: &str) -> bool {
    line.get(CLASSIFIER_COL..CLASSIFIER_COL + token.len()) == Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "\
FFmpeg version SVN-r26400, Copyright (c) 2000-2011 the FFmpeg developers
  built on Jan 17 2011 22:59:06 with gcc 4.5.2
  configuration: --enable-memalign-hack --enable-gpl --enable-version3
  libavutil     50.36. 0 / 50.36. 0
  libavcodec    52.108. 0 / 52.108. 0
  libavformat   52.93. 0 / 52.93. 0
Hyper fast Audio and Video encoder
usage: ffmpeg [options] [[infile options] -i infile]...
";

    #[test]
    fn version_report_splits_on_first_space() {
        let report = parse_version_report("libavutil     50.36. 0 / 50.36. 0\n");
        assert_eq!(
            report.get("libavutil").map(String::as_str),
            Some("50.36. 0 / 50.36. 0")
        );
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn version_report_keeps_line_order() {
        let text = "FFmpeg SVN-r26400\nlibavutil 50.36. 0\nlibavcodec 52.108. 0\n";
        let report = parse_version_report(text);
        let names: Vec<&str> = report.names().collect();
        assert_eq!(names, vec!["FFmpeg", "libavutil", "libavcodec"]);
    }

    #[test]
    fn version_report_last_occurrence_wins() {
        let report = parse_version_report("libx 1.0\nlibx 2.0\n");
        assert_eq!(report.get("libx").map(String::as_str), Some("2.0"));
    }

    #[test]
    fn version_report_skips_lines_without_space() {
        let report = parse_version_report("loneword\nlibx 1.0\n");
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn banner_version_stops_at_comma() {
        let info = parse_banner(BANNER);
        assert_eq!(info.version.as_deref(), Some("SVN-r26400"));
    }

    #[test]
    fn banner_built_and_configuration() {
        let info = parse_banner(BANNER);
        assert_eq!(
            info.built.as_deref(),
            Some("Jan 17 2011 22:59:06 with gcc 4.5.2")
        );
        assert_eq!(
            info.configuration.as_deref(),
            Some("--enable-memalign-hack --enable-gpl --enable-version3")
        );
    }

    #[test]
    fn banner_collects_library_lines() {
        let info = parse_banner(BANNER);
        let names: Vec<&str> = info.libraries.names().collect();
        assert_eq!(names, vec!["libavutil", "libavcodec", "libavformat"]);
        assert_eq!(
            info.libraries.get("libavcodec").map(String::as_str),
            Some("52.108. 0 / 52.108. 0")
        );
    }

    #[test]
    fn banner_drops_unclassified_lines() {
        let info = parse_banner("Hyper fast Audio and Video encoder\nusage: ffmpeg ...\n");
        assert_eq!(info, BuildInfo::default());
    }
}
