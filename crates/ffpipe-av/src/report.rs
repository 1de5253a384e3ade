//! Line filtering for collected report streams.
//!
//! Every ffmpeg report is preceded by header text (column legends on stdout,
//! the build banner on stderr). [`ReportLines`] skips that header up to a
//! report-specific marker line and yields the body lines that follow.

use std::str::Lines;

/// Lazy iterator over the body lines of one collected report stream.
///
/// Lines are discarded until one begins with the marker substring; the marker
/// line itself is also discarded. Each following line is yielded trimmed of
/// trailing whitespace, and iteration stops before the first line that is
/// empty after trimming. The iterator is finite and not restartable.
///
/// If the marker never appears, the iterator yields nothing. That is the
/// contract, not an error: callers decode an empty report into an empty
/// result set.
pub struct ReportLines<'a> {
    lines: Lines<'a>,
    marker: &'a str,
    skipping: bool,
    done: bool,
}

impl<'a> ReportLines<'a> {
    /// Filter `text` down to the body lines following `marker`.
    pub fn new(text: &'a str, marker: &'a str) -> Self {
        Self {
            lines: text.lines(),
            marker,
            skipping: true,
            done: false,
        }
    }
}

impl<'a> Iterator for ReportLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        while self.skipping {
            let line = self.lines.next()?;
            if line.starts_with(self.marker) {
                self.skipping = false;
            }
        }
        let line = self.lines.next()?.trim_end();
        if line.is_empty() {
            self.done = true;
            return None;
        }
        Some(line)
    }
}
