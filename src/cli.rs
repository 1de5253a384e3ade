use clap::Parser;
use std::path::PathBuf;

/// Smoke-test harness: run every report query against one media file and
/// print the results.
#[derive(Parser)]
#[command(name = "ffpipe")]
#[command(author, version, about = "Drive the ffmpeg CLI and scrape its text reports")]
pub struct Cli {
    /// Media file to probe
    #[arg(default_value = "test.mp4")]
    pub input: PathBuf,

    /// Path to the ffmpeg executable (defaults to `ffmpeg` on PATH)
    #[arg(long)]
    pub ffmpeg: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
