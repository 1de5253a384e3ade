mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use ffpipe_av::{check_tool, Ffmpeg};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults from the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "ffpipe=debug,ffpipe_av=debug".to_string()
        } else {
            "ffpipe=info,ffpipe_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let ffmpeg = match cli.ffmpeg {
        Some(path) => Ffmpeg::with_binary(path),
        None => Ffmpeg::new(),
    };

    let tool = check_tool(&ffmpeg.binary().to_string_lossy());
    if let Some(ref version) = tool.version {
        tracing::info!("using {}", version);
    }

    let version = ffmpeg.version()?;
    println!("version: {}", serde_json::to_string_pretty(&version)?);

    let build_info = ffmpeg.build_info()?;
    println!("build info: {}", serde_json::to_string_pretty(&build_info)?);

    let codecs = ffmpeg.codecs()?;
    println!("codecs: {}", serde_json::to_string_pretty(&codecs)?);

    let formats = ffmpeg.formats()?;
    println!("formats: {}", serde_json::to_string_pretty(&formats)?);

    let pixel_formats = ffmpeg.pixel_formats()?;
    println!("pix_fmts: {}", serde_json::to_string_pretty(&pixel_formats)?);

    let media_info = ffmpeg.probe(&cli.input)?;
    println!(
        "info of {}: {}",
        cli.input.display(),
        serde_json::to_string_pretty(&media_info)?
    );

    Ok(())
}
