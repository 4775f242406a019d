//! The `shutter decode` command: bounded, orientation-corrected decoding.

use clap::Args;
use shutter_core::{Config, Shutter};
use std::path::PathBuf;

/// Arguments for the `decode` command.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Image file to decode
    pub image: PathBuf,

    /// Write the decoded bitmap to this path (format from extension)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Override the configured target width
    #[arg(long)]
    pub max_width: Option<u32>,
}

/// Execute the decode command.
pub async fn execute(args: DecodeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(max_width) = args.max_width {
        anyhow::ensure!(max_width > 0, "--max-width must be > 0");
        config.limits.max_width = max_width;
    }

    let shutter = Shutter::new(config);
    let decoded = shutter.decoder().decode(&args.image).await?;

    println!(
        "{}: {}x{} (sample factor {}, orientation {:?})",
        args.image.display(),
        decoded.width,
        decoded.height,
        decoded.sample_factor,
        decoded.orientation,
    );

    if let Some(out) = args.out {
        decoded.image.save(&out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}
