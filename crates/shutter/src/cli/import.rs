//! The `shutter import` command: register a file in the media index.
//!
//! Runs the gallery half of the acquisition pipeline for real: the file gets
//! a locator, and the locator is resolved back through the index to prove it
//! round-trips before anything tries to decode it.

use clap::Args;
use shutter_core::{ImageReference, LocatorResolver, MediaIndex, Shutter, SourceKind};
use std::path::PathBuf;

/// Arguments for the `import` command.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Image file to register
    pub file: PathBuf,

    /// Title stored with the entry
    #[arg(long, default_value = "")]
    pub title: String,

    /// Description stored with the entry
    #[arg(long, default_value = "")]
    pub description: String,
}

/// Execute the import command.
pub async fn execute(args: ImportArgs, config: shutter_core::Config) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.file.exists(),
        "File not found: {}",
        args.file.display()
    );
    let file = std::fs::canonicalize(&args.file)?;

    let shutter = Shutter::new(config);
    let index = shutter.open_index()?;

    let locator = index.create_entry(&args.title, &args.description, &file)?;
    tracing::info!("Registered {} as {}", file.display(), locator);

    // Resolve the fresh locator back, exactly as a completed pick would
    let reference = ImageReference {
        kind: SourceKind::Gallery,
        locator: locator.clone(),
    };
    let resolved = LocatorResolver::new(&index).resolve(&reference, None)?;

    println!("{} -> {}", locator, resolved.as_path().display());
    Ok(())
}
