//! The `shutter info` command: embedded orientation and GPS metadata.

use clap::Args;
use serde::Serialize;
use shutter_core::{Config, GeoCoordinate, MetadataReader, OrientationTag};
use std::path::PathBuf;

/// Arguments for the `info` command.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image file to inspect
    pub image: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ImageInfo {
    path: PathBuf,
    orientation: OrientationTag,
    rotation_degrees: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<GeoCoordinate>,
}

/// Execute the info command.
pub async fn execute(args: InfoArgs, _config: Config) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.image.exists(),
        "File not found: {}",
        args.image.display()
    );

    // Both reads absorb their own failures into defaults
    let orientation = MetadataReader::read_orientation(&args.image);
    let location = MetadataReader::read_location(&args.image);

    let info = ImageInfo {
        path: args.image,
        orientation,
        rotation_degrees: orientation.degrees(),
        location,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.path.display());
        println!(
            "  orientation: {:?} ({} degrees)",
            info.orientation, info.rotation_degrees
        );
        match info.location {
            Some(position) => println!(
                "  location:    {:.6}, {:.6}",
                position.latitude, position.longitude
            ),
            None => println!("  location:    none"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_info_on_metadata_free_file_succeeds() {
        // Metadata failures are absorbed into defaults, so info must not
        // fail even when the bytes are not an image at all
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opaque.bin");
        std::fs::write(&path, b"no metadata in here").unwrap();

        let args = InfoArgs {
            image: path,
            json: true,
        };
        assert!(execute(args, Config::default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_info_on_missing_file_fails() {
        let args = InfoArgs {
            image: PathBuf::from("/nonexistent/photo.jpg"),
            json: false,
        };
        assert!(execute(args, Config::default()).await.is_err());
    }
}
