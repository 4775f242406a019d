//! The `shutter config` command for configuration management.
//!
//! Besides the raw TOML, `show` prints where the tilde-expanded paths
//! actually land (media index database, capture destination directory),
//! since those are the two locations shutter writes to at runtime.

use clap::{Args, Subcommand};
use shutter_core::Config;
use std::path::Path;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration and its resolved paths
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            print!("{}", render(&config)?);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let config = init_at(&Config::default_path(), force)?;

            // The capture destination must exist before the first capture
            // launch can mint a file there
            let capture_dir = config.capture_dir();
            std::fs::create_dir_all(&capture_dir)?;

            println!(
                "Configuration initialized at: {}",
                Config::default_path().display()
            );
            println!("Capture directory: {}", capture_dir.display());
        }
    }

    Ok(())
}

/// Render a config as TOML followed by its resolved runtime paths.
fn render(config: &Config) -> anyhow::Result<String> {
    let mut out = config.to_toml()?;
    out.push_str("\n# resolved paths\n");
    out.push_str(&format!(
        "#   index db:    {}\n",
        config.index_db_path().display()
    ));
    out.push_str(&format!(
        "#   capture dir: {}\n",
        config.capture_dir().display()
    ));
    Ok(out)
}

/// Write a default config file at `path`, refusing to clobber unless forced.
///
/// Returns the written config so callers can act on its resolved paths.
fn init_at(path: &Path, force: bool) -> anyhow::Result<Config> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = Config::default();
    std::fs::write(path, config.to_toml()?)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_a_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_at(&path, false).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.limits.max_width, 800);
    }

    #[test]
    fn test_init_refuses_to_clobber_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\nmax_width = 640\n").unwrap();

        let err = init_at(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        // Untouched: the customized value is still there
        let kept = Config::load_from(&path).unwrap();
        assert_eq!(kept.limits.max_width, 640);
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\nmax_width = 640\n").unwrap();

        init_at(&path, true).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.limits.max_width, 800);
    }

    #[test]
    fn test_init_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");

        init_at(&path, false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_includes_resolved_paths() {
        let rendered = render(&Config::default()).unwrap();
        assert!(rendered.contains("[limits]"));
        assert!(rendered.contains("# resolved paths"));
        assert!(rendered.contains("index db:"));
        assert!(rendered.contains("capture dir:"));
    }
}
