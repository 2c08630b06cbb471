//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Site name used when no override is given.
const DEFAULT_SITE_NAME: &str = "TechByBookk";

/// Command line configuration for the site generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "techbybookk", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name
    #[arg(long)]
    pub name: Option<String>,

    /// Skip opening the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the site name override is empty or the output path
    /// points at an existing non-directory.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            bail!("Site name must not be empty");
        }

        if self.output.exists() && !self.output.is_dir() {
            bail!(
                "Output path exists and is not a directory: {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Returns the configured site name or the default.
    pub fn site_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SITE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_name_default() {
        // Arrange
        let config = Config {
            output: PathBuf::from("dist"),
            name: None,
            no_open: true,
        };

        // Act & Assert
        assert_eq!(config.site_name(), "TechByBookk");
    }

    #[test]
    fn test_site_name_override() {
        // Arrange
        let config = Config {
            output: PathBuf::from("dist"),
            name: Some("MyBlog".to_string()),
            no_open: true,
        };

        // Act & Assert
        assert_eq!(config.site_name(), "MyBlog");
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        // Arrange
        let config = Config {
            output: PathBuf::from("dist"),
            name: Some("   ".to_string()),
            no_open: true,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Blank site name should be rejected");
    }

    #[test]
    fn test_validate_accepts_fresh_output_dir() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let config = Config {
            output: dir.path().join("site"),
            name: None,
            no_open: true,
        };

        // Act & Assert
        assert!(config.validate().is_ok(), "Nonexistent output dir is fine");
    }

    #[test]
    fn test_validate_rejects_file_output_path() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let file_path = dir.path().join("occupied");
        std::fs::write(&file_path, "x").expect("Should write marker file");
        let config = Config {
            output: file_path,
            name: None,
            no_open: true,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "File at output path should be rejected");
    }
}
