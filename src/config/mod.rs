//! Configuration management

use crate::filter::ExcludeFilter;
use crate::types::DepcopyError;
use clap::Parser;
use std::path::PathBuf;

/// Copy files and everything they include into a destination directory
#[derive(Debug, Parser)]
#[command(name = "depcopy", version, about)]
pub struct Cli {
    /// Show what would be copied without copying anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip root files whose basename matches GLOB (repeatable)
    #[arg(short = 'X', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Log resolution details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to copy, followed by the destination directory
    #[arg(required = true, num_args = 2.., value_name = "FILE... DESTDIR")]
    pub paths: Vec<PathBuf>,
}

/// Validated runtime configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Root files, in command-line order
    pub files: Vec<PathBuf>,

    /// Directory every file is copied into
    pub destination: PathBuf,

    /// Report only, copy nothing
    pub dry_run: bool,

    /// Basename globs for root files to skip
    pub exclude_patterns: Vec<String>,

    pub verbose: bool,
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DepcopyError> {
        if self.files.is_empty() {
            return Err(DepcopyError::Config("No input files given".to_string()));
        }

        if !self.destination.is_dir() {
            return Err(DepcopyError::NotADirectory(self.destination.clone()));
        }

        // Compile once here so a bad pattern fails before any file is read
        self.exclude_filter()?;

        Ok(())
    }

    /// Compile the exclude patterns
    pub fn exclude_filter(&self) -> Result<ExcludeFilter, DepcopyError> {
        ExcludeFilter::new(self.exclude_patterns.as_slice())
    }
}

impl TryFrom<Cli> for Config {
    type Error = DepcopyError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mut files = cli.paths;
        let destination = files
            .pop()
            .ok_or_else(|| DepcopyError::Config("Missing destination directory".to_string()))?;

        let config = Config {
            files,
            destination,
            dry_run: cli.dry_run,
            exclude_patterns: cli.exclude,
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_splits_destination() {
        let temp = TempDir::new().expect("create temp dir");
        let dest = temp.path().to_str().expect("utf-8 temp path");
        let cli = Cli::try_parse_from(["depcopy", "-n", "-X", "*.dis", "a.ctb", "b.ctb", dest])
            .expect("parse");

        let config = Config::try_from(cli).expect("valid config");

        assert_eq!(config.files, vec![PathBuf::from("a.ctb"), PathBuf::from("b.ctb")]);
        assert_eq!(config.destination, temp.path());
        assert!(config.dry_run);
        assert_eq!(config.exclude_patterns, vec!["*.dis".to_string()]);
    }

    #[test]
    fn test_cli_requires_file_and_destination() {
        assert!(Cli::try_parse_from(["depcopy"]).is_err());
        assert!(Cli::try_parse_from(["depcopy", "only-one"]).is_err());
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "depcopy",
            "--dry-run",
            "--exclude",
            "a*",
            "--exclude=b*",
            "--verbose",
            "x",
            "y",
        ])
        .expect("parse");
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.exclude, vec!["a*".to_string(), "b*".to_string()]);
    }

    #[test]
    fn test_destination_must_be_directory() {
        let temp = TempDir::new().expect("create temp dir");
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x").expect("write file");

        let config = Config {
            files: vec![PathBuf::from("a.ctb")],
            destination: file,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DepcopyError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_bad_exclude_pattern_rejected() {
        let temp = TempDir::new().expect("create temp dir");
        let config = Config {
            files: vec![PathBuf::from("a.ctb")],
            destination: temp.path().to_path_buf(),
            exclude_patterns: vec!["[oops".to_string()],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(DepcopyError::Config(_))));
    }
}
