//! Exclusion of root files by basename glob

use crate::types::{DepcopyError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled `--exclude` patterns
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    set: GlobSet,
    patterns: Vec<String>,
}

impl ExcludeFilter {
    /// Compile exclude globs
    ///
    /// # Errors
    /// * `DepcopyError::Config` if any pattern is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|e| {
                DepcopyError::Config(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|e| DepcopyError::Config(format!("Failed to build exclude set: {}", e)))?;

        Ok(Self {
            set,
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
        })
    }

    /// A filter that excludes nothing
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }

    /// Whether the basename of `path` matches any pattern.
    ///
    /// Directory components are ignored, so `*.ctb` matches `tables/en.ctb`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.set.is_match(Path::new(name)),
            None => false,
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Default for ExcludeFilter {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = ExcludeFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_excluded(Path::new("anything.ctb")));
    }

    #[test]
    fn test_matches_basename_only() {
        let filter = ExcludeFilter::new(&["*.dis"]).expect("valid patterns");
        assert!(filter.is_excluded(Path::new("tables/sub/en-us.dis")));
        assert!(!filter.is_excluded(Path::new("tables.dis/en-us.ctb")));
    }

    #[test]
    fn test_directory_pattern_never_matches() {
        let filter = ExcludeFilter::new(&["tables/*"]).expect("valid patterns");
        assert!(!filter.is_excluded(Path::new("tables/en.ctb")));
    }

    #[test]
    fn test_question_mark_and_class() {
        let filter = ExcludeFilter::new(&["de-g?.ctb", "[xy]*.utb"]).expect("valid patterns");
        assert!(filter.is_excluded(Path::new("de-g2.ctb")));
        assert!(!filter.is_excluded(Path::new("de-g10.ctb")));
        assert!(filter.is_excluded(Path::new("x-test.utb")));
        assert!(!filter.is_excluded(Path::new("z-test.utb")));
        assert_eq!(filter.patterns().len(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = ExcludeFilter::new(&["[unclosed"]).unwrap_err();
        assert!(matches!(err, DepcopyError::Config(_)));
        assert!(err.to_string().contains("[unclosed"));
    }

    #[test]
    fn test_path_without_file_name() {
        let filter = ExcludeFilter::new(&["*"]).expect("valid patterns");
        assert!(!filter.is_excluded(Path::new("/")));
    }
}
