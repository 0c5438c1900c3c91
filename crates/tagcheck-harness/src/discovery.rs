//! Rule file discovery.

use globset::{Glob, GlobMatcher};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tagcheck_domain::{Error, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Finds rule files below a root directory
pub struct RuleDiscovery {
    root: PathBuf,
    matcher: GlobMatcher,
}

impl RuleDiscovery {
    /// Create a discovery for `root`, matching `pattern` against paths
    /// relative to it
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)
            .map_err(|e| Error::configuration(format!("Invalid rule pattern '{pattern}': {e}")))?
            .compile_matcher();
        Ok(Self {
            root: root.into(),
            matcher,
        })
    }

    /// Every matching file, in filesystem order
    ///
    /// A root that does not exist yields nothing.
    pub fn discover(&self) -> Vec<PathBuf> {
        let paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .strip_prefix(&self.root)
                    .is_ok_and(|relative| self.matcher.is_match(relative))
            })
            .map(walkdir::DirEntry::into_path)
            .collect();

        debug!(
            root = %self.root.display(),
            count = paths.len(),
            "Discovered rule files"
        );
        paths
    }

    /// Pick one discovered file by exact path, else by file name, else by
    /// file stem (first match wins)
    pub fn resolve(paths: &[PathBuf], name: &str) -> Result<PathBuf> {
        let wanted = Path::new(name);
        paths
            .iter()
            .find(|p| p.as_path() == wanted)
            .or_else(|| paths.iter().find(|p| p.file_name() == Some(OsStr::new(name))))
            .or_else(|| paths.iter().find(|p| p.file_stem() == Some(OsStr::new(name))))
            .cloned()
            .ok_or_else(|| Error::not_found(format!("rule file '{name}'")))
    }
}
