use super::Namespace;
use std::path::{Path, PathBuf};

/// Handler namespace backed by a real directory tree.
///
/// A sub-directory is a namespace node; a file named
/// `<prefix><segment><suffix>` is a handler node. Both prefix and suffix
/// default to empty, in which case any plain file whose name equals the
/// segment counts as a handler.
///
/// Lookups are synchronous filesystem existence checks; segment matching is
/// literal and case-sensitive (subject to the underlying filesystem). The
/// tree is expected to be stable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DirNamespace {
    root: PathBuf,
    prefix: String,
    suffix: String,
}

impl DirNamespace {
    /// Create a namespace rooted at `root` with no handler naming convention.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Apply a handler file naming convention, e.g. prefix `"handler_"` and
    /// suffix `".toml"` so that segment `members` maps to the file
    /// `handler_members.toml`.
    #[must_use]
    pub fn with_naming(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir_at(&self, at: &[&str]) -> PathBuf {
        let mut dir = self.root.clone();
        for seg in at {
            dir.push(seg);
        }
        dir
    }
}

impl Namespace for DirNamespace {
    fn has_namespace(&self, at: &[&str], segment: &str) -> bool {
        self.dir_at(at).join(segment).is_dir()
    }

    fn has_handler(&self, at: &[&str], segment: &str) -> bool {
        let file_name = format!("{}{}{}", self.prefix, segment, self.suffix);
        self.dir_at(at).join(file_name).is_file()
    }
}
