//! Project path layout
//!
//! The matcher only ever sees relative `/`-separated strings. This module is
//! where absolute filesystem paths get turned into those strings.

use std::path::{Component, Path, PathBuf};

/// Name of the selection profile at the project root
pub const CONFIG_FILE_NAME: &str = "pathpick.toml";

/// Directory (under the root) that exports land in by default
pub const DEFAULT_OUTPUT_DIR: &str = "tmp";

/// File name of the default knowledge-base artifact
pub const DEFAULT_OUTPUT_FILE: &str = "all_in_one_knowledge_base.txt";

/// Paths derived from a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/pathpick.toml`
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// `<root>/tmp/all_in_one_knowledge_base.txt`
    pub fn default_output(&self) -> PathBuf {
        self.root.join(DEFAULT_OUTPUT_DIR).join(DEFAULT_OUTPUT_FILE)
    }

    /// Render `path` relative to the root with `/` separators.
    ///
    /// Paths outside the root are rendered as given (minus any prefix or root
    /// component), which the matcher treats like any other relative path.
    pub fn relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        to_slash(relative)
    }
}

/// Join the normal components of `path` with `/`
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str(&part.to_string_lossy());
            },
            Component::ParentDir => {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str("..");
            },
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {},
        }
    }
    out
}
