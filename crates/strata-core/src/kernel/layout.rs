use std::path::{Path, PathBuf};

use crate::kernel::constants;

/// Where a project keeps its configuration, sources and scratch files.
///
/// Every path is derived from the project root by convention; only the
/// root and the project namespace can be chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    namespace: String,
}

impl ProjectLayout {
    /// Layout rooted at `root` using the default project namespace.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            namespace: constants::PROJECT_NAMESPACE.to_string(),
        }
    }

    /// Override the namespace the project's sources are registered under.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project namespace, without a trailing separator.
    pub fn namespace(&self) -> &str {
        self.namespace.trim_end_matches('\\')
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join(constants::CONFIG_DIR_NAME)
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(constants::SRC_DIR_NAME)
    }

    pub fn tmp_dir(&self) -> PathBuf {
        self.root.join(constants::TMP_DIR_NAME)
    }

    pub fn pid_file(&self) -> PathBuf {
        self.tmp_dir().join(constants::PID_FILE_NAME)
    }

    pub fn installed_manifest(&self) -> PathBuf {
        self.root.join(constants::INSTALLED_MANIFEST)
    }
}
