//! # File System Layout Module / 文件系统布局模块
//!
//! This module computes where the editor is installed, where its executable
//! lives, and where per-platform artifacts are written.
//!
//! 此模块计算编辑器的安装位置、其可执行文件的位置，以及按平台写入产物的位置。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Platform;

/// Directory under the root that the downloader installs into.
pub const INSTALL_DIR_NAME: &str = "UnityInstall";
/// Directory under the root that collects results and logs.
pub const ARTIFACTS_DIR_NAME: &str = "TestArtifacts";
/// Run summary written next to the per-platform artifacts.
pub const RUN_SUMMARY_FILE: &str = "RunSummary.json";

/// The operating system family the editor was installed for.
/// Only Apple hosts use a different executable layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Other,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostOs::MacOs
        } else {
            HostOs::Other
        }
    }
}

/// Filesystem locations for one run.
/// 单次运行的文件系统位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentPaths {
    /// Project root; also the project path handed to the editor.
    /// 项目根目录；同时也是传给编辑器的项目路径。
    pub root: PathBuf,
    pub install_dir: PathBuf,
    pub editor_executable: PathBuf,
    pub artifacts_dir: PathBuf,
}

impl EnvironmentPaths {
    /// Lays out the paths under `root` without touching the filesystem.
    pub fn new(root: PathBuf, host: HostOs) -> Self {
        let install_dir = root.join(INSTALL_DIR_NAME);
        let editor_executable = editor_executable(&install_dir, host);
        let artifacts_dir = root.join(ARTIFACTS_DIR_NAME);
        Self {
            root,
            install_dir,
            editor_executable,
            artifacts_dir,
        }
    }

    /// Canonicalizes `root` and lays out the paths under it.
    pub fn resolve(root: &Path, host: HostOs) -> Result<Self> {
        Ok(Self::new(absolute_path(root)?, host))
    }

    /// Creates the artifact directory if it does not exist yet.
    pub fn ensure_artifacts_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.artifacts_dir).with_context(|| {
            format!(
                "Failed to create artifact directory: {}",
                self.artifacts_dir.display()
            )
        })
    }

    pub fn test_results_path(&self, platform: Platform) -> PathBuf {
        self.artifacts_dir
            .join(format!("{platform}_TestResults.txt"))
    }

    pub fn editor_log_path(&self, platform: Platform) -> PathBuf {
        self.artifacts_dir.join(format!("{platform}_EditorLog.txt"))
    }

    pub fn run_summary_path(&self) -> PathBuf {
        self.artifacts_dir.join(RUN_SUMMARY_FILE)
    }
}

/// The editor executable inside `install_dir` for the given host.
///
/// On macOS the downloader installs an application bundle, so the binary sits
/// at `Unity.app/Contents/MacOS/Unity`; elsewhere it is `Unity` directly.
pub fn editor_executable(install_dir: &Path, host: HostOs) -> PathBuf {
    match host {
        HostOs::MacOs => install_dir.join("Unity.app/Contents/MacOS/Unity"),
        HostOs::Other => install_dir.join("Unity"),
    }
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
