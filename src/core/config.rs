//! # Settings Module / 配置模块
//!
//! Optional TOML settings that fill in what the command line leaves out.
//! Command-line values always win over the file.
//!
//! 可选的 TOML 配置，用于补全命令行未提供的内容。命令行取值始终优先于文件。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{EditorVersion, RunConfiguration, RuntimeFlavor, TestPhase};

/// Looked up in the project directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "EditorTests.toml";

/// Package that provides the downloader command.
pub const DOWNLOADER_PACKAGE: &str = "unity-downloader-cli";

/// Represents the settings file.
/// Every key is optional and falls back to the defaults below.
///
/// 代表配置文件。
/// 每个键都是可选的，缺省时使用下列默认值。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerSettings {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default)]
    pub language: Option<String>,

    /// Program used to install the downloader package.
    /// 用于安装下载器包的程序。
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Extra package index the downloader is published to.
    /// 发布下载器的额外包索引。
    #[serde(default = "default_package_index_url")]
    pub package_index_url: String,

    /// Program used to download the editor build.
    /// 用于下载编辑器版本的程序。
    #[serde(default = "default_downloader")]
    pub downloader: String,

    /// Default for `--version`.
    #[serde(default)]
    pub version: Option<EditorVersion>,

    /// Default for `--runtime`.
    #[serde(default)]
    pub runtime: Option<RuntimeFlavor>,

    /// Default for `--testPlatform`.
    #[serde(default)]
    pub test_platform: Option<TestPhase>,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            language: None,
            package_manager: default_package_manager(),
            package_index_url: default_package_index_url(),
            downloader: default_downloader(),
            version: None,
            runtime: None,
            test_platform: None,
        }
    }
}

impl RunnerSettings {
    /// Fills every unset field of `config` from these settings.
    pub fn apply_to(&self, mut config: RunConfiguration) -> RunConfiguration {
        config.version = config.version.or(self.version);
        config.runtime = config.runtime.or(self.runtime);
        config.test_phase = config.test_phase.or(self.test_platform);
        config
    }
}

fn default_package_manager() -> String {
    "pip".to_string()
}

fn default_package_index_url() -> String {
    "https://artifactory.eu-cph-1.unityops.net/api/pypi/common-python/simple".to_string()
}

fn default_downloader() -> String {
    DOWNLOADER_PACKAGE.to_string()
}

/// Reads and parses a settings file.
pub fn load_settings(path: &Path) -> Result<RunnerSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Finds the settings for a run.
///
/// An explicit path must exist. Without one, `EditorTests.toml` in
/// `project_root` is used when present, and built-in defaults otherwise.
/// Returns the settings together with the file they came from, if any.
///
/// 查找本次运行的配置。
/// 显式给出的路径必须存在。未给出时，若 `project_root` 中存在 `EditorTests.toml`
/// 则使用它，否则使用内置默认值。返回配置及其来源文件（如有）。
pub fn locate_settings(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<(RunnerSettings, Option<PathBuf>)> {
    match explicit {
        Some(path) => Ok((load_settings(path)?, Some(path.to_path_buf()))),
        None => {
            let candidate = project_root.join(DEFAULT_SETTINGS_FILE);
            if candidate.is_file() {
                Ok((load_settings(&candidate)?, Some(candidate)))
            } else {
                log::debug!(
                    "No settings file at {}; using defaults",
                    candidate.display()
                );
                Ok((RunnerSettings::default(), None))
            }
        }
    }
}
