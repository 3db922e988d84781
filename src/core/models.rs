//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures used throughout the runner: the
//! enumerated command-line values, the parsed run configuration, and the
//! invocation/result pair exchanged with the process runner.
//!
//! 此模块定义了整个运行器中使用的数据结构：枚举的命令行取值、
//! 解析后的运行配置，以及与进程运行器交换的调用/结果对。

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// A target platform the editor can run tests for.
/// The textual form is the editor's own build-target name.
///
/// 编辑器可以为其运行测试的目标平台。
/// 文本形式即编辑器自身的构建目标名称。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Platform {
    #[value(name = "Editor")]
    Editor,
    #[value(name = "StandaloneLinux")]
    StandaloneLinux,
    #[value(name = "StandaloneLinux64")]
    StandaloneLinux64,
    #[value(name = "StandaloneOSX")]
    StandaloneOSX,
    #[value(name = "StandaloneWindows")]
    StandaloneWindows,
    #[value(name = "StandaloneWindows64")]
    StandaloneWindows64,
    #[value(name = "Android")]
    Android,
    #[value(name = "iOS")]
    #[serde(rename = "iOS")]
    IOS,
}

impl Platform {
    /// All known platforms, in declaration order.
    pub const ALL: [Platform; 8] = [
        Platform::Editor,
        Platform::StandaloneLinux,
        Platform::StandaloneLinux64,
        Platform::StandaloneOSX,
        Platform::StandaloneWindows,
        Platform::StandaloneWindows64,
        Platform::Android,
        Platform::IOS,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Editor => "Editor",
            Platform::StandaloneLinux => "StandaloneLinux",
            Platform::StandaloneLinux64 => "StandaloneLinux64",
            Platform::StandaloneOSX => "StandaloneOSX",
            Platform::StandaloneWindows => "StandaloneWindows",
            Platform::StandaloneWindows64 => "StandaloneWindows64",
            Platform::Android => "Android",
            Platform::IOS => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editor builds the downloader is allowed to fetch.
/// 允许下载器获取的编辑器版本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum EditorVersion {
    #[value(name = "2018.2")]
    #[serde(rename = "2018.2")]
    V2018_2,
    #[value(name = "2018.3")]
    #[serde(rename = "2018.3")]
    V2018_3,
    #[value(name = "2019.1")]
    #[serde(rename = "2019.1")]
    V2019_1,
}

impl EditorVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorVersion::V2018_2 => "2018.2",
            EditorVersion::V2018_3 => "2018.3",
            EditorVersion::V2019_1 => "2019.1",
        }
    }
}

impl fmt::Display for EditorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scripting runtime the editor test run targets.
/// 编辑器测试运行所针对的脚本运行时。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeFlavor {
    #[value(name = "latest")]
    Latest,
    #[value(name = "legacy")]
    Legacy,
}

impl RuntimeFlavor {
    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeFlavor::Latest => "latest",
            RuntimeFlavor::Legacy => "legacy",
        }
    }
}

impl fmt::Display for RuntimeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the editor's two execution contexts the tests run in.
/// 测试在编辑器的哪种执行上下文中运行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestPhase {
    #[value(name = "editmode")]
    EditMode,
    #[value(name = "playmode")]
    PlayMode,
}

impl TestPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TestPhase::EditMode => "editmode",
            TestPhase::PlayMode => "playmode",
        }
    }
}

impl fmt::Display for TestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated result of parsing the command line.
///
/// Every field only ever holds enumerated values. `version`, `runtime` and
/// `test_phase` may be absent here; they are filled from the settings file
/// and checked again right before the value is needed.
///
/// 解析命令行后得到的已验证结果。
/// 所有字段只会持有枚举值。`version`、`runtime` 和 `test_phase` 在此处可以缺省，
/// 它们会由配置文件补全，并在真正需要时再次检查。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Platforms to test, in the order they were requested.
    /// 要测试的平台，按请求顺序排列。
    pub platforms: Vec<Platform>,
    /// Editor build to download.
    /// 要下载的编辑器版本。
    pub version: Option<EditorVersion>,
    /// Scripting runtime passed to the editor.
    /// 传给编辑器的脚本运行时。
    pub runtime: Option<RuntimeFlavor>,
    /// Test phase passed to the editor.
    /// 传给编辑器的测试阶段。
    pub test_phase: Option<TestPhase>,
    /// Set by `--warningscheck`.
    pub warnings_check: bool,
}

/// A single external command: the program and its discrete argument list.
/// Arguments are never joined into a shell string for execution.
///
/// 单个外部命令：程序及其离散参数列表。
/// 执行时参数永远不会拼接成 shell 字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ProcessInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Builds an invocation whose program is a filesystem path.
    pub fn for_path(program: &Path) -> Self {
        Self::new(program.display().to_string())
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Renders the invocation as a single shell-quoted line, for display only.
    pub fn render(&self) -> String {
        let argv = self.argv();
        shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
    }
}

impl fmt::Display for ProcessInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// What a successfully completed external process left behind.
/// 成功完成的外部进程所留下的结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    pub exit_code: i32,
    /// Everything the child wrote to stdout, line endings included.
    pub stdout: String,
    pub stderr: String,
}

/// The per-platform `-<key> <value>` options handed to the editor.
///
/// Keys keep insertion order. An option whose value is not configured is left
/// out entirely rather than sent with an empty value.
///
/// 传递给编辑器的按平台 `-<key> <value>` 选项。
/// 键保持插入顺序。未配置值的选项会被完全省略，而不是以空值传递。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformRunOptions {
    entries: Vec<(&'static str, String)>,
}

impl PlatformRunOptions {
    pub const PROJECT_PATH: &'static str = "projectPath";
    pub const TEST_RESULTS: &'static str = "testResults";
    pub const LOG_FILE: &'static str = "logFile";
    pub const RUNTIME_VERSION: &'static str = "scripting-runtime-version";
    pub const TEST_PLATFORM: &'static str = "testPlatform";

    pub fn new(
        project_path: &Path,
        test_results: &Path,
        log_file: &Path,
        runtime: Option<RuntimeFlavor>,
        test_phase: Option<TestPhase>,
    ) -> Self {
        let mut options = Self::default();
        options.insert(Self::PROJECT_PATH, project_path.display().to_string());
        options.insert(Self::TEST_RESULTS, test_results.display().to_string());
        options.insert(Self::LOG_FILE, log_file.display().to_string());
        if let Some(runtime) = runtime {
            options.insert(Self::RUNTIME_VERSION, runtime.to_string());
        }
        if let Some(test_phase) = test_phase {
            options.insert(Self::TEST_PLATFORM, test_phase.to_string());
        }
        options
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: &'static str, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Flattens the options into `-<key>`, `<value>` pairs.
    pub fn to_args(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|(key, value)| [format!("-{key}"), value.clone()])
            .collect()
    }
}

/// How a single platform's editor run ended.
/// 单个平台的编辑器运行的结束方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformOutcome {
    /// The editor exited with code 0.
    /// 编辑器以退出码 0 退出。
    Passed { duration: Duration },
    /// The editor could not be run or exited non-zero; the loop stopped here.
    /// `exit_code` is `None` when the editor never produced one.
    /// 编辑器无法运行或以非零码退出；循环在此停止。
    /// 编辑器未产生退出码时 `exit_code` 为 `None`。
    Failed {
        exit_code: Option<i32>,
        duration: Duration,
    },
    /// An earlier platform failed, so this one was never started.
    /// 之前的平台失败，因此此平台从未启动。
    NotRun,
}

/// The outcome of one platform in the test loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReport {
    pub platform: Platform,
    pub outcome: PlatformOutcome,
}

impl PlatformReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, PlatformOutcome::Failed { .. })
    }

    pub fn duration(&self) -> Option<Duration> {
        match self.outcome {
            PlatformOutcome::Passed { duration } | PlatformOutcome::Failed { duration, .. } => {
                Some(duration)
            }
            PlatformOutcome::NotRun => None,
        }
    }
}
