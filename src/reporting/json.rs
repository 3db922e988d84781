//! # JSON Run Summary / JSON 运行摘要
//!
//! Writes a machine-readable record of the run to `TestArtifacts/RunSummary.json`
//! so CI can tell which platforms ran without scraping the console log. The
//! editor's own result files are referenced by path, never read.
//!
//! 将运行的机器可读记录写入 `TestArtifacts/RunSummary.json`，
//! 使 CI 无需解析控制台日志即可知道哪些平台已运行。编辑器自身的结果文件仅按路径引用，不会被读取。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::models::{
    EditorVersion, Platform, PlatformOutcome, PlatformReport, RunConfiguration, RuntimeFlavor,
    TestPhase,
};
use crate::infra::fs::EnvironmentPaths;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub runner_version: &'static str,
    pub editor_version: Option<EditorVersion>,
    pub runtime: Option<RuntimeFlavor>,
    pub test_platform: Option<TestPhase>,
    pub warnings_check: bool,
    pub platforms: Vec<PlatformRecord>,
}

#[derive(Debug, Serialize)]
pub struct PlatformRecord {
    pub platform: Platform,
    /// `passed`, `failed` or `not_run`.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    pub test_results: String,
    pub editor_log: String,
}

impl RunSummary {
    pub fn new(
        started_at: DateTime<Local>,
        config: &RunConfiguration,
        paths: &EnvironmentPaths,
        reports: &[PlatformReport],
    ) -> Self {
        let platforms = reports
            .iter()
            .map(|report| {
                let (status, exit_code) = match report.outcome {
                    PlatformOutcome::Passed { .. } => ("passed", None),
                    PlatformOutcome::Failed { exit_code, .. } => ("failed", exit_code),
                    PlatformOutcome::NotRun => ("not_run", None),
                };
                PlatformRecord {
                    platform: report.platform,
                    status,
                    exit_code,
                    duration_secs: report.duration().map(|d| d.as_secs_f64()),
                    test_results: paths.test_results_path(report.platform).display().to_string(),
                    editor_log: paths.editor_log_path(report.platform).display().to_string(),
                }
            })
            .collect();

        Self {
            started_at,
            runner_version: env!("CARGO_PKG_VERSION"),
            editor_version: config.version,
            runtime: config.runtime,
            test_platform: config.test_phase,
            warnings_check: config.warnings_check,
            platforms,
        }
    }
}

/// Serializes `summary` as pretty-printed JSON to `path`.
pub fn write_run_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write run summary: {}", path.display()))
}
