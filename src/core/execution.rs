//! # Test Execution Module / 测试执行模块
//!
//! This module drives the editor once per requested platform, strictly one
//! after another. The first platform that fails stops the loop; the platforms
//! after it are reported as not run.
//!
//! 此模块为每个请求的平台依次驱动一次编辑器，严格按顺序执行。
//! 第一个失败的平台会终止循环；其后的平台被报告为未运行。

use colored::*;
use std::time::Instant;

use crate::{
    core::{
        error::RunnerError,
        models::{
            Platform, PlatformOutcome, PlatformReport, PlatformRunOptions, ProcessInvocation,
            RunConfiguration,
        },
    },
    infra::{command::ProcessRunner, fs::EnvironmentPaths, t},
};

/// Flags passed to the editor on every test run, before the per-platform options.
pub const BATCH_FLAGS: [&str; 6] = [
    "-batchmode",
    "-cleanTestPrefs",
    "-automated",
    "-upmNoDefaultPackages",
    "-enableAllModules",
    "-runTests",
];

/// The result of the platform loop.
/// 平台循环的结果。
#[derive(Debug)]
pub struct TestRun {
    /// One report per requested platform, in request order.
    /// 每个请求的平台对应一份报告，按请求顺序排列。
    pub reports: Vec<PlatformReport>,
    /// The error that stopped the loop, if any.
    /// 终止循环的错误（如有）。
    pub failure: Option<RunnerError>,
}

impl TestRun {
    pub fn into_result(self) -> Result<Vec<PlatformReport>, RunnerError> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.reports),
        }
    }
}

/// Builds the editor options for `platform`.
pub fn platform_run_options(
    config: &RunConfiguration,
    paths: &EnvironmentPaths,
    platform: Platform,
) -> PlatformRunOptions {
    PlatformRunOptions::new(
        &paths.root,
        &paths.test_results_path(platform),
        &paths.editor_log_path(platform),
        config.runtime,
        config.test_phase,
    )
}

/// The editor executable, the batch flags, then `-<key> <value>` per option.
pub fn editor_invocation(paths: &EnvironmentPaths, options: &PlatformRunOptions) -> ProcessInvocation {
    ProcessInvocation::for_path(&paths.editor_executable)
        .args(BATCH_FLAGS)
        .args(options.to_args())
}

/// Runs the editor for every configured platform, in order.
///
/// No retries are attempted. When an invocation fails, that platform is
/// recorded as failed, the remaining ones as not run, and the error is kept
/// in [`TestRun::failure`].
///
/// 按顺序为每个配置的平台运行编辑器。
/// 不进行重试。某次调用失败时，该平台记录为失败，其余平台记录为未运行，
/// 错误保存在 [`TestRun::failure`] 中。
pub async fn run_platforms<R: ProcessRunner>(
    runner: &R,
    config: &RunConfiguration,
    paths: &EnvironmentPaths,
) -> TestRun {
    let mut reports = Vec::with_capacity(config.platforms.len());
    let mut failure = None;

    for &platform in &config.platforms {
        if failure.is_some() {
            reports.push(PlatformReport {
                platform,
                outcome: PlatformOutcome::NotRun,
            });
            continue;
        }

        let options = platform_run_options(config, paths, platform);
        let invocation = editor_invocation(paths, &options);

        println!("{}", t!("running_platform", platform = platform).blue().bold());
        let start_time = Instant::now();
        let result = runner.run(&invocation).await;
        let duration = start_time.elapsed();

        let outcome = match result {
            Ok(_) => PlatformOutcome::Passed { duration },
            Err(err) => {
                let exit_code = match &err {
                    RunnerError::ExternalProcess { exit_code, .. } => Some(*exit_code),
                    _ => None,
                };
                println!(
                    "{}",
                    t!("platform_run_aborted", platform = platform).red()
                );
                failure = Some(err);
                PlatformOutcome::Failed {
                    exit_code,
                    duration,
                }
            }
        };
        reports.push(PlatformReport { platform, outcome });
    }

    TestRun { reports, failure }
}
