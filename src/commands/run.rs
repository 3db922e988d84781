//! # Run Command Module / 运行命令模块
//!
//! This module implements the tool's single command: resolve the filesystem
//! layout and settings, install the requested editor build, run the tests
//! for every platform, and report.
//!
//! 此模块实现了工具唯一的命令：解析文件系统布局和配置，安装请求的编辑器版本，
//! 为每个平台运行测试并生成报告。

use anyhow::Result;
use colored::*;

use crate::{
    cli::CliArgs,
    core::{config, error::RunnerError, execution, install},
    infra::{
        command::{ProcessRunner, SystemProcessRunner},
        fs::{EnvironmentPaths, HostOs},
        t,
    },
    reporting::{self, RunSummary},
};

/// Executes a run with real child processes.
pub async fn execute(args: CliArgs) -> Result<()> {
    execute_with(&SystemProcessRunner, args, HostOs::current()).await
}

/// Executes a run, launching every external command through `runner`.
///
/// # Arguments
/// * `runner` - Runs the installer, the downloader and the editor
/// * `args` - The parsed command line
/// * `host` - Decides which editor executable layout to expect
///
/// # Returns
/// `Ok(())` when every step and every platform succeeded. The first failure
/// is returned as a [`RunnerError`] wrapped in `anyhow::Error`.
pub async fn execute_with<R: ProcessRunner>(runner: &R, args: CliArgs, host: HostOs) -> Result<()> {
    let paths = EnvironmentPaths::resolve(&args.project_dir, host)?;
    log::debug!("Resolved layout: {:?}", paths);

    let (settings, settings_path) = config::locate_settings(&paths.root, args.config.as_deref())?;
    if args.lang.is_none()
        && let Some(language) = settings.language.as_deref()
    {
        crate::init(Some(language));
    }
    if let Some(path) = &settings_path {
        println!("{}", t!("settings_loaded", path = path.display()));
    }

    let run_config = settings.apply_to(args.run);
    reporting::print_header(&run_config, &paths);

    let version = run_config.version.ok_or(RunnerError::MissingVersion)?;

    paths.ensure_artifacts_dir()?;

    install::install_editor(runner, &settings, version, &paths, &run_config.platforms).await?;

    if run_config.platforms.is_empty() {
        println!("{}", t!("no_platforms").yellow());
        return Ok(());
    }

    let started_at = chrono::Local::now();
    let test_run = execution::run_platforms(runner, &run_config, &paths).await;

    reporting::print_summary(&test_run.reports);

    let summary = RunSummary::new(started_at, &run_config, &paths, &test_run.reports);
    let summary_path = paths.run_summary_path();
    match reporting::write_run_summary(&summary, &summary_path) {
        Ok(()) => println!("{}", t!("summary_written", path = summary_path.display())),
        Err(e) => eprintln!("{} {:#}", t!("summary_write_failed").yellow(), e),
    }

    test_run.into_result()?;
    println!("\n{}", t!("all_platforms_passed").green().bold());
    Ok(())
}
