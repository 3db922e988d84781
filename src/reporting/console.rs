//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the run header and the per-platform summary to the
//! console, with color coding and internationalization support.
//!
//! 此模块在控制台打印运行头部信息和按平台的摘要，支持颜色编码和国际化。

use colored::*;

use crate::core::models::{PlatformOutcome, PlatformReport, RunConfiguration};
use crate::infra::fs::EnvironmentPaths;
use crate::infra::t;

/// Prints what is about to be installed and tested.
///
/// 打印即将安装和测试的内容。
pub fn print_header(config: &RunConfiguration, paths: &EnvironmentPaths) {
    let not_set = t!("not_set").to_string();
    let platforms = config
        .platforms
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let warnings_check = if config.warnings_check {
        t!("enabled")
    } else {
        t!("disabled")
    };

    let version = config
        .version
        .map(|v| v.to_string())
        .unwrap_or_else(|| not_set.clone());
    let runtime = config
        .runtime
        .map(|r| r.to_string())
        .unwrap_or_else(|| not_set.clone());
    let phase = config
        .test_phase
        .map(|p| p.to_string())
        .unwrap_or_else(|| not_set.clone());

    println!("\n{}", t!("header_banner").bold());
    println!(
        "{}",
        t!("runner_version", version = env!("CARGO_PKG_VERSION")).cyan()
    );
    println!("{}", t!("project_root", path = paths.root.display()));
    println!("{}", t!("testing_platforms", platforms = platforms));
    println!("{}", t!("unity_version", version = version));
    println!("{}", t!("runtime_version", runtime = runtime));
    println!("{}", t!("test_phase", phase = phase));
    println!("{}", t!("warnings_check", state = warnings_check));
}

/// Prints a formatted summary of the platform loop.
///
/// 在控制台打印平台循环的格式化摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - Passed    | Editor                |     12.31s
///   - Failed    | StandaloneLinux64     |      3.02s  (exit code 3)
///   - Not Run   | Android               |        N/A
/// ```
pub fn print_summary(reports: &[PlatformReport]) {
    println!("\n{}", t!("summary_banner").bold());

    for report in reports {
        let duration_str = report
            .duration()
            .map(|d| format!("{:.2?}", d))
            .unwrap_or_else(|| "N/A".to_string());

        let (status, detail) = match &report.outcome {
            PlatformOutcome::Passed { .. } => (t!("status_passed").green(), String::new()),
            PlatformOutcome::Failed { exit_code, .. } => (
                t!("status_failed").red(),
                exit_code
                    .map(|code| format!(" ({})", t!("exit_code_detail", code = code)))
                    .unwrap_or_default(),
            ),
            PlatformOutcome::NotRun => (t!("status_not_run").dimmed(), String::new()),
        };

        println!(
            "  - {:<10} | {:<22} | {:>10} {}",
            status,
            report.platform.as_str(),
            duration_str,
            detail
        );
    }
}
