//! # Execution Module Unit Tests / Execution 模块单元测试
//!
//! Tests for building editor invocations and for the sequential platform
//! loop, using a runner that records instead of spawning.
//!
//! 测试编辑器调用的构建以及顺序平台循环，使用只记录不派生进程的运行器。

mod common;

use common::RecordingRunner;
use editor_test_runner::RunnerError;
use editor_test_runner::core::execution::{
    BATCH_FLAGS, editor_invocation, platform_run_options, run_platforms,
};
use editor_test_runner::infra::fs::{EnvironmentPaths, HostOs};
use editor_test_runner::models::{
    Platform, PlatformOutcome, RunConfiguration, RuntimeFlavor, TestPhase,
};
use std::path::PathBuf;

fn paths() -> EnvironmentPaths {
    EnvironmentPaths::new(PathBuf::from("/repo"), HostOs::Other)
}

fn config(platforms: Vec<Platform>) -> RunConfiguration {
    RunConfiguration {
        platforms,
        runtime: Some(RuntimeFlavor::Latest),
        test_phase: Some(TestPhase::EditMode),
        ..RunConfiguration::default()
    }
}

#[test]
fn test_editor_invocation_shape() {
    let paths = paths();
    let config = config(vec![Platform::StandaloneOSX]);
    let options = platform_run_options(&config, &paths, Platform::StandaloneOSX);
    let invocation = editor_invocation(&paths, &options);

    assert_eq!(invocation.program, paths.editor_executable.display().to_string());
    assert_eq!(&invocation.args[..BATCH_FLAGS.len()], &BATCH_FLAGS[..]);
    assert_eq!(
        &invocation.args[BATCH_FLAGS.len()..],
        &[
            "-projectPath".to_string(),
            paths.root.display().to_string(),
            "-testResults".to_string(),
            paths
                .test_results_path(Platform::StandaloneOSX)
                .display()
                .to_string(),
            "-logFile".to_string(),
            paths
                .editor_log_path(Platform::StandaloneOSX)
                .display()
                .to_string(),
            "-scripting-runtime-version".to_string(),
            "latest".to_string(),
            "-testPlatform".to_string(),
            "editmode".to_string(),
        ][..]
    );
}

#[test]
fn test_batch_flags() {
    assert_eq!(
        BATCH_FLAGS,
        [
            "-batchmode",
            "-cleanTestPrefs",
            "-automated",
            "-upmNoDefaultPackages",
            "-enableAllModules",
            "-runTests",
        ]
    );
}

#[tokio::test]
async fn test_platforms_run_in_order() {
    let runner = RecordingRunner::new();
    let config = config(vec![Platform::Android, Platform::Editor, Platform::IOS]);

    let run = run_platforms(&runner, &config, &paths()).await;

    assert!(run.failure.is_none());
    let results: Vec<String> = runner
        .calls()
        .iter()
        .map(|call| {
            let pos = call.args.iter().position(|a| a == "-testResults").unwrap();
            call.args[pos + 1].clone()
        })
        .collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].ends_with("Android_TestResults.txt"));
    assert!(results[1].ends_with("Editor_TestResults.txt"));
    assert!(results[2].ends_with("iOS_TestResults.txt"));
    assert!(
        run.reports
            .iter()
            .all(|r| matches!(r.outcome, PlatformOutcome::Passed { .. }))
    );
}

#[tokio::test]
async fn test_first_failure_stops_the_loop() {
    let runner = RecordingRunner::failing_when("Editor_TestResults", 3);
    let config = config(vec![Platform::Editor, Platform::StandaloneLinux64]);

    let run = run_platforms(&runner, &config, &paths()).await;

    assert_eq!(runner.calls().len(), 1, "second platform must never be invoked");
    assert_eq!(run.reports.len(), 2);
    assert!(matches!(
        run.reports[0].outcome,
        PlatformOutcome::Failed {
            exit_code: Some(3),
            ..
        }
    ));
    assert_eq!(run.reports[1].platform, Platform::StandaloneLinux64);
    assert_eq!(run.reports[1].outcome, PlatformOutcome::NotRun);
    assert!(matches!(
        run.into_result(),
        Err(RunnerError::ExternalProcess { exit_code: 3, .. })
    ));
}

#[tokio::test]
async fn test_empty_platform_list_runs_nothing() {
    let runner = RecordingRunner::new();
    let run = run_platforms(&runner, &config(vec![]), &paths()).await;
    assert!(runner.calls().is_empty());
    assert!(run.into_result().unwrap().is_empty());
}
