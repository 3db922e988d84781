//! # Run Command Integration Tests / 运行命令集成测试
//!
//! Drives the whole run (settings, installation, platform loop, summary)
//! through a recording runner, so no installer or editor is needed.
//!
//! 通过记录型运行器驱动完整运行流程（配置、安装、平台循环、摘要），
//! 因此不需要真实的安装器或编辑器。

mod common;

use common::{RecordingRunner, setup_project_dir, write_settings};
use editor_test_runner::RunnerError;
use editor_test_runner::cli::CliArgs;
use editor_test_runner::commands::run::execute_with;
use editor_test_runner::infra::fs::HostOs;
use editor_test_runner::models::{EditorVersion, Platform, RunConfiguration};
use std::fs;
use std::path::Path;

fn args(root: &Path, platforms: Vec<Platform>, version: Option<EditorVersion>) -> CliArgs {
    CliArgs {
        run: RunConfiguration {
            platforms,
            version,
            ..RunConfiguration::default()
        },
        project_dir: root.to_path_buf(),
        config: None,
        lang: Some("en".to_string()),
    }
}

fn read_summary(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(root.join("TestArtifacts/RunSummary.json"))
        .expect("run summary should be written");
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn test_full_run_installs_then_tests_each_platform() {
    let (_dir, root) = setup_project_dir();
    let runner = RecordingRunner::new();

    execute_with(
        &runner,
        args(
            &root,
            vec![Platform::Editor, Platform::StandaloneLinux64],
            Some(EditorVersion::V2019_1),
        ),
        HostOs::Other,
    )
    .await
    .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 4);

    assert_eq!(calls[0].program, "pip");
    assert_eq!(
        &calls[0].args[..3],
        &["install", "unity-downloader-cli", "--extra-index-url"]
    );

    let install_dir = root.join("UnityInstall").display().to_string();
    assert_eq!(calls[1].program, "unity-downloader-cli");
    assert_eq!(
        calls[1].args,
        vec![
            "-u",
            "2019.1",
            "-p",
            install_dir.as_str(),
            "-c",
            "Editor",
            "-c",
            "StandaloneSupport-Mono",
        ]
    );

    let editor = root.join("UnityInstall").join("Unity").display().to_string();
    assert_eq!(calls[2].program, editor);
    assert_eq!(calls[3].program, editor);

    assert!(root.join("TestArtifacts").is_dir());
    let summary = read_summary(&root);
    assert_eq!(summary["editor_version"], "2019.1");
    assert_eq!(summary["platforms"][0]["platform"], "Editor");
    assert_eq!(summary["platforms"][0]["status"], "passed");
    assert_eq!(summary["platforms"][1]["platform"], "StandaloneLinux64");
    assert_eq!(summary["platforms"][1]["status"], "passed");
}

#[tokio::test]
async fn test_missing_version_fails_before_any_process() {
    let (_dir, root) = setup_project_dir();
    let runner = RecordingRunner::new();

    let err = execute_with(&runner, args(&root, vec![Platform::Editor], None), HostOs::Other)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RunnerError>(),
        Some(RunnerError::MissingVersion)
    ));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_zero_platforms_still_installs() {
    let (_dir, root) = setup_project_dir();
    let runner = RecordingRunner::new();

    execute_with(
        &runner,
        args(&root, vec![], Some(EditorVersion::V2018_2)),
        HostOs::Other,
    )
    .await
    .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].args[..2], ["-u", "2018.2"]);
    assert_eq!(calls[1].args[4..], ["-c", "Editor"]);
}

#[tokio::test]
async fn test_installer_failure_skips_the_test_loop() {
    let (_dir, root) = setup_project_dir();
    let runner = RecordingRunner::failing_when("install", 2);

    let err = execute_with(
        &runner,
        args(&root, vec![Platform::Editor], Some(EditorVersion::V2019_1)),
        HostOs::Other,
    )
    .await
    .unwrap_err();

    assert_eq!(err.downcast_ref::<RunnerError>().unwrap().exit_code(), 2);
    assert_eq!(runner.calls().len(), 1);
    assert!(!root.join("TestArtifacts/RunSummary.json").exists());
}

#[tokio::test]
async fn test_editor_failure_is_summarized_and_propagated() {
    let (_dir, root) = setup_project_dir();
    let runner = RecordingRunner::failing_when("StandaloneOSX_TestResults", 3);

    let err = execute_with(
        &runner,
        args(
            &root,
            vec![Platform::Editor, Platform::StandaloneOSX, Platform::Android],
            Some(EditorVersion::V2018_3),
        ),
        HostOs::MacOs,
    )
    .await
    .unwrap_err();

    assert_eq!(err.downcast_ref::<RunnerError>().unwrap().exit_code(), 3);
    let calls = runner.calls();
    assert_eq!(calls.len(), 4, "installer, downloader, Editor, StandaloneOSX");
    assert!(calls[2].program.ends_with("Unity.app/Contents/MacOS/Unity"));

    let summary = read_summary(&root);
    assert_eq!(summary["platforms"][0]["status"], "passed");
    assert_eq!(summary["platforms"][1]["status"], "failed");
    assert_eq!(summary["platforms"][1]["exit_code"], 3);
    assert_eq!(summary["platforms"][2]["status"], "not_run");
    assert!(summary["platforms"][2].get("duration_secs").is_none());
}

#[tokio::test]
async fn test_settings_file_supplies_programs_and_defaults() {
    let (_dir, root) = setup_project_dir();
    write_settings(
        &root,
        r#"
package_manager = "pip3"
package_index_url = "https://example.invalid/simple"
downloader = "my-downloader"
version = "2018.3"
runtime = "legacy"
test_platform = "playmode"
"#,
    );
    let runner = RecordingRunner::new();

    execute_with(&runner, args(&root, vec![Platform::Editor], None), HostOs::Other)
        .await
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls[0].program, "pip3");
    assert_eq!(calls[0].args.last().unwrap(), "https://example.invalid/simple");
    assert_eq!(calls[1].program, "my-downloader");
    assert_eq!(calls[1].args[1], "2018.3");

    let editor_args = &calls[2].args;
    let runtime = editor_args
        .iter()
        .position(|a| a == "-scripting-runtime-version")
        .unwrap();
    assert_eq!(editor_args[runtime + 1], "legacy");
    let phase = editor_args.iter().position(|a| a == "-testPlatform").unwrap();
    assert_eq!(editor_args[phase + 1], "playmode");
}

#[tokio::test]
async fn test_explicit_missing_settings_file_is_an_error() {
    let (_dir, root) = setup_project_dir();
    let runner = RecordingRunner::new();
    let mut cli_args = args(&root, vec![], Some(EditorVersion::V2019_1));
    cli_args.config = Some(root.join("absent.toml"));

    assert!(execute_with(&runner, cli_args, HostOs::Other).await.is_err());
    assert!(runner.calls().is_empty());
}
