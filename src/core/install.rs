//! # Editor Installation Module / 编辑器安装模块
//!
//! Installs the downloader package and then uses it to fetch the requested
//! editor build together with the components the platforms need.
//!
//! 安装下载器包，然后使用它获取请求的编辑器版本以及平台所需的组件。

use colored::*;

use crate::{
    core::{
        components::download_component_args,
        config::{DOWNLOADER_PACKAGE, RunnerSettings},
        error::RunnerError,
        models::{EditorVersion, Platform, ProcessInvocation},
    },
    infra::{command::ProcessRunner, fs::EnvironmentPaths, t},
};

/// `<package_manager> install unity-downloader-cli --extra-index-url <url>`
pub fn installer_invocation(settings: &RunnerSettings) -> ProcessInvocation {
    ProcessInvocation::new(&settings.package_manager).args([
        "install",
        DOWNLOADER_PACKAGE,
        "--extra-index-url",
        settings.package_index_url.as_str(),
    ])
}

/// `<downloader> -u <version> -p <install_dir> -c <component>...`
pub fn downloader_invocation(
    settings: &RunnerSettings,
    version: EditorVersion,
    paths: &EnvironmentPaths,
    platforms: &[Platform],
) -> ProcessInvocation {
    ProcessInvocation::new(&settings.downloader)
        .arg("-u")
        .arg(version.as_str())
        .arg("-p")
        .arg(paths.install_dir.display().to_string())
        .args(download_component_args(platforms))
}

/// Installs the downloader, then downloads the editor into `paths.install_dir`.
/// The first failing step aborts the installation.
pub async fn install_editor<R: ProcessRunner>(
    runner: &R,
    settings: &RunnerSettings,
    version: EditorVersion,
    paths: &EnvironmentPaths,
    platforms: &[Platform],
) -> Result<(), RunnerError> {
    println!("{}", t!("installing_downloader").blue());
    runner.run(&installer_invocation(settings)).await?;

    println!(
        "{}",
        t!(
            "downloading_editor",
            version = version,
            path = paths.install_dir.display()
        )
        .blue()
    );
    runner
        .run(&downloader_invocation(settings, version, paths, platforms))
        .await?;
    Ok(())
}
