// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, ffi::OsString, path::PathBuf};

use crate::{
    commands,
    core::models::{EditorVersion, Platform, RunConfiguration, RuntimeFlavor, TestPhase},
    infra::t,
};

/// Everything the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub run: RunConfiguration,
    /// Root directory holding the project, the install and the artifacts.
    pub project_dir: PathBuf,
    /// Settings file given with `--config`.
    pub config: Option<PathBuf>,
    /// Language given with `--lang`.
    pub lang: Option<String>,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built, so that
/// help and usage errors are already localized.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|arg| arg.into().to_string_lossy().into_owned())
        .collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("editor-test-runner")
        .version(env!("CARGO_PKG_VERSION"))
        // `--version` selects the editor build instead.
        .disable_version_flag(true)
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("runtimePlatform")
                .help(t!("arg_platforms", locale = locale).to_string())
                .value_name("PLATFORM")
                .num_args(0..)
                .value_parser(clap::value_parser!(Platform))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help(t!("arg_version", locale = locale).to_string())
                .value_name("VERSION")
                .value_parser(clap::value_parser!(EditorVersion))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("runtime")
                .long("runtime")
                .help(t!("arg_runtime", locale = locale).to_string())
                .value_name("RUNTIME")
                .value_parser(clap::value_parser!(RuntimeFlavor))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("testPlatform")
                .long("testPlatform")
                .help(t!("arg_test_platform", locale = locale).to_string())
                .value_name("TEST_PLATFORM")
                .value_parser(clap::value_parser!(TestPhase))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("warningscheck")
                .long("warningscheck")
                .help(t!("arg_warningscheck", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project-dir")
                .long("project-dir")
                .help(t!("arg_project_dir", locale = locale).to_string())
                .value_name("PROJECT_DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
}

fn args_from_matches(matches: &ArgMatches) -> CliArgs {
    let run = RunConfiguration {
        platforms: matches
            .get_many::<Platform>("runtimePlatform")
            .map(|values| values.copied().collect())
            .unwrap_or_default(),
        version: matches.get_one::<EditorVersion>("version").copied(),
        runtime: matches.get_one::<RuntimeFlavor>("runtime").copied(),
        test_phase: matches.get_one::<TestPhase>("testPlatform").copied(),
        warnings_check: matches.get_flag("warningscheck"),
    };

    CliArgs {
        run,
        project_dir: matches
            .get_one::<PathBuf>("project-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        config: matches.get_one::<PathBuf>("config").cloned(),
        lang: matches.get_one::<String>("lang").cloned(),
    }
}

/// Parses `args` (program name first) without exiting the process.
///
/// Unknown platforms and out-of-set values for `--version`, `--runtime` and
/// `--testPlatform` are rejected here, before anything is launched.
pub fn parse_from<I, T>(locale: &str, args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli(locale).try_get_matches_from(args)?;
    Ok(args_from_matches(&matches))
}

/// Parses the process arguments, printing usage and exiting on error.
pub fn parse_args() -> CliArgs {
    // Pre-parse language and initialize i18n first.
    let language = crate::init(pre_parse_language(env::args_os()).as_deref());
    match parse_from(&language, env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}

pub async fn process_command(args: CliArgs) -> Result<()> {
    commands::run::execute(args).await
}
