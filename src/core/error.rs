//! # Runner Errors / 运行器错误
//!
//! The structured failures raised by the core. Everything above the core
//! wraps them in `anyhow::Error`; `main` downcasts back to pick the exit code.
//!
//! 核心层抛出的结构化错误。核心之上的代码将其包装为 `anyhow::Error`；
//! `main` 会向下转型以确定退出码。

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// An external process ran to completion with a non-zero exit code.
    /// A child killed by a signal has no exit code and reports `-1`.
    #[error("Command '{}' returned non-zero exit status {exit_code}", .args.join(" "))]
    ExternalProcess { exit_code: i32, args: Vec<String> },

    /// The program could not be started at all.
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading the child's output, or waiting for it, failed.
    #[error("Failed to collect output of '{program}': {source}")]
    Output {
        program: String,
        #[source]
        source: io::Error,
    },

    /// No editor version was given on the command line or in the settings file.
    #[error("No editor version configured; pass --version or set `version` in the settings file")]
    MissingVersion,
}

impl RunnerError {
    /// The exit code this process should terminate with.
    ///
    /// The failing child's own code is propagated when it fits in `1..=255`;
    /// every other failure maps to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunnerError::ExternalProcess { exit_code, .. } => u8::try_from(*exit_code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
