//! # Command Execution Module / 命令执行模块
//!
//! Runs external programs the way a CI log wants to see them: the child's
//! stdout is forwarded line by line as it arrives, stderr is collected and
//! shown once the child is done, and a non-zero exit becomes an error.
//!
//! 以 CI 日志期望的方式运行外部程序：子进程的 stdout 在到达时逐行转发，
//! stderr 被收集并在子进程结束后显示，非零退出码会转换为错误。

use colored::*;
use std::io::{self, Write};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use crate::core::error::RunnerError;
use crate::core::models::{ProcessInvocation, ProcessResult};
use crate::infra::t;

/// Label printed in front of a child's collected stderr.
pub const STDERR_BANNER: &str = "Standard Error Output";

/// Executes external processes on behalf of the installer and the test loop.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Runs `invocation` to completion.
    ///
    /// Returns the captured output when the process exits with code 0 and
    /// `RunnerError::ExternalProcess` otherwise.
    async fn run(&self, invocation: &ProcessInvocation) -> Result<ProcessResult, RunnerError>;
}

/// Runs invocations as real child processes of this one.
/// 将调用作为本进程的真实子进程运行。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, invocation: &ProcessInvocation) -> Result<ProcessResult, RunnerError> {
        run_streamed(invocation, &mut io::stdout()).await
    }
}

/// Spawns `invocation`, forwarding its stdout to `out` and reporting on it.
///
/// Each stdout line is written to `out` and flushed before the next one is
/// read, so lines appear in the order the child produced them. Stderr is
/// drained concurrently into a buffer, which keeps a child that writes a lot
/// to stderr from blocking on a full pipe.
///
/// 派生 `invocation`，将其 stdout 转发到 `out` 并报告结果。
/// 每一行 stdout 在读取下一行之前写入 `out` 并刷新，因此行的顺序与子进程产生的顺序一致。
/// stderr 被并发读取到缓冲区中，避免大量写入 stderr 的子进程因管道已满而阻塞。
pub async fn run_streamed<W: Write>(
    invocation: &ProcessInvocation,
    out: &mut W,
) -> Result<ProcessResult, RunnerError> {
    print_line(out, &format!("[{}]", invocation.render()), &invocation.program)?;
    log::debug!("Spawning {:?}", invocation.argv());

    let mut child = tokio::process::Command::new(&invocation.program)
        .args(&invocation.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

    let output_error = |source: io::Error| RunnerError::Output {
        program: invocation.program.clone(),
        source,
    };

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| output_error(io::Error::other(t!("capture_stdout_failed").to_string())))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| output_error(io::Error::other(t!("capture_stderr_failed").to_string())))?;

    let stderr_handle = tokio::spawn(read_all(stderr));

    let mut reader = BufReader::new(stdout);
    let mut captured = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(output_error)?;
        if read == 0 {
            break;
        }
        captured.extend_from_slice(&line);
        out.write_all(&line).map_err(output_error)?;
        // Keeps the completion line off the child's unterminated last line.
        if !line.ends_with(b"\n") {
            out.write_all(b"\n").map_err(output_error)?;
        }
        out.flush().map_err(output_error)?;
    }

    let status = child.wait().await.map_err(output_error)?;
    let stderr = stderr_handle
        .await
        .map_err(|e| output_error(io::Error::other(e)))?
        .map_err(output_error)?;

    let stdout = String::from_utf8_lossy(&captured).into_owned();
    let stderr = String::from_utf8_lossy(&stderr).into_owned();

    if !stderr.is_empty() {
        print_line(out, &STDERR_BANNER.yellow().to_string(), &invocation.program)?;
        print_line(out, &stderr, &invocation.program)?;
    }

    let exit_code = status.code().unwrap_or(-1);
    let completed = t!("process_completed", code = exit_code);
    let completed = if exit_code == 0 {
        completed.green()
    } else {
        completed.red()
    };
    print_line(out, &completed.to_string(), &invocation.program)?;

    if exit_code != 0 {
        return Err(RunnerError::ExternalProcess {
            exit_code,
            args: invocation.argv(),
        });
    }

    Ok(ProcessResult {
        exit_code,
        stdout,
        stderr,
    })
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}

fn print_line<W: Write>(out: &mut W, text: &str, program: &str) -> Result<(), RunnerError> {
    writeln!(out, "{text}")
        .and_then(|_| out.flush())
        .map_err(|source| RunnerError::Output {
            program: program.to_string(),
            source,
        })
}
