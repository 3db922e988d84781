use colored::*;
use editor_test_runner::{RunnerError, cli};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli_args = cli::parse_args();

    // Process the command
    match cli::process_command(cli_args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            let code = e
                .downcast_ref::<RunnerError>()
                .map(RunnerError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
