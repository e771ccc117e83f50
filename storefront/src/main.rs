use std::process::ExitCode;

use clap::Parser;
use storefront::cli::{Cli, run};
use storefront::{ApiResponse, AppError, setup_environment};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    // 1. dotenv, configuration, logging
    let config = setup_environment();

    // 2. One command per invocation
    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            match e.downcast_ref::<AppError>() {
                Some(app_err) if json => {
                    if let Ok(body) = serde_json::to_string_pretty(&ApiResponse::error(app_err)) {
                        println!("{}", body);
                    }
                }
                _ => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
