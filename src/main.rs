//! identity-admin - user and role administration service
//!
//! Runs the HTTP service or a single administration command

#![allow(missing_docs)]

use clap::Parser;
use identity_admin::cli::{self, Cli};
use identity_admin::utils::error::AdminError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display with causes, not Debug
            eprintln!("Error: {:#}", e);
            match e.downcast_ref::<AdminError>() {
                Some(admin) if admin.is_client_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
