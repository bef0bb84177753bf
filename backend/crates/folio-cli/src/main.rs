//! folio - owner provisioning for the portfolio admin panel
//!
//! Uses the same configuration (and therefore the same database) as
//! `folio-server`.
//!
//! # Examples
//!
//! ```bash
//! folio init-profile --fullname "Ada Lovelace" --birth 1815-12-10 --age 36 --password '...'
//! folio set-password --password '...'
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use folio_cli::{InitProfile, Result as CliResult, init_profile, set_password};
use folio_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;
    let database_path = config.database_path()?;
    let pool = folio_db::connect(&database_path).await?;

    let message = match command {
        Commands::InitProfile {
            fullname,
            location,
            birth,
            age,
            about,
            password,
        } => {
            let input = InitProfile {
                fullname,
                location,
                birth,
                age,
                about,
                password,
            };
            let profile = init_profile(&pool, &input).await?;
            format!(
                "Created profile for {} in {}",
                profile.fullname,
                database_path.display()
            )
        }
        Commands::SetPassword { password } => {
            set_password(&pool, &password).await?;
            String::from("Password updated")
        }
    };

    pool.close().await;
    Ok(message)
}
