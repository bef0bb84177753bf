use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Provision and maintain the portfolio admin owner")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
