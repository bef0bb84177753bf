use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the owner profile. Fails if one already exists.
    InitProfile {
        #[arg(long)]
        fullname: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth: String,
        #[arg(long)]
        age: String,
        #[arg(long, default_value = "")]
        about: String,
        /// Login password (at least 8 characters)
        #[arg(long)]
        password: String,
    },

    /// Replace the owner's login password
    SetPassword {
        #[arg(long)]
        password: String,
    },
}
