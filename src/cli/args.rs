use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jadwal",
    version,
    about = "Monthly prayer schedule for Indonesian cities, with a live countdown"
)]
pub struct Cli {
    /// Override the configured city for this run (e.g. "Jakarta")
    #[arg(long, global = true)]
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print today's prayer times and the countdown to the next prayer
    Times,
    /// Print the full monthly schedule table
    Monthly,
    /// List the cities available in the picker
    Cities,
}
