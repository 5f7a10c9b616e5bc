use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Describe and match IPv4 and IPv6 CIDR ranges.", long_about = None)]
pub struct Args {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Test these IP addresses against the CIDRs and any trusted ranges
    #[arg(short = 'a', long = "address")]
    pub addresses: Option<Vec<String>>,

    /// Include the private and reserved ranges when testing addresses
    #[arg(short = 'p', long)]
    pub private: bool,

    /// Save the CIDR descriptions to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// CIDRs to describe (address[/prefix-length]); defaults to the private and reserved ranges
    pub cidrs: Vec<String>,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Table of CIDR details and address matches
    #[default]
    Table,

    /// JSON report
    Json,

    /// List of (RFC4632) CIDR-format network prefixes
    Cidr,
}
