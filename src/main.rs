mod cli;

use clap::Parser;
use cidrmatch::{describe, private_ranges, CidrInfo, CidrRange};
use cli::OutputFormat;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> cli::Result<ExitCode> {
    // Parse CLI arguments
    let args = cli::Args::parse();

    // Initialize logging
    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()?;

    // Without CIDRs or addresses, describe the private range catalog
    let addresses = args.addresses.clone().unwrap_or_default();
    let ranges: Vec<CidrRange> = if args.cidrs.is_empty() && addresses.is_empty() {
        private_ranges().to_vec()
    } else {
        cli::parse_cidrs(&args)
    };
    let infos: Vec<CidrInfo> = ranges.iter().map(describe).collect();

    // Test addresses
    let address_matches = if addresses.is_empty() {
        None
    } else {
        let trusted_ranges = cli::build_trusted_ranges(&args, &ranges);
        let address_matches = cli::match_addresses(&addresses, &trusted_ranges);
        cli::log::match_results(&address_matches, trusted_ranges.ranges().len());
        Some(address_matches)
    };

    // Output results
    match args.output {
        OutputFormat::Table => {
            if !infos.is_empty() {
                cli::output::info_table(&infos);
            }
            if let Some(address_matches) = &address_matches {
                cli::output::match_table(address_matches);
            }
        }
        OutputFormat::Json => cli::output::json_report(&infos, address_matches.as_deref())?,
        OutputFormat::Cidr => {
            cli::output::networks_in_cidr_format(&ranges);
            if let Some(address_matches) = &address_matches {
                cli::output::matches_in_cidr_format(address_matches);
            }
        }
    };

    // Save CIDR descriptions to a CSV file
    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&infos, csv_file)?;
    };

    let all_matched = address_matches
        .iter()
        .flatten()
        .all(|address_match| address_match.is_match());

    Ok(if all_matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
