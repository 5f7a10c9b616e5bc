use crate::cli::AddressMatch;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Match Results
--------------------------------------------------------------------------------------*/

pub fn match_results(address_matches: &[AddressMatch], range_count: usize) {
    let count_addresses = address_matches.len();
    info!("Tested {count_addresses} address(es) against {range_count} range(s)");

    let count_matched = address_matches.iter().filter(|m| m.is_match()).count();
    if count_matched > 0 {
        info!("Found {count_matched} address(es) in the trusted ranges");
    };

    let count_not_matched = count_addresses - count_matched;
    if count_not_matched > 0 {
        warn!("Did not match {count_not_matched} address(es)");
    };
}
