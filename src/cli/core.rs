use crate::cli;
use cidrmatch::{CidrRange, IpAddress, TrustedRanges, TrustedRangesBuilder};
use log::error;
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Parse CIDR ranges from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn parse_cidrs(args: &cli::Args) -> Vec<CidrRange> {
    args.cidrs
        .iter()
        .filter_map(|cidr| {
            cidr.parse().ok().or_else(|| {
                error!("Invalid CIDR: {:?}", cidr);
                None
            })
        })
        .collect()
}

/*--------------------------------------------------------------------------------------
  Build trusted ranges from CLI arguments and the environment
--------------------------------------------------------------------------------------*/

pub fn build_trusted_ranges(args: &cli::Args, ranges: &[CidrRange]) -> TrustedRanges {
    let mut builder = TrustedRangesBuilder::new();
    if args.private {
        builder = builder.private_ranges(true);
    }

    ranges
        .iter()
        .fold(builder, |builder, range| builder.range(*range))
        .build()
}

/*--------------------------------------------------------------------------------------
  Match addresses against the trusted ranges
--------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AddressMatch {
    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Matched_Range")]
    pub range: Option<CidrRange>,
}

impl AddressMatch {
    pub fn is_match(&self) -> bool {
        self.range.is_some()
    }
}

pub fn match_addresses(addresses: &[String], trusted_ranges: &TrustedRanges) -> Vec<AddressMatch> {
    addresses
        .iter()
        .map(|address| {
            let range = match address.trim().parse::<IpAddress>() {
                Ok(parsed) => trusted_ranges.find(&parsed).map(|found| *found.range),
                Err(error) => {
                    error!("Invalid IP address: {error}");
                    None
                }
            };
            AddressMatch {
                address: address.clone(),
                range,
            }
        })
        .collect()
}
