//! Parse, describe, and match IPv4 and IPv6 CIDR ranges.
//!
//! Addresses are held as fixed-width integers, so mask, boundary, and containment checks are
//! plain unsigned arithmetic. Every operation is a pure function over immutable values and is
//! safe to call from any number of threads.
//!
//! ```
//! use cidrmatch::{describe_str, is_private, matches, CidrRange, IpAddress};
//!
//! // Match an address against a list of ranges
//! let address: IpAddress = "10.10.120.12".parse().unwrap();
//! let ranges: Vec<CidrRange> = vec!["10.0.0.0/8".parse().unwrap()];
//! assert!(matches(&address, &ranges));
//! assert!(is_private(&address));
//!
//! // Describe a range
//! let info = describe_str("10.63.5.183/24").unwrap();
//! assert_eq!(info.network_address.to_string(), "10.63.5.0");
//! assert_eq!(info.broadcast.unwrap().to_string(), "10.63.5.255");
//! assert_eq!(info.usable_addresses_in_network.to_string(), "254");
//! ```

/*-------------------------------------------------------------------------------------------------
  Library Modules
-------------------------------------------------------------------------------------------------*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

// Address and range types
pub use crate::core::address_family::AddressFamily;
pub use crate::core::cidr_range::{CidrRange, MAX_CIDR_LENGTH};
pub use crate::core::ip_address::{IpAddress, MAX_ADDRESS_LENGTH};

// Errors and results
pub use crate::core::errors::{CidrError, Error, Result};

// Boundaries and descriptions
pub use crate::core::boundaries::{compute_boundaries, AddressCount, Boundaries};
pub use crate::core::info::{describe, describe_str, CidrInfo};

// Matching
pub use crate::core::matcher::{
    find_match, is_private, longest_match, matches, matches_str, RangeMatch,
};
pub use crate::core::private_ranges::{private_ranges, PRIVATE_CIDRS};
pub use crate::core::trusted_ranges::{
    TrustedRanges, TrustedRangesBuilder, TRUSTED_RANGES_ENV_VAR, TRUST_PRIVATE_ENV_VAR,
};

// Re-export ipnetwork for conversions to and from CidrRange
pub use ipnetwork;
