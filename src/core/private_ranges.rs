use crate::core::cidr_range::CidrRange;
use lazy_static::lazy_static;

/*-------------------------------------------------------------------------------------------------
  Private Range Catalog
-------------------------------------------------------------------------------------------------*/

/// Reserved, non-globally-routable ranges treated as private.
pub const PRIVATE_CIDRS: [&str; 8] = [
    "127.0.0.0/8",    // IPv4 loopback
    "10.0.0.0/8",     // RFC 1918
    "172.16.0.0/12",  // RFC 1918
    "192.168.0.0/16", // RFC 1918
    "169.254.0.0/16", // IPv4 link-local
    "::1/128",        // IPv6 loopback
    "fc00::/7",       // Unique local
    "fe80::/10",      // IPv6 link-local
];

lazy_static! {
    static ref PRIVATE_RANGES: Vec<CidrRange> = PRIVATE_CIDRS
        .iter()
        .map(|cidr| cidr.parse().expect("Private range catalog entries are valid CIDRs"))
        .collect();
}

/// The process-wide catalog of private and reserved ranges (loopback, RFC 1918, link-local, and
/// unique-local) for both address families.
///
/// ```
/// use cidrmatch::{matches, private_ranges, IpAddress};
///
/// let address: IpAddress = "10.10.120.12".parse().unwrap();
/// assert!(matches(&address, private_ranges()));
/// ```
pub fn private_ranges() -> &'static [CidrRange] {
    &PRIVATE_RANGES
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
