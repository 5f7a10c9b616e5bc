use crate::core::cidr_range::CidrRange;
use crate::core::ip_address::IpAddress;
use crate::core::private_ranges::private_ranges;
use log::{debug, trace};

/*-------------------------------------------------------------------------------------------------
  Range Match
-------------------------------------------------------------------------------------------------*/

/// The range (and its position in the searched list) that matched an address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeMatch<'r> {
    pub index: usize,
    pub range: &'r CidrRange,
}

/*-------------------------------------------------------------------------------------------------
  Range Matcher
-------------------------------------------------------------------------------------------------*/

/// Check if `address` falls inside any of `ranges`. Ranges of the other address family never
/// match; the first matching range ends the search.
///
/// ```
/// use cidrmatch::{matches, CidrRange, IpAddress};
///
/// let address: IpAddress = "10.10.120.12".parse().unwrap();
/// let ranges: Vec<CidrRange> = vec!["172.16.0.0/12".parse().unwrap(), "10.0.0.0/8".parse().unwrap()];
///
/// assert!(matches(&address, &ranges));
/// assert!(!matches(&address, &ranges[..1]));
/// ```
pub fn matches(address: &IpAddress, ranges: &[CidrRange]) -> bool {
    find_match(address, ranges).is_some()
}

/// Find the first range in `ranges` that contains `address`.
pub fn find_match<'r>(address: &IpAddress, ranges: &'r [CidrRange]) -> Option<RangeMatch<'r>> {
    ranges
        .iter()
        .enumerate()
        .find(|(_, range)| range.contains(address))
        .map(|(index, range)| {
            trace!("{address} matched {range} (index {index})");
            RangeMatch { index, range }
        })
}

/// Find the most specific (longest prefix) range in `ranges` that contains `address`.
pub fn longest_match<'r>(address: &IpAddress, ranges: &'r [CidrRange]) -> Option<RangeMatch<'r>> {
    ranges
        .iter()
        .enumerate()
        .filter(|(_, range)| range.contains(address))
        .max_by_key(|(index, range)| (range.prefix_length(), std::cmp::Reverse(*index)))
        .map(|(index, range)| RangeMatch { index, range })
}

/// Parse `address` and check it against `ranges`. Text that does not parse never matches, so
/// attacker-controlled input (e.g. forwarded-for header values) fails closed.
pub fn matches_str(address: &str, ranges: &[CidrRange]) -> bool {
    match IpAddress::parse(address) {
        Ok(address) => matches(&address, ranges),
        Err(error) => {
            debug!("Treating unparsable address as unmatched: {error}");
            false
        }
    }
}

/// Check if `address` is in one of the [private_ranges].
pub fn is_private(address: &IpAddress) -> bool {
    matches(address, private_ranges())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cidr_range::tests::{address, cidr};
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Documented Scenarios
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_ipv4_address_in_range() {
        assert!(matches(&address("10.10.120.12"), &[cidr("10.0.0.0/8")]));
    }

    #[test]
    fn test_ipv4_address_not_in_range() {
        assert!(!matches(&address("10.10.120.12"), &[cidr("172.16.0.0/12")]));
    }

    #[test]
    fn test_ipv6_address_in_range() {
        assert!(matches(
            &address("fe80::b091:1117:497a:9dc1"),
            &[cidr("fe80::/10")]
        ));
    }

    #[test]
    fn test_ipv4_address_is_private() {
        assert!(matches(&address("10.10.120.12"), private_ranges()));
        assert!(is_private(&address("10.10.120.12")));
    }

    /*----------------------------------------------------------------------------------
      Matching
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_matches_empty_list() {
        assert!(!matches(&address("10.0.0.1"), &[]));
    }

    #[test]
    fn test_matches_family_isolation() {
        let ipv4_ranges = [cidr("0.0.0.0/0")];
        let ipv6_ranges = [cidr("::/0")];

        assert!(!matches(&address("::1"), &ipv4_ranges));
        assert!(!matches(&address("127.0.0.1"), &ipv6_ranges));

        // IPv4-mapped IPv6 addresses stay IPv6
        assert!(!matches(&address("::ffff:10.0.0.1"), &[cidr("10.0.0.0/8")]));
        assert!(matches(
            &address("::ffff:10.0.0.1"),
            &[cidr("::ffff:10.0.0.0/104")]
        ));
    }

    #[test]
    fn test_matches_block_edges() {
        let ranges = [cidr("192.168.0.0/16")];
        assert!(matches(&address("192.168.0.0"), &ranges));
        assert!(matches(&address("192.168.255.255"), &ranges));
        assert!(!matches(&address("192.167.255.255"), &ranges));
        assert!(!matches(&address("192.169.0.0"), &ranges));

        let ranges = [cidr("fe80::/10")];
        assert!(matches(&address("febf:ffff:ffff:ffff:ffff:ffff:ffff:ffff"), &ranges));
        assert!(!matches(&address("fec0::"), &ranges));
        assert!(!matches(&address("fe7f:ffff:ffff:ffff:ffff:ffff:ffff:ffff"), &ranges));
    }

    #[test]
    fn test_matches_host_base_range() {
        // The base address does not need to be boundary-aligned
        assert!(matches(&address("10.63.5.1"), &[cidr("10.63.5.183/24")]));
        assert!(!matches(&address("10.63.6.1"), &[cidr("10.63.5.183/24")]));
    }

    #[test]
    fn test_find_match_returns_first() {
        let ranges = [cidr("172.16.0.0/12"), cidr("10.0.0.0/8"), cidr("10.10.0.0/16")];
        let found = find_match(&address("10.10.120.12"), &ranges).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(*found.range, cidr("10.0.0.0/8"));

        assert_eq!(find_match(&address("192.0.2.1"), &ranges), None);
    }

    #[test]
    fn test_longest_match() {
        let ranges = [
            cidr("10.0.0.0/8"),
            cidr("10.10.0.0/16"),
            cidr("10.10.120.0/24"),
            cidr("10.10.0.0/16"),
        ];
        let found = longest_match(&address("10.10.120.12"), &ranges).unwrap();
        assert_eq!(found.index, 2);

        let found = longest_match(&address("10.10.1.1"), &ranges).unwrap();
        assert_eq!(found.index, 1); // First of the equally specific ranges

        assert_eq!(longest_match(&address("11.0.0.1"), &ranges), None);
    }

    /*----------------------------------------------------------------------------------
      Fail-Closed String Matching
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_matches_str() {
        let ranges = [cidr("10.0.0.0/8")];
        assert!(matches_str("10.1.2.3", &ranges));
        assert!(!matches_str("11.1.2.3", &ranges));
        assert!(!matches_str("10.1.2.3, 10.0.0.1", &ranges));
        assert!(!matches_str("10.1.2", &ranges));
        assert!(!matches_str("10.1.2.300", &ranges));
        assert!(!matches_str("", &ranges));
        assert!(!matches_str(&"1".repeat(10_000), &ranges));
    }

    /*----------------------------------------------------------------------------------
      Private Addresses
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_is_private() {
        for text in [
            "127.0.0.1",
            "10.255.255.255",
            "172.16.0.1",
            "172.31.255.254",
            "192.168.1.1",
            "169.254.10.10",
            "::1",
            "fc00::1",
            "fdff:ffff::1",
            "fe80::b091:1117:497a:9dc1",
        ] {
            assert!(is_private(&address(text)), "{text}");
        }

        for text in [
            "8.8.8.8",
            "172.32.0.1",
            "192.169.0.1",
            "169.255.0.1",
            "::2",
            "2001:db8::1",
            "fec0::1",
            "::ffff:10.0.0.1",
        ] {
            assert!(!is_private(&address(text)), "{text}");
        }
    }
}
