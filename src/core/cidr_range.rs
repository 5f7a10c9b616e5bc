use crate::core::address_family::AddressFamily;
use crate::core::boundaries::{self, compute_boundaries, Boundaries};
use crate::core::errors::{CidrError, Result};
use crate::core::ip_address::{IpAddress, MAX_ADDRESS_LENGTH};
use ipnetwork::{IpNetwork, IpNetworkError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Constants
-------------------------------------------------------------------------------------------------*/

/// Longest accepted CIDR text: the longest address, a `/`, and a three-digit prefix length.
pub const MAX_CIDR_LENGTH: usize = MAX_ADDRESS_LENGTH + 4;

/*-------------------------------------------------------------------------------------------------
  CIDR Range
-------------------------------------------------------------------------------------------------*/

/// An address with a prefix length, written `address/prefix_length`.
///
/// The base address is kept as given; it does not have to sit on a network boundary. Use
/// [CidrRange::network] to get the boundary-aligned range.
///
/// ```
/// use cidrmatch::CidrRange;
///
/// let range: CidrRange = "10.63.5.183/24".parse().unwrap();
/// assert_eq!(range.prefix_length(), 24);
/// assert_eq!(range.base().to_string(), "10.63.5.183");
/// assert_eq!(range.network().to_string(), "10.63.5.0/24");
///
/// // A bare address is a host route
/// let host: CidrRange = "::1".parse().unwrap();
/// assert_eq!(host.prefix_length(), 128);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CidrRange {
    base: IpAddress,
    prefix_length: u8,
}

/*--------------------------------------------------------------------------------------
  CIDR Range Implementation
--------------------------------------------------------------------------------------*/

impl CidrRange {
    /// Create a range from a base address and prefix length; the prefix length may not exceed
    /// the address family's bit width.
    pub fn new(base: IpAddress, prefix_length: u8) -> Result<Self> {
        if prefix_length > base.family().bit_width() {
            return Err(CidrError::validation(
                &format!("{base}/{prefix_length}"),
                "prefix length exceeds the address family's bit width",
            ));
        }
        Ok(Self {
            base,
            prefix_length,
        })
    }

    /// A single-address range (`/32` or `/128`).
    pub fn host(base: IpAddress) -> Self {
        Self {
            base,
            prefix_length: base.family().bit_width(),
        }
    }

    /// Parse `address[/prefix_length]`. Without a prefix length the range is a host route.
    pub fn parse(text: &str) -> Result<Self> {
        if text.len() > MAX_CIDR_LENGTH {
            return Err(CidrError::parse(text, "CIDR is too long"));
        }

        let (address, prefix) = match text.split_once('/') {
            Some((address, prefix)) => (address, Some(prefix)),
            None => (text, None),
        };

        let base = IpAddress::parse(address)?;
        let prefix_length = match prefix {
            Some(prefix) => parse_prefix_length(text, prefix, base.family())?,
            None => base.family().bit_width(),
        };

        Ok(Self {
            base,
            prefix_length,
        })
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// The address the range was created with.
    pub fn base(&self) -> IpAddress {
        self.base
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn family(&self) -> AddressFamily {
        self.base.family()
    }

    /*-------------------------------------------------------------------------
      Boundaries
    -------------------------------------------------------------------------*/

    /// Compute the mask, network, broadcast, and usable range; see [compute_boundaries].
    pub fn boundaries(&self) -> Boundaries {
        compute_boundaries(self)
    }

    /// The boundary-aligned range: the network address with the same prefix length.
    pub fn network(&self) -> CidrRange {
        Self {
            base: self.network_address(),
            prefix_length: self.prefix_length,
        }
    }

    /// First address of the block.
    pub fn network_address(&self) -> IpAddress {
        let mask = boundaries::subnet_mask(self.family(), self.prefix_length);
        IpAddress::from_bits(self.family(), self.base.bits() & mask)
    }

    /// Last address of the block (the broadcast address for IPv4).
    pub fn last_address(&self) -> IpAddress {
        let host_mask = boundaries::host_mask(self.family(), self.prefix_length);
        IpAddress::from_bits(self.family(), self.network_address().bits() | host_mask)
    }

    /*-------------------------------------------------------------------------
      Containment
    -------------------------------------------------------------------------*/

    /// Check if `address` falls inside the block. Addresses of the other family never match.
    pub fn contains(&self, address: &IpAddress) -> bool {
        address.family() == self.family()
            && self.network_address().bits() <= address.bits()
            && address.bits() <= self.last_address().bits()
    }

    /// Like [CidrRange::contains], but reports a family mismatch as an error.
    pub fn try_contains(&self, address: &IpAddress) -> Result<bool> {
        if address.family() != self.family() {
            return Err(CidrError::FamilyMismatch {
                address: address.to_string(),
                range: self.to_string(),
            });
        }
        Ok(self.contains(address))
    }

    /// Check if this range contains every address of `other`.
    pub fn is_supernet_of(&self, other: &CidrRange) -> bool {
        self.family() == other.family()
            && self.prefix_length <= other.prefix_length
            && self.contains(&other.network_address())
    }
}

/*--------------------------------------------------------------------------------------
  Conversions
--------------------------------------------------------------------------------------*/

impl FromStr for CidrRange {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        CidrRange::parse(s)
    }
}

impl fmt::Display for CidrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_length)
    }
}

impl Serialize for CidrRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<IpNetwork> for CidrRange {
    fn from(value: IpNetwork) -> Self {
        Self {
            base: IpAddress::from(value.ip()),
            prefix_length: value.prefix(),
        }
    }
}

impl TryFrom<CidrRange> for IpNetwork {
    type Error = IpNetworkError;

    fn try_from(value: CidrRange) -> std::result::Result<Self, Self::Error> {
        IpNetwork::new(value.base.to_ip_addr(), value.prefix_length)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn parse_prefix_length(text: &str, prefix: &str, family: AddressFamily) -> Result<u8> {
    if prefix.is_empty() || prefix.len() > 3 || !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CidrError::validation(
            text,
            "prefix length must be a non-negative integer",
        ));
    }

    match prefix.parse::<u8>() {
        Ok(prefix_length) if prefix_length <= family.bit_width() => Ok(prefix_length),
        _ => Err(CidrError::validation(
            text,
            "prefix length exceeds the address family's bit width",
        )),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
