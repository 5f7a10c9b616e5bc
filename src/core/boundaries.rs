use crate::core::address_family::AddressFamily;
use crate::core::cidr_range::CidrRange;
use crate::core::ip_address::IpAddress;
use serde::{Serialize, Serializer};
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Mask Functions
-------------------------------------------------------------------------------------------------*/

/// Host-bit mask for `prefix_length`: the trailing `bit_width - prefix_length` bits set.
pub(crate) fn host_mask(family: AddressFamily, prefix_length: u8) -> u128 {
    let host_bits = family.bit_width() - prefix_length;
    if host_bits == 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// Subnet mask for `prefix_length`: the leading `prefix_length` bits of the family's width set.
pub(crate) fn subnet_mask(family: AddressFamily, prefix_length: u8) -> u128 {
    family.all_ones() & !host_mask(family, prefix_length)
}

/*-------------------------------------------------------------------------------------------------
  Address Count
-------------------------------------------------------------------------------------------------*/

/// Number of addresses in (part of) a CIDR block.
///
/// Counts range from `1` to `2^128` (the whole IPv6 space), one more than fits in a `u128`, so
/// the count is stored as `count - 1`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AddressCount {
    minus_one: u128,
}

const TWO_POW_128: &str = "340282366920938463463374607431768211456";

impl AddressCount {
    pub(crate) fn from_minus_one(minus_one: u128) -> Self {
        Self { minus_one }
    }

    /// The count as a `u128`, or `None` for `2^128`.
    pub fn to_u128(&self) -> Option<u128> {
        self.minus_one.checked_add(1)
    }
}

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_u128() {
            Some(count) => write!(f, "{count}"),
            None => f.write_str(TWO_POW_128),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_u128() {
            Some(count) => serializer.serialize_u128(count),
            None => serializer.collect_str(self),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Boundaries
-------------------------------------------------------------------------------------------------*/

/// Boundary addresses and sizes derived from a [CidrRange].
///
/// Use [compute_boundaries] (or [CidrRange::boundaries]) to create.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Boundaries {
    pub family: AddressFamily,
    pub prefix_length: u8,

    /// Leading `prefix_length` one-bits.
    pub subnet_mask: IpAddress,

    /// Bitwise complement of the subnet mask.
    pub wildcard_mask: IpAddress,

    /// First address of the block (all host bits cleared).
    pub network_address: IpAddress,

    /// Last address of the block (all host bits set); IPv4 only.
    pub broadcast_address: Option<IpAddress>,

    /// Last address of the block for either family.
    pub last_address: IpAddress,

    pub usable_first: IpAddress,
    pub usable_last: IpAddress,

    /// Total addresses in the block: `2^(bit_width - prefix_length)`.
    pub address_count: AddressCount,

    /// Addresses in the usable range.
    pub usable_count: AddressCount,
}

/*-------------------------------------------------------------------------------------------------
  Mask Computer
-------------------------------------------------------------------------------------------------*/

/// Compute the mask, network, broadcast, usable range, and sizes of a CIDR range.
///
/// IPv4 blocks up to `/30` exclude the network and broadcast addresses from the usable range;
/// `/31` point-to-point links use both addresses; a `/32` is the single host. IPv6 has no
/// broadcast address and the usable range is the whole block.
///
/// ```
/// use cidrmatch::{compute_boundaries, CidrRange};
///
/// let range: CidrRange = "10.63.5.183/24".parse().unwrap();
/// let boundaries = compute_boundaries(&range);
///
/// assert_eq!(boundaries.network_address.to_string(), "10.63.5.0");
/// assert_eq!(boundaries.broadcast_address.unwrap().to_string(), "10.63.5.255");
/// assert_eq!(boundaries.usable_first.to_string(), "10.63.5.1");
/// assert_eq!(boundaries.usable_last.to_string(), "10.63.5.254");
/// assert_eq!(boundaries.address_count.to_u128(), Some(256));
/// assert_eq!(boundaries.usable_count.to_u128(), Some(254));
/// ```
pub fn compute_boundaries(range: &CidrRange) -> Boundaries {
    let family = range.family();
    let prefix_length = range.prefix_length();

    let mask = subnet_mask(family, prefix_length);
    let wildcard = host_mask(family, prefix_length);

    let network = range.base().bits() & mask;
    let last = network | wildcard;

    let (usable_first, usable_last, usable_minus_one) = match family {
        AddressFamily::IPv4 => match prefix_length {
            32 => (network, network, 0),
            31 => (network, last, 1),
            _ => (network + 1, last - 1, wildcard - 2),
        },
        AddressFamily::IPv6 => (network, last, wildcard),
    };

    let address = |bits: u128| IpAddress::from_bits(family, bits);

    Boundaries {
        family,
        prefix_length,
        subnet_mask: address(mask),
        wildcard_mask: address(wildcard),
        network_address: address(network),
        broadcast_address: family.is_ipv4().then(|| address(last)),
        last_address: address(last),
        usable_first: address(usable_first),
        usable_last: address(usable_last),
        address_count: AddressCount::from_minus_one(wildcard),
        usable_count: AddressCount::from_minus_one(usable_minus_one),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
