use crate::core::address_family::AddressFamily;
use crate::core::errors::{CidrError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Constants
-------------------------------------------------------------------------------------------------*/

/// Longest accepted address text; `ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255` is 45 bytes.
pub const MAX_ADDRESS_LENGTH: usize = 45;

/*-------------------------------------------------------------------------------------------------
  IP Address
-------------------------------------------------------------------------------------------------*/

/// An IPv4 or IPv6 address held as its big-endian numeric value.
///
/// IPv4 addresses use the low 32 bits of `bits`; the remaining bits are always zero.
///
/// ```
/// use cidrmatch::{AddressFamily, IpAddress};
///
/// let address: IpAddress = "10.10.120.12".parse().unwrap();
/// assert_eq!(address.family(), AddressFamily::IPv4);
/// assert_eq!(address.bits(), 0x0A0A_780C);
///
/// let address = IpAddress::parse("::ffff:192.0.2.1").unwrap();
/// assert_eq!(address.bits(), 0xFFFF_C000_0201);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IpAddress {
    family: AddressFamily,
    bits: u128,
}

/*--------------------------------------------------------------------------------------
  IP Address Implementation
--------------------------------------------------------------------------------------*/

impl IpAddress {
    /// Create an IPv4 address from its numeric value.
    pub fn v4(bits: u32) -> Self {
        Self {
            family: AddressFamily::IPv4,
            bits: bits as u128,
        }
    }

    /// Create an IPv6 address from its numeric value.
    pub fn v6(bits: u128) -> Self {
        Self {
            family: AddressFamily::IPv6,
            bits,
        }
    }

    /// Create an address of `family`, discarding any bits above the family's width.
    pub(crate) fn from_bits(family: AddressFamily, bits: u128) -> Self {
        Self {
            family,
            bits: bits & family.all_ones(),
        }
    }

    /// Parse an IPv4 (dotted decimal) or IPv6 (RFC 4291 text, including `::` compression and an
    /// embedded dotted IPv4 suffix) address.
    pub fn parse(text: &str) -> Result<Self> {
        if text.len() > MAX_ADDRESS_LENGTH {
            return Err(CidrError::parse(text, "address is too long"));
        }

        if text.contains(':') {
            parse_ipv6(text).map(IpAddress::v6)
        } else {
            parse_ipv4(text, text).map(IpAddress::v4)
        }
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Numeric (big-endian) value of the address.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn is_ipv4(&self) -> bool {
        self.family.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.family.is_ipv6()
    }

    /// Convert to the standard library address type.
    pub fn to_ip_addr(&self) -> IpAddr {
        match self.family {
            AddressFamily::IPv4 => IpAddr::V4(Ipv4Addr::from(self.bits as u32)),
            AddressFamily::IPv6 => IpAddr::V6(Ipv6Addr::from(self.bits)),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Conversions
--------------------------------------------------------------------------------------*/

impl FromStr for IpAddress {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        IpAddress::parse(s)
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(value: Ipv4Addr) -> Self {
        IpAddress::v4(u32::from(value))
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(value: Ipv6Addr) -> Self {
        IpAddress::v6(u128::from(value))
    }
}

impl From<IpAddr> for IpAddress {
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(ipv4) => IpAddress::from(ipv4),
            IpAddr::V6(ipv6) => IpAddress::from(ipv6),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(value: IpAddress) -> Self {
        value.to_ip_addr()
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ip_addr(), f)
    }
}

impl Serialize for IpAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/*-------------------------------------------------------------------------------------------------
  Address Parser
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  IPv4
--------------------------------------------------------------------------------------*/

/// Parse the dotted-decimal `part` of `text`; errors report the full `text`.
fn parse_ipv4(text: &str, part: &str) -> Result<u32> {
    if part.split('.').count() != 4 {
        return Err(CidrError::parse(
            text,
            "expected four dot-separated decimal octets",
        ));
    }

    part.split('.').try_fold(0u32, |bits, octet| {
        parse_octet(text, octet).map(|octet| (bits << 8) | octet as u32)
    })
}

fn parse_octet(text: &str, octet: &str) -> Result<u8> {
    if octet.is_empty() || !octet.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CidrError::parse(text, "octets must be decimal numbers"));
    }

    // Only digits remain, so the sole failure is a value above 255
    octet
        .parse::<u8>()
        .map_err(|_| CidrError::validation(text, "octet value must be between 0 and 255"))
}

/*--------------------------------------------------------------------------------------
  IPv6
--------------------------------------------------------------------------------------*/

fn parse_ipv6(text: &str) -> Result<u128> {
    let (head, tail) = match text.split_once("::") {
        Some((_, tail)) if tail.contains("::") => {
            return Err(CidrError::parse(text, "more than one `::` compression marker"));
        }
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    };

    let head = parse_groups(text, head, tail.is_none())?;

    match tail {
        None => {
            if head.len() != 8 {
                return Err(CidrError::parse(text, "expected eight colon-separated groups"));
            }
            Ok(head
                .iter()
                .fold(0u128, |bits, &group| (bits << 16) | group as u128))
        }
        Some(tail) => {
            let tail = parse_groups(text, tail, true)?;
            if head.len() + tail.len() > 7 {
                return Err(CidrError::parse(
                    text,
                    "`::` must replace at least one all-zero group",
                ));
            }
            let high = head
                .iter()
                .enumerate()
                .fold(0u128, |bits, (index, &group)| {
                    bits | ((group as u128) << (112 - 16 * index))
                });
            let low = tail
                .iter()
                .fold(0u128, |bits, &group| (bits << 16) | group as u128);
            Ok(high | low)
        }
    }
}

/// Parse the colon-separated groups on one side of a `::` marker. A dotted IPv4 address is
/// accepted as the last group when `piece` ends the address.
fn parse_groups(text: &str, piece: &str, ends_address: bool) -> Result<Vec<u16>> {
    let mut groups = Vec::with_capacity(8);
    if piece.is_empty() {
        return Ok(groups);
    }

    let mut parts = piece.split(':').peekable();
    while let Some(part) = parts.next() {
        if groups.len() >= 8 {
            return Err(CidrError::parse(text, "too many groups"));
        }

        if ends_address && parts.peek().is_none() && part.contains('.') {
            let ipv4 = parse_ipv4(text, part)?;
            groups.push((ipv4 >> 16) as u16);
            groups.push(ipv4 as u16);
        } else {
            groups.push(parse_hex_group(text, part)?);
        }
    }

    Ok(groups)
}

fn parse_hex_group(text: &str, group: &str) -> Result<u16> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return Err(CidrError::parse(
            text,
            "groups must be one to four hexadecimal digits",
        ));
    }

    u16::from_str_radix(group, 16)
        .map_err(|_| CidrError::parse(text, "groups must be one to four hexadecimal digits"))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
