use crate::core::address_family::AddressFamily;
use crate::core::boundaries::AddressCount;
use crate::core::cidr_range::CidrRange;
use crate::core::errors::Result;
use crate::core::ip_address::IpAddress;
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  CIDR Info
-------------------------------------------------------------------------------------------------*/

/// Descriptive record of a single CIDR range for diagnostic and reporting output.
///
/// Serializes with the field names shown in parentheses; fields that do not apply to IPv6
/// (wildcard mask and broadcast) are omitted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CidrInfo {
    /// CIDR notation (`CIDR`).
    #[serde(rename = "CIDR")]
    pub cidr: String,

    /// Address family (`IP_Version`).
    #[serde(rename = "IP_Version")]
    pub family: AddressFamily,

    /// The address the range was written with (`IP_Address`).
    #[serde(rename = "IP_Address")]
    pub ip_address: IpAddress,

    /// Subnet mask (`Subnet_Mask`); dotted decimal for IPv4, compressed hex for IPv6.
    #[serde(rename = "Subnet_Mask")]
    pub subnet_mask: IpAddress,

    /// Prefix length (`Prefix_Length`).
    #[serde(rename = "Prefix_Length")]
    pub prefix_length: u8,

    /// Wildcard (inverse) mask, IPv4 only (`Wildcard_Mask`).
    #[serde(rename = "Wildcard_Mask", skip_serializing_if = "Option::is_none")]
    pub wildcard_mask: Option<IpAddress>,

    /// Network address (`Network_Address`).
    #[serde(rename = "Network_Address")]
    pub network_address: IpAddress,

    /// Broadcast address, IPv4 only (`Broadcast`).
    #[serde(rename = "Broadcast", skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<IpAddress>,

    /// First and last address of the block (`Network_Range`).
    #[serde(rename = "Network_Range")]
    pub network_range: [IpAddress; 2],

    /// First and last usable address (`Usable_Range`).
    #[serde(rename = "Usable_Range")]
    pub usable_range: [IpAddress; 2],

    /// Total addresses in the block (`Addresses_in_Network`).
    #[serde(rename = "Addresses_in_Network")]
    pub addresses_in_network: AddressCount,

    /// Addresses in the usable range (`Usable_Addresses_in_Network`).
    #[serde(rename = "Usable_Addresses_in_Network")]
    pub usable_addresses_in_network: AddressCount,
}

/*-------------------------------------------------------------------------------------------------
  Info Formatter
-------------------------------------------------------------------------------------------------*/

/// Describe a CIDR range.
///
/// ```
/// use cidrmatch::describe_str;
///
/// let info = describe_str("fe80::b091:1117:497a:9dc1/48").unwrap();
/// assert_eq!(info.subnet_mask.to_string(), "ffff:ffff:ffff::");
/// assert_eq!(info.network_address.to_string(), "fe80::");
/// assert_eq!(info.addresses_in_network.to_string(), "1208925819614629174706176");
/// ```
pub fn describe(range: &CidrRange) -> CidrInfo {
    let boundaries = range.boundaries();
    let is_ipv4 = boundaries.family.is_ipv4();

    CidrInfo {
        cidr: range.to_string(),
        family: boundaries.family,
        ip_address: range.base(),
        subnet_mask: boundaries.subnet_mask,
        prefix_length: boundaries.prefix_length,
        wildcard_mask: is_ipv4.then_some(boundaries.wildcard_mask),
        network_address: boundaries.network_address,
        broadcast: boundaries.broadcast_address,
        network_range: [boundaries.network_address, boundaries.last_address],
        usable_range: [boundaries.usable_first, boundaries.usable_last],
        addresses_in_network: boundaries.address_count,
        usable_addresses_in_network: boundaries.usable_count,
    }
}

/// Parse `text` as a CIDR range and describe it; the record keeps the text as written.
pub fn describe_str(text: &str) -> Result<CidrInfo> {
    let range = CidrRange::parse(text)?;
    Ok(CidrInfo {
        cidr: text.to_string(),
        ..describe(&range)
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
