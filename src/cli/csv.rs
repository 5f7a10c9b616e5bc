use crate::cli::Result;
use cidrmatch::CidrInfo;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save CIDR Descriptions to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(infos: &[CidrInfo], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize([
        "CIDR",
        "IP Version",
        "IP Address",
        "Subnet Mask",
        "Prefix Length",
        "Wildcard Mask",
        "Network Address",
        "Broadcast",
        "First Address",
        "Last Address",
        "First Usable Address",
        "Last Usable Address",
        "Addresses in Network",
        "Usable Addresses in Network",
    ])?;

    // Write CIDR records
    for info in infos {
        let optional = |address: Option<cidrmatch::IpAddress>| {
            address.map(|address| address.to_string()).unwrap_or_default()
        };
        let record = (
            &info.cidr,
            info.family.to_string(),
            info.ip_address.to_string(),
            info.subnet_mask.to_string(),
            info.prefix_length,
            optional(info.wildcard_mask),
            info.network_address.to_string(),
            optional(info.broadcast),
            info.network_range[0].to_string(),
            info.network_range[1].to_string(),
            info.usable_range[0].to_string(),
            info.usable_range[1].to_string(),
            info.addresses_in_network.to_string(),
            info.usable_addresses_in_network.to_string(),
        );
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
