/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address_family;
pub mod boundaries;
pub mod cidr_range;
pub mod errors;
pub mod info;
pub mod ip_address;
pub mod matcher;
pub mod private_ranges;
pub mod trusted_ranges;
