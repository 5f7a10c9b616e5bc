use crate::cli::{AddressMatch, Result};
use cidrmatch::{CidrInfo, CidrRange};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/*--------------------------------------------------------------------------------------
  CIDR Info Table
--------------------------------------------------------------------------------------*/

pub fn info_table(infos: &[CidrInfo]) {
    let mut table = new_table();

    table.set_header(vec![
        header_cell("CIDR"),
        header_cell("Version"),
        header_cell("Subnet Mask"),
        header_cell("Network Address"),
        header_cell("Broadcast"),
        header_cell("Usable Range"),
        header_cell("Addresses"),
        header_cell("Usable Addresses"),
    ]);

    for info in infos {
        let broadcast = info
            .broadcast
            .map(|address| address.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(&info.cidr).add_attribute(Attribute::Bold),
            Cell::new(info.family),
            Cell::new(info.subnet_mask),
            Cell::new(info.network_address),
            Cell::new(broadcast),
            Cell::new(format!("{} - {}", info.usable_range[0], info.usable_range[1])),
            Cell::new(info.addresses_in_network),
            Cell::new(info.usable_addresses_in_network),
        ]);
    }

    // Right-align the CIDR column
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");
}

/*--------------------------------------------------------------------------------------
  Address Match Table
--------------------------------------------------------------------------------------*/

pub fn match_table(address_matches: &[AddressMatch]) {
    let mut table = new_table();

    table.set_header(vec![header_cell("Address"), header_cell("Matched Range")]);

    for address_match in address_matches {
        let range_cell = match address_match.range {
            Some(range) => Cell::new(range),
            None => Cell::new("no match").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&address_match.address).add_attribute(Attribute::Bold),
            range_cell,
        ]);
    }

    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");

    // Print match summary
    let matched_count = address_matches.iter().filter(|m| m.is_match()).count();
    let unmatched_count = address_matches.len() - matched_count;

    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new(matched_count), Cell::new("Matched")]);
    summary_table.add_row(vec![Cell::new(unmatched_count), Cell::new("Not Matched")]);

    if let Some(column) = summary_table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  JSON Report
--------------------------------------------------------------------------------------*/

#[derive(Serialize)]
struct Report<'a> {
    #[serde(rename = "CIDRs")]
    cidrs: &'a [CidrInfo],

    #[serde(rename = "Matches", skip_serializing_if = "Option::is_none")]
    matches: Option<&'a [AddressMatch]>,
}

pub fn json_report(infos: &[CidrInfo], address_matches: Option<&[AddressMatch]>) -> Result<()> {
    let report = Report {
        cidrs: infos,
        matches: address_matches,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Networks In CIDR Format
--------------------------------------------------------------------------------------*/

pub fn networks_in_cidr_format(ranges: &[CidrRange]) {
    for range in ranges {
        println!("{}", range.network());
    }
}

/*--------------------------------------------------------------------------------------
  Address Matches In CIDR Format
--------------------------------------------------------------------------------------*/

pub fn matches_in_cidr_format(address_matches: &[AddressMatch]) {
    for address_match in address_matches {
        match address_match.range {
            Some(range) => println!("{} {}", address_match.address, range),
            None => println!("{} no match", address_match.address),
        }
    }
}
