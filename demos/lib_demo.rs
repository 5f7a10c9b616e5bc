use cidrmatch::{CidrRange, IpAddress, Result, TrustedRangesBuilder};

fn main() -> Result<()> {
    // Describe a CIDR range
    let info = cidrmatch::describe_str("10.63.5.183/24")?;
    println!("{:#?}", info);

    // Check an address against a list of ranges
    let address: IpAddress = "10.10.120.12".parse()?;
    let ranges: Vec<CidrRange> = vec!["172.16.0.0/12".parse()?, "10.0.0.0/8".parse()?];
    println!("{address} in {ranges:?}: {}", cidrmatch::matches(&address, &ranges));

    // Find the most specific range containing an address
    let ranges: Vec<CidrRange> = vec!["10.0.0.0/8".parse()?, "10.10.0.0/16".parse()?];
    if let Some(found) = cidrmatch::longest_match(&address, &ranges) {
        println!("Longest match for {address}: {}", found.range);
    }

    // Is the address private?
    println!("{address} is private: {}", cidrmatch::is_private(&address));

    // Build an allow-list from the environment, extra ranges, and the private catalog
    let trusted = TrustedRangesBuilder::new()
        .ranges(["203.0.113.0/24", "2001:db8::/32"])?
        .private_ranges(true)
        .build();
    for candidate in ["203.0.113.10", "2001:db8::1", "198.51.100.1", "not an address"] {
        println!("{candidate} trusted: {}", trusted.is_trusted_str(candidate));
    }

    Ok(())
}
