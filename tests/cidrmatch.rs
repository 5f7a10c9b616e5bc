use assert_cmd::Command;

/*-------------------------------------------------------------------------------------------------
  cidrmatch Binary Tests
-------------------------------------------------------------------------------------------------*/

// Run cidrmatch with the trusted-range environment variables cleared
fn cidrmatch() -> Command {
    let mut command = Command::cargo_bin("cidrmatch").unwrap();
    command
        .env_remove("CIDRMATCH_TRUSTED_RANGES")
        .env_remove("CIDRMATCH_TRUST_PRIVATE");
    command
}

fn stdout(command: &mut Command) -> String {
    let output = command.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/*--------------------------------------------------------------------------------------
  No Arguments - Describe the Private Range Catalog
--------------------------------------------------------------------------------------*/

#[test]
fn command_no_args() {
    cidrmatch().assert().success();
}

#[test]
fn command_no_args_lists_private_ranges() {
    let output = stdout(cidrmatch().arg("--output").arg("cidr"));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "127.0.0.0/8",
            "10.0.0.0/8",
            "172.16.0.0/12",
            "192.168.0.0/16",
            "169.254.0.0/16",
            "::1/128",
            "fc00::/7",
            "fe80::/10",
        ]
    );
}

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    cidrmatch().arg("--version").assert().success();
}

/*--------------------------------------------------------------------------------------
  Output Formats
--------------------------------------------------------------------------------------*/

/*-----------------------------------------------------------------------------
  Output: Table
-----------------------------------------------------------------------------*/

#[test]
fn command_output_table() {
    let output = stdout(cidrmatch().arg("--output").arg("table").arg("10.63.5.183/24"));
    assert!(output.contains("10.63.5.183/24"));
    assert!(output.contains("255.255.255.0"));
    assert!(output.contains("10.63.5.255"));
    assert!(output.contains("10.63.5.1 - 10.63.5.254"));
}

/*-----------------------------------------------------------------------------
  Output: JSON
-----------------------------------------------------------------------------*/

#[test]
fn command_output_json() {
    let output = stdout(
        cidrmatch()
            .arg("--output")
            .arg("json")
            .arg("fe80::b091:1117:497a:9dc1/48"),
    );
    assert!(output.contains(r#""Subnet_Mask": "ffff:ffff:ffff::""#));
    assert!(output.contains(r#""Network_Address": "fe80::""#));
    assert!(output.contains("1208925819614629174706176"));
    assert!(!output.contains("Broadcast"));
    assert!(!output.contains("Matches"));
}

#[test]
fn command_output_json_with_matches() {
    let output = stdout(
        cidrmatch()
            .arg("-o")
            .arg("json")
            .arg("10.0.0.0/8")
            .arg("-a")
            .arg("10.10.120.12"),
    );
    assert!(output.contains(r#""Address": "10.10.120.12""#));
    assert!(output.contains(r#""Matched_Range": "10.0.0.0/8""#));
}

/*-----------------------------------------------------------------------------
  Output: CIDR
-----------------------------------------------------------------------------*/

#[test]
fn command_output_cidr() {
    let output = stdout(
        cidrmatch()
            .arg("--output")
            .arg("cidr")
            .arg("10.63.5.183/24")
            .arg("fe80::b091:1117:497a:9dc1/48"),
    );
    assert_eq!(output, "10.63.5.0/24\nfe80::/48\n");
}

/*--------------------------------------------------------------------------------------
  Address Matching
--------------------------------------------------------------------------------------*/

#[test]
fn command_address_in_range() {
    let output = stdout(
        cidrmatch()
            .arg("-o")
            .arg("cidr")
            .arg("10.0.0.0/8")
            .arg("--address")
            .arg("10.10.120.12"),
    );
    assert!(output.contains("10.10.120.12 10.0.0.0/8"));
}

#[test]
fn command_address_not_in_range() {
    cidrmatch()
        .arg("172.16.0.0/12")
        .arg("--address")
        .arg("10.10.120.12")
        .assert()
        .code(1);
}

#[test]
fn command_ipv6_address_in_range() {
    cidrmatch()
        .arg("fe80::/10")
        .arg("--address")
        .arg("fe80::b091:1117:497a:9dc1")
        .assert()
        .success();
}

#[test]
fn command_address_family_mismatch() {
    cidrmatch()
        .arg("0.0.0.0/0")
        .arg("--address")
        .arg("::1")
        .assert()
        .code(1);
}

#[test]
fn command_address_is_private() {
    cidrmatch()
        .arg("--private")
        .arg("--address")
        .arg("10.10.120.12")
        .arg("--address")
        .arg("fe80::b091:1117:497a:9dc1")
        .assert()
        .success();
}

#[test]
fn command_invalid_address() {
    cidrmatch()
        .arg("--private")
        .arg("--address")
        .arg("10.10.120")
        .assert()
        .code(1);
}

#[test]
fn command_some_addresses_not_matched() {
    let output = cidrmatch()
        .arg("-o")
        .arg("cidr")
        .arg("10.0.0.0/8")
        .arg("-a")
        .arg("10.1.1.1")
        .arg("-a")
        .arg("8.8.8.8")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("10.1.1.1 10.0.0.0/8"));
    assert!(stdout.contains("8.8.8.8 no match"));
}

#[test]
fn command_invalid_cidr_is_skipped() {
    let output = stdout(
        cidrmatch()
            .arg("-o")
            .arg("cidr")
            .arg("10.0.0.0/33")
            .arg("192.168.0.0/16"),
    );
    assert_eq!(output, "192.168.0.0/16\n");
}

/*--------------------------------------------------------------------------------------
  Environment Configuration
--------------------------------------------------------------------------------------*/

#[test]
fn command_trusted_ranges_env_var() {
    cidrmatch()
        .env("CIDRMATCH_TRUSTED_RANGES", "203.0.113.0/24, 2001:db8::/32")
        .arg("--address")
        .arg("203.0.113.9")
        .arg("--address")
        .arg("2001:db8::1")
        .assert()
        .success();
}

#[test]
fn command_trust_private_env_var() {
    cidrmatch()
        .env("CIDRMATCH_TRUST_PRIVATE", "true")
        .arg("--address")
        .arg("192.168.1.1")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Save to CSV
--------------------------------------------------------------------------------------*/

#[test]
fn command_save_to_csv() {
    let path = std::env::temp_dir()
        .join("cidrmatch_tests")
        .join("command_save_to_csv.csv");

    cidrmatch()
        .arg("--csv")
        .arg(&path)
        .arg("10.63.5.183/24")
        .arg("fe80::/10")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("CIDR,IP Version,IP Address,Subnet Mask"));
    assert!(lines[1].starts_with("10.63.5.183/24,IPv4,10.63.5.183,255.255.255.0,24,0.0.0.255"));
    assert!(lines[2].starts_with("fe80::/10,IPv6,fe80::,ffc0::,10,,fe80::,,"));
}
