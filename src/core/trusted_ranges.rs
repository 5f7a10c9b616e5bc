use crate::core::cidr_range::CidrRange;
use crate::core::errors::Result;
use crate::core::ip_address::IpAddress;
use crate::core::matcher::{find_match, RangeMatch};
use crate::core::private_ranges::private_ranges;
use log::{debug, info, warn};
use std::env;

/*-------------------------------------------------------------------------------------------------
  Environment Variables
-------------------------------------------------------------------------------------------------*/

/// Comma-separated CIDR ranges to trust.
pub const TRUSTED_RANGES_ENV_VAR: &str = "CIDRMATCH_TRUSTED_RANGES";

/// `true` to also trust the private range catalog.
pub const TRUST_PRIVATE_ENV_VAR: &str = "CIDRMATCH_TRUST_PRIVATE";

/*-------------------------------------------------------------------------------------------------
  Trusted Ranges Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for [TrustedRanges], an allow-list of CIDR ranges (for example, the reverse proxies
/// whose forwarded-for headers should be honored).
///
/// ```
/// # fn main() -> cidrmatch::Result<()> {
/// let trusted = cidrmatch::TrustedRangesBuilder::default()
///     .ranges(["203.0.113.0/24", "2001:db8::/32"])?
///     .private_ranges(true)
///     .build();
///
/// assert!(trusted.is_trusted_str("203.0.113.10"));
/// assert!(trusted.is_trusted_str("192.168.1.1"));
/// assert!(!trusted.is_trusted_str("198.51.100.1"));
/// assert!(!trusted.is_trusted_str("not an address"));
/// # Ok(())
/// # }
/// ```
///
/// The [TrustedRangesBuilder::new] method seeds the builder from environment variables when they
/// are set; use [TrustedRangesBuilder::default] to ignore the environment.
#[derive(Clone, Debug, Default)]
pub struct TrustedRangesBuilder {
    ranges: Vec<CidrRange>,
    include_private: bool,
}

/*--------------------------------------------------------------------------------------
  Trusted Ranges Builder Implementation
--------------------------------------------------------------------------------------*/

impl TrustedRangesBuilder {
    /// Create a new [TrustedRangesBuilder] reading initial configuration values from
    /// environment variables when set.
    ///
    /// The environment variables used are:
    /// - `CIDRMATCH_TRUSTED_RANGES`: comma-separated CIDRs; invalid entries are skipped
    /// - `CIDRMATCH_TRUST_PRIVATE`: `true` or `false`
    pub fn new() -> Self {
        let ranges = env::var(TRUSTED_RANGES_ENV_VAR)
            .map(|value| parse_range_list(&value))
            .unwrap_or_default();
        if !ranges.is_empty() {
            info!("Using {} trusted range(s) from {TRUSTED_RANGES_ENV_VAR}", ranges.len());
        }

        Self {
            ranges,
            include_private: get_env_var(TRUST_PRIVATE_ENV_VAR, false),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Trust the provided CIDR ranges; the first entry that fails to parse is returned as an
    /// error.
    pub fn ranges<I, S>(mut self, ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for range in ranges {
            self.ranges.push(range.as_ref().trim().parse::<CidrRange>()?);
        }
        Ok(self)
    }

    /// Trust a parsed CIDR range.
    pub fn range(mut self, range: CidrRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Also trust (or stop trusting) the [private_ranges] catalog.
    pub fn private_ranges(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(self) -> TrustedRanges {
        let mut ranges = self.ranges;
        if self.include_private {
            ranges.extend_from_slice(private_ranges());
        }

        TrustedRanges {
            ranges,
            include_private: self.include_private,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Trusted Ranges
-------------------------------------------------------------------------------------------------*/

/// An allow-list of CIDR ranges. Membership checks on text input fail closed: anything that
/// does not parse as an address is not trusted.
#[derive(Clone, Debug, Default)]
pub struct TrustedRanges {
    ranges: Vec<CidrRange>,
    include_private: bool,
}

/*--------------------------------------------------------------------------------------
  Trusted Ranges Implementation
--------------------------------------------------------------------------------------*/

impl TrustedRanges {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// All trusted ranges, explicit ranges first, followed by the private catalog when included.
    pub fn ranges(&self) -> &[CidrRange] {
        &self.ranges
    }

    /// Check if the private range catalog is part of the allow-list.
    pub fn includes_private_ranges(&self) -> bool {
        self.include_private
    }

    /*-------------------------------------------------------------------------
      Membership
    -------------------------------------------------------------------------*/

    /// Find the first trusted range containing `address`.
    pub fn find(&self, address: &IpAddress) -> Option<RangeMatch<'_>> {
        find_match(address, &self.ranges)
    }

    pub fn is_trusted(&self, address: &IpAddress) -> bool {
        self.find(address).is_some()
    }

    /// Parse `address` and check it against the allow-list; unparsable text is not trusted.
    pub fn is_trusted_str(&self, address: &str) -> bool {
        match address.trim().parse::<IpAddress>() {
            Ok(address) => self.is_trusted(&address),
            Err(error) => {
                debug!("Untrusted address: {error}");
                false
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Parse a comma-separated list of CIDRs, skipping (and logging) invalid entries.
fn parse_range_list(value: &str) -> Vec<CidrRange> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            entry
                .parse::<CidrRange>()
                .inspect_err(|error| warn!("Ignoring invalid trusted range: {error}"))
                .ok()
        })
        .collect()
}

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .trim()
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
