//! Listing policy configuration.
//!
//! Defaults can be overridden from the environment (a `.env` file is loaded by
//! the binary through `dotenv`) or from command-line flags.

use serde::Serialize;
use std::env;

/// Environment variable overriding [`ListingPolicy::max_listed`].
pub const ENV_MAX_LISTED: &str = "SUBNET_LIST_MAX_LISTED";
/// Environment variable overriding [`ListingPolicy::max_listing_prefix`].
pub const ENV_MAX_PREFIX: &str = "SUBNET_LIST_MAX_PREFIX";

/// Default cap on enumerated sibling subnets.
pub const DEFAULT_MAX_LISTED: usize = 256;
/// Longest prefix that still gets a sibling listing; /31 and /32 are skipped.
pub const DEFAULT_MAX_LISTING_PREFIX: u8 = 30;

/// Limits on the sibling subnet listing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPolicy {
    /// At most this many subnets are enumerated.
    pub max_listed: usize,
    /// Prefixes longer than this are not listed.
    pub max_listing_prefix: u8,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        ListingPolicy {
            max_listed: DEFAULT_MAX_LISTED,
            max_listing_prefix: DEFAULT_MAX_LISTING_PREFIX,
        }
    }
}

impl ListingPolicy {
    /// Read the policy from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the policy from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = ListingPolicy::default();
        if let Some(value) = lookup(ENV_MAX_LISTED) {
            match value.trim().parse::<usize>() {
                Ok(max_listed) => policy.max_listed = max_listed,
                Err(e) => log::warn!("Ignoring {ENV_MAX_LISTED}={value}: {e}"),
            }
        }
        if let Some(value) = lookup(ENV_MAX_PREFIX) {
            match value.trim().parse::<u8>() {
                Ok(len) if len <= 32 => policy.max_listing_prefix = len,
                Ok(len) => log::warn!("Ignoring {ENV_MAX_PREFIX}={len}: must be 0-32"),
                Err(e) => log::warn!("Ignoring {ENV_MAX_PREFIX}={value}: {e}"),
            }
        }
        log::debug!("listing policy {:?}", policy);
        policy
    }
}
