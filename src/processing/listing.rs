//! Sibling subnet enumeration.
//!
//! Splits the classful parent network of an address into equal subnets at the
//! resolved prefix. The listing is recomputed from its inputs every time; it
//! is never a cursor.

use crate::config::ListingPolicy;
use crate::models::{
    classify, network_id, prefix_to_mask, Ipv4, ListingEntry, ListingSkip, SubnetList,
    SubnetListing, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Enumerate the subnets of `addr`'s classful network at `prefix`.
///
/// At most `policy.max_listed` entries are produced; `truncated` is set and
/// `total` carries the real count when there are more.
pub fn list_subnets(addr: Ipv4Addr, prefix: u8, policy: &ListingPolicy) -> SubnetListing {
    let class = classify(addr);
    let Some(default_prefix) = class.default_prefix() else {
        return SubnetListing::NotApplicable(ListingSkip::NoClassDefault { class });
    };
    if prefix < default_prefix {
        return SubnetListing::NotApplicable(ListingSkip::Supernetted {
            prefix,
            default_prefix,
        });
    }
    if prefix > policy.max_listing_prefix || prefix > MAX_LENGTH {
        return SubnetListing::NotApplicable(ListingSkip::TooLong { prefix });
    }

    // Both prefixes are within 0..=32 here.
    let parent_mask = prefix_to_mask(default_prefix).unwrap_or(u32::MAX);
    let subnet_mask = prefix_to_mask(prefix).unwrap_or(u32::MAX);
    let parent = network_id(addr, parent_mask);
    let input_subnet = u32::from(network_id(addr, subnet_mask));

    let total = 1u64 << (prefix - default_prefix);
    let block_size = 1u64 << (MAX_LENGTH - prefix);
    let shown = total.min(policy.max_listed as u64);

    let entries: Vec<ListingEntry> = (0..shown)
        .map(|i| {
            let start = (u32::from(parent) as u64).wrapping_add(i * block_size) as u32;
            let end = (start as u64).wrapping_add(block_size - 1) as u32;
            ListingEntry {
                start: Ipv4Addr::from(start),
                end: Ipv4Addr::from(end),
                contains_input: start == input_subnet,
            }
        })
        .collect();

    log::debug!(
        "listed {} of {} /{} subnets of {}/{}",
        entries.len(),
        total,
        prefix,
        parent,
        default_prefix
    );

    SubnetListing::Listed(SubnetList {
        parent: Ipv4 {
            addr: parent,
            mask: default_prefix,
        },
        prefix,
        entries,
        total,
        truncated: total > policy.max_listed as u64,
    })
}
