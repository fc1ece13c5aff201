//! Per-subnet derivations from a resolved address, prefix and mask.

use crate::models::{
    broadcast_addr, network_id, AddressClass, HostConvention, HostRange, SubnetCount,
    SubnetRange, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Network id and broadcast of the subnet containing `addr`.
pub fn subnet_range(addr: Ipv4Addr, mask: u32) -> SubnetRange {
    SubnetRange {
        network_id: network_id(addr, mask),
        broadcast: broadcast_addr(addr, mask),
    }
}

/// Usable hosts of `range` at prefix length `prefix`.
///
/// /31 keeps both addresses as the displayed range with zero usable hosts;
/// /32 counts the single address as one host.
pub fn host_range(range: SubnetRange, prefix: u8) -> HostRange {
    let host_bits = MAX_LENGTH.saturating_sub(prefix);
    match host_bits {
        0 => HostRange {
            first_usable: range.network_id,
            last_usable: range.network_id,
            usable_count: 1,
            convention: Some(HostConvention::SingleHost),
        },
        1 => HostRange {
            first_usable: range.network_id,
            last_usable: range.broadcast,
            usable_count: 0,
            convention: Some(HostConvention::PointToPoint),
        },
        _ => HostRange {
            first_usable: Ipv4Addr::from(u32::from(range.network_id).wrapping_add(1)),
            last_usable: Ipv4Addr::from(u32::from(range.broadcast).wrapping_sub(1)),
            usable_count: (1u64 << host_bits) - 2,
            convention: None,
        },
    }
}

/// Number of subnets of the classful network at `prefix`.
pub fn subnet_count(class: AddressClass, prefix: u8) -> SubnetCount {
    let Some(default_prefix) = class.default_prefix() else {
        return SubnetCount::NotApplicable;
    };
    match prefix.cmp(&default_prefix) {
        std::cmp::Ordering::Less => SubnetCount::Supernetted {
            prefix,
            default_prefix,
        },
        std::cmp::Ordering::Equal => SubnetCount::ClassDefault { default_prefix },
        std::cmp::Ordering::Greater => SubnetCount::Subnets(1u64 << (prefix - default_prefix)),
    }
}
