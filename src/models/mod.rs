//! Domain models for IPv4 subnet calculation.
//!
//! This module contains the core data structures and leaf arithmetic:
//! - [`ipv4`] - Address codec and CIDR/mask conversion
//! - [`class`] - Classful address classification
//! - [`subnet`] - Subnet, host range and listing values
//! - [`report`] - The assembled [`NetworkReport`]

mod class;
mod ipv4;
mod report;
mod subnet;

// Re-export public types
pub use class::{classify, AddressClass};
pub use ipv4::{
    broadcast_addr, format_address, format_address_binary, is_valid_mask, mask_to_prefix,
    network_id, parse_address, prefix_to_mask, Ipv4, MAX_LENGTH,
};
pub(crate) use ipv4::parse_decimal;
pub use report::{Advisory, NetworkReport, ResolutionRule};
pub use subnet::{
    HostConvention, HostRange, ListingEntry, ListingSkip, SubnetCount, SubnetList, SubnetListing,
    SubnetRange,
};
