//! Subnet derivation results.

use super::{AddressClass, Ipv4};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Network id and broadcast of the subnet containing an address.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetRange {
    pub network_id: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl fmt::Display for SubnetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.network_id, self.broadcast)
    }
}

/// Special handling applied to the host range of very long prefixes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostConvention {
    /// /31: two addresses, none usable by convention, both shown as the range.
    PointToPoint,
    /// /32: the single address is the host itself.
    SingleHost,
}

impl fmt::Display for HostConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostConvention::PointToPoint => {
                write!(f, "2 total addresses in /31, 0 usable by convention")
            }
            HostConvention::SingleHost => write!(f, "1 total address in /32, the host itself"),
        }
    }
}

/// Usable host boundaries of a subnet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub usable_count: u64,
    pub convention: Option<HostConvention>,
}

/// Number of subnets of the classful network at the resolved prefix.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetCount {
    /// Class has no classful default (D, E, loopback, unknown).
    NotApplicable,
    /// Prefix is shorter than the class default.
    Supernetted { prefix: u8, default_prefix: u8 },
    /// Prefix equals the class default: exactly one network.
    ClassDefault { default_prefix: u8 },
    Subnets(u64),
}

/// One sibling subnet in a listing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
    pub contains_input: bool,
}

/// Why no sibling listing was produced.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSkip {
    NoClassDefault { class: AddressClass },
    Supernetted { prefix: u8, default_prefix: u8 },
    TooLong { prefix: u8 },
}

impl fmt::Display for ListingSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSkip::NoClassDefault { class } => {
                write!(f, "Subnet listing not applicable for Class {class}.")
            }
            ListingSkip::Supernetted {
                prefix,
                default_prefix,
            } => write!(
                f,
                "Subnet listing not applicable for supernetting (/{prefix} is larger than default /{default_prefix})."
            ),
            ListingSkip::TooLong { prefix } => write!(
                f,
                "Subnet listing for /{prefix} is generally not displayed due to excessive length or triviality."
            ),
        }
    }
}

/// Equal-size subnets partitioning the classful parent network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetList {
    /// The classful parent, e.g. `192.168.1.0/24`.
    pub parent: Ipv4,
    pub prefix: u8,
    pub entries: Vec<ListingEntry>,
    /// True number of subnets, which may exceed `entries.len()`.
    pub total: u64,
    pub truncated: bool,
}

impl SubnetList {
    /// The entry containing the input address, if it was enumerated.
    pub fn containing_entry(&self) -> Option<&ListingEntry> {
        self.entries.iter().find(|entry| entry.contains_input)
    }
}

/// Sibling subnet listing or the reason it does not apply.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum SubnetListing {
    Listed(SubnetList),
    NotApplicable(ListingSkip),
}
