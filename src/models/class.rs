//! Classful address classification.

use crate::error::NoDefaultReason;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Historical address class, decided by the first octet only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    A,
    ALoopback,
    B,
    C,
    DMulticast,
    EExperimental,
    Unknown,
}

/// Classify an address by its first octet.
pub fn classify(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        127 => AddressClass::ALoopback,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::DMulticast,
        240..=255 => AddressClass::EExperimental,
        _ => AddressClass::Unknown,
    }
}

impl AddressClass {
    /// Classful prefix length for this class.
    ///
    /// Loopback sits in the class A range and only maps to /8 when
    /// `loopback_as_class_a` is set.
    pub fn classful_prefix(self, loopback_as_class_a: bool) -> Option<u8> {
        match self {
            AddressClass::A => Some(8),
            AddressClass::ALoopback if loopback_as_class_a => Some(8),
            AddressClass::B => Some(16),
            AddressClass::C => Some(24),
            _ => None,
        }
    }

    /// Default prefix used when resolving input; loopback has none.
    pub fn default_prefix(self) -> Option<u8> {
        self.classful_prefix(false)
    }

    /// Reason reported when this class cannot supply a default prefix.
    pub fn no_default_reason(self) -> Option<NoDefaultReason> {
        match self {
            AddressClass::DMulticast => Some(NoDefaultReason::Multicast),
            AddressClass::EExperimental => Some(NoDefaultReason::Experimental),
            AddressClass::ALoopback => Some(NoDefaultReason::Loopback),
            AddressClass::Unknown => Some(NoDefaultReason::Unknown),
            AddressClass::A | AddressClass::B | AddressClass::C => None,
        }
    }

    /// Class name with the default mask annotation when one applies,
    /// e.g. `C (Default Class Mask /24)`.
    pub fn display_with_default(self) -> String {
        match self.default_prefix() {
            Some(len) => format!("{self} (Default Class Mask /{len})"),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::ALoopback => "A (Loopback)",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::DMulticast => "D (Multicast)",
            AddressClass::EExperimental => "E (Experimental)",
            AddressClass::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}
