//! The structured result handed to the presentation layer.

use super::{AddressClass, HostRange, SubnetCount, SubnetListing, SubnetRange};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Which input decided the prefix length.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRule {
    /// `address/len` in the address text.
    EmbeddedCidr,
    /// A separately supplied dotted-quad mask.
    ExplicitMask,
    /// The classful default of the address.
    ClassDefault,
}

/// Non-fatal notes raised while resolving input.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A mask was given alongside an embedded prefix and ignored.
    MaskIgnored { mask_text: String },
    /// Neither prefix nor mask was given; the class default was used.
    ClassDefaultApplied { class: AddressClass, prefix: u8 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MaskIgnored { mask_text } => write!(
                f,
                "CIDR in IP field overrides the Subnet Mask input ({mask_text})."
            ),
            Advisory::ClassDefaultApplied { class, prefix } => write!(
                f,
                "No CIDR or Mask provided, using default for class {class}: /{prefix}"
            ),
        }
    }
}

/// Everything derived for one address/prefix/mask input.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkReport {
    /// Address text as given, without any `/len` suffix.
    pub given_address: String,
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub mask_binary: String,
    pub class: AddressClass,
    /// Class name with its default mask annotation, e.g. `C (Default Class Mask /24)`.
    pub class_display: String,
    pub default_prefix: Option<u8>,
    pub rule: ResolutionRule,
    pub subnet_count: SubnetCount,
    pub subnet: SubnetRange,
    /// Combined `network - broadcast` text.
    pub network_range: String,
    pub hosts: HostRange,
    pub listing: SubnetListing,
    pub advisories: Vec<Advisory>,
}

impl NetworkReport {
    /// The prefix in `/len` form.
    pub fn cidr(&self) -> String {
        format!("/{}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_display() {
        let advisory = Advisory::ClassDefaultApplied {
            class: AddressClass::C,
            prefix: 24,
        };
        assert_eq!(
            advisory.to_string(),
            "No CIDR or Mask provided, using default for class C: /24"
        );
        let advisory = Advisory::MaskIgnored {
            mask_text: "255.0.0.0".to_string(),
        };
        assert!(advisory.to_string().contains("overrides the Subnet Mask"));
    }
}
